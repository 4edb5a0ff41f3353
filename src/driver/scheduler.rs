use std::time::Duration;

use log::debug;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};

/// Cancellable repeating tick.
///
/// While cancelled, [`tick`](Self::tick) never resolves, so it can sit in a
/// `tokio::select!` next to input handling without advancing a stopped game.
pub struct TickScheduler {
    period: Duration,
    timer: Option<Interval>,
}

impl TickScheduler {
    /// A scheduler that is not yet ticking
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            timer: None,
        }
    }

    /// Begin ticking; the first tick fires one period from now
    pub fn start(&mut self) {
        let mut timer = interval_at(Instant::now() + self.period, self.period);
        timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.timer = Some(timer);
        debug!("tick scheduler started ({:?})", self.period);
    }

    pub fn cancel(&mut self) {
        if self.timer.take().is_some() {
            debug!("tick scheduler cancelled");
        }
    }

    pub fn is_active(&self) -> bool {
        self.timer.is_some()
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub async fn tick(&mut self) {
        match self.timer.as_mut() {
            Some(timer) => {
                timer.tick().await;
            }
            None => std::future::pending().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::timeout;

    #[tokio::test(start_paused = true)]
    async fn test_ticks_on_period() {
        let mut scheduler = TickScheduler::new(Duration::from_millis(150));
        scheduler.start();

        let started = Instant::now();
        scheduler.tick().await;
        assert_eq!(started.elapsed(), Duration::from_millis(150));
        scheduler.tick().await;
        assert_eq!(started.elapsed(), Duration::from_millis(300));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_never_ticks() {
        let mut scheduler = TickScheduler::new(Duration::from_millis(150));
        scheduler.start();
        scheduler.cancel();

        assert!(!scheduler.is_active());
        let waited = timeout(Duration::from_secs(5), scheduler.tick()).await;
        assert!(waited.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_after_cancel() {
        let mut scheduler = TickScheduler::new(Duration::from_millis(100));
        assert!(!scheduler.is_active());

        scheduler.start();
        scheduler.cancel();
        scheduler.start();

        let started = Instant::now();
        scheduler.tick().await;
        assert_eq!(started.elapsed(), Duration::from_millis(100));
    }
}
