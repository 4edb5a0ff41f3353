use std::collections::VecDeque;
use std::time::Duration;

use anyhow::{Context, Result};
use log::{debug, info};
use ratatui::Frame;
use tokio::time::interval;

use super::scheduler::TickScheduler;
use super::terminal::{TerminalGuard, Tui};
use crate::game::{Direction, GameConfig, GameEngine, ScoreBoard, ScoreSink};
use crate::input::{InputCommand, InputListener};
use crate::metrics::GameMetrics;
use crate::render::{DialogChoice, GameOverDialog, Renderer};

/// Turns buffered ahead of the ticks that apply them
const MAX_QUEUED_TURNS: usize = 2;

/// Interactive terminal session around one [`GameEngine`].
///
/// Owns the tick scheduler, the input listener and the game-over dialog;
/// the engine only ever sees `set_direction`, `step` and `restart`.
pub struct PlayDriver {
    engine: GameEngine<ScoreBoard>,
    metrics: GameMetrics,
    renderer: Renderer,
    scheduler: TickScheduler,
    dialog: Option<GameOverDialog>,
    /// One turn is handed to the engine per tick, oldest first
    turns: VecDeque<Direction>,
    should_quit: bool,
}

impl PlayDriver {
    pub fn new(config: GameConfig) -> Result<Self> {
        let scheduler = TickScheduler::new(config.tick_interval());
        let engine =
            GameEngine::new(config, ScoreBoard::new()).context("Invalid game configuration")?;

        Ok(Self {
            engine,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            scheduler,
            dialog: None,
            turns: VecDeque::with_capacity(MAX_QUEUED_TURNS),
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut guard = TerminalGuard::acquire()?;
        let mut input = InputListener::spawn();
        info!(
            "session started on a {0}x{0} board",
            self.engine.config().grid_size
        );

        let result = self.run_game_loop(guard.terminal(), &mut input).await;

        // Listener and terminal are released when they go out of scope
        self.scheduler.cancel();
        info!(
            "session ended after {} games, best score {}",
            self.metrics.games_played, self.metrics.best_score
        );
        result
    }

    async fn run_game_loop(&mut self, terminal: &mut Tui, input: &mut InputListener) -> Result<()> {
        if self.engine.is_running() {
            self.scheduler.start();
        }

        // Render at 30 FPS (33ms per frame)
        let mut render_timer = interval(Duration::from_millis(33));

        loop {
            tokio::select! {
                maybe_command = input.recv() => {
                    match maybe_command {
                        Some(command) => self.handle_command(command),
                        None => self.should_quit = true,
                    }
                }

                _ = self.scheduler.tick() => {
                    self.on_tick();
                }

                _ = render_timer.tick() => {
                    self.metrics.update();
                    terminal
                        .draw(|frame| self.draw(frame))
                        .context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn draw(&self, frame: &mut Frame) {
        self.renderer.render(
            frame,
            self.engine.state(),
            self.engine.score().current_value(),
            &self.metrics,
            self.dialog.as_ref(),
        );
    }

    fn handle_command(&mut self, command: InputCommand) {
        if let Some(dialog) = self.dialog {
            match dialog.resolve(command) {
                Some(DialogChoice::Replay) => self.replay(),
                Some(DialogChoice::Exit) => self.should_quit = true,
                None => {}
            }
            return;
        }

        match command {
            InputCommand::Steer(direction) => self.queue_turn(direction),
            InputCommand::Exit => self.should_quit = true,
            InputCommand::Replay | InputCommand::None => {}
        }
    }

    /// Buffer a turn, judged against the heading it will follow: the last
    /// queued turn, or the engine's heading when the queue is empty.
    fn queue_turn(&mut self, direction: Direction) {
        let previous = self
            .turns
            .back()
            .copied()
            .unwrap_or_else(|| self.engine.direction());

        if direction == previous || direction.is_opposite(previous) {
            return;
        }
        if self.turns.len() >= MAX_QUEUED_TURNS {
            debug!("turn queue full, dropped {direction:?}");
            return;
        }
        self.turns.push_back(direction);
    }

    fn on_tick(&mut self) {
        if let Some(direction) = self.turns.pop_front() {
            if !self.engine.set_direction(direction) {
                debug!("ignored reversal to {direction:?}");
            }
        }

        let result = self.engine.step();

        if result.info.ate_food {
            self.metrics.on_food_eaten();
        }

        if let Some(over) = result.info.game_over {
            self.scheduler.cancel();
            self.metrics.on_game_over(over);
            self.dialog = Some(GameOverDialog::new(over));
        }
    }

    fn replay(&mut self) {
        self.engine.restart();
        self.dialog = None;
        self.turns.clear();
        self.metrics.on_game_start();
        self.scheduler.start();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameOverReason, Position};

    fn edge_config() -> GameConfig {
        let mut config = GameConfig::new(5);
        config.initial_snake = vec![Position::new(0, 2), Position::new(1, 2)];
        config.initial_direction = Direction::Up;
        config
    }

    #[test]
    fn test_driver_initialization() {
        let driver = PlayDriver::new(GameConfig::default()).unwrap();
        assert!(driver.engine.is_running());
        assert!(driver.dialog.is_none());
        assert!(!driver.scheduler.is_active());
        assert_eq!(driver.scheduler.period(), Duration::from_millis(150));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = GameConfig::default();
        config.grid_size = 0;
        let err = PlayDriver::new(config).err().unwrap();
        assert!(format!("{err:#}").contains("grid size"));
    }

    #[test]
    fn test_steer_applied_on_tick() {
        let mut driver = PlayDriver::new(GameConfig::default()).unwrap();

        driver.handle_command(InputCommand::Steer(Direction::Up));
        assert_eq!(driver.engine.direction(), Direction::Left);

        driver.on_tick();
        assert_eq!(driver.engine.direction(), Direction::Up);
        assert_eq!(driver.engine.state().snake.head(), Position::new(9, 10));
    }

    #[test]
    fn test_quick_double_turn_is_applied_over_two_ticks() {
        let mut driver = PlayDriver::new(GameConfig::default()).unwrap();

        // Heading Left from (10,10): Up then Right before the next tick
        driver.handle_command(InputCommand::Steer(Direction::Up));
        driver.handle_command(InputCommand::Steer(Direction::Right));

        driver.on_tick();
        assert_eq!(driver.engine.direction(), Direction::Up);
        assert_eq!(driver.engine.state().snake.head(), Position::new(9, 10));

        driver.on_tick();
        assert_eq!(driver.engine.direction(), Direction::Right);
        assert_eq!(driver.engine.state().snake.head(), Position::new(9, 11));
        assert!(driver.engine.is_running());
        assert!(driver.turns.is_empty());
    }

    #[test]
    fn test_turn_queue_filters_and_caps() {
        let mut driver = PlayDriver::new(GameConfig::default()).unwrap();

        // Same heading and reversal of the current heading are dropped
        driver.handle_command(InputCommand::Steer(Direction::Left));
        driver.handle_command(InputCommand::Steer(Direction::Right));
        assert!(driver.turns.is_empty());

        // Each turn is judged against the one queued before it
        driver.handle_command(InputCommand::Steer(Direction::Up));
        driver.handle_command(InputCommand::Steer(Direction::Down));
        driver.handle_command(InputCommand::Steer(Direction::Right));
        assert_eq!(driver.turns, [Direction::Up, Direction::Right]);

        // A third distinct turn does not fit
        driver.handle_command(InputCommand::Steer(Direction::Down));
        assert_eq!(driver.turns, [Direction::Up, Direction::Right]);
    }

    #[test]
    fn test_game_over_opens_dialog() {
        let mut driver = PlayDriver::new(edge_config()).unwrap();

        driver.on_tick(); // head leaves the board
        assert!(driver.dialog.is_none());
        driver.on_tick(); // and is caught here

        let dialog = driver.dialog.unwrap();
        assert_eq!(dialog.over().reason, GameOverReason::Wall);
        assert!(!driver.engine.is_running());
        assert!(!driver.scheduler.is_active());
        assert_eq!(driver.metrics.games_played, 1);

        // Steering does nothing while the dialog is up
        driver.handle_command(InputCommand::Steer(Direction::Left));
        assert!(driver.turns.is_empty());
    }

    #[tokio::test]
    async fn test_replay_restarts_engine() {
        let mut driver = PlayDriver::new(edge_config()).unwrap();
        driver.on_tick();
        driver.on_tick();
        assert!(driver.dialog.is_some());

        driver.turns.push_back(Direction::Left);
        driver.handle_command(InputCommand::Replay);

        assert!(driver.dialog.is_none());
        assert!(driver.turns.is_empty());
        assert!(driver.engine.is_running());
        assert!(driver.scheduler.is_active());
        assert_eq!(driver.engine.state().snake.head(), Position::new(0, 2));
        assert!(!driver.should_quit);
    }

    #[test]
    fn test_exit_from_dialog() {
        let mut driver = PlayDriver::new(edge_config()).unwrap();
        driver.on_tick();
        driver.on_tick();

        driver.handle_command(InputCommand::Exit);
        assert!(driver.should_quit);
    }
}
