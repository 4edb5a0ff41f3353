use std::time::{Duration, Instant};

use crate::game::{GameOver, GameOverReason};

/// Statistics for one play session, spanning any number of games
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub best_score: u32,
    pub games_played: u32,
    /// Food eaten in the game currently on screen
    pub food_eaten: u32,
    pub last_reason: Option<GameOverReason>,
    running: bool,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            best_score: 0,
            games_played: 0,
            food_eaten: 0,
            last_reason: None,
            running: true,
        }
    }

    /// Refresh the clock; frozen while the game-over dialog is up
    pub fn update(&mut self) {
        if self.running {
            self.elapsed_time = self.start_time.elapsed();
        }
    }

    pub fn on_game_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
        self.food_eaten = 0;
        self.running = true;
    }

    pub fn on_food_eaten(&mut self) {
        self.food_eaten += 1;
    }

    pub fn on_game_over(&mut self, over: GameOver) {
        self.update();
        self.running = false;
        self.games_played += 1;
        self.best_score = self.best_score.max(over.final_score);
        self.last_reason = Some(over.reason);
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
