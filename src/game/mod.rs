//! Core game logic module for Snake
//!
//! This module contains all the simulation rules without any I/O, timing or
//! rendering dependencies. Drivers call [`GameEngine::set_direction`] on input
//! and [`GameEngine::step`] on every tick.

pub mod action;
pub mod config;
pub mod engine;
pub mod error;
pub mod score;
pub mod state;

// Re-export commonly used types
pub use action::Direction;
pub use config::GameConfig;
pub use engine::{GameEngine, GameOver, GameOverReason, StepInfo, StepResult};
pub use error::ConfigError;
pub use score::{ScoreBoard, ScoreSink};
pub use state::{GameState, Position, RunState, Snake};
