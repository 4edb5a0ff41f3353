//! Snake Board - a grid Snake game
//!
//! This library provides:
//! - The deterministic simulation core (game module)
//! - Keyboard and mouse-drag input mapping (input module)
//! - TUI rendering and the game-over dialog (render module)
//! - Session statistics (metrics module)
//! - The timer-driven terminal driver (driver module)

pub mod driver;
pub mod game;
pub mod input;
pub mod metrics;
pub mod render;
