//! Drives a [`GameEngine`](crate::game::GameEngine) from a terminal: timing,
//! input registration and the game-over dialog flow.

pub mod play;
pub mod scheduler;
pub mod terminal;

pub use play::PlayDriver;
pub use scheduler::TickScheduler;
pub use terminal::TerminalGuard;
