//! Terminal presentation of the board and the game-over dialog

pub mod dialog;
pub mod renderer;

pub use dialog::{DialogChoice, GameOverDialog};
pub use renderer::Renderer;
