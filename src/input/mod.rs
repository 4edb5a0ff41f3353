//! Input mapping: keyboard and mouse-drag events reduced to driver commands

pub mod handler;
pub mod listener;
pub mod swipe;

pub use handler::{InputCommand, InputHandler};
pub use listener::InputListener;
pub use swipe::{SwipeTracker, infer_direction};
