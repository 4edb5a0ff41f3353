use thiserror::Error;

use super::state::Position;

/// Reasons a [`GameConfig`](super::GameConfig) is rejected at construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid size must be at least 2 cells per axis, got {0}")]
    GridTooSmall(usize),
    #[error("grid size must be at most {max} cells per axis, got {0}", max = super::config::MAX_GRID_SIZE)]
    GridTooLarge(usize),
    #[error("tick interval must be positive")]
    ZeroTickInterval,
    #[error("initial snake must contain at least one cell")]
    EmptySnake,
    #[error(
        "initial snake cell {index} at ({x}, {y}) is outside the {grid_size}x{grid_size} grid",
        x = .cell.x,
        y = .cell.y
    )]
    SnakeOutOfBounds {
        index: usize,
        cell: Position,
        grid_size: usize,
    },
    #[error("initial snake cell {index} duplicates an earlier cell at ({x}, {y})", x = .cell.x, y = .cell.y)]
    OverlappingSnake { index: usize, cell: Position },
    #[error("initial snake cell {index} is not adjacent to the cell before it")]
    DisconnectedSnake { index: usize },
    #[error(
        "initial food at ({x}, {y}) is outside the {grid_size}x{grid_size} grid",
        x = .food.x,
        y = .food.y
    )]
    FoodOutOfBounds { food: Position, grid_size: usize },
    #[error("initial food at ({x}, {y}) lies on the snake", x = .0.x, y = .0.y)]
    FoodOnSnake(Position),
    #[error("initial heading points into the snake's own neck")]
    HeadingIntoBody,
}
