use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::action::Direction;
use super::error::ConfigError;
use super::state::{Position, in_bounds};

/// Largest board accepted by [`GameConfig::validate`]
pub const MAX_GRID_SIZE: usize = 256;

/// Configuration for the game, fixed for the lifetime of an engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Cells per axis of the square board
    pub grid_size: usize,
    /// Cadence at which the driver advances the engine
    pub tick_interval_ms: u64,
    /// Starting snake layout, head first
    pub initial_snake: Vec<Position>,
    /// Starting food cell
    pub initial_food: Position,
    /// Heading at construction and after a restart
    pub initial_direction: Direction,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(21)
    }
}

impl GameConfig {
    /// Create a configuration with a centred three-cell snake heading left.
    ///
    /// For the default 21-cell board this yields the snake
    /// `[(10,10), (10,11), (10,12)]` and food at `(5,5)`.
    pub fn new(grid_size: usize) -> Self {
        let center = i32::try_from(grid_size / 2).unwrap_or(i32::MAX - 2);
        let quarter = i32::try_from(grid_size / 4).unwrap_or(0);

        Self {
            grid_size,
            tick_interval_ms: 150,
            initial_snake: (0..3).map(|i| Position::new(center, center + i)).collect(),
            initial_food: Position::new(quarter, quarter),
            initial_direction: Direction::Left,
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(11)
    }

    /// Read a JSON configuration file. Missing fields fall back to defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: GameConfig = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Check that the configuration describes a playable starting board
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size < 2 {
            return Err(ConfigError::GridTooSmall(self.grid_size));
        }

        if self.grid_size > MAX_GRID_SIZE {
            return Err(ConfigError::GridTooLarge(self.grid_size));
        }

        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }

        if self.initial_snake.is_empty() {
            return Err(ConfigError::EmptySnake);
        }

        let mut seen = HashSet::with_capacity(self.initial_snake.len());
        for (index, &cell) in self.initial_snake.iter().enumerate() {
            if !in_bounds(cell, self.grid_size) {
                return Err(ConfigError::SnakeOutOfBounds {
                    index,
                    cell,
                    grid_size: self.grid_size,
                });
            }
            if !seen.insert(cell) {
                return Err(ConfigError::OverlappingSnake { index, cell });
            }
            if index > 0 && !cell.is_adjacent(self.initial_snake[index - 1]) {
                return Err(ConfigError::DisconnectedSnake { index });
            }
        }

        if !in_bounds(self.initial_food, self.grid_size) {
            return Err(ConfigError::FoodOutOfBounds {
                food: self.initial_food,
                grid_size: self.grid_size,
            });
        }

        if seen.contains(&self.initial_food) {
            return Err(ConfigError::FoodOnSnake(self.initial_food));
        }

        if let [head, neck, ..] = self.initial_snake.as_slice() {
            if head.moved_in_direction(self.initial_direction) == *neck {
                return Err(ConfigError::HeadingIntoBody);
            }
        }

        Ok(())
    }
}
