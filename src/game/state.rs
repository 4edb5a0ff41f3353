use serde::{Deserialize, Serialize};

use super::action::Direction;

/// A cell on the board: `x` is the row, `y` is the column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }

    /// True if the two cells share an edge
    pub fn is_adjacent(&self, other: Position) -> bool {
        (self.x - other.x).abs() + (self.y - other.y).abs() == 1
    }
}

/// The snake body, head first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: Vec<Position>,
}

impl Snake {
    /// Build a snake from its cells, head first.
    ///
    /// Callers are expected to pass a validated layout; see
    /// [`GameConfig::validate`](super::GameConfig::validate).
    pub fn from_cells(cells: &[Position]) -> Self {
        Self {
            body: cells.to_vec(),
        }
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    pub fn cells(&self) -> &[Position] {
        &self.body
    }

    /// Body segments, excluding the head
    pub fn body_segments(&self) -> &[Position] {
        &self.body[1..]
    }

    /// True if a non-head segment occupies `pos`
    pub fn collides_with_body(&self, pos: Position) -> bool {
        self.body_segments().contains(&pos)
    }

    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Prepend a new head and drop the tail unless growing.
    pub fn advance(&mut self, new_head: Position, grow: bool) {
        self.body.insert(0, new_head);

        if !grow {
            self.body.pop();
        }
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Whether the driver should keep ticking the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Stopped,
}

/// Everything a renderer needs to draw the board
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    pub direction: Direction,
    pub grid_size: usize,
    pub run_state: RunState,
    /// Ticks advanced since the last (re)start
    pub ticks: u32,
}

impl GameState {
    pub fn new(snake: Snake, food: Position, direction: Direction, grid_size: usize) -> Self {
        Self {
            snake,
            food,
            direction,
            grid_size,
            run_state: RunState::Running,
            ticks: 0,
        }
    }

    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        in_bounds(pos, self.grid_size)
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }
}

pub(crate) fn in_bounds(pos: Position, grid_size: usize) -> bool {
    let limit = i32::try_from(grid_size).unwrap_or(i32::MAX);
    (0..limit).contains(&pos.x) && (0..limit).contains(&pos.y)
}
