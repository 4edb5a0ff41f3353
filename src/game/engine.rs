use std::collections::HashSet;

use log::{debug, info};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use super::{
    action::Direction,
    config::GameConfig,
    error::ConfigError,
    score::ScoreSink,
    state::{GameState, Position, RunState, Snake},
};

/// Why a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverReason {
    /// The head left the board
    Wall,
    /// The head sits on one of its own body segments
    SelfCollision,
    /// The snake covers every cell, so no food can be placed
    BoardFull,
}

impl GameOverReason {
    /// Short player-facing description
    pub fn label(&self) -> &'static str {
        match self {
            GameOverReason::Wall => "Hit the wall",
            GameOverReason::SelfCollision => "Bit your own tail",
            GameOverReason::BoardFull => "Board cleared!",
        }
    }
}

/// Payload handed to the presentation layer when a game ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOver {
    /// Score read from the store just before it was reset
    pub final_score: u32,
    pub reason: GameOverReason,
}

/// Information about a step
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StepInfo {
    /// Whether the snake ate food this step
    pub ate_food: bool,
    /// Where the food was moved to, if it was eaten
    pub new_food: Option<Position>,
    /// Set when this step ended the game
    pub game_over: Option<GameOver>,
}

/// Result of a game step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Whether the engine is stopped after this step
    pub terminated: bool,
    pub info: StepInfo,
}

/// The snake simulation engine.
///
/// Owns the board and advances it one tick per [`step`](Self::step). Timing,
/// input and presentation live with the caller; the score lives behind a
/// [`ScoreSink`].
pub struct GameEngine<S, R = StdRng> {
    config: GameConfig,
    state: GameState,
    score: S,
    rng: R,
}

impl<S: ScoreSink> GameEngine<S, StdRng> {
    /// Create an engine seeded from OS entropy
    pub fn new(config: GameConfig, score: S) -> Result<Self, ConfigError> {
        Self::with_rng(config, score, StdRng::from_entropy())
    }
}

impl<S: ScoreSink, R: Rng> GameEngine<S, R> {
    /// Create an engine with a caller-supplied random source for food placement
    pub fn with_rng(config: GameConfig, score: S, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = Self::initial_state(&config);

        Ok(Self {
            config,
            state,
            score,
            rng,
        })
    }

    fn initial_state(config: &GameConfig) -> GameState {
        GameState::new(
            Snake::from_cells(&config.initial_snake),
            config.initial_food,
            config.initial_direction,
            config.grid_size,
        )
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn score(&self) -> &S {
        &self.score
    }

    pub fn direction(&self) -> Direction {
        self.state.direction
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    /// Change heading unless `requested` reverses the current one.
    ///
    /// Returns whether the heading was accepted. The snake does not move
    /// until the next [`step`](Self::step).
    pub fn set_direction(&mut self, requested: Direction) -> bool {
        if self.state.direction.is_opposite(requested) {
            return false;
        }
        self.state.direction = requested;
        true
    }

    /// Advance the simulation by one tick.
    ///
    /// Collisions are checked against the head as it stands before moving,
    /// so a fatal move is reported on the tick after it was made.
    pub fn step(&mut self) -> StepResult {
        if !self.is_running() {
            return StepResult {
                terminated: true,
                info: StepInfo::default(),
            };
        }

        let head = self.state.snake.head();

        if !self.state.is_in_bounds(head) {
            return self.end_step(GameOverReason::Wall, false);
        }

        if self.state.snake.collides_with_body(head) {
            return self.end_step(GameOverReason::SelfCollision, false);
        }

        let new_head = head.moved_in_direction(self.state.direction);
        let ate_food = new_head == self.state.food;
        self.state.snake.advance(new_head, ate_food);
        self.state.ticks += 1;

        let mut new_food = None;
        if ate_food {
            self.score.increment();
            match self.relocate_food() {
                Some(food) => new_food = Some(food),
                None => return self.end_step(GameOverReason::BoardFull, true),
            }
        }

        StepResult {
            terminated: false,
            info: StepInfo {
                ate_food,
                new_food,
                game_over: None,
            },
        }
    }

    fn end_step(&mut self, reason: GameOverReason, ate_food: bool) -> StepResult {
        let over = self.game_over(reason);
        StepResult {
            terminated: true,
            info: StepInfo {
                ate_food,
                new_food: None,
                game_over: Some(over),
            },
        }
    }

    /// End the current game.
    ///
    /// Puts the snake back to its starting layout, stops movement, and resets
    /// the score store after reading the final score. Heading and food are
    /// left as they were.
    pub fn game_over(&mut self, reason: GameOverReason) -> GameOver {
        let final_score = self.score.current_value();
        info!(
            "game over after {} ticks: {:?}, final score {}",
            self.state.ticks, reason, final_score
        );

        self.state.snake = Snake::from_cells(&self.config.initial_snake);
        self.state.run_state = RunState::Stopped;
        self.score.decrement_to_baseline();

        GameOver {
            final_score,
            reason,
        }
    }

    /// Reinitialise the board exactly as at construction and resume movement.
    pub fn restart(&mut self) {
        self.state = Self::initial_state(&self.config);
        info!("game restarted");
    }

    /// Pick a uniformly random empty cell for the food
    fn relocate_food(&mut self) -> Option<Position> {
        let size = i32::try_from(self.state.grid_size).unwrap_or(i32::MAX);
        let occupied: HashSet<Position> = self.state.snake.cells().iter().copied().collect();
        let free: Vec<Position> = (0..size)
            .flat_map(|x| (0..size).map(move |y| Position::new(x, y)))
            .filter(|pos| !occupied.contains(pos))
            .collect();

        let food = *free.choose(&mut self.rng)?;
        self.state.food = food;
        debug!("food relocated to ({}, {})", food.x, food.y);
        Some(food)
    }
}
