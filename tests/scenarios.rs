//! End-to-end scenarios for the simulation engine, driven the way a host
//! would: `set_direction` on input, `step` on every tick, `restart` after
//! the game-over prompt.

use rand::SeedableRng;
use rand::rngs::StdRng;
use snake_board::game::{
    Direction, GameConfig, GameEngine, GameOverReason, Position, ScoreBoard, ScoreSink,
};

fn cells(coords: &[(i32, i32)]) -> Vec<Position> {
    coords.iter().map(|&(x, y)| Position::new(x, y)).collect()
}

fn engine(config: GameConfig) -> GameEngine<ScoreBoard, StdRng> {
    GameEngine::with_rng(config, ScoreBoard::new(), StdRng::seed_from_u64(21)).unwrap()
}

#[test]
fn eating_food_grows_snake_and_relocates_food() {
    let mut config = GameConfig::default();
    config.initial_food = Position::new(10, 9);
    let mut engine = engine(config);

    let result = engine.step();

    assert!(!result.terminated);
    assert_eq!(
        engine.state().snake.cells(),
        cells(&[(10, 9), (10, 10), (10, 11), (10, 12)]).as_slice()
    );
    let food = result.info.new_food.expect("food should be relocated");
    assert_eq!(engine.state().food, food);
    assert!(!engine.state().snake.occupies(food));
    assert_eq!(engine.score().current_value(), 1);
}

#[test]
fn restart_after_game_over_restores_initial_board() {
    let mut engine = engine(GameConfig::default());
    let initial = engine.state().clone();

    engine.set_direction(Direction::Up);
    for _ in 0..12 {
        engine.step();
    }
    assert!(!engine.is_running());

    engine.restart();

    assert_eq!(engine.state().snake, initial.snake);
    assert_eq!(engine.state().food, initial.food);
    assert_eq!(engine.direction(), Direction::Left);
    assert!(engine.is_running());
}

#[test]
fn boundary_follows_configured_grid_size() {
    // On an 8-cell board the last valid row is 7
    let mut config = GameConfig::new(8);
    config.initial_snake = cells(&[(6, 3)]);
    config.initial_direction = Direction::Down;
    let mut engine = engine(config);

    assert!(!engine.step().terminated); // (7, 3)
    assert!(!engine.step().terminated); // (8, 3), off the board
    assert_eq!(engine.state().snake.head(), Position::new(8, 3));

    let result = engine.step();
    assert!(result.terminated);
    assert_eq!(
        result.info.game_over.map(|over| over.reason),
        Some(GameOverReason::Wall)
    );
}

#[test]
fn large_board_allows_rows_past_twenty() {
    let mut config = GameConfig::new(30);
    config.initial_snake = cells(&[(19, 5)]);
    config.initial_direction = Direction::Down;
    let mut engine = engine(config);

    for _ in 0..10 {
        assert!(!engine.step().terminated);
    }
    assert_eq!(engine.state().snake.head(), Position::new(29, 5));

    engine.step(); // (30, 5)
    assert!(engine.step().terminated);
}

#[test]
fn leaving_through_left_edge_ends_game() {
    let mut config = GameConfig::new(21);
    config.initial_snake = cells(&[(4, 0), (4, 1), (4, 2)]);
    config.initial_food = Position::new(0, 0);
    let mut engine = engine(config);

    engine.step();
    assert_eq!(engine.state().snake.head(), Position::new(4, -1));

    let result = engine.step();
    assert_eq!(
        result.info.game_over.map(|over| over.reason),
        Some(GameOverReason::Wall)
    );
    assert_eq!(
        engine.state().snake.cells(),
        cells(&[(4, 0), (4, 1), (4, 2)]).as_slice()
    );
}

#[test]
fn game_over_carries_final_score_and_resets_store() {
    let mut score = ScoreBoard::new();
    {
        let mut config = GameConfig::default();
        config.initial_food = Position::new(10, 9);
        let mut engine =
            GameEngine::with_rng(config, &mut score, StdRng::seed_from_u64(3)).unwrap();

        engine.step();
        engine.set_direction(Direction::Up);

        // Relocated food may land on the way up, so track the live score
        let mut last_score = engine.score().current_value();
        let over = loop {
            if let Some(over) = engine.step().info.game_over {
                break over;
            }
            last_score = engine.score().current_value();
        };

        assert!(last_score >= 1);
        assert_eq!(over.final_score, last_score);
        assert_eq!(over.reason, GameOverReason::Wall);
    }
    assert_eq!(score.current_value(), 0);
}

#[test]
fn stopped_engine_ignores_ticks_until_restart() {
    let mut engine = engine(GameConfig::default());
    engine.game_over(GameOverReason::SelfCollision);
    let frozen = engine.state().clone();

    for _ in 0..5 {
        assert!(engine.step().terminated);
    }
    assert_eq!(engine.state(), &frozen);

    engine.restart();
    assert!(!engine.step().terminated);
}
