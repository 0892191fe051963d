use rand::{SeedableRng, rngs::StdRng};
use tracing::warn;

use super::{
    config::GameConfig,
    direction::Direction,
    food::Food,
    score::Score,
    state::{CollisionType, Snake},
};

/// Everything that changes while a round is played
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub score: Score,
    pub steps: u32,
    pub is_alive: bool,
}

/// Outcome of a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickResult {
    /// Whether the head reached the food this tick
    pub ate_food: bool,
    /// Type of collision if one occurred
    pub collision: Option<CollisionType>,
    /// Food was eaten but no free cell was left for the next one
    pub board_full: bool,
}

impl TickResult {
    pub fn is_game_over(&self) -> bool {
        self.collision.is_some() || self.board_full
    }
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create an engine whose food placement is reproducible
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Build the state for a fresh round
    pub fn new_game(&mut self) -> GameState {
        let snake = Snake::new(&self.config);
        let mut state = GameState {
            food: Food::new(snake.start()),
            snake,
            score: Score::new(),
            steps: 0,
            is_alive: true,
        };
        self.place_food(&mut state);
        state
    }

    /// Reset an existing state in place for a new round
    pub fn reset(&mut self, state: &mut GameState) {
        state.snake.reset();
        state.score.reset_score();
        state.steps = 0;
        state.is_alive = true;
        self.place_food(state);
    }

    /// Apply a heading change, refusing exact reversals
    pub fn turn(&self, state: &mut GameState, direction: Direction) -> bool {
        state.is_alive && state.snake.set_direction(direction)
    }

    /// Execute one tick of the game
    pub fn tick(&mut self, state: &mut GameState) -> TickResult {
        if !state.is_alive {
            return TickResult::default();
        }

        let mut result = TickResult::default();
        let snake = &mut state.snake;

        snake.advance();
        if snake.out_of_bounds() {
            result.collision = Some(CollisionType::Wall);
        }

        snake.trim_tail();
        if result.collision.is_none() && snake.self_collision() {
            result.collision = Some(CollisionType::SelfCollision);
        }

        // Food is still checked on a colliding tick
        if snake.head == state.food.position {
            result.ate_food = true;
            snake.grow(self.config.growth_per_food);
            state.score.add_score(self.config.score_per_food);

            let avoid = snake.occupied();
            if state.food.place(&mut self.rng, &self.config, &avoid).is_none() {
                result.board_full = true;
            }
        }

        state.steps += 1;
        if result.is_game_over() {
            state.is_alive = false;
        }

        result
    }

    fn place_food(&mut self, state: &mut GameState) {
        let avoid = state.snake.occupied();
        if state.food.place(&mut self.rng, &self.config, &avoid).is_none() {
            warn!(food = ?state.food.position, "no free cell for food at round start");
        }
    }
}
