use super::{config::GameConfig, direction::Direction};

/// A block-aligned cell on the playfield, in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
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

    /// The cell nearest the centre of the playfield, snapped to the grid
    pub fn centre_of(config: &GameConfig) -> Self {
        let bs = config.block_size;
        Self::new(
            (config.screen_width / 2 / bs) * bs,
            (config.screen_height / 2 / bs) * bs,
        )
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Occupied cells, oldest first; the head is the last element
    pub body: Vec<Position>,
    /// Current head cell. Moves before it is appended to `body`.
    pub head: Position,
    /// Target length; the tail is trimmed down to this
    pub length: usize,
    pub direction: Direction,
    pub x_change: i32,
    pub y_change: i32,
    block_size: i32,
    width: i32,
    height: i32,
    start: Position,
}

impl Snake {
    /// Create a snake sitting still in the centre of the playfield
    pub fn new(config: &GameConfig) -> Self {
        let start = Position::centre_of(config);
        Self {
            body: Vec::new(),
            head: start,
            length: 1,
            direction: Direction::None,
            x_change: 0,
            y_change: 0,
            block_size: config.block_size,
            width: config.screen_width,
            height: config.screen_height,
            start,
        }
    }

    /// Put the snake back to its starting state without reallocating the body
    pub fn reset(&mut self) {
        self.body.clear();
        self.head = self.start;
        self.length = 1;
        self.direction = Direction::None;
        self.x_change = 0;
        self.y_change = 0;
    }

    /// The cell the snake starts each round on
    pub fn start(&self) -> Position {
        self.start
    }

    /// Change heading. A request for the exact opposite of the current
    /// heading, or for `None`, is ignored. Returns whether the heading changed.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if direction == Direction::None || self.direction.is_opposite(direction) {
            return false;
        }

        let (dx, dy) = direction.delta(self.block_size);
        self.direction = direction;
        self.x_change = dx;
        self.y_change = dy;
        true
    }

    /// Move the head by the per-tick delta and append it to the body
    pub fn advance(&mut self) {
        self.head = self.head.moved_by(self.x_change, self.y_change);
        self.body.push(self.head);
    }

    /// Drop the oldest cells until the body fits the target length
    pub fn trim_tail(&mut self) {
        if self.body.len() > self.length {
            let excess = self.body.len() - self.length;
            self.body.drain(..excess);
        }
    }

    /// Whether the head has left the playfield
    pub fn out_of_bounds(&self) -> bool {
        self.head.x < 0 || self.head.x >= self.width || self.head.y < 0 || self.head.y >= self.height
    }

    /// Whether the head shares a cell with any other part of the body
    pub fn self_collision(&self) -> bool {
        match self.body.split_last() {
            Some((head, rest)) => rest.contains(head),
            None => false,
        }
    }

    pub fn grow(&mut self, amount: usize) {
        self.length += amount;
    }

    /// Get the length of the body
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Cells to keep food away from: the body, or the start cell before the first tick
    pub fn occupied(&self) -> Vec<Position> {
        if self.body.is_empty() {
            vec![self.head]
        } else {
            self.body.clone()
        }
    }
}

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake left the playfield
    Wall,
    /// Snake hit itself
    SelfCollision,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snake() -> Snake {
        Snake::new(&GameConfig::default())
    }

    #[test]
    fn test_new_snake_is_centred_and_still() {
        let snake = snake();
        assert_eq!(snake.head, Position::new(300, 200));
        assert_eq!(snake.length, 1);
        assert_eq!(snake.direction, Direction::None);
        assert!(snake.is_empty());
    }

    #[test]
    fn test_centre_snaps_to_grid() {
        let config = GameConfig::new(130, 90);
        assert_eq!(Position::centre_of(&config), Position::new(60, 40));
    }

    #[test]
    fn test_idle_tick_keeps_head_in_place() {
        let mut snake = snake();
        snake.advance();
        snake.trim_tail();

        assert_eq!(snake.head, Position::new(300, 200));
        assert_eq!(snake.len(), 1);
        assert!(!snake.self_collision());
    }

    #[test]
    fn test_moving_right() {
        let mut snake = snake();
        assert!(snake.set_direction(Direction::Right));

        for i in 1..=4 {
            snake.advance();
            snake.trim_tail();
            assert_eq!(snake.head.x, 300 + 10 * i);
            assert_eq!(snake.head.y, 200);
            assert_eq!(snake.len(), 1);
            assert_eq!(*snake.body.last().unwrap(), snake.head);
        }
    }

    #[test]
    fn test_reject_opposite_heading() {
        let mut snake = snake();
        snake.set_direction(Direction::Up);

        assert!(!snake.set_direction(Direction::Down));
        assert_eq!(snake.direction, Direction::Up);
        assert_eq!((snake.x_change, snake.y_change), (0, -10));

        assert!(snake.set_direction(Direction::Left));
        assert_eq!((snake.x_change, snake.y_change), (-10, 0));
    }

    #[test]
    fn test_any_heading_accepted_from_none() {
        let mut snake = snake();
        assert!(snake.set_direction(Direction::Down));

        snake.reset();
        assert!(snake.set_direction(Direction::Up));
        assert!(!snake.set_direction(Direction::None));
        assert_eq!(snake.direction, Direction::Up);
    }

    #[test]
    fn test_trim_tail_respects_length() {
        let mut snake = snake();
        snake.set_direction(Direction::Right);
        snake.grow(2);

        for _ in 0..6 {
            snake.advance();
            snake.trim_tail();
            assert!(snake.len() <= snake.length);
        }
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.body[0], Position::new(340, 200));
    }

    #[test]
    fn test_trim_tail_after_shrinking_target() {
        let mut snake = snake();
        snake.body = (0..5).map(|i| Position::new(i * 10, 0)).collect();
        snake.length = 2;
        snake.trim_tail();

        assert_eq!(snake.body, vec![Position::new(30, 0), Position::new(40, 0)]);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut snake = snake();
        assert!(!snake.out_of_bounds());

        snake.head = Position::new(600, 200);
        assert!(snake.out_of_bounds());

        snake.head = Position::new(590, 390);
        assert!(!snake.out_of_bounds());

        snake.head = Position::new(0, -10);
        assert!(snake.out_of_bounds());

        snake.head = Position::new(-10, 0);
        assert!(snake.out_of_bounds());

        snake.head = Position::new(0, 400);
        assert!(snake.out_of_bounds());
    }

    #[test]
    fn test_self_collision() {
        let mut snake = snake();
        snake.body = vec![
            Position::new(10, 10),
            Position::new(20, 10),
            Position::new(20, 20),
            Position::new(10, 20),
            Position::new(10, 10),
        ];
        snake.head = Position::new(10, 10);
        snake.length = 5;

        assert!(snake.self_collision());
    }

    #[test]
    fn test_no_self_collision_for_single_cell() {
        let mut snake = snake();
        snake.body = vec![Position::new(10, 10)];
        assert!(!snake.self_collision());
    }

    #[test]
    fn test_reset_restores_start() {
        let mut snake = snake();
        snake.set_direction(Direction::Left);
        snake.grow(4);
        snake.advance();
        snake.advance();

        snake.reset();
        assert!(snake.is_empty());
        assert_eq!(snake.head, snake.start());
        assert_eq!(snake.length, 1);
        assert_eq!(snake.direction, Direction::None);
        assert_eq!((snake.x_change, snake.y_change), (0, 0));
    }

    #[test]
    fn test_occupied_before_first_tick() {
        let snake = snake();
        assert_eq!(snake.occupied(), vec![snake.start()]);
    }
}
