/// Heading of the snake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Not moving yet; the state every new round starts in
    #[default]
    None,
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// The heading pointing the other way. `None` has no opposite.
    pub fn opposite(&self) -> Option<Direction> {
        match self {
            Direction::None => None,
            Direction::Left => Some(Direction::Right),
            Direction::Right => Some(Direction::Left),
            Direction::Up => Some(Direction::Down),
            Direction::Down => Some(Direction::Up),
        }
    }

    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == Some(other)
    }

    /// Per-tick delta (dx, dy) for a grid with the given block size
    pub fn delta(&self, block_size: i32) -> (i32, i32) {
        match self {
            Direction::None => (0, 0),
            Direction::Left => (-block_size, 0),
            Direction::Right => (block_size, 0),
            Direction::Up => (0, -block_size),
            Direction::Down => (0, block_size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_directions() {
        assert!(Direction::Up.is_opposite(Direction::Down));
        assert!(Direction::Down.is_opposite(Direction::Up));
        assert!(Direction::Left.is_opposite(Direction::Right));
        assert!(Direction::Right.is_opposite(Direction::Left));

        assert!(!Direction::Up.is_opposite(Direction::Left));
        assert!(!Direction::Up.is_opposite(Direction::Right));
    }

    #[test]
    fn test_none_has_no_opposite() {
        assert_eq!(Direction::None.opposite(), None);
        for dir in [
            Direction::None,
            Direction::Left,
            Direction::Right,
            Direction::Up,
            Direction::Down,
        ] {
            assert!(!Direction::None.is_opposite(dir));
            assert!(!dir.is_opposite(Direction::None));
        }
    }

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::None.delta(10), (0, 0));
        assert_eq!(Direction::Up.delta(10), (0, -10));
        assert_eq!(Direction::Down.delta(10), (0, 10));
        assert_eq!(Direction::Left.delta(10), (-10, 0));
        assert_eq!(Direction::Right.delta(10), (10, 0));
    }
}
