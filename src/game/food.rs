use rand::{Rng, seq::SliceRandom};

use super::{config::GameConfig, state::Position};

/// Random samples tried before falling back to a scan of free cells
pub const MAX_PLACEMENT_ATTEMPTS: usize = 256;

/// The single piece of food on the playfield
#[derive(Debug, Clone, PartialEq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    pub fn new(position: Position) -> Self {
        Self { position }
    }

    /// Move the food to a random block-aligned cell not in `avoid`.
    ///
    /// Samples uniformly for up to [`MAX_PLACEMENT_ATTEMPTS`] tries, then
    /// picks uniformly among the remaining free cells. Returns `None`, leaving
    /// the food where it was, when every cell is taken.
    pub fn place<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        config: &GameConfig,
        avoid: &[Position],
    ) -> Option<Position> {
        let position = sample_free_cell(rng, config, avoid)
            .or_else(|| scan_free_cell(rng, config, avoid))?;
        self.position = position;
        Some(position)
    }
}

fn random_cell<R: Rng + ?Sized>(rng: &mut R, config: &GameConfig) -> Position {
    let bs = config.block_size;
    Position::new(
        rng.gen_range(0..config.columns()) * bs,
        rng.gen_range(0..config.rows()) * bs,
    )
}

fn sample_free_cell<R: Rng + ?Sized>(
    rng: &mut R,
    config: &GameConfig,
    avoid: &[Position],
) -> Option<Position> {
    (0..MAX_PLACEMENT_ATTEMPTS)
        .map(|_| random_cell(rng, config))
        .find(|pos| !avoid.contains(pos))
}

fn scan_free_cell<R: Rng + ?Sized>(
    rng: &mut R,
    config: &GameConfig,
    avoid: &[Position],
) -> Option<Position> {
    let bs = config.block_size;
    let free: Vec<Position> = (0..config.rows())
        .flat_map(|row| (0..config.columns()).map(move |col| Position::new(col * bs, row * bs)))
        .filter(|pos| !avoid.contains(pos))
        .collect();

    free.choose(rng).copied()
}
