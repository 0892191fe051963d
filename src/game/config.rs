use anyhow::{Context, Result, ensure};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Side of one grid cell, in pixels
pub const BLOCK_SIZE: i32 = 10;
pub const SCREEN_WIDTH: i32 = 600;
pub const SCREEN_HEIGHT: i32 = 400;
/// Ticks per second
pub const FPS: u32 = 20;
pub const SCORE_PER_FOOD: u32 = 250;
/// Added to the snake's target length for every food eaten
pub const GROWTH_PER_FOOD: usize = 2;
pub const WINDOW_TITLE: &str = "Snake";
/// Largest playfield accepted, in grid cells per axis
pub const MAX_COLUMNS: i32 = 1_000;
pub const MAX_ROWS: i32 = 1_000;

/// An sRGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const RED: Rgb = Rgb(255, 0, 0);
    pub const GREEN: Rgb = Rgb(0, 150, 0);
    pub const BRIGHT_GREEN: Rgb = Rgb(0, 220, 0);
}

/// Colour scheme selectable at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Palette {
    /// White playfield, green snake
    #[default]
    Classic,
    /// Black playfield, bright green snake
    Dark,
}

/// Every colour the renderer needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Colors {
    pub playfield: Rgb,
    pub snake: Rgb,
    pub food: Rgb,
    pub score: Rgb,
    pub screen_background: Rgb,
    pub title: Rgb,
    pub prompt: Rgb,
}

impl Palette {
    pub fn colors(&self) -> Colors {
        match self {
            Palette::Classic => Colors {
                playfield: Rgb::WHITE,
                snake: Rgb::GREEN,
                food: Rgb::RED,
                score: Rgb::RED,
                screen_background: Rgb::BLACK,
                title: Rgb::RED,
                prompt: Rgb::WHITE,
            },
            Palette::Dark => Colors {
                playfield: Rgb::BLACK,
                snake: Rgb::BRIGHT_GREEN,
                food: Rgb::RED,
                score: Rgb::WHITE,
                screen_background: Rgb::BLACK,
                title: Rgb::BRIGHT_GREEN,
                prompt: Rgb::WHITE,
            },
        }
    }
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side of one grid cell, in pixels
    pub block_size: i32,
    /// Width of the playfield, in pixels
    pub screen_width: i32,
    /// Height of the playfield, in pixels
    pub screen_height: i32,
    /// Ticks per second
    pub fps: u32,
    pub score_per_food: u32,
    pub growth_per_food: usize,
    pub palette: Palette,
    pub title: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            block_size: BLOCK_SIZE,
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            fps: FPS,
            score_per_food: SCORE_PER_FOOD,
            growth_per_food: GROWTH_PER_FOOD,
            palette: Palette::default(),
            title: WINDOW_TITLE.to_string(),
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom playfield size in pixels
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            screen_width: width,
            screen_height: height,
            ..Default::default()
        }
    }

    /// Create a small playfield for testing (10x10 cells)
    pub fn small() -> Self {
        Self::new(10 * BLOCK_SIZE, 10 * BLOCK_SIZE)
    }

    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: GameConfig = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(self.block_size > 0, "block size must be positive");
        ensure!(self.fps > 0, "fps must be positive");
        ensure!(
            self.screen_width > 0 && self.screen_width % self.block_size == 0,
            "screen width {} must be a positive multiple of the block size {}",
            self.screen_width,
            self.block_size
        );
        ensure!(
            self.screen_height > 0 && self.screen_height % self.block_size == 0,
            "screen height {} must be a positive multiple of the block size {}",
            self.screen_height,
            self.block_size
        );
        ensure!(
            self.columns() <= MAX_COLUMNS && self.rows() <= MAX_ROWS,
            "playfield of {}x{} cells exceeds the {}x{} limit",
            self.columns(),
            self.rows(),
            MAX_COLUMNS,
            MAX_ROWS
        );
        let cells = self.columns().checked_mul(self.rows());
        ensure!(
            cells.is_some_and(|cells| cells >= 2),
            "playfield must have room for the snake and one piece of food"
        );
        Ok(())
    }

    /// Number of grid columns
    pub fn columns(&self) -> i32 {
        self.screen_width / self.block_size
    }

    /// Number of grid rows
    pub fn rows(&self) -> i32 {
        self.screen_height / self.block_size
    }

    pub fn colors(&self) -> Colors {
        self.palette.colors()
    }
}
