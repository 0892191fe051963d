use anyhow::{Context, Result};
use clap::Parser;
use grid_snake::game::{GameConfig, GameEngine, Palette};
use grid_snake::logging;
use grid_snake::modes::HumanMode;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Classic Snake in the terminal")]
struct Cli {
    /// Playfield width in pixels (multiple of the block size)
    #[arg(long)]
    width: Option<i32>,

    /// Playfield height in pixels (multiple of the block size)
    #[arg(long)]
    height: Option<i32>,

    /// Ticks per second
    #[arg(long)]
    fps: Option<u32>,

    /// Colour scheme
    #[arg(long, value_enum)]
    palette: Option<Palette>,

    /// Seed for food placement, for reproducible rounds
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file with game settings; flags above override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write logs to this file (filtered by RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_json_file(path)?,
            None => GameConfig::default(),
        };

        if let Some(width) = self.width {
            config.screen_width = width;
        }
        if let Some(height) = self.height {
            config.screen_height = height;
        }
        if let Some(fps) = self.fps {
            config.fps = fps;
        }
        if let Some(palette) = self.palette {
            config.palette = palette;
        }

        config.validate().context("Invalid game configuration")?;
        Ok(config)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref())?;

    let config = cli.game_config()?;
    let engine = match cli.seed {
        Some(seed) => GameEngine::with_seed(config, seed),
        None => GameEngine::new(config),
    };

    let mut human_mode = HumanMode::new(engine);
    human_mode.run().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_flags() {
        let cli = Cli::parse_from(["grid_snake"]);
        assert_eq!(cli.game_config().unwrap(), GameConfig::default());
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::parse_from([
            "grid_snake",
            "--width",
            "300",
            "--height",
            "200",
            "--fps",
            "10",
            "--palette",
            "dark",
        ]);
        let config = cli.game_config().unwrap();

        assert_eq!(config.screen_width, 300);
        assert_eq!(config.screen_height, 200);
        assert_eq!(config.fps, 10);
        assert_eq!(config.palette, Palette::Dark);
    }

    #[test]
    fn test_invalid_size_rejected() {
        let cli = Cli::parse_from(["grid_snake", "--width", "305"]);
        assert!(cli.game_config().is_err());
    }
}
