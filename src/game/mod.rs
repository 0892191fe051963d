//! Core game logic module for Snake
//!
//! Everything here is free of terminal I/O so it can be driven by the
//! interactive loop and exercised directly in tests.

pub mod config;
pub mod direction;
pub mod engine;
pub mod food;
pub mod score;
pub mod state;

// Re-export commonly used types
pub use config::{Colors, GameConfig, Palette, Rgb};
pub use direction::Direction;
pub use engine::{GameEngine, GameState, TickResult};
pub use food::Food;
pub use score::Score;
pub use state::{CollisionType, Position, Snake};
