pub mod game_metrics;

pub use game_metrics::{GameMetrics, RoundSummary, format_elapsed};
