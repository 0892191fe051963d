use std::time::{Duration, Instant};

/// Figures reported when a round ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSummary {
    pub score: u32,
    pub foods_eaten: u32,
    pub duration: Duration,
    pub games_played: u32,
    pub best_score: u32,
}

/// In-memory statistics for the current session. Nothing here is persisted.
pub struct GameMetrics {
    round_started: Instant,
    foods_eaten: u32,
    pub games_played: u32,
    pub best_score: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            round_started: Instant::now(),
            foods_eaten: 0,
            games_played: 0,
            best_score: 0,
        }
    }

    pub fn on_round_start(&mut self) {
        self.round_started = Instant::now();
        self.foods_eaten = 0;
    }

    pub fn on_food_eaten(&mut self) {
        self.foods_eaten += 1;
    }

    pub fn on_round_end(&mut self, final_score: u32) -> RoundSummary {
        self.games_played += 1;
        self.best_score = self.best_score.max(final_score);

        RoundSummary {
            score: final_score,
            foods_eaten: self.foods_eaten,
            duration: self.round_started.elapsed(),
            games_played: self.games_played,
            best_score: self.best_score,
        }
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a duration as `MM:SS`
pub fn format_elapsed(elapsed: Duration) -> String {
    let total_secs = elapsed.as_secs();
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        assert_eq!(format_elapsed(Duration::from_secs(125)), "02:05");
        assert_eq!(format_elapsed(Duration::ZERO), "00:00");
        assert_eq!(format_elapsed(Duration::from_secs(3661)), "61:01");
    }

    #[test]
    fn test_best_score_tracking() {
        let mut metrics = GameMetrics::new();

        let summary = metrics.on_round_end(500);
        assert_eq!(summary.best_score, 500);
        assert_eq!(summary.games_played, 1);

        let summary = metrics.on_round_end(250);
        assert_eq!(summary.score, 250);
        assert_eq!(summary.best_score, 500);

        metrics.on_round_end(1000);
        assert_eq!(metrics.best_score, 1000);
        assert_eq!(metrics.games_played, 3);
    }

    #[test]
    fn test_round_start_resets_counters() {
        let mut metrics = GameMetrics::new();
        metrics.on_food_eaten();
        metrics.on_food_eaten();
        std::thread::sleep(Duration::from_millis(50));
        assert!(metrics.on_round_end(0).duration >= Duration::from_millis(50));

        metrics.on_round_start();
        let summary = metrics.on_round_end(0);
        assert!(summary.duration < Duration::from_millis(50));
        assert_eq!(summary.foods_eaten, 0);
    }
}
