/// Points collected in the current round
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score(u32);

impl Score {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn add_score(&mut self, delta: u32) {
        self.0 = self.0.saturating_add(delta);
    }

    pub fn reset_score(&mut self) {
        self.0 = 0;
    }

    pub fn get_score(&self) -> u32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_accumulates_and_resets() {
        let mut score = Score::new();
        assert_eq!(score.get_score(), 0);

        score.add_score(250);
        score.add_score(250);
        assert_eq!(score.get_score(), 500);

        score.reset_score();
        assert_eq!(score.get_score(), 0);
    }

    #[test]
    fn test_score_saturates() {
        let mut score = Score::new();
        score.add_score(u32::MAX);
        score.add_score(1);
        assert_eq!(score.get_score(), u32::MAX);
    }
}
