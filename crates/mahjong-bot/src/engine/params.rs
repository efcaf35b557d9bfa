/// Tunable weights for scoring simulated decision outcomes.
///
/// The defaults implement a deliberately simple linear heuristic: prefer
/// whatever minimizes distance-to-win, with a secondary preference for wide
/// acceptance once the hand is waiting. They are configuration, not tuned
/// truths; callers may override any of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineParams {
    /// Score assigned to a simulated state that has won (default: 1_000_000).
    /// Must exceed any attainable non-winning score so a win always
    /// dominates.
    pub win_score: i32,

    /// Penalty applied per step of distance-to-win (default: 100).
    pub distance_penalty: i32,

    /// Bonus per distinct winning tile once the hand is waiting (default: 5).
    pub wait_bonus: i32,
}

impl Default for EngineParams {
    fn default() -> Self {
        Self {
            win_score: 1_000_000,
            distance_penalty: 100,
            wait_bonus: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::EngineParams;

    #[test]
    fn defaults_keep_wins_dominant() {
        let params = EngineParams::default();
        // The deepest possible hand is eight exchanges out; even with every
        // wait bonus zeroed a win must stay strictly ahead.
        let worst_loss = -params.distance_penalty * 8;
        assert!(params.win_score > worst_loss.abs());
        assert!(params.win_score > 0);
    }
}
