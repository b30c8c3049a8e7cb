//! Ranking configuration.

use crate::domain::Minutes;

/// Tunable constants for station scoring.
#[derive(Debug, Clone, PartialEq)]
pub struct RankConfig {
    /// Maximum number of stations to return.
    pub max_results: usize,

    /// Blended weighted commute (minutes) that maps to a score of zero.
    pub calibration_mins: f64,

    /// Points subtracted when rent exceeds the budget, before clamping.
    pub over_budget_penalty: f64,

    /// Commutes within this many minutes of each other count as balanced.
    pub balanced_threshold_mins: Minutes,
}

impl RankConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        max_results: usize,
        calibration_mins: f64,
        over_budget_penalty: f64,
        balanced_threshold_mins: Minutes,
    ) -> Self {
        Self {
            max_results,
            calibration_mins,
            over_budget_penalty,
            balanced_threshold_mins,
        }
    }
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            max_results: 10,
            calibration_mins: 120.0, // 2 hours combined is the worst tolerable
            over_budget_penalty: 15.0,
            balanced_threshold_mins: 5,
        }
    }
}
