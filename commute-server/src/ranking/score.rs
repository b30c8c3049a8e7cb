//! Per-station scoring.

use serde::Serialize;

use crate::domain::{Minutes, Station};

use super::config::RankConfig;
use super::params::{CommuterWeights, RankParams};

/// Which commuter a station favours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Explanation {
    /// Commute times within the balanced threshold of each other.
    Balanced,
    /// Commuter A travels less.
    FavorsA,
    /// Commuter B travels less.
    FavorsB,
}

impl Explanation {
    /// Classify a pair of commute times.
    pub fn classify(time_a: Minutes, time_b: Minutes, balanced_threshold: Minutes) -> Self {
        if time_a.abs_diff(time_b) <= balanced_threshold {
            Explanation::Balanced
        } else if time_a < time_b {
            Explanation::FavorsA
        } else {
            Explanation::FavorsB
        }
    }

    /// Short human-readable description.
    pub fn description(&self) -> &'static str {
        match self {
            Explanation::Balanced => "Both commutes take about the same time.",
            Explanation::FavorsA => "Shorter commute for the first workplace.",
            Explanation::FavorsB => "Shorter commute for the second workplace.",
        }
    }
}

/// A station with both commute times and its score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredStation {
    pub station: Station,

    /// Minutes from workplace A.
    pub time_a: Minutes,

    /// Minutes from workplace B.
    pub time_b: Minutes,

    /// Desirability in `[0, 100]`, higher is better.
    pub score: f64,

    pub explanation: Explanation,
}

/// Unclamped, unpenalised score for a pair of commute times.
///
/// Blends the weighted total (`lambda = 0`) with the weighted worse-off
/// commute (`lambda = 1`) and maps the result linearly so that zero
/// minutes scores 100 and `calibration_mins` scores 0.
pub fn commute_score(
    weights: CommuterWeights,
    lambda: f64,
    time_a: Minutes,
    time_b: Minutes,
    calibration_mins: f64,
) -> f64 {
    let weighted_a = weights.a * f64::from(time_a);
    let weighted_b = weights.b * f64::from(time_b);

    let total = weighted_a + weighted_b;
    let worst = weighted_a.max(weighted_b);
    let blended = lambda * worst + (1.0 - lambda) * total;

    100.0 - (blended / calibration_mins) * 100.0
}

/// Score one station: commute score, budget penalty, then clamp to `[0, 100]`.
pub fn score_station(
    station: &Station,
    time_a: Minutes,
    time_b: Minutes,
    params: &RankParams,
    config: &RankConfig,
) -> ScoredStation {
    let mut score = commute_score(
        params.weights(),
        params.lambda(),
        time_a,
        time_b,
        config.calibration_mins,
    );
    if station.is_over_budget(params.budget()) {
        score -= config.over_budget_penalty;
    }

    ScoredStation {
        station: station.clone(),
        time_a,
        time_b,
        score: score.clamp(0.0, 100.0),
        explanation: Explanation::classify(time_a, time_b, config.balanced_threshold_mins),
    }
}
