//! Fairness-aware station ranking.
//!
//! Turns two commute-time maps and a set of tuning parameters into a
//! ranked shortlist of residential stations. Scores blend the weighted
//! total commute with the worse-off commuter's time, subtract a fixed
//! penalty for over-budget rent, and clamp to `[0, 100]`.

mod config;
mod engine;
mod params;
mod score;

pub use config::RankConfig;
pub use engine::{RankError, RankingEngine, compute_best_stations, require_workplace};
pub use params::{CommuterWeights, InvalidParams, RankParams};
pub use score::{Explanation, ScoredStation, commute_score, score_station};
