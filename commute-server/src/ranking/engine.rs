//! Station ranking for two commuters.

use tracing::debug;

use crate::domain::StationId;
use crate::graph::GraphStore;
use crate::paths::{DistanceMap, PathError, ShortestPathEngine};

use super::config::RankConfig;
use super::params::{InvalidParams, RankParams};
use super::score::{ScoredStation, score_station};

/// Errors from a ranking query.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RankError {
    /// A workplace is not a station in the graph
    #[error("unknown station: {0}")]
    UnknownStation(StationId),

    /// Query parameters out of range
    #[error(transparent)]
    InvalidParams(#[from] InvalidParams),

    /// Distance computation was cancelled
    #[error("ranking cancelled")]
    Cancelled,
}

impl From<PathError> for RankError {
    fn from(e: PathError) -> Self {
        match e {
            PathError::NotFound(id) => RankError::UnknownStation(id),
            PathError::Cancelled => RankError::Cancelled,
        }
    }
}

/// Ranks residential stations for a pair of workplaces.
#[derive(Debug, Clone, Default)]
pub struct RankingEngine {
    config: RankConfig,
    paths: ShortestPathEngine,
}

impl RankingEngine {
    pub fn new(config: RankConfig, paths: ShortestPathEngine) -> Self {
        Self { config, paths }
    }

    pub fn config(&self) -> &RankConfig {
        &self.config
    }

    pub fn paths(&self) -> &ShortestPathEngine {
        &self.paths
    }

    /// Compute both distance maps and rank every station reachable from
    /// both workplaces.
    ///
    /// Fails with [`RankError::UnknownStation`] if either workplace is not
    /// in the graph. A pair of workplaces in different components is not
    /// an error; the result is simply empty.
    pub fn best_stations(
        &self,
        graph: &GraphStore,
        workplace_a: &StationId,
        workplace_b: &StationId,
        params: &RankParams,
    ) -> Result<Vec<ScoredStation>, RankError> {
        require_workplace(graph, workplace_a)?;
        require_workplace(graph, workplace_b)?;

        let dist_a = self.paths.distances(graph, workplace_a)?;
        let dist_b = self.paths.distances(graph, workplace_b)?;

        Ok(self.rank(graph, &dist_a, &dist_b, params))
    }

    /// Rank stations given precomputed distance maps.
    ///
    /// Stations unreachable from either workplace are excluded. Results are
    /// sorted by descending score; equal scores keep graph listing order.
    /// At most `max_results` entries are returned.
    pub fn rank(
        &self,
        graph: &GraphStore,
        dist_a: &DistanceMap,
        dist_b: &DistanceMap,
        params: &RankParams,
    ) -> Vec<ScoredStation> {
        let mut scored: Vec<(usize, ScoredStation)> = graph
            .list_stations()
            .iter()
            .enumerate()
            .filter_map(|(i, station)| {
                let time_a = dist_a.at(i).minutes()?;
                let time_b = dist_b.at(i).minutes()?;
                Some((i, score_station(station, time_a, time_b, params, &self.config)))
            })
            .collect();

        let candidates = scored.len();

        // Explicit tie-break on listing index keeps output reproducible
        scored.sort_by(|(ia, a), (ib, b)| b.score.total_cmp(&a.score).then(ia.cmp(ib)));
        scored.truncate(self.config.max_results);

        debug!(
            workplace_a = %dist_a.source(),
            workplace_b = %dist_b.source(),
            candidates,
            returned = scored.len(),
            "ranked stations"
        );

        scored.into_iter().map(|(_, s)| s).collect()
    }
}

/// Check that a workplace id names a station in `graph`.
pub fn require_workplace(graph: &GraphStore, id: &StationId) -> Result<(), RankError> {
    if graph.contains(id) {
        Ok(())
    } else {
        Err(RankError::UnknownStation(id.clone()))
    }
}

/// Rank stations for two workplaces with default configuration.
///
/// Returns at most ten stations, best first.
pub fn compute_best_stations(
    graph: &GraphStore,
    workplace_a: &StationId,
    workplace_b: &StationId,
    params: &RankParams,
) -> Result<Vec<ScoredStation>, RankError> {
    RankingEngine::default().best_stations(graph, workplace_a, workplace_b, params)
}
