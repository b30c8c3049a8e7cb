//! Application state for the web layer.

use std::sync::Arc;
use std::time::Duration;

use crate::graph::GraphStore;
use tokio_util::sync::CancellationToken;

use crate::paths::{PathAlgorithm, ShortestPathEngine};
use crate::ranking::{RankConfig, RankingEngine};

/// Shared application state.
///
/// The graph is published once at startup and only read afterwards.
#[derive(Clone)]
pub struct AppState {
    /// Transit network
    pub graph: Arc<GraphStore>,

    /// Scoring constants
    pub rank_config: Arc<RankConfig>,

    /// Dijkstra variant for distance queries
    pub algorithm: PathAlgorithm,

    /// Budget for one ranking query
    pub query_timeout: Duration,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        graph: GraphStore,
        rank_config: RankConfig,
        algorithm: PathAlgorithm,
        query_timeout: Duration,
    ) -> Self {
        Self {
            graph: Arc::new(graph),
            rank_config: Arc::new(rank_config),
            algorithm,
            query_timeout,
        }
    }

    /// A ranking engine for one request, stopped by `cancel`.
    pub fn ranking_engine(&self, cancel: CancellationToken) -> RankingEngine {
        RankingEngine::new(
            (*self.rank_config).clone(),
            ShortestPathEngine::new(self.algorithm).with_cancel(cancel),
        )
    }
}
