//! Network file loading.
//!
//! A network file is a JSON document listing station records and edge
//! records. Stations are added in document order, then edges, going
//! through the same [`GraphStore`] contract as hand-built graphs.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::{DomainError, Minutes, SafetyScore, Station, StationId};

use super::store::{GraphError, GraphStore};

/// Errors that can occur while loading a network file.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// Reading the file failed
    #[error("failed to read network file: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid JSON for a network
    #[error("network JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A station record failed validation
    #[error("invalid station record {id:?}: {source}")]
    InvalidStation { id: String, source: DomainError },

    /// An edge record names a blank station id
    #[error("invalid edge endpoint {endpoint:?}: {source}")]
    InvalidEdge { endpoint: String, source: DomainError },

    /// An edge record was rejected by the graph
    #[error("invalid edge record: {0}")]
    Graph(#[from] GraphError),
}

/// A station as it appears in a network file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationRecord {
    pub id: String,
    pub name: String,
    pub rent: u32,
    pub safety_score: u8,
}

/// An undirected edge as it appears in a network file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub from: String,
    pub to: String,
    pub weight: Minutes,
}

/// Top-level network document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NetworkFile {
    pub stations: Vec<StationRecord>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

impl StationRecord {
    fn to_station(&self) -> Result<Station, NetworkError> {
        let invalid = |source| NetworkError::InvalidStation {
            id: self.id.clone(),
            source,
        };
        let id = StationId::parse(&self.id).map_err(invalid)?;
        let safety = SafetyScore::new(self.safety_score).map_err(invalid)?;
        Ok(Station::new(id, self.name.clone(), self.rent, safety))
    }
}

impl NetworkFile {
    /// Build a graph from this document.
    pub fn build(&self) -> Result<GraphStore, NetworkError> {
        let mut graph = GraphStore::new();

        for record in &self.stations {
            let station = record.to_station()?;
            if !graph.add_station(station) {
                warn!(id = %record.id, "duplicate station id in network file, keeping first");
            }
        }

        for edge in &self.edges {
            let from = edge_endpoint(&edge.from)?;
            let to = edge_endpoint(&edge.to)?;
            graph.add_edge(&from, &to, edge.weight)?;
        }

        debug!(
            stations = graph.station_count(),
            edges = graph.edge_count(),
            "built network graph"
        );
        Ok(graph)
    }
}

fn edge_endpoint(raw: &str) -> Result<StationId, NetworkError> {
    StationId::parse(raw).map_err(|source| NetworkError::InvalidEdge {
        endpoint: raw.to_string(),
        source,
    })
}

/// Parse a network document and build its graph.
pub fn load_network_from_str(json: &str) -> Result<GraphStore, NetworkError> {
    let file: NetworkFile = serde_json::from_str(json)?;
    file.build()
}

/// Read a network file from disk and build its graph.
pub fn load_network_from_path(path: impl AsRef<Path>) -> Result<GraphStore, NetworkError> {
    let contents = std::fs::read_to_string(path.as_ref())?;
    load_network_from_str(&contents)
}
