//! Station graph storage.

use std::collections::HashMap;

use crate::domain::{Minutes, Station, StationId};

/// Errors from graph construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// Edge endpoint has not been added to the graph
    #[error("unknown station: {0}")]
    UnknownStation(StationId),

    /// Edge weight must be at least one minute
    #[error("invalid weight {weight} on edge {from} - {to}: must be positive")]
    InvalidWeight {
        from: StationId,
        to: StationId,
        weight: Minutes,
    },
}

/// One directed half of an undirected edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adjacency {
    /// Listing index of the neighbouring station.
    pub to: usize,

    /// Travel time in minutes.
    pub weight: Minutes,
}

/// Station repository with symmetric adjacency lists.
///
/// Stations keep their insertion order, which is the listing order used
/// as the deterministic tie-break everywhere downstream. Edges are stored
/// as two directed entries with equal weight. Parallel edges are kept.
///
/// Build the graph once, then share it behind an `Arc`; nothing mutates a
/// published graph.
///
/// # Example
///
/// ```
/// use commute_server::domain::{SafetyScore, Station, StationId};
/// use commute_server::graph::GraphStore;
///
/// let id = |s: &str| StationId::parse(s).unwrap();
/// let station = |s: &str| Station::new(id(s), s, 1000, SafetyScore::new(3).unwrap());
///
/// let mut graph = GraphStore::new();
/// graph.add_station(station("X"));
/// graph.add_station(station("Y"));
/// graph.add_edge(&id("X"), &id("Y"), 3).unwrap();
///
/// assert_eq!(graph.station_count(), 2);
/// assert_eq!(graph.edge_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    stations: Vec<Station>,
    index: HashMap<StationId, usize>,
    adjacency: Vec<Vec<Adjacency>>,
    edge_count: usize,
}

impl GraphStore {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a station with no connections.
    ///
    /// Idempotent on id: if a station with the same id exists this is a
    /// no-op and returns `false`.
    pub fn add_station(&mut self, station: Station) -> bool {
        if self.index.contains_key(&station.id) {
            return false;
        }
        self.index.insert(station.id.clone(), self.stations.len());
        self.stations.push(station);
        self.adjacency.push(Vec::new());
        true
    }

    /// Add an undirected edge between two existing stations.
    ///
    /// Both endpoints must already be present and `weight` must be positive.
    /// Stores `a -> b` and `b -> a` with the same weight.
    pub fn add_edge(&mut self, a: &StationId, b: &StationId, weight: Minutes) -> Result<(), GraphError> {
        let from = self.require(a)?;
        let to = self.require(b)?;

        if weight == 0 {
            return Err(GraphError::InvalidWeight {
                from: a.clone(),
                to: b.clone(),
                weight,
            });
        }

        self.adjacency[from].push(Adjacency { to, weight });
        self.adjacency[to].push(Adjacency { to: from, weight });
        self.edge_count += 1;
        Ok(())
    }

    fn require(&self, id: &StationId) -> Result<usize, GraphError> {
        self.index_of(id)
            .ok_or_else(|| GraphError::UnknownStation(id.clone()))
    }

    /// Look up a station by id.
    pub fn get_station(&self, id: &StationId) -> Option<&Station> {
        self.index_of(id).map(|i| &self.stations[i])
    }

    /// All stations in insertion order.
    pub fn list_stations(&self) -> &[Station] {
        &self.stations
    }

    /// Listing index of a station.
    pub fn index_of(&self, id: &StationId) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn contains(&self, id: &StationId) -> bool {
        self.index.contains_key(id)
    }

    /// Adjacency entries of the station at listing index `index`.
    ///
    /// Panics if `index` is out of bounds.
    pub fn adjacent(&self, index: usize) -> &[Adjacency] {
        &self.adjacency[index]
    }

    /// Neighbours of a station with their edge weights.
    ///
    /// Returns `None` for an unknown id.
    pub fn neighbors(&self, id: &StationId) -> Option<Vec<(&StationId, Minutes)>> {
        let i = self.index_of(id)?;
        Some(
            self.adjacency[i]
                .iter()
                .map(|adj| (&self.stations[adj.to].id, adj.weight))
                .collect(),
        )
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Number of undirected edges added (parallel edges counted separately).
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}
