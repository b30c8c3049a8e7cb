//! Shortest commute times over the station graph.
//!
//! Only distances are computed; routes are not reconstructed.

mod cancel;
mod dijkstra;
mod distance;

use std::fmt;
use std::str::FromStr;

use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::domain::StationId;
use crate::graph::GraphStore;

pub use distance::{Distance, DistanceMap};

/// Errors from shortest-path computation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// Source station is not in the graph
    #[error("source station not found: {0}")]
    NotFound(StationId),

    /// Computation was cancelled before finishing
    #[error("shortest-path computation cancelled")]
    Cancelled,
}

/// Which Dijkstra variant to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathAlgorithm {
    /// Linear-scan selection, O(V²).
    #[default]
    Dense,
    /// Binary-heap selection, O((V + E) log V).
    Heap,
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown path algorithm {0:?}: expected \"dense\" or \"heap\"")]
pub struct InvalidPathAlgorithm(String);

impl FromStr for PathAlgorithm {
    type Err = InvalidPathAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dense" => Ok(PathAlgorithm::Dense),
            "heap" => Ok(PathAlgorithm::Heap),
            _ => Err(InvalidPathAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for PathAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathAlgorithm::Dense => f.write_str("dense"),
            PathAlgorithm::Heap => f.write_str("heap"),
        }
    }
}

/// Single-source shortest-distance engine.
///
/// Holds the algorithm choice and an optional cancellation token; the
/// graph is passed per call, so one engine can serve any number of
/// concurrent reads of a shared graph.
#[derive(Debug, Clone, Default)]
pub struct ShortestPathEngine {
    algorithm: PathAlgorithm,
    cancel: CancellationToken,
}

impl ShortestPathEngine {
    /// Create an engine using `algorithm` and a fresh cancellation token.
    pub fn new(algorithm: PathAlgorithm) -> Self {
        Self {
            algorithm,
            cancel: CancellationToken::new(),
        }
    }

    /// Use `cancel` to stop computations early.
    pub fn with_cancel(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn algorithm(&self) -> PathAlgorithm {
        self.algorithm
    }

    /// Compute the shortest distance from `source` to every station.
    ///
    /// Stations outside the source's connected component are
    /// [`Distance::Unreachable`].
    pub fn distances(&self, graph: &GraphStore, source: &StationId) -> Result<DistanceMap, PathError> {
        let start = graph
            .index_of(source)
            .ok_or_else(|| PathError::NotFound(source.clone()))?;

        let distances = match self.algorithm {
            PathAlgorithm::Dense => dijkstra::dense(graph, start, &self.cancel)?,
            PathAlgorithm::Heap => dijkstra::heap(graph, start, &self.cancel)?,
        };

        let map = DistanceMap::new(source.clone(), distances);
        debug!(
            source = %source,
            algorithm = %self.algorithm,
            reachable = map.reachable_count(),
            total = map.len(),
            "computed distances"
        );
        Ok(map)
    }
}

/// Compute shortest distances from `source` with the default dense engine.
pub fn shortest_distances(graph: &GraphStore, source: &StationId) -> Result<DistanceMap, PathError> {
    ShortestPathEngine::default().distances(graph, source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::test_support::{graph, id};

    fn minutes(map: &DistanceMap, g: &GraphStore, s: &str) -> Option<u32> {
        map.get(g, &id(s)).and_then(Distance::minutes)
    }

    #[test]
    fn line_example() {
        let g = graph(
            &[("X", 1), ("Y", 1), ("Z", 1)],
            &[("X", "Y", 3), ("Y", "Z", 4)],
        );

        let from_x = shortest_distances(&g, &id("X")).unwrap();
        assert_eq!(minutes(&from_x, &g, "X"), Some(0));
        assert_eq!(minutes(&from_x, &g, "Y"), Some(3));
        assert_eq!(minutes(&from_x, &g, "Z"), Some(7));

        let from_z = shortest_distances(&g, &id("Z")).unwrap();
        assert_eq!(minutes(&from_z, &g, "X"), Some(7));
        assert_eq!(minutes(&from_z, &g, "Y"), Some(4));
        assert_eq!(minutes(&from_z, &g, "Z"), Some(0));
    }

    #[test]
    fn prefers_shortcut_over_direct() {
        // A-C direct is 10, via B is 2 + 3
        let g = graph(
            &[("A", 1), ("B", 1), ("C", 1)],
            &[("A", "C", 10), ("A", "B", 2), ("B", "C", 3)],
        );
        let d = shortest_distances(&g, &id("A")).unwrap();
        assert_eq!(minutes(&d, &g, "C"), Some(5));
    }

    #[test]
    fn parallel_edges_take_smaller_weight() {
        let g = graph(&[("A", 1), ("B", 1)], &[("A", "B", 9), ("A", "B", 4)]);
        let d = shortest_distances(&g, &id("B")).unwrap();
        assert_eq!(minutes(&d, &g, "A"), Some(4));
    }

    #[test]
    fn disconnected_station_is_unreachable() {
        let g = graph(&[("A", 1), ("B", 1), ("island", 1)], &[("A", "B", 2)]);
        let d = shortest_distances(&g, &id("A")).unwrap();

        assert_eq!(d.get(&g, &id("island")), Some(Distance::Unreachable));
        assert_eq!(d.reachable_count(), 2);
        assert_eq!(d.len(), 3);
        assert_eq!(d.source(), &id("A"));
    }

    #[test]
    fn single_station_graph() {
        let g = graph(&[("solo", 1)], &[]);
        let d = shortest_distances(&g, &id("solo")).unwrap();
        assert_eq!(d.iter().collect::<Vec<_>>(), vec![Distance::Reachable(0)]);
    }

    #[test]
    fn unknown_source_is_not_found() {
        let g = graph(&[("A", 1)], &[]);
        let err = shortest_distances(&g, &id("nowhere")).unwrap_err();
        assert_eq!(err, PathError::NotFound(id("nowhere")));
        assert_eq!(err.to_string(), "source station not found: nowhere");
    }

    #[test]
    fn unknown_id_lookup_is_none() {
        let g = graph(&[("A", 1)], &[]);
        let d = shortest_distances(&g, &id("A")).unwrap();
        assert_eq!(d.get(&g, &id("B")), None);
    }

    #[test]
    fn entries_follow_listing_order() {
        let g = graph(&[("B", 1), ("A", 1)], &[("A", "B", 6)]);
        let d = shortest_distances(&g, &id("A")).unwrap();
        let entries: Vec<_> = d
            .entries(&g)
            .map(|(s, dist)| (s.as_str(), dist))
            .collect();
        assert_eq!(
            entries,
            vec![("B", Distance::Reachable(6)), ("A", Distance::Reachable(0))]
        );
    }

    #[test]
    fn cancelled_token_stops_both_variants() {
        let g = graph(&[("A", 1), ("B", 1)], &[("A", "B", 1)]);
        let token = CancellationToken::new();
        token.cancel();

        for algorithm in [PathAlgorithm::Dense, PathAlgorithm::Heap] {
            let engine = ShortestPathEngine::new(algorithm).with_cancel(token.clone());
            assert_eq!(
                engine.distances(&g, &id("A")).unwrap_err(),
                PathError::Cancelled
            );
        }
    }

    #[test]
    fn heap_matches_line_example() {
        let g = graph(
            &[("X", 1), ("Y", 1), ("Z", 1)],
            &[("X", "Y", 3), ("Y", "Z", 4)],
        );
        let engine = ShortestPathEngine::new(PathAlgorithm::Heap);
        let d = engine.distances(&g, &id("X")).unwrap();
        assert_eq!(
            d.iter().collect::<Vec<_>>(),
            vec![
                Distance::Reachable(0),
                Distance::Reachable(3),
                Distance::Reachable(7)
            ]
        );
    }

    #[test]
    fn parse_algorithm() {
        assert_eq!("dense".parse::<PathAlgorithm>(), Ok(PathAlgorithm::Dense));
        assert_eq!(" HEAP ".parse::<PathAlgorithm>(), Ok(PathAlgorithm::Heap));
        assert!("astar".parse::<PathAlgorithm>().is_err());
        assert_eq!(PathAlgorithm::default(), PathAlgorithm::Dense);
        assert_eq!(PathAlgorithm::Heap.to_string(), "heap");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::graph::test_support::{id, station};
    use proptest::prelude::*;

    const NAMES: [&str; 10] = ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"];

    /// Random graph: up to 10 stations and 25 edges, possibly disconnected,
    /// with parallel edges and self-loops.
    fn graph_strategy() -> impl Strategy<Value = (GraphStore, Vec<(usize, usize, u32)>)> {
        (1usize..=NAMES.len())
            .prop_flat_map(|n| {
                (
                    Just(n),
                    prop::collection::vec((0..n, 0..n, 1u32..40), 0..25),
                )
            })
            .prop_map(|(n, edges)| {
                let mut g = GraphStore::new();
                for name in &NAMES[..n] {
                    g.add_station(station(name, 1000));
                }
                for (a, b, w) in &edges {
                    g.add_edge(&id(NAMES[*a]), &id(NAMES[*b]), *w).unwrap();
                }
                (g, edges)
            })
    }

    proptest! {
        /// The source is always at distance zero
        #[test]
        fn source_is_zero((g, _) in graph_strategy(), pick in any::<prop::sample::Index>()) {
            let source = pick.index(g.station_count());
            let d = shortest_distances(&g, &id(NAMES[source])).unwrap();
            prop_assert_eq!(d.at(source), Distance::Reachable(0));
        }

        /// No stored edge can shorten a settled distance, in either direction
        #[test]
        fn triangle_inequality((g, edges) in graph_strategy(), pick in any::<prop::sample::Index>()) {
            let source = pick.index(g.station_count());
            let d = shortest_distances(&g, &id(NAMES[source])).unwrap();

            for (u, v, w) in edges {
                if let Some(du) = d.at(u).minutes() {
                    prop_assert!(d.at(v) <= Distance::Reachable(du + w));
                }
                if let Some(dv) = d.at(v).minutes() {
                    prop_assert!(d.at(u) <= Distance::Reachable(dv + w));
                }
            }
        }

        /// Reachability is symmetric on an undirected graph
        #[test]
        fn reachability_symmetric((g, _) in graph_strategy()) {
            let n = g.station_count();
            let maps: Vec<_> = (0..n)
                .map(|i| shortest_distances(&g, &id(NAMES[i])).unwrap())
                .collect();
            for i in 0..n {
                for j in 0..n {
                    prop_assert_eq!(maps[i].at(j), maps[j].at(i));
                }
            }
        }

        /// Dense and heap variants agree exactly
        #[test]
        fn dense_matches_heap((g, _) in graph_strategy(), pick in any::<prop::sample::Index>()) {
            let source = id(NAMES[pick.index(g.station_count())]);
            let dense = ShortestPathEngine::new(PathAlgorithm::Dense).distances(&g, &source).unwrap();
            let heap = ShortestPathEngine::new(PathAlgorithm::Heap).distances(&g, &source).unwrap();
            prop_assert_eq!(dense, heap);
        }
    }
}
