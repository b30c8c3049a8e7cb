//! Distance maps produced by the shortest-path engine.

use crate::domain::{Minutes, StationId};
use crate::graph::GraphStore;

/// Shortest commute from a source to one station.
///
/// `Reachable` sorts before `Unreachable`, so the derived ordering treats
/// an unreachable station as infinitely far away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance {
    Reachable(Minutes),
    Unreachable,
}

impl Distance {
    /// Returns the distance in minutes, or `None` if unreachable.
    pub fn minutes(self) -> Option<Minutes> {
        match self {
            Distance::Reachable(m) => Some(m),
            Distance::Unreachable => None,
        }
    }

    pub fn is_reachable(self) -> bool {
        matches!(self, Distance::Reachable(_))
    }
}

/// Shortest distances from one source to every station of a graph.
///
/// Entries are positional, aligned with the graph's listing order. A map
/// is only meaningful alongside the graph it was computed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMap {
    source: StationId,
    distances: Vec<Distance>,
}

impl DistanceMap {
    pub(crate) fn new(source: StationId, distances: Vec<Distance>) -> Self {
        Self { source, distances }
    }

    /// The station distances were measured from.
    pub fn source(&self) -> &StationId {
        &self.source
    }

    /// Distance to the station at listing index `index`.
    ///
    /// Out-of-range indices are reported as unreachable.
    pub fn at(&self, index: usize) -> Distance {
        self.distances
            .get(index)
            .copied()
            .unwrap_or(Distance::Unreachable)
    }

    /// Distance to a station by id, or `None` if the graph doesn't know it.
    pub fn get(&self, graph: &GraphStore, id: &StationId) -> Option<Distance> {
        graph.index_of(id).map(|i| self.at(i))
    }

    /// Distances in listing order.
    pub fn iter(&self) -> impl Iterator<Item = Distance> + '_ {
        self.distances.iter().copied()
    }

    /// Pair every station id with its distance, in listing order.
    pub fn entries<'g>(
        &'g self,
        graph: &'g GraphStore,
    ) -> impl Iterator<Item = (&'g StationId, Distance)> + 'g {
        graph
            .list_stations()
            .iter()
            .enumerate()
            .map(|(i, s)| (&s.id, self.at(i)))
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Number of stations reachable from the source, the source included.
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_reachable()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_sorts_last() {
        assert!(Distance::Reachable(u32::MAX) < Distance::Unreachable);
        assert!(Distance::Reachable(3) < Distance::Reachable(4));
        assert_eq!(
            [Distance::Unreachable, Distance::Reachable(2)]
                .iter()
                .min()
                .copied(),
            Some(Distance::Reachable(2))
        );
    }

    #[test]
    fn minutes_accessor() {
        assert_eq!(Distance::Reachable(12).minutes(), Some(12));
        assert_eq!(Distance::Unreachable.minutes(), None);
        assert!(!Distance::Unreachable.is_reachable());
    }

    #[test]
    fn out_of_range_is_unreachable() {
        let map = DistanceMap::new(
            StationId::parse("A").unwrap(),
            vec![Distance::Reachable(0)],
        );
        assert_eq!(map.at(0), Distance::Reachable(0));
        assert_eq!(map.at(5), Distance::Unreachable);
        assert_eq!(map.reachable_count(), 1);
    }
}
