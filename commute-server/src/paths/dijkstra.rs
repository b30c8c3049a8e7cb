//! Single-source Dijkstra over the station graph.
//!
//! Two variants produce identical distances:
//!
//! - **Dense**: linear scan for the closest unvisited station, O(V²).
//!   Fine for networks of a few hundred stations and the default.
//! - **Heap**: binary min-heap with lazy deletion, O((V + E) log V).
//!
//! Both settle stations in a fixed order (ties go to the lowest listing
//! index), so repeated runs visit stations identically. Tie order never
//! changes the resulting distances.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tokio_util::sync::CancellationToken;
use tracing::trace;

use crate::domain::Minutes;
use crate::graph::GraphStore;

use super::cancel;
use super::distance::Distance;

/// Dense Dijkstra from listing index `start`.
pub(super) fn dense(
    graph: &GraphStore,
    start: usize,
    cancel: &CancellationToken,
) -> Result<Vec<Distance>, super::PathError> {
    let n = graph.station_count();
    let mut dist = vec![Distance::Unreachable; n];
    let mut visited = vec![false; n];
    dist[start] = Distance::Reachable(0);

    loop {
        cancel::check(cancel)?;

        // (minutes, index) ordering picks the lowest index among equals
        let closest = (0..n)
            .filter(|&i| !visited[i])
            .filter_map(|i| dist[i].minutes().map(|d| (d, i)))
            .min();

        let Some((d, current)) = closest else {
            break;
        };

        visited[current] = true;
        trace!(station = current, minutes = d, "settled");
        relax(graph, current, d, &mut dist);
    }

    Ok(dist)
}

/// Heap-based Dijkstra from listing index `start`.
pub(super) fn heap(
    graph: &GraphStore,
    start: usize,
    cancel: &CancellationToken,
) -> Result<Vec<Distance>, super::PathError> {
    let n = graph.station_count();
    let mut dist = vec![Distance::Unreachable; n];
    dist[start] = Distance::Reachable(0);

    // Reverse turns the max-heap into a min-heap; index breaks ties.
    let mut queue: BinaryHeap<Reverse<(Minutes, usize)>> = BinaryHeap::new();
    queue.push(Reverse((0, start)));

    while let Some(Reverse((d, current))) = queue.pop() {
        // Stale entry
        if Distance::Reachable(d) > dist[current] {
            continue;
        }
        cancel::check(cancel)?;
        trace!(station = current, minutes = d, "settled");

        for adj in graph.adjacent(current) {
            let candidate = d.saturating_add(adj.weight);
            if Distance::Reachable(candidate) < dist[adj.to] {
                dist[adj.to] = Distance::Reachable(candidate);
                queue.push(Reverse((candidate, adj.to)));
            }
        }
    }

    Ok(dist)
}

fn relax(graph: &GraphStore, current: usize, d: Minutes, dist: &mut [Distance]) {
    for adj in graph.adjacent(current) {
        let candidate = Distance::Reachable(d.saturating_add(adj.weight));
        if candidate < dist[adj.to] {
            dist[adj.to] = candidate;
        }
    }
}
