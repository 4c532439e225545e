//! Module providing multi parent breadth first traversal of a network graph

use std::collections::VecDeque;

use crate::graph::adjacency::AdjacencyGraph;
use crate::network::CompoundId;

/// Breadth first traversal of an adjacency graph from a fixed start compound
///
/// Records, for every compound, its shortest distance from the start and every
/// immediate predecessor realizing that distance, so that all shortest paths stay
/// recoverable afterwards. The start compound itself has distance zero and no
/// parents; unreached compounds have no distance.
#[derive(Debug, Clone)]
pub struct Traversal {
    start: CompoundId,
    distances: Vec<Option<usize>>,
    parents: Vec<Vec<CompoundId>>,
}

impl Traversal {
    /// Run a breadth first search over the graph
    ///
    /// Each compound is enqueued exactly once, on first discovery. A neighbor reached
    /// again at the same distance gains an extra parent; a longer route is ignored.
    pub fn breadth_first(graph: &AdjacencyGraph, start: CompoundId) -> Self {
        let mut distances: Vec<Option<usize>> = vec![None; graph.node_count()];
        let mut parents: Vec<Vec<CompoundId>> = vec![Vec::new(); graph.node_count()];
        let mut queue = VecDeque::new();
        distances[start] = Some(0);
        queue.push_back(start);
        while let Some(current) = queue.pop_front() {
            let Some(current_distance) = distances[current] else {
                continue;
            };
            let candidate = current_distance + 1;
            for (neighbor, _) in graph.neighbors(current) {
                match distances[neighbor] {
                    Some(existing) if candidate > existing => {}
                    Some(existing) if candidate == existing => {
                        parents[neighbor].push(current);
                    }
                    _ => {
                        distances[neighbor] = Some(candidate);
                        parents[neighbor] = vec![current];
                        queue.push_back(neighbor);
                    }
                }
            }
        }
        Traversal {
            start,
            distances,
            parents,
        }
    }

    pub fn start(&self) -> CompoundId {
        self.start
    }

    pub fn node_count(&self) -> usize {
        self.distances.len()
    }

    /// Shortest distance from the start, None while unreached
    pub fn distance(&self, compound: CompoundId) -> Option<usize> {
        self.distances[compound]
    }

    /// All predecessors of a compound at shortest distance
    pub fn parents(&self, compound: CompoundId) -> &[CompoundId] {
        &self.parents[compound]
    }

    pub fn is_reached(&self, compound: CompoundId) -> bool {
        self.distances[compound].is_some()
    }
}
