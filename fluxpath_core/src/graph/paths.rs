//! Module providing shortest path recovery over a traversal

use crate::graph::adjacency::AdjacencyGraph;
use crate::graph::traversal::Traversal;
use crate::graph::Path;
use crate::network::{CompoundId, ReactionId};

/// Recover one shortest path between two compounds
///
/// The path lists reaction ids ordered from the source side to the destination side.
/// Returns None when dest is not reachable from source; source == dest yields an
/// empty path. When several shortest paths exist the one following first recorded
/// parents is returned.
pub fn shortest_path(
    graph: &AdjacencyGraph,
    source: CompoundId,
    dest: CompoundId,
) -> Option<Path> {
    let traversal = Traversal::breadth_first(graph, source);
    if !traversal.is_reached(dest) {
        return None;
    }
    let mut reactions = Vec::new();
    let mut current = dest;
    while current != source {
        let &parent = traversal.parents(current).first()?;
        reactions.push(graph.reaction_between(parent, current)?);
        current = parent;
    }
    reactions.reverse();
    Some(reactions)
}

/// Enumerate every shortest path between two compounds
///
/// Walks the predecessor DAG recorded by the traversal depth first with an explicit
/// stack, branching at every compound with several shortest distance parents. Paths
/// come out in parent list order. An unreachable dest yields no paths; source == dest
/// yields a single empty path.
pub fn all_shortest_paths(
    graph: &AdjacencyGraph,
    source: CompoundId,
    dest: CompoundId,
) -> Vec<Path> {
    let traversal = Traversal::breadth_first(graph, source);
    if !traversal.is_reached(dest) {
        return Vec::new();
    }
    let mut paths = Vec::new();
    // Frames walk from dest toward source; chain[i] holds the reaction taken out of
    // stack[i], so the chain is always one element shorter than the stack.
    let mut stack: Vec<(CompoundId, usize)> = vec![(dest, 0)];
    let mut chain: Vec<ReactionId> = Vec::new();
    while let Some(&(compound, branch)) = stack.last() {
        if compound == source {
            paths.push(chain.iter().rev().copied().collect());
            stack.pop();
            chain.pop();
            continue;
        }
        let parents = traversal.parents(compound);
        if branch < parents.len() {
            if let Some(frame) = stack.last_mut() {
                frame.1 += 1;
            }
            let parent = parents[branch];
            if let Some(reaction) = graph.reaction_between(parent, compound) {
                chain.push(reaction);
                stack.push((parent, 0));
            }
        } else {
            stack.pop();
            chain.pop();
        }
    }
    paths
}
