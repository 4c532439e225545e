//! Module providing graph construction and shortest path search over a network.

pub mod adjacency;
pub mod paths;
pub mod traversal;

use crate::network::ReactionId;

/// An ordered sequence of reactions joining two compounds, source side first
pub type Path = Vec<ReactionId>;
