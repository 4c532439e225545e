//! Module providing the data model for reaction networks.

pub mod compound;
pub mod model;
pub mod reaction;

use indexmap::IndexMap;

/// Identifies a compound by its position in the network
pub type CompoundId = usize;

/// Identifies a reaction by its position in the network
pub type ReactionId = usize;

/// Concentration values keyed by compound
pub type Concentrations = IndexMap<CompoundId, f64>;
