//! This module provides the compound struct representing a chemical compound

/// Represents a compound participating in a reaction network
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compound {
    /// Name of the compound (must be unique within a network)
    pub name: String,
}

impl Compound {
    pub fn new(name: String) -> Self {
        Compound { name }
    }
}
