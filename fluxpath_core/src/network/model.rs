//! This module provides the Network struct for representing an entire reaction network

use thiserror::Error;

use crate::network::compound::Compound;
use crate::network::reaction::Reaction;
use crate::network::{CompoundId, ReactionId};

/// Represents a metabolic reaction network
///
/// Compounds and reactions are addressed by their insertion position, so ids stay
/// dense and stable for the lifetime of the network. Construction is append-only and
/// validated; a built network never references a missing compound.
#[derive(Debug, Clone, Default)]
pub struct Network {
    /// Compounds in the network, addressed by position
    compounds: Vec<Compound>,
    /// Reactions in the network, addressed by position
    reactions: Vec<Reaction>,
}

impl Network {
    pub fn new_empty() -> Self {
        Network {
            compounds: Vec::new(),
            reactions: Vec::new(),
        }
    }

    /// Add a compound to the network, returning its id
    ///
    /// # Parameters
    /// - compound: Compound to add
    ///
    /// # Examples
    /// ```rust
    /// use fluxpath_core::network::compound::Compound;
    /// use fluxpath_core::network::model::Network;
    /// let mut network = Network::new_empty();
    /// let id = network.add_compound(Compound::new("C00025".to_string())).unwrap();
    /// assert_eq!(id, 0);
    /// ```
    pub fn add_compound(&mut self, compound: Compound) -> Result<CompoundId, NetworkError> {
        if self.compound_id(&compound.name).is_some() {
            return Err(NetworkError::DuplicateCompound(compound.name));
        }
        self.compounds.push(compound);
        Ok(self.compounds.len() - 1)
    }

    /// Add a reaction to the network, returning its id
    ///
    /// Both endpoints must already be part of the network and all four kinetic
    /// parameters must be strictly positive.
    ///
    /// # Parameters
    /// - reaction: Reaction to add
    ///
    /// # Examples
    /// ```rust
    /// use fluxpath_core::network::compound::Compound;
    /// use fluxpath_core::network::model::Network;
    /// use fluxpath_core::network::reaction::ReactionBuilder;
    /// let mut network = Network::new_empty();
    /// let glucose = network.add_compound(Compound::new("C00031".to_string())).unwrap();
    /// let g6p = network.add_compound(Compound::new("C00668".to_string())).unwrap();
    /// let reaction = ReactionBuilder::default()
    ///     .substrate(glucose)
    ///     .product(g6p)
    ///     .v_plus(2.0)
    ///     .v_minus(1.0)
    ///     .k_s(0.4)
    ///     .k_p(0.3)
    ///     .build()
    ///     .unwrap();
    /// network.add_reaction(reaction).unwrap();
    /// ```
    pub fn add_reaction(&mut self, reaction: Reaction) -> Result<ReactionId, NetworkError> {
        if reaction.substrate >= self.compounds.len() {
            return Err(NetworkError::UnknownCompound(reaction.substrate));
        }
        if reaction.product >= self.compounds.len() {
            return Err(NetworkError::UnknownCompound(reaction.product));
        }
        for (name, value) in [
            ("v_plus", reaction.v_plus),
            ("v_minus", reaction.v_minus),
            ("k_s", reaction.k_s),
            ("k_p", reaction.k_p),
        ] {
            if !(value > 0.0) {
                return Err(NetworkError::NonPositiveParameter { name, value });
            }
        }
        self.reactions.push(reaction);
        Ok(self.reactions.len() - 1)
    }

    /// Look up a compound id by name
    ///
    /// Performs a linear scan; None when no compound carries the name.
    pub fn compound_id(&self, name: &str) -> Option<CompoundId> {
        self.compounds.iter().position(|compound| compound.name == name)
    }

    pub fn compounds(&self) -> &[Compound] {
        &self.compounds
    }

    pub fn reactions(&self) -> &[Reaction] {
        &self.reactions
    }

    pub fn compound_count(&self) -> usize {
        self.compounds.len()
    }

    pub fn reaction_count(&self) -> usize {
        self.reactions.len()
    }

    /// Resolve the ordered compound sequence a reaction path travels through
    ///
    /// A path of n reactions visits n + 1 compounds. A single reaction is read in its
    /// stored substrate to product direction; in longer paths every reaction is
    /// oriented so that consecutive reactions join on their shared compound.
    pub fn path_compounds(&self, path: &[ReactionId]) -> Vec<CompoundId> {
        let Some((&first, rest)) = path.split_first() else {
            return Vec::new();
        };
        if rest.is_empty() {
            let reaction = &self.reactions[first];
            return vec![reaction.substrate, reaction.product];
        }
        let mut compounds = Vec::with_capacity(path.len() + 1);
        for pair in path.windows(2) {
            let reaction = &self.reactions[pair[0]];
            let next = &self.reactions[pair[1]];
            // The endpoint shared with the next reaction is the exit of this one.
            let (entry, exit) =
                if reaction.substrate == next.substrate || reaction.substrate == next.product {
                    (reaction.product, reaction.substrate)
                } else {
                    (reaction.substrate, reaction.product)
                };
            if compounds.is_empty() {
                compounds.push(entry);
            }
            compounds.push(exit);
        }
        let last = &self.reactions[path[path.len() - 1]];
        let previous = &self.reactions[path[path.len() - 2]];
        if last.substrate == previous.substrate || last.substrate == previous.product {
            compounds.push(last.product);
        } else {
            compounds.push(last.substrate);
        }
        compounds
    }
}

#[derive(Error, Debug, Clone)]
pub enum NetworkError {
    #[error("compound {0} is already part of the network")]
    DuplicateCompound(String),
    #[error("reaction references compound id {0} which is not in the network")]
    UnknownCompound(CompoundId),
    #[error("kinetic parameter {name} must be strictly positive, got {value}")]
    NonPositiveParameter { name: &'static str, value: f64 },
}
