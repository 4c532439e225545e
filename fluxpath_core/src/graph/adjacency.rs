//! Module providing the adjacency view of a reaction network

use indexmap::IndexMap;

use crate::network::model::Network;
use crate::network::{CompoundId, ReactionId};

/// Undirected adjacency view over a reaction network
///
/// Entry a maps every neighboring compound b to the reaction joining a and b, in the
/// order the reactions were added. When several reactions join the same pair of
/// compounds the one added last wins.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph {
    entries: Vec<IndexMap<CompoundId, ReactionId>>,
}

impl AdjacencyGraph {
    /// Build the adjacency view of a network
    ///
    /// Every reaction contributes one entry in each direction, so the view is
    /// symmetric regardless of the stored substrate/product labeling.
    pub fn from_network(network: &Network) -> Self {
        let mut entries = vec![IndexMap::new(); network.compound_count()];
        for (id, reaction) in network.reactions().iter().enumerate() {
            entries[reaction.substrate].insert(reaction.product, id);
            entries[reaction.product].insert(reaction.substrate, id);
        }
        AdjacencyGraph { entries }
    }

    pub fn node_count(&self) -> usize {
        self.entries.len()
    }

    /// Neighbors of a compound in insertion order, paired with the joining reaction
    pub fn neighbors(
        &self,
        compound: CompoundId,
    ) -> impl Iterator<Item = (CompoundId, ReactionId)> + '_ {
        self.entries[compound].iter().map(|(&neighbor, &reaction)| (neighbor, reaction))
    }

    /// The reaction joining two compounds, if any
    pub fn reaction_between(&self, a: CompoundId, b: CompoundId) -> Option<ReactionId> {
        self.entries[a].get(&b).copied()
    }
}

#[cfg(test)]
mod adjacency_tests {
    use std::path::PathBuf;

    use super::*;
    use crate::io::text::read_network;
    use crate::network::compound::Compound;
    use crate::network::reaction::ReactionBuilder;

    fn two_routes() -> Network {
        let data_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("test_data")
            .join("two_routes.txt");
        read_network(data_path).unwrap()
    }

    #[test]
    fn neighbors_follow_reaction_order() {
        let graph = AdjacencyGraph::from_network(&two_routes());
        assert_eq!(graph.node_count(), 6);
        let entries: Vec<_> = graph.neighbors(1).collect();
        assert_eq!(entries, vec![(0, 0), (2, 1), (4, 2)]);
        let entries: Vec<_> = graph.neighbors(5).collect();
        assert_eq!(entries, vec![(4, 3), (2, 5), (3, 6)]);
    }

    #[test]
    fn adjacency_is_symmetric() {
        let graph = AdjacencyGraph::from_network(&two_routes());
        for a in 0..graph.node_count() {
            for (b, reaction) in graph.neighbors(a) {
                assert_eq!(graph.reaction_between(b, a), Some(reaction));
            }
        }
    }

    #[test]
    fn reaction_between_unconnected_compounds_is_none() {
        let graph = AdjacencyGraph::from_network(&two_routes());
        assert_eq!(graph.reaction_between(0, 5), None);
        assert_eq!(graph.reaction_between(0, 1), Some(0));
    }

    #[test]
    fn parallel_reactions_keep_the_last_one() {
        let mut network = Network::new_empty();
        network.add_compound(Compound::new("C0".to_string())).unwrap();
        network.add_compound(Compound::new("C1".to_string())).unwrap();
        for _ in 0..2 {
            let reaction = ReactionBuilder::default()
                .substrate(0)
                .product(1)
                .v_plus(2.0)
                .v_minus(1.0)
                .k_s(0.4)
                .k_p(0.3)
                .build()
                .unwrap();
            network.add_reaction(reaction).unwrap();
        }
        let graph = AdjacencyGraph::from_network(&network);
        assert_eq!(graph.reaction_between(0, 1), Some(1));
        assert_eq!(graph.reaction_between(1, 0), Some(1));
    }
}
