//! Module providing plain text renderings of networks and analysis results
//!
//! All functions here are pure string builders; callers decide where the text goes.

use crate::graph::adjacency::AdjacencyGraph;
use crate::graph::traversal::Traversal;
use crate::graph::Path;
use crate::network::model::Network;
use crate::network::{Concentrations, ReactionId};

/// Render a network's compounds and reactions, one per line
pub fn format_network(network: &Network) -> String {
    let mut out = String::new();
    for (id, compound) in network.compounds().iter().enumerate() {
        out.push_str(&format!("compound {}: {}\n", id, compound.name));
    }
    for id in 0..network.reaction_count() {
        out.push_str(&format!("reaction {}: {}\n", id, reaction_endpoints(network, id)));
    }
    out
}

/// Render a network including the kinetic parameters of every reaction
pub fn format_network_verbose(network: &Network) -> String {
    let mut out = String::new();
    for (id, compound) in network.compounds().iter().enumerate() {
        out.push_str(&format!("compound {}: {}\n", id, compound.name));
    }
    for (id, reaction) in network.reactions().iter().enumerate() {
        out.push_str(&format!(
            "reaction {}: {} (v+ {}, v- {}, k_s {}, k_p {})\n",
            id,
            reaction_endpoints(network, id),
            reaction.v_plus,
            reaction.v_minus,
            reaction.k_s,
            reaction.k_p,
        ));
    }
    out
}

/// Render the adjacency view, one compound per line with its neighbors
pub fn format_adjacency(network: &Network, graph: &AdjacencyGraph) -> String {
    let mut out = String::new();
    for id in 0..graph.node_count() {
        let entries: Vec<String> = graph
            .neighbors(id)
            .map(|(neighbor, reaction)| format!("{}(r{})", neighbor, reaction))
            .collect();
        let name = &network.compounds()[id].name;
        if entries.is_empty() {
            out.push_str(&format!("{} {}:\n", id, name));
        } else {
            out.push_str(&format!("{} {}: {}\n", id, name, entries.join(" ")));
        }
    }
    out
}

/// Render a traversal's distances and predecessor lists
pub fn format_traversal(network: &Network, traversal: &Traversal) -> String {
    let mut out = format!("start: {}\n", traversal.start());
    for id in 0..traversal.node_count() {
        let name = &network.compounds()[id].name;
        match traversal.distance(id) {
            Some(distance) => out.push_str(&format!(
                "{} {}: distance {}, parents {:?}\n",
                id,
                name,
                distance,
                traversal.parents(id),
            )),
            None => out.push_str(&format!("{} {}: unreached\n", id, name)),
        }
    }
    out
}

/// Render a path as its reaction ids, space separated
pub fn format_path(path: &[ReactionId]) -> String {
    path.iter()
        .map(|reaction| reaction.to_string())
        .collect::<Vec<String>>()
        .join(" ")
}

/// Render a set of candidate paths, numbered from one
pub fn format_paths(paths: &[Path]) -> String {
    let mut out = String::new();
    for (number, path) in paths.iter().enumerate() {
        out.push_str(&format!("path {}: {}\n", number + 1, format_path(path)));
    }
    out
}

/// Render a path reaction by reaction with compound names
pub fn format_path_details(network: &Network, path: &[ReactionId]) -> String {
    let mut out = String::new();
    for &reaction in path {
        out.push_str(&format!(
            "reaction {}: {}\n",
            reaction,
            reaction_endpoints(network, reaction)
        ));
    }
    out
}

/// Render concentrations in the same bracketed form the text format reads
pub fn format_concentrations(network: &Network, concentrations: &Concentrations) -> String {
    let mut out = String::new();
    for (&compound, &value) in concentrations {
        let name = &network.compounds()[compound].name;
        out.push_str(&format!("[{}] = {}\n", name, value));
    }
    out
}

fn reaction_endpoints(network: &Network, reaction: ReactionId) -> String {
    let reaction = &network.reactions()[reaction];
    format!(
        "{} -> {}",
        network.compounds()[reaction.substrate].name,
        network.compounds()[reaction.product].name,
    )
}

#[cfg(test)]
mod report_tests {
    use super::*;
    use crate::network::compound::Compound;
    use crate::network::reaction::ReactionBuilder;

    fn chain() -> Network {
        let mut network = Network::new_empty();
        for name in ["C0", "C1", "C2"] {
            network.add_compound(Compound::new(name.to_string())).unwrap();
        }
        for (substrate, product, v_plus) in [(0, 1, 2.0), (1, 2, 1.5)] {
            let reaction = ReactionBuilder::default()
                .substrate(substrate)
                .product(product)
                .v_plus(v_plus)
                .v_minus(0.5)
                .k_s(0.5)
                .k_p(0.25)
                .build()
                .unwrap();
            network.add_reaction(reaction).unwrap();
        }
        network
    }

    #[test]
    fn network_rendering() {
        let expected = "\
compound 0: C0
compound 1: C1
compound 2: C2
reaction 0: C0 -> C1
reaction 1: C1 -> C2
";
        assert_eq!(format_network(&chain()), expected);
    }

    #[test]
    fn verbose_network_rendering_includes_kinetics() {
        let out = format_network_verbose(&chain());
        assert!(out.contains("reaction 0: C0 -> C1 (v+ 2, v- 0.5, k_s 0.5, k_p 0.25)\n"));
        assert!(out.contains("reaction 1: C1 -> C2 (v+ 1.5, v- 0.5, k_s 0.5, k_p 0.25)\n"));
    }

    #[test]
    fn adjacency_rendering() {
        let network = chain();
        let graph = AdjacencyGraph::from_network(&network);
        let expected = "\
0 C0: 1(r0)
1 C1: 0(r0) 2(r1)
2 C2: 1(r1)
";
        assert_eq!(format_adjacency(&network, &graph), expected);
    }

    #[test]
    fn traversal_rendering() {
        let network = chain();
        let graph = AdjacencyGraph::from_network(&network);
        let traversal = Traversal::breadth_first(&graph, 0);
        let expected = "\
start: 0
0 C0: distance 0, parents []
1 C1: distance 1, parents [0]
2 C2: distance 2, parents [1]
";
        assert_eq!(format_traversal(&network, &traversal), expected);
    }

    #[test]
    fn path_renderings() {
        assert_eq!(format_path(&[0, 1, 5]), "0 1 5");
        assert_eq!(format_path(&[]), "");
        let paths = vec![vec![0, 1], vec![0, 2]];
        assert_eq!(format_paths(&paths), "path 1: 0 1\npath 2: 0 2\n");
    }

    #[test]
    fn path_details_rendering() {
        let network = chain();
        let expected = "\
reaction 0: C0 -> C1
reaction 1: C1 -> C2
";
        assert_eq!(format_path_details(&network, &[0, 1]), expected);
    }

    #[test]
    fn concentration_rendering() {
        let network = chain();
        let mut concentrations = Concentrations::new();
        concentrations.insert(0, 0.5);
        concentrations.insert(2, 0.25);
        assert_eq!(
            format_concentrations(&network, &concentrations),
            "[C0] = 0.5\n[C2] = 0.25\n"
        );
    }
}
