//! Module providing JSON IO for fluxpath networks
use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::network::compound::Compound;
use crate::network::model::{Network, NetworkError};
use crate::network::reaction::{ReactionBuilder, ReactionBuilderError};
use crate::network::Concentrations;

// region JSON Network
/// Represents a JSON serialized network, used for reading and writing networks in
/// json format. Reactions reference compounds by name; conversion resolves the names
/// into dense ids.
#[derive(Serialize, Deserialize)]
struct JsonNetwork {
    compounds: Vec<String>,
    reactions: Vec<JsonReaction>,
}

#[derive(Serialize, Deserialize)]
struct JsonReaction {
    substrate: String,
    product: String,
    v_plus: f64,
    v_minus: f64,
    k_s: f64,
    k_p: f64,
}
// endregion JSON Network

// region Conversions
impl Network {
    pub fn read_json<P: AsRef<Path>>(path: P) -> Result<Network, JsonError> {
        let network_str = match fs::read_to_string(path) {
            Ok(data) => data,
            Err(err) => return Err(JsonError::UnableToRead(format!("{:?}", err))),
        };
        let json_network = match serde_json::from_str::<JsonNetwork>(&network_str) {
            Ok(network) => network,
            Err(err) => return Err(JsonError::UnableToParse(format!("{:?}", err))),
        };
        Network::from_json(json_network)
    }

    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<(), JsonError> {
        let json_network = self.to_json();
        let network_string = serde_json::to_string(&json_network)?;
        fs::write(path, network_string)?;
        Ok(())
    }

    fn from_json(json_network: JsonNetwork) -> Result<Network, JsonError> {
        let mut network = Network::new_empty();
        for name in json_network.compounds {
            network.add_compound(Compound::new(name))?;
        }
        for rxn in json_network.reactions {
            let substrate = network
                .compound_id(&rxn.substrate)
                .ok_or_else(|| JsonError::UnknownCompound(rxn.substrate.clone()))?;
            let product = network
                .compound_id(&rxn.product)
                .ok_or_else(|| JsonError::UnknownCompound(rxn.product.clone()))?;
            let new_reaction = ReactionBuilder::default()
                .substrate(substrate)
                .product(product)
                .v_plus(rxn.v_plus)
                .v_minus(rxn.v_minus)
                .k_s(rxn.k_s)
                .k_p(rxn.k_p)
                .build()?;
            network.add_reaction(new_reaction)?;
        }
        Ok(network)
    }

    fn to_json(&self) -> JsonNetwork {
        let compounds: Vec<String> = self
            .compounds()
            .iter()
            .map(|compound| compound.name.clone())
            .collect();
        let reactions: Vec<JsonReaction> = self
            .reactions()
            .iter()
            .map(|reaction| JsonReaction {
                substrate: self.compounds()[reaction.substrate].name.clone(),
                product: self.compounds()[reaction.product].name.clone(),
                v_plus: reaction.v_plus,
                v_minus: reaction.v_minus,
                k_s: reaction.k_s,
                k_p: reaction.k_p,
            })
            .collect();
        JsonNetwork {
            compounds,
            reactions,
        }
    }
}

/// Read a `{name: value}` concentration object against an existing network
///
/// Unknown compound names log a warning and are skipped, matching the text format.
pub fn read_concentrations_json<P: AsRef<Path>>(
    network: &Network,
    path: P,
) -> Result<Concentrations, JsonError> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) => return Err(JsonError::UnableToRead(format!("{:?}", err))),
    };
    let entries: IndexMap<String, f64> = serde_json::from_str(&data)?;
    Ok(resolve_concentrations(network, entries))
}

fn resolve_concentrations(network: &Network, entries: IndexMap<String, f64>) -> Concentrations {
    let mut concentrations = Concentrations::new();
    for (name, value) in entries {
        match network.compound_id(&name) {
            Some(id) => {
                concentrations.insert(id, value);
            }
            None => warn!(compound = %name, "ignoring concentration for unknown compound"),
        }
    }
    concentrations
}
// endregion Conversions

#[derive(Error, Debug)]
pub enum JsonError {
    #[error("Unable to read file due to {0}")]
    UnableToRead(String),
    #[error("Unable to parse json due to {0}")]
    UnableToParse(String),
    #[error("unknown compound {0} referenced by a reaction")]
    UnknownCompound(String),
    #[error("Unable to build reaction")]
    UnableToBuildReaction(#[from] ReactionBuilderError),
    #[error("invalid network structure")]
    InvalidNetwork(#[from] NetworkError),
    #[error("Serde json parse error")]
    SerdeJsonParseError(#[from] serde_json::Error),
    #[error("Unable to write to file")]
    UnableToWrite(#[from] std::io::Error),
}

#[cfg(test)]
mod json_tests {
    use super::*;

    const TWO_STEP: &str = r#"{
"compounds":["C00031","C00668","C05345"],
"reactions":[
{"substrate":"C00031","product":"C00668","v_plus":2.0,"v_minus":1.0,"k_s":0.4,"k_p":0.3},
{"substrate":"C00668","product":"C05345","v_plus":1.5,"v_minus":0.5,"k_s":0.6,"k_p":0.5}
]
}"#;

    #[test]
    fn json_reaction() {
        let data = r#"{
"substrate":"C00031",
"product":"C00668",
"v_plus":2.0,
"v_minus":1.0,
"k_s":0.4,
"k_p":0.3
}"#;
        let reaction: JsonReaction = serde_json::from_str(data).unwrap();
        assert_eq!(reaction.substrate, "C00031");
        assert_eq!(reaction.product, "C00668");
        assert!((reaction.v_plus - 2.0).abs() < 1e-25);
        assert!((reaction.v_minus - 1.0).abs() < 1e-25);
        assert!((reaction.k_s - 0.4).abs() < 1e-25);
        assert!((reaction.k_p - 0.3).abs() < 1e-25);
    }

    #[test]
    fn json_conversion_resolves_names() {
        let json_network: JsonNetwork = serde_json::from_str(TWO_STEP).unwrap();
        let network = Network::from_json(json_network).unwrap();
        assert_eq!(network.compound_count(), 3);
        assert_eq!(network.reaction_count(), 2);
        let reaction = &network.reactions()[1];
        assert_eq!(reaction.substrate, 1);
        assert_eq!(reaction.product, 2);
        assert!((reaction.v_plus - 1.5).abs() < 1e-25);
    }

    #[test]
    fn unknown_reaction_compound_is_fatal() {
        let data = r#"{
"compounds":["C00031"],
"reactions":[
{"substrate":"C00031","product":"C00668","v_plus":2.0,"v_minus":1.0,"k_s":0.4,"k_p":0.3}
]
}"#;
        let json_network: JsonNetwork = serde_json::from_str(data).unwrap();
        let err = Network::from_json(json_network).unwrap_err();
        assert!(matches!(err, JsonError::UnknownCompound(name) if name == "C00668"));
    }

    #[test]
    fn conversion_round_trip() {
        let json_network: JsonNetwork = serde_json::from_str(TWO_STEP).unwrap();
        let network = Network::from_json(json_network).unwrap();
        let serialized = serde_json::to_string(&network.to_json()).unwrap();
        let reparsed: JsonNetwork = serde_json::from_str(&serialized).unwrap();
        let network_again = Network::from_json(reparsed).unwrap();
        assert_eq!(network_again.compound_count(), network.compound_count());
        assert_eq!(network_again.reaction_count(), network.reaction_count());
        assert_eq!(network_again.compound_id("C05345"), Some(2));
        let reaction = &network_again.reactions()[0];
        assert_eq!(reaction.substrate, 0);
        assert_eq!(reaction.product, 1);
        assert!((reaction.k_p - 0.3).abs() < 1e-25);
    }

    #[test]
    fn concentration_object_skips_unknown_names() {
        let json_network: JsonNetwork = serde_json::from_str(TWO_STEP).unwrap();
        let network = Network::from_json(json_network).unwrap();
        let entries: IndexMap<String, f64> =
            serde_json::from_str(r#"{"C00031":0.5,"C99999":0.25,"C00668":0.75}"#).unwrap();
        let concentrations = resolve_concentrations(&network, entries);
        assert_eq!(concentrations.len(), 2);
        assert!((concentrations[&0] - 0.5).abs() < 1e-25);
        assert!((concentrations[&1] - 0.75).abs() < 1e-25);
    }
}
