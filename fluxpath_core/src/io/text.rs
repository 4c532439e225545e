//! Module providing the line oriented text format for networks and concentrations

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::warn;

use crate::network::compound::Compound;
use crate::network::model::{Network, NetworkError};
use crate::network::reaction::{ReactionBuilder, ReactionBuilderError};
use crate::network::{CompoundId, Concentrations};

/// Read a network description file
///
/// The file opens with one compound name per line. A line starting with `-`
/// separates the compound section from the reaction section, where every record is
/// six consecutive lines: substrate name, product name, v_plus, v_minus, k_s and
/// k_p. Blank lines and lines starting with `#` or `-` between records are ignored.
pub fn read_network<P: AsRef<Path>>(path: P) -> Result<Network, TextError> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) => return Err(TextError::UnableToRead(format!("{:?}", err))),
    };
    parse_network(&data)
}

/// Parse a network description from a string
pub fn parse_network(input: &str) -> Result<Network, TextError> {
    let mut network = Network::new_empty();
    let mut lines = input.lines();
    for line in lines.by_ref() {
        if line.starts_with('-') {
            break;
        }
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        network.add_compound(Compound::new(line.trim().to_string()))?;
    }
    while let Some(line) = lines.next() {
        if line.is_empty() || line.starts_with('#') || line.starts_with('-') {
            continue;
        }
        // A record is six consecutive lines with no comments in between.
        let substrate = resolve(&network, line.trim())?;
        let product = resolve(&network, record_line(&mut lines, "product")?.trim())?;
        let v_plus = parse_value(record_line(&mut lines, "v_plus")?, "v_plus")?;
        let v_minus = parse_value(record_line(&mut lines, "v_minus")?, "v_minus")?;
        let k_s = parse_value(record_line(&mut lines, "k_s")?, "k_s")?;
        let k_p = parse_value(record_line(&mut lines, "k_p")?, "k_p")?;
        let reaction = ReactionBuilder::default()
            .substrate(substrate)
            .product(product)
            .v_plus(v_plus)
            .v_minus(v_minus)
            .k_s(k_s)
            .k_p(k_p)
            .build()?;
        network.add_reaction(reaction)?;
    }
    Ok(network)
}

/// Read an initial concentrations file against an existing network
///
/// Every line of the form `[NAME]=value` assigns a concentration. Lines without `=`
/// are skipped; an entry naming an unknown compound logs a warning and is skipped; a
/// malformed value is an error.
pub fn read_concentrations<P: AsRef<Path>>(
    network: &Network,
    path: P,
) -> Result<Concentrations, TextError> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) => return Err(TextError::UnableToRead(format!("{:?}", err))),
    };
    parse_concentrations(network, &data)
}

/// Parse initial concentrations from a string
pub fn parse_concentrations(
    network: &Network,
    input: &str,
) -> Result<Concentrations, TextError> {
    let mut concentrations = Concentrations::new();
    for line in input.lines() {
        let Some(equals) = line.find('=') else {
            continue;
        };
        let value = parse_value(&line[equals + 1..], "concentration")?;
        let raw = line[..equals].trim();
        let name = raw.strip_prefix('[').and_then(|name| name.strip_suffix(']'));
        match name.and_then(|name| network.compound_id(name)) {
            Some(id) => {
                concentrations.insert(id, value);
            }
            None => warn!(entry = raw, "ignoring concentration for unknown compound"),
        }
    }
    Ok(concentrations)
}

fn record_line<'a>(
    lines: &mut std::str::Lines<'a>,
    what: &'static str,
) -> Result<&'a str, TextError> {
    lines.next().ok_or(TextError::TruncatedRecord(what))
}

fn resolve(network: &Network, name: &str) -> Result<CompoundId, TextError> {
    network
        .compound_id(name)
        .ok_or_else(|| TextError::UnknownCompound(name.to_string()))
}

fn parse_value(line: &str, what: &'static str) -> Result<f64, TextError> {
    line.trim().parse().map_err(|_| TextError::InvalidNumber {
        what,
        value: line.trim().to_string(),
    })
}

#[derive(Error, Debug)]
pub enum TextError {
    #[error("Unable to read file due to {0}")]
    UnableToRead(String),
    #[error("unknown compound {0}")]
    UnknownCompound(String),
    #[error("invalid value for {what}: {value}")]
    InvalidNumber { what: &'static str, value: String },
    #[error("reaction record ends before its {0} line")]
    TruncatedRecord(&'static str),
    #[error("invalid network structure")]
    Network(#[from] NetworkError),
    #[error("Unable to build reaction")]
    UnableToBuildReaction(#[from] ReactionBuilderError),
}
