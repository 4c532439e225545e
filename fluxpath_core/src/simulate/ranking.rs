//! Module providing flux based ranking of candidate reaction paths

use tracing::debug;

use crate::configuration::Configuration;
use crate::graph::Path;
use crate::network::model::Network;
use crate::network::{CompoundId, Concentrations, ReactionId};
use crate::simulate::steady_state::{steady_state, SteadyStateError};

/// Bottleneck rate of a path under the given concentrations
///
/// The rate of a path is the rate of its slowest reaction. Every reaction is
/// evaluated in path orientation: the upstream compound supplies the substrate
/// concentration, the downstream one the product concentration, independent of the
/// reaction's stored direction.
pub fn path_rate(
    network: &Network,
    path: &[ReactionId],
    concentrations: &Concentrations,
) -> Result<f64, SteadyStateError> {
    if path.is_empty() {
        return Err(SteadyStateError::EmptyPath);
    }
    let compounds = network.path_compounds(path);
    let reactions = network.reactions();
    let mut slowest = f64::INFINITY;
    for (i, &reaction) in path.iter().enumerate() {
        let s = concentration_of(concentrations, compounds[i])?;
        let p = concentration_of(concentrations, compounds[i + 1])?;
        let rate = reactions[reaction].rate(s, p);
        if rate < slowest {
            slowest = rate;
        }
    }
    Ok(slowest)
}

/// Pick the path sustaining the highest steady state flux
///
/// Every candidate is driven to its own steady state from the same initial snapshot
/// and scored by its bottleneck rate; the highest score wins. An empty candidate
/// slice yields Ok(None), and a candidate that fails to converge fails the whole
/// ranking.
pub fn fastest_path<'a>(
    network: &Network,
    paths: &'a [Path],
    initial: &Concentrations,
    config: &Configuration,
) -> Result<Option<&'a Path>, SteadyStateError> {
    let mut best: Option<(&'a Path, f64)> = None;
    for (candidate, path) in paths.iter().enumerate() {
        let settled = steady_state(network, path, initial, config)?;
        let rate = path_rate(network, path, &settled)?;
        debug!(candidate, rate, "ranked candidate path");
        // Ties keep the earliest candidate.
        match best {
            Some((_, best_rate)) if rate <= best_rate => {}
            _ => best = Some((path, rate)),
        }
    }
    Ok(best.map(|(path, _)| path))
}

fn concentration_of(
    concentrations: &Concentrations,
    compound: CompoundId,
) -> Result<f64, SteadyStateError> {
    concentrations
        .get(&compound)
        .copied()
        .ok_or(SteadyStateError::MissingConcentration(compound))
}
