//! Module providing the fixed point steady state solver for reaction paths

use thiserror::Error;
use tracing::debug;

use crate::configuration::Configuration;
use crate::network::model::Network;
use crate::network::{CompoundId, Concentrations, ReactionId};

/// Drive a reaction path to its steady state concentrations
///
/// The path is treated as an open system: a constant inflow feeds its first compound,
/// a linear outflow drains its last one, and every interior compound exchanges mass
/// only with its two neighboring reactions. Starting from the given initial snapshot
/// the solver repeats explicit Euler steps until no concentration changes by more
/// than `tolerance` relative to its updated value.
///
/// # Parameters
/// - network: Network the path belongs to
/// - path: reactions to simulate, ordered source side first
/// - initial: initial concentration for every compound on the path; entries for other
///   compounds are ignored and the map is never modified
/// - config: solver constants
///
/// On success the returned map holds exactly the path's compounds, in path order.
pub fn steady_state(
    network: &Network,
    path: &[ReactionId],
    initial: &Concentrations,
    config: &Configuration,
) -> Result<Concentrations, SteadyStateError> {
    if path.is_empty() {
        return Err(SteadyStateError::EmptyPath);
    }
    let compounds = network.path_compounds(path);
    let mut values = Vec::with_capacity(compounds.len());
    for &compound in &compounds {
        let concentration = *initial
            .get(&compound)
            .ok_or(SteadyStateError::MissingConcentration(compound))?;
        values.push(concentration);
    }
    for iteration in 1..=config.max_iterations {
        let updated = euler_step(network, path, &values, config);
        let settled = is_stable(&values, &updated, config.tolerance);
        values = updated;
        if settled {
            debug!(iterations = iteration, "path reached steady state");
            return Ok(compounds.into_iter().zip(values).collect());
        }
    }
    Err(SteadyStateError::DidNotConverge {
        iterations: config.max_iterations,
    })
}

/// One explicit Euler step over the path's concentration vector
///
/// Reaction rates are evaluated from the incoming state only, in path orientation:
/// the upstream compound plays the substrate role regardless of the reaction's stored
/// direction.
fn euler_step(
    network: &Network,
    path: &[ReactionId],
    values: &[f64],
    config: &Configuration,
) -> Vec<f64> {
    let reactions = network.reactions();
    let rates: Vec<f64> = path
        .iter()
        .enumerate()
        .map(|(i, &reaction)| reactions[reaction].rate(values[i], values[i + 1]))
        .collect();
    let last = values.len() - 1;
    values
        .iter()
        .enumerate()
        .map(|(position, &concentration)| {
            let flow = if position == 0 {
                config.inflow_rate * (1.0 - concentration) - rates[0]
            } else if position == last {
                rates[last - 1] - concentration * config.outflow_rate
            } else {
                rates[position - 1] - rates[position]
            };
            let updated = concentration + config.time_step * flow;
            // Concentrations cannot go negative.
            if updated > 0.0 {
                updated
            } else {
                0.0
            }
        })
        .collect()
}

fn is_stable(previous: &[f64], updated: &[f64], tolerance: f64) -> bool {
    previous.iter().zip(updated).all(|(&old, &new)| {
        // A concentration pinned at zero across the step counts as settled; dropping
        // to zero from a positive value does not.
        (old == 0.0 && new == 0.0) || ((new - old) / new).abs() < tolerance
    })
}

#[derive(Error, Debug, Clone)]
pub enum SteadyStateError {
    #[error("cannot simulate an empty reaction path")]
    EmptyPath,
    #[error("no initial concentration for compound {0}")]
    MissingConcentration(CompoundId),
    #[error("no steady state within {iterations} iterations")]
    DidNotConverge { iterations: usize },
}
