//! Configuration of the steady state solver

use derive_builder::Builder;

/// Tunable constants for steady state simulation
///
/// A Configuration is passed by reference into the solver, so independent analyses can
/// run with different tunings side by side.
#[derive(Builder, Debug, Clone)]
pub struct Configuration {
    /// Inflow coefficient feeding the first compound of a path
    #[builder(default = "5.0")]
    pub inflow_rate: f64,
    /// Outflow coefficient draining the last compound of a path
    #[builder(default = "1.0")]
    pub outflow_rate: f64,
    /// Relative change below which a concentration counts as settled
    #[builder(default = "1e-8")]
    pub tolerance: f64,
    /// Explicit Euler time step
    #[builder(default = "1e-3")]
    pub time_step: f64,
    /// Hard cap on solver iterations
    #[builder(default = "1_000_000")]
    pub max_iterations: usize,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            inflow_rate: 5.0,
            outflow_rate: 1.0,
            tolerance: 1e-8,
            time_step: 1e-3,
            max_iterations: 1_000_000,
        }
    }
}
