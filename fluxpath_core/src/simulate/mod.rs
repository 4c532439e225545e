//! Module providing steady state simulation and flux based path ranking.

pub mod ranking;
pub mod steady_state;
