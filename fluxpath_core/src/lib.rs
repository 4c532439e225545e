//! Core rust implementation of fluxpath, a crate for shortest path search and
//! steady state flux analysis over metabolic reaction networks.

pub mod configuration;
pub mod graph;
pub mod io;
pub mod network;
pub mod report;
pub mod simulate;
