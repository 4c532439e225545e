//! This module provides a struct for representing reversible enzymatic reactions

use derive_builder::Builder;

use crate::network::CompoundId;

/// Represents a reversible enzyme catalyzed reaction between two compounds
///
/// The substrate/product labels fix which side the kinetic constants refer to; the
/// reaction itself can carry flux in either direction.
#[derive(Builder, Debug, Clone)]
pub struct Reaction {
    /// Compound consumed when the reaction runs forward
    pub substrate: CompoundId,
    /// Compound produced when the reaction runs forward
    pub product: CompoundId,
    /// Maximal forward rate
    pub v_plus: f64,
    /// Maximal reverse rate
    pub v_minus: f64,
    /// Michaelis constant on the substrate side
    pub k_s: f64,
    /// Michaelis constant on the product side
    pub k_p: f64,
}

impl Reaction {
    /// Net reaction rate under reversible Michaelis-Menten kinetics
    ///
    /// # Parameters
    /// - `s`: concentration on the substrate side
    /// - `p`: concentration on the product side
    ///
    /// Positive values are net forward flux (substrate consumed), negative values net
    /// reverse flux. The rate saturates as either concentration grows large relative
    /// to its Michaelis constant.
    pub fn rate(&self, s: f64, p: f64) -> f64 {
        let s_sat = s / self.k_s;
        let p_sat = p / self.k_p;
        (self.v_plus * s_sat - self.v_minus * p_sat) / (1.0 + s_sat + p_sat)
    }
}
