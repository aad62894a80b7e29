//! The parameter store: one nullable slot per lens variable.
//!
//! A [`Prescription`] holds the known values of a single lens instance.
//! Anything not supplied starts unknown and is filled in by the resolution
//! engine. There is no deletion: resolution only completes missing values.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::variable::{UnknownVariable, Variable};

/// Known and unknown values for one lens, keyed by the fixed variable set.
///
/// Fields deserialise under their canonical names (`D1`, `nL`, `CT`, ...);
/// unknown keys in a job file are rejected rather than silently ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Prescription {
    /// Refractive power of the first surface.
    #[serde(rename = "D1", default, skip_serializing_if = "Option::is_none")]
    pub d1: Option<f64>,
    /// Refractive power of the second surface.
    #[serde(rename = "D2", default, skip_serializing_if = "Option::is_none")]
    pub d2: Option<f64>,
    /// Total optical power.
    #[serde(rename = "D", default, skip_serializing_if = "Option::is_none")]
    pub d: Option<f64>,
    /// Refractive index before the lens.
    #[serde(rename = "n1", default, skip_serializing_if = "Option::is_none")]
    pub n1: Option<f64>,
    /// Refractive index of the lens material.
    #[serde(rename = "nL", default, skip_serializing_if = "Option::is_none")]
    pub nl: Option<f64>,
    /// Refractive index after the lens.
    #[serde(rename = "n2", default, skip_serializing_if = "Option::is_none")]
    pub n2: Option<f64>,
    /// Radius of curvature of the first surface.
    #[serde(rename = "r1", default, skip_serializing_if = "Option::is_none")]
    pub r1: Option<f64>,
    /// Radius of curvature of the second surface.
    #[serde(rename = "r2", default, skip_serializing_if = "Option::is_none")]
    pub r2: Option<f64>,
    /// Centre thickness along the optical axis.
    #[serde(rename = "CT", default, skip_serializing_if = "Option::is_none")]
    pub ct: Option<f64>,
    /// Principal-plane offset from the first surface.
    #[serde(rename = "P1", default, skip_serializing_if = "Option::is_none")]
    pub p1: Option<f64>,
    /// Principal-plane offset from the second surface.
    #[serde(rename = "P2", default, skip_serializing_if = "Option::is_none")]
    pub p2: Option<f64>,
    /// Front focal length from the principal plane.
    #[serde(rename = "f1", default, skip_serializing_if = "Option::is_none")]
    pub f1: Option<f64>,
    /// Back focal length from the principal plane.
    #[serde(rename = "f2", default, skip_serializing_if = "Option::is_none")]
    pub f2: Option<f64>,
    /// Effective focal length.
    #[serde(rename = "EFL", default, skip_serializing_if = "Option::is_none")]
    pub efl: Option<f64>,
    /// Front focal length from the first surface.
    #[serde(rename = "FFL", default, skip_serializing_if = "Option::is_none")]
    pub ffl: Option<f64>,
    /// Back focal length from the second surface.
    #[serde(rename = "BFL", default, skip_serializing_if = "Option::is_none")]
    pub bfl: Option<f64>,
    /// Nodal point separation.
    #[serde(rename = "NPS", default, skip_serializing_if = "Option::is_none")]
    pub nps: Option<f64>,
}

impl Prescription {
    /// The current value of a variable, or `None` while it is unknown.
    pub fn get(&self, variable: Variable) -> Option<f64> {
        match variable {
            Variable::D1 => self.d1,
            Variable::D2 => self.d2,
            Variable::D => self.d,
            Variable::N1 => self.n1,
            Variable::NL => self.nl,
            Variable::N2 => self.n2,
            Variable::R1 => self.r1,
            Variable::R2 => self.r2,
            Variable::CT => self.ct,
            Variable::P1 => self.p1,
            Variable::P2 => self.p2,
            Variable::F1 => self.f1,
            Variable::F2 => self.f2,
            Variable::EFL => self.efl,
            Variable::FFL => self.ffl,
            Variable::BFL => self.bfl,
            Variable::NPS => self.nps,
        }
    }

    /// Store a value under a variable, replacing any previous value.
    pub fn set(&mut self, variable: Variable, value: f64) {
        *self.slot_mut(variable) = Some(value);
    }

    /// String-keyed read for the text boundary.
    pub fn value_of(&self, name: &str) -> Result<Option<f64>, UnknownVariable> {
        Ok(self.get(name.parse()?))
    }

    /// String-keyed write for the text boundary (CLI `--set` overrides).
    pub fn assign(&mut self, name: &str, value: f64) -> Result<(), UnknownVariable> {
        self.set(name.parse()?, value);
        Ok(())
    }

    /// All currently known values, in canonical order.
    pub fn known(&self) -> BTreeMap<Variable, f64> {
        Variable::ALL
            .iter()
            .filter_map(|&variable| self.get(variable).map(|value| (variable, value)))
            .collect()
    }

    /// All currently unknown variables, in canonical order.
    pub fn missing(&self) -> BTreeSet<Variable> {
        Variable::ALL
            .iter()
            .copied()
            .filter(|&variable| self.get(variable).is_none())
            .collect()
    }

    /// Whether every variable has a value.
    pub fn is_complete(&self) -> bool {
        Variable::ALL.iter().all(|&variable| self.get(variable).is_some())
    }

    fn slot_mut(&mut self, variable: Variable) -> &mut Option<f64> {
        match variable {
            Variable::D1 => &mut self.d1,
            Variable::D2 => &mut self.d2,
            Variable::D => &mut self.d,
            Variable::N1 => &mut self.n1,
            Variable::NL => &mut self.nl,
            Variable::N2 => &mut self.n2,
            Variable::R1 => &mut self.r1,
            Variable::R2 => &mut self.r2,
            Variable::CT => &mut self.ct,
            Variable::P1 => &mut self.p1,
            Variable::P2 => &mut self.p2,
            Variable::F1 => &mut self.f1,
            Variable::F2 => &mut self.f2,
            Variable::EFL => &mut self.efl,
            Variable::FFL => &mut self.ffl,
            Variable::BFL => &mut self.bfl,
            Variable::NPS => &mut self.nps,
        }
    }
}
