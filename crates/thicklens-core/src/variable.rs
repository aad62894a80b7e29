//! The closed set of lens design variables.
//!
//! The seventeen names below are the entire vocabulary of the calculator:
//! the equation catalogue references no others, and none may be added or
//! renamed at runtime. Declaration order is the canonical report order used
//! by the formatter and by every deterministic iteration in the solver.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A name outside the fixed seventeen-variable set was used at the string
/// boundary (CLI override, job-file key, or `Prescription::assign`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown lens variable: {0}")]
pub struct UnknownVariable(pub String);

/// One of the seventeen quantities of the thick-lens model.
///
/// Typed access through this enum cannot name an invalid variable; only the
/// string boundary ([`Variable::from_str`]) can fail, with
/// [`UnknownVariable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(clippy::upper_case_acronyms)]
pub enum Variable {
    D1,
    D2,
    D,
    N1,
    NL,
    N2,
    R1,
    R2,
    CT,
    P1,
    P2,
    F1,
    F2,
    EFL,
    FFL,
    BFL,
    NPS,
}

impl Variable {
    /// Every variable, in canonical report order.
    pub const ALL: [Variable; 17] = [
        Variable::D1,
        Variable::D2,
        Variable::D,
        Variable::N1,
        Variable::NL,
        Variable::N2,
        Variable::R1,
        Variable::R2,
        Variable::CT,
        Variable::P1,
        Variable::P2,
        Variable::F1,
        Variable::F2,
        Variable::EFL,
        Variable::FFL,
        Variable::BFL,
        Variable::NPS,
    ];

    /// The canonical printed name (also the TOML/JSON key).
    pub fn name(self) -> &'static str {
        match self {
            Variable::D1 => "D1",
            Variable::D2 => "D2",
            Variable::D => "D",
            Variable::N1 => "n1",
            Variable::NL => "nL",
            Variable::N2 => "n2",
            Variable::R1 => "r1",
            Variable::R2 => "r2",
            Variable::CT => "CT",
            Variable::P1 => "P1",
            Variable::P2 => "P2",
            Variable::F1 => "f1",
            Variable::F2 => "f2",
            Variable::EFL => "EFL",
            Variable::FFL => "FFL",
            Variable::BFL => "BFL",
            Variable::NPS => "NPS",
        }
    }

    /// One-line description, as shown by the CLI glossary listing.
    pub fn description(self) -> &'static str {
        match self {
            Variable::D1 => "Refractive power contributed by the first lens surface",
            Variable::D2 => "Refractive power contributed by the second lens surface",
            Variable::D => "Total optical power of the lens (thick-lens formula)",
            Variable::N1 => "Refractive index of the medium before the lens",
            Variable::NL => "Refractive index of the lens material",
            Variable::N2 => "Refractive index of the medium after the lens",
            Variable::R1 => "Radius of curvature of the first lens surface",
            Variable::R2 => "Radius of curvature of the second lens surface",
            Variable::CT => "Centre thickness of the lens along the optical axis",
            Variable::P1 => "Principal-plane offset from the first lens surface",
            Variable::P2 => "Principal-plane offset from the second lens surface",
            Variable::F1 => "Front focal length measured from the principal plane",
            Variable::F2 => "Back focal length measured from the principal plane",
            Variable::EFL => "Effective focal length of the combined system",
            Variable::FFL => "Front focal length measured from the first surface",
            Variable::BFL => "Back focal length measured from the second surface",
            Variable::NPS => "Nodal point separation",
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variable {
    type Err = UnknownVariable;

    /// Names are matched exactly, case-sensitively (`nL`, not `nl`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variable::ALL
            .iter()
            .copied()
            .find(|variable| variable.name() == s)
            .ok_or_else(|| UnknownVariable(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_name_round_trips_through_from_str() {
        for variable in Variable::ALL {
            let parsed: Variable = variable.name().parse().unwrap();
            assert_eq!(parsed, variable);
        }
    }

    #[test]
    fn names_outside_the_fixed_set_are_rejected() {
        assert_eq!(
            "nX".parse::<Variable>(),
            Err(UnknownVariable("nX".to_owned()))
        );
        // Case matters: the catalogue spells it `nL`.
        assert!("nl".parse::<Variable>().is_err());
        assert!("".parse::<Variable>().is_err());
    }
}
