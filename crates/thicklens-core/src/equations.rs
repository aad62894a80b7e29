//! The fixed catalogue of thick-lens relations.
//!
//! Eleven relations tie the seventeen lens variables together. The
//! catalogue is a `static` table shared read-only by every lens instance;
//! the resolution engine only ever manipulates worklists of borrows into
//! it, never the table itself.
//!
//! Every relation is linear-fractional in each variable it references, so
//! each carries a hand-written closed-form isolation of every one of its
//! variables. The isolations are generic over [`Scalar`], which lets the
//! numeric substitution pass (`f64`) and the symbolic simultaneous fallback
//! (rational functions of the pivot unknown) share one table.

use std::collections::BTreeSet;

use crate::algebra::Scalar;
use crate::variable::Variable;

/// Identifies one relation of the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Relation {
    SurfacePower1,
    SurfacePower2,
    TotalPower,
    PrincipalPlane1,
    PrincipalPlane2,
    EffectiveFocal,
    FrontFocal,
    BackFocal,
    BackFocalDistance,
    FrontFocalDistance,
    NodalSeparation,
}

/// One immutable relation over a subset of the lens variables.
#[derive(Debug)]
pub struct Equation {
    relation: Relation,
    /// Human-readable form, shown in logs and error messages.
    pub label: &'static str,
    variables: &'static [Variable],
}

/// The complete, immutable equation set.
pub static EQUATIONS: [Equation; 11] = [
    Equation {
        relation: Relation::SurfacePower1,
        label: "D1 = (nL - n1)/r1",
        variables: &[Variable::D1, Variable::NL, Variable::N1, Variable::R1],
    },
    Equation {
        relation: Relation::SurfacePower2,
        label: "D2 = (n2 - nL)/r2",
        variables: &[Variable::D2, Variable::N2, Variable::NL, Variable::R2],
    },
    Equation {
        relation: Relation::TotalPower,
        label: "D = D1 + D2 - D1*D2*CT/nL",
        variables: &[
            Variable::D,
            Variable::D1,
            Variable::D2,
            Variable::CT,
            Variable::NL,
        ],
    },
    Equation {
        relation: Relation::PrincipalPlane1,
        label: "P1 = (D2/D)*(n1/nL)*CT",
        variables: &[
            Variable::P1,
            Variable::D2,
            Variable::D,
            Variable::N1,
            Variable::NL,
            Variable::CT,
        ],
    },
    Equation {
        relation: Relation::PrincipalPlane2,
        label: "P2 = -(D1/D)*(n2/nL)*CT",
        variables: &[
            Variable::P2,
            Variable::D1,
            Variable::D,
            Variable::N2,
            Variable::NL,
            Variable::CT,
        ],
    },
    Equation {
        relation: Relation::EffectiveFocal,
        label: "EFL = 1/D",
        variables: &[Variable::EFL, Variable::D],
    },
    Equation {
        relation: Relation::FrontFocal,
        label: "f1 = -n1*EFL",
        variables: &[Variable::F1, Variable::N1, Variable::EFL],
    },
    Equation {
        relation: Relation::BackFocal,
        label: "f2 = n2*EFL",
        variables: &[Variable::F2, Variable::N2, Variable::EFL],
    },
    Equation {
        relation: Relation::BackFocalDistance,
        label: "BFL = f2 + P2",
        variables: &[Variable::BFL, Variable::F2, Variable::P2],
    },
    Equation {
        relation: Relation::FrontFocalDistance,
        label: "FFL = f1 + P1",
        variables: &[Variable::FFL, Variable::F1, Variable::P1],
    },
    Equation {
        relation: Relation::NodalSeparation,
        label: "NPS = f2 + f1",
        variables: &[Variable::NPS, Variable::F2, Variable::F1],
    },
];

impl Equation {
    /// The variables this relation references.
    pub fn variables(&self) -> &[Variable] {
        self.variables
    }

    /// The referenced variables that are still in `missing`, in reference
    /// order.
    pub fn unknowns(&self, missing: &BTreeSet<Variable>) -> Vec<Variable> {
        self.variables
            .iter()
            .copied()
            .filter(|variable| missing.contains(variable))
            .collect()
    }

    /// Left-hand side minus right-hand side, with every referenced variable
    /// supplied by `value`. Zero for a consistent assignment.
    pub fn residual<T: Scalar>(&self, value: &impl Fn(Variable) -> T) -> T {
        use Variable as V;
        let v = value;
        match self.relation {
            Relation::SurfacePower1 => v(V::D1) - (v(V::NL) - v(V::N1)) / v(V::R1),
            Relation::SurfacePower2 => v(V::D2) - (v(V::N2) - v(V::NL)) / v(V::R2),
            Relation::TotalPower => {
                v(V::D) - (v(V::D1) + v(V::D2) - v(V::D1) * v(V::D2) * v(V::CT) / v(V::NL))
            }
            Relation::PrincipalPlane1 => {
                v(V::P1) - v(V::D2) * v(V::N1) * v(V::CT) / (v(V::D) * v(V::NL))
            }
            Relation::PrincipalPlane2 => {
                v(V::P2) + v(V::D1) * v(V::N2) * v(V::CT) / (v(V::D) * v(V::NL))
            }
            Relation::EffectiveFocal => v(V::EFL) - T::from_f64(1.0) / v(V::D),
            Relation::FrontFocal => v(V::F1) + v(V::N1) * v(V::EFL),
            Relation::BackFocal => v(V::F2) - v(V::N2) * v(V::EFL),
            Relation::BackFocalDistance => v(V::BFL) - (v(V::F2) + v(V::P2)),
            Relation::FrontFocalDistance => v(V::FFL) - (v(V::F1) + v(V::P1)),
            Relation::NodalSeparation => v(V::NPS) - (v(V::F2) + v(V::F1)),
        }
    }

    /// Isolate `target` in this relation, with every other referenced
    /// variable supplied by `value`.
    ///
    /// # Panics
    ///
    /// Panics if `target` does not appear in this relation; the engine only
    /// calls this for a member of [`Equation::variables`].
    pub fn solve_for<T: Scalar>(&self, target: Variable, value: &impl Fn(Variable) -> T) -> T {
        use Variable as V;
        let v = value;
        match (self.relation, target) {
            // D1 = (nL - n1)/r1
            (Relation::SurfacePower1, V::D1) => (v(V::NL) - v(V::N1)) / v(V::R1),
            (Relation::SurfacePower1, V::NL) => v(V::N1) + v(V::D1) * v(V::R1),
            (Relation::SurfacePower1, V::N1) => v(V::NL) - v(V::D1) * v(V::R1),
            (Relation::SurfacePower1, V::R1) => (v(V::NL) - v(V::N1)) / v(V::D1),

            // D2 = (n2 - nL)/r2
            (Relation::SurfacePower2, V::D2) => (v(V::N2) - v(V::NL)) / v(V::R2),
            (Relation::SurfacePower2, V::N2) => v(V::NL) + v(V::D2) * v(V::R2),
            (Relation::SurfacePower2, V::NL) => v(V::N2) - v(V::D2) * v(V::R2),
            (Relation::SurfacePower2, V::R2) => (v(V::N2) - v(V::NL)) / v(V::D2),

            // D = D1 + D2 - D1*D2*CT/nL
            (Relation::TotalPower, V::D) => {
                v(V::D1) + v(V::D2) - v(V::D1) * v(V::D2) * v(V::CT) / v(V::NL)
            }
            (Relation::TotalPower, V::D1) => {
                (v(V::D) - v(V::D2)) / (T::from_f64(1.0) - v(V::D2) * v(V::CT) / v(V::NL))
            }
            (Relation::TotalPower, V::D2) => {
                (v(V::D) - v(V::D1)) / (T::from_f64(1.0) - v(V::D1) * v(V::CT) / v(V::NL))
            }
            (Relation::TotalPower, V::CT) => {
                (v(V::D1) + v(V::D2) - v(V::D)) * v(V::NL) / (v(V::D1) * v(V::D2))
            }
            (Relation::TotalPower, V::NL) => {
                v(V::D1) * v(V::D2) * v(V::CT) / (v(V::D1) + v(V::D2) - v(V::D))
            }

            // P1 = (D2/D)*(n1/nL)*CT
            (Relation::PrincipalPlane1, V::P1) => {
                v(V::D2) * v(V::N1) * v(V::CT) / (v(V::D) * v(V::NL))
            }
            (Relation::PrincipalPlane1, V::D2) => {
                v(V::P1) * v(V::D) * v(V::NL) / (v(V::N1) * v(V::CT))
            }
            (Relation::PrincipalPlane1, V::D) => {
                v(V::D2) * v(V::N1) * v(V::CT) / (v(V::P1) * v(V::NL))
            }
            (Relation::PrincipalPlane1, V::N1) => {
                v(V::P1) * v(V::D) * v(V::NL) / (v(V::D2) * v(V::CT))
            }
            (Relation::PrincipalPlane1, V::NL) => {
                v(V::D2) * v(V::N1) * v(V::CT) / (v(V::P1) * v(V::D))
            }
            (Relation::PrincipalPlane1, V::CT) => {
                v(V::P1) * v(V::D) * v(V::NL) / (v(V::D2) * v(V::N1))
            }

            // P2 = -(D1/D)*(n2/nL)*CT
            (Relation::PrincipalPlane2, V::P2) => {
                -(v(V::D1) * v(V::N2) * v(V::CT) / (v(V::D) * v(V::NL)))
            }
            (Relation::PrincipalPlane2, V::D1) => {
                -(v(V::P2) * v(V::D) * v(V::NL) / (v(V::N2) * v(V::CT)))
            }
            (Relation::PrincipalPlane2, V::D) => {
                -(v(V::D1) * v(V::N2) * v(V::CT) / (v(V::P2) * v(V::NL)))
            }
            (Relation::PrincipalPlane2, V::N2) => {
                -(v(V::P2) * v(V::D) * v(V::NL) / (v(V::D1) * v(V::CT)))
            }
            (Relation::PrincipalPlane2, V::NL) => {
                -(v(V::D1) * v(V::N2) * v(V::CT) / (v(V::P2) * v(V::D)))
            }
            (Relation::PrincipalPlane2, V::CT) => {
                -(v(V::P2) * v(V::D) * v(V::NL) / (v(V::D1) * v(V::N2)))
            }

            // EFL = 1/D
            (Relation::EffectiveFocal, V::EFL) => T::from_f64(1.0) / v(V::D),
            (Relation::EffectiveFocal, V::D) => T::from_f64(1.0) / v(V::EFL),

            // f1 = -n1*EFL
            (Relation::FrontFocal, V::F1) => -(v(V::N1) * v(V::EFL)),
            (Relation::FrontFocal, V::N1) => -(v(V::F1) / v(V::EFL)),
            (Relation::FrontFocal, V::EFL) => -(v(V::F1) / v(V::N1)),

            // f2 = n2*EFL
            (Relation::BackFocal, V::F2) => v(V::N2) * v(V::EFL),
            (Relation::BackFocal, V::N2) => v(V::F2) / v(V::EFL),
            (Relation::BackFocal, V::EFL) => v(V::F2) / v(V::N2),

            // BFL = f2 + P2
            (Relation::BackFocalDistance, V::BFL) => v(V::F2) + v(V::P2),
            (Relation::BackFocalDistance, V::F2) => v(V::BFL) - v(V::P2),
            (Relation::BackFocalDistance, V::P2) => v(V::BFL) - v(V::F2),

            // FFL = f1 + P1
            (Relation::FrontFocalDistance, V::FFL) => v(V::F1) + v(V::P1),
            (Relation::FrontFocalDistance, V::F1) => v(V::FFL) - v(V::P1),
            (Relation::FrontFocalDistance, V::P1) => v(V::FFL) - v(V::F1),

            // NPS = f2 + f1
            (Relation::NodalSeparation, V::NPS) => v(V::F2) + v(V::F1),
            (Relation::NodalSeparation, V::F1) => v(V::NPS) - v(V::F2),
            (Relation::NodalSeparation, V::F2) => v(V::NPS) - v(V::F1),

            (_, target) => unreachable!("{} does not appear in `{}`", target, self.label),
        }
    }
}
