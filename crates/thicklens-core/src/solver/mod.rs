//! The resolution engine.
//!
//! [`resolve`] completes the unknowns of a [`Prescription`] against the
//! equation catalogue. The main pass is a fixed-point iteration: every
//! pending equation with exactly one unknown is solved in closed form and
//! retired, and passes repeat until either nothing is missing or a full
//! pass makes no progress. The latter is a deadlock — every pending
//! equation still couples two or more unknowns — and is handed to the
//! simultaneous fallback in [`simultaneous`].
//!
//! Resolved values are written through to the store eagerly, so a failing
//! fallback leaves everything the substitution pass established in place
//! (partial success the caller must tolerate) while the rest stays unknown.

mod rational;
mod roots;
mod simultaneous;

use thiserror::Error;

use crate::equations::{Equation, EQUATIONS};
use crate::prescription::Prescription;
use crate::variable::Variable;

/// Errors from the resolution engine.
#[derive(Debug, Error)]
pub enum SolveError {
    #[error("Unable to solve for the missing variables: {detail}")]
    Unsolvable { detail: String },

    #[error(
        "Ambiguous solution: {variable} admits {candidates:?}; fix one more value and re-solve"
    )]
    AmbiguousSolution {
        variable: Variable,
        candidates: Vec<f64>,
    },

    #[error("Division by zero while isolating {variable} in `{equation}`")]
    NonFinite {
        equation: &'static str,
        variable: Variable,
    },
}

/// What a successful [`resolve`] call did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Every variable already had a value; the store was not touched.
    AlreadyComplete,
    /// The listed variables were computed and written into the store.
    Resolved { computed: Vec<Variable> },
}

/// Resolve every unknown of `prescription` in place.
///
/// A complete prescription is a no-op reported as
/// [`Outcome::AlreadyComplete`]; supplied values are never checked for
/// mutual consistency.
pub fn resolve(prescription: &mut Prescription) -> Result<Outcome, SolveError> {
    let mut known = prescription.known();
    let mut missing = prescription.missing();

    if missing.is_empty() {
        log::info!("Nothing to compute: every lens variable already has a value");
        return Ok(Outcome::AlreadyComplete);
    }

    let mut pending: Vec<&'static Equation> = EQUATIONS.iter().collect();
    let mut computed = Vec::new();

    while !missing.is_empty() {
        let mut progress = false;
        let mut retained = Vec::with_capacity(pending.len());

        for equation in pending {
            let unknowns = equation.unknowns(&missing);
            match unknowns.as_slice() {
                // All inputs known: nothing further to contribute.
                [] => {}
                &[variable] => {
                    let value: f64 = equation.solve_for(variable, &|v| known[&v]);
                    if !value.is_finite() {
                        return Err(SolveError::NonFinite {
                            equation: equation.label,
                            variable,
                        });
                    }
                    log::debug!("{variable} = {value} via `{}`", equation.label);
                    known.insert(variable, value);
                    missing.remove(&variable);
                    prescription.set(variable, value);
                    computed.push(variable);
                    progress = true;
                }
                _ => retained.push(equation),
            }
        }

        pending = retained;

        if !progress && !missing.is_empty() {
            // Deadlock: hand the remainder to the simultaneous solver.
            for (variable, value) in simultaneous::resolve(&pending, &missing, &known)? {
                prescription.set(variable, value);
                computed.push(variable);
            }
            missing.clear();
        }
    }

    Ok(Outcome::Resolved { computed })
}
