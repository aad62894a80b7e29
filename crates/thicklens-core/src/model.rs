//! The user-facing lens model.

use std::fmt;

use crate::prescription::Prescription;
use crate::solver::{self, Outcome, SolveError};

/// One lens instance: a prescription plus the calculate operation.
///
/// Construct it with whatever values are known, then call
/// [`LensModel::calculate`] to fill in the rest. Calculation is
/// idempotent: a second call on a resolved model finds nothing missing and
/// reports [`Outcome::AlreadyComplete`] without touching any value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LensModel {
    pub prescription: Prescription,
}

impl LensModel {
    pub fn new(prescription: Prescription) -> Self {
        LensModel { prescription }
    }

    /// Resolve every unknown in place.
    ///
    /// On [`SolveError::Unsolvable`] and the other failures, values the
    /// substitution pass already established remain written; the rest stay
    /// unknown.
    pub fn calculate(&mut self) -> Result<Outcome, SolveError> {
        solver::resolve(&mut self.prescription)
    }
}

impl fmt::Display for LensModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.prescription, f)
    }
}
