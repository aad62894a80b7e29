//! Exact simultaneous solve for substitution deadlocks.
//!
//! When every pending equation still has two or more unknowns, no single
//! equation can make progress on its own. The fixed topology of the
//! catalogue keeps this tractable without a computer-algebra system: each
//! relation is linear-fractional in each of its variables, so expressing
//! the deadlocked unknowns in terms of one pivot unknown turns every
//! remaining equation into a rational constraint on that pivot alone.
//!
//! Pivots are tried in canonical variable order. A pivot succeeds when the
//! symbolic re-run of the substitution loop resolves every other unknown
//! and leaves at least one residual constraint; the constraint's numerator
//! polynomial then pins the pivot exactly. Deadlocks that stay coupled in
//! two or more unknowns under every pivot are reported unsolvable.

use std::collections::{BTreeMap, BTreeSet};

use crate::equations::Equation;
use crate::variable::Variable;

use super::rational::Rational;
use super::roots::real_roots;
use super::SolveError;

/// Largest residual (after substituting a candidate pivot value) accepted
/// as zero.
const RESIDUAL_TOLERANCE: f64 = 1e-6;

/// Relative spacing under which two candidate pivot values are the same
/// root.
const DUPLICATE_TOLERANCE: f64 = 1e-9;

/// Solve the deadlocked remainder for all `missing` variables at once.
///
/// Returns the unique full assignment, or fails with
/// [`SolveError::Unsolvable`] / [`SolveError::AmbiguousSolution`].
pub(super) fn resolve(
    pending: &[&'static Equation],
    missing: &BTreeSet<Variable>,
    known: &BTreeMap<Variable, f64>,
) -> Result<Vec<(Variable, f64)>, SolveError> {
    for &pivot in missing {
        log::debug!("simultaneous solve: trying pivot {pivot}");
        if let Some(assignment) = try_pivot(pivot, pending, missing, known)? {
            return Ok(assignment);
        }
    }
    Err(SolveError::Unsolvable {
        detail: "the remaining equations stay coupled in two or more unknowns".to_owned(),
    })
}

/// Attempt a full reduction with `pivot` as the sole indeterminate.
///
/// `Ok(None)` means this pivot cannot express every other unknown; the
/// caller moves on to the next one. Errors are definitive for the whole
/// system, not just this pivot.
fn try_pivot(
    pivot: Variable,
    pending: &[&'static Equation],
    missing: &BTreeSet<Variable>,
    known: &BTreeMap<Variable, f64>,
) -> Result<Option<Vec<(Variable, f64)>>, SolveError> {
    let mut values: BTreeMap<Variable, Rational> = known
        .iter()
        .map(|(&variable, &value)| (variable, Rational::constant(value)))
        .collect();
    values.insert(pivot, Rational::variable());

    let mut unresolved: BTreeSet<Variable> =
        missing.iter().copied().filter(|&v| v != pivot).collect();
    let mut worklist: Vec<&Equation> = pending.to_vec();
    let mut constraints: Vec<&Equation> = Vec::new();

    // The substitution loop again, over rational functions of the pivot.
    // Equations whose variables all become known are kept as constraints
    // instead of being retired: they are what pins the pivot.
    loop {
        let mut progress = false;
        let mut retained = Vec::with_capacity(worklist.len());
        for equation in worklist {
            let unknowns = equation.unknowns(&unresolved);
            match unknowns.as_slice() {
                [] => constraints.push(equation),
                &[variable] => {
                    let expr = equation.solve_for(variable, &|v| values[&v].clone());
                    values.insert(variable, expr);
                    unresolved.remove(&variable);
                    progress = true;
                }
                _ => retained.push(equation),
            }
        }
        worklist = retained;
        if unresolved.is_empty() {
            break;
        }
        if !progress {
            return Ok(None);
        }
    }
    // Equations skipped while their inputs were still symbolic are
    // constraints now that everything is expressed in the pivot.
    constraints.append(&mut worklist);

    if constraints.is_empty() {
        return Err(SolveError::Unsolvable {
            detail: format!("one degree of freedom remains (no equation pins {pivot})"),
        });
    }

    let residuals: Vec<Rational> = constraints
        .iter()
        .map(|equation| equation.residual(&|v| values[&v].clone()))
        .collect();

    let Some(primary) = residuals.iter().find(|r| r.numerator().degree() >= 1) else {
        return Err(SolveError::Unsolvable {
            detail: format!("the residual constraints do not determine {pivot}"),
        });
    };

    let mut solutions: Vec<(f64, Vec<(Variable, f64)>)> = Vec::new();
    'candidate: for root in real_roots(primary.numerator()) {
        for residual in &residuals {
            match residual.eval(root) {
                Some(value) if value.abs() <= RESIDUAL_TOLERANCE => {}
                _ => continue 'candidate,
            }
        }

        let mut assignment = Vec::with_capacity(missing.len());
        for &variable in missing {
            let value = if variable == pivot {
                root
            } else {
                match values[&variable].eval(root) {
                    Some(value) => value,
                    None => continue 'candidate,
                }
            };
            assignment.push((variable, value));
        }

        let duplicate = solutions
            .iter()
            .any(|(seen, _)| (seen - root).abs() <= DUPLICATE_TOLERANCE * (1.0 + root.abs()));
        if !duplicate {
            solutions.push((root, assignment));
        }
    }

    if solutions.len() > 1 {
        return Err(SolveError::AmbiguousSolution {
            variable: pivot,
            candidates: solutions.iter().map(|(root, _)| *root).collect(),
        });
    }
    match solutions.pop() {
        Some((root, assignment)) => {
            log::debug!("simultaneous solve: {pivot} = {root}");
            Ok(Some(assignment))
        }
        None => Err(SolveError::Unsolvable {
            detail: format!("no real value of {pivot} satisfies the remaining equations"),
        }),
    }
}
