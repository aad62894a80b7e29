//! Fixed-order text rendering of a prescription.
//!
//! One `name: value` line per variable, in canonical report order, with
//! `unknown` for absent values. Meant for inspection and debugging, not
//! machine parsing (the CLI's JSON output serves that).

use std::fmt;

use crate::prescription::Prescription;
use crate::variable::Variable;

/// Render all seventeen variables, one per line, without a trailing
/// newline.
pub fn render(prescription: &Prescription) -> String {
    Variable::ALL
        .iter()
        .map(|&variable| match prescription.get(variable) {
            Some(value) => format!("{}: {}", variable.name(), value),
            None => format!("{}: unknown", variable.name()),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

impl fmt::Display for Prescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}
