//! Scalar abstraction over the value domain of the equation catalogue.
//!
//! The closed-form isolations in [`crate::equations`] are written once,
//! generically, and evaluated in two domains: plain `f64` during the
//! substitution pass, and univariate rational functions of the pivot
//! unknown during the simultaneous fallback.

use std::ops::{Add, Div, Mul, Neg, Sub};

/// A field-like value the equation catalogue can be evaluated over.
pub trait Scalar:
    Clone
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Sized
{
    /// Embed a plain number into the scalar domain.
    fn from_f64(value: f64) -> Self;
}

impl Scalar for f64 {
    fn from_f64(value: f64) -> Self {
        value
    }
}
