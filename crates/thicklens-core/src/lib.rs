//! # Thicklens Core
//!
//! The solving backbone of the Thicklens calculator. This crate implements
//! first-order (paraxial) thick-lens design: a fixed catalogue of eleven
//! relations over seventeen named quantities, and a resolution engine that
//! completes any solvable partial prescription.
//!
//! ## Architecture
//!
//! A [`model::LensModel`] owns a [`prescription::Prescription`] (one
//! nullable slot per variable). [`solver::resolve`] substitutes
//! single-unknown equations to a fixed point and, when substitution
//! deadlocks, falls back to an exact single-pivot simultaneous solve. The
//! equation catalogue ([`equations::EQUATIONS`]) is a static table shared
//! read-only by every instance.
//!
//! ## Modules
//!
//! - [`variable`] — The closed set of seventeen lens variables.
//! - [`prescription`] — The per-lens parameter store.
//! - [`equations`] — The immutable relation catalogue with closed-form isolations.
//! - [`algebra`] — Scalar abstraction shared by the numeric and symbolic passes.
//! - [`solver`] — The resolution engine and its simultaneous fallback.
//! - [`format`] — Fixed-order text rendering of a prescription.
//! - [`model`] — The user-facing lens model.

pub mod algebra;
pub mod equations;
pub mod format;
pub mod model;
pub mod prescription;
pub mod solver;
pub mod variable;
