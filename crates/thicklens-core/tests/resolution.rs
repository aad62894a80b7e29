//! Resolution-engine validation against the catalogue formulas.
//!
//! Expected values are recomputed from the equation set inside the tests
//! rather than hard-coded, so every comparison is against the formulas
//! themselves.

use approx::assert_relative_eq;

use thicklens_core::equations::EQUATIONS;
use thicklens_core::model::LensModel;
use thicklens_core::prescription::Prescription;
use thicklens_core::solver::{Outcome, SolveError};
use thicklens_core::variable::Variable;

/// The biconvex reference element: n1=1, nL=1.5, n2=1, r1=50, r2=-50, CT=5.
fn reference_base() -> Prescription {
    Prescription {
        n1: Some(1.0),
        nl: Some(1.5),
        n2: Some(1.0),
        r1: Some(50.0),
        r2: Some(-50.0),
        ct: Some(5.0),
        ..Default::default()
    }
}

/// Forward-compute the full seventeen-value assignment from the base six.
fn reference_full() -> Prescription {
    let (n1, nl, n2, r1, r2, ct) = (1.0, 1.5, 1.0, 50.0, -50.0, 5.0);
    let d1 = (nl - n1) / r1;
    let d2 = (n2 - nl) / r2;
    let d = d1 + d2 - d1 * d2 * ct / nl;
    let p1 = (d2 / d) * (n1 / nl) * ct;
    let p2 = -(d1 / d) * (n2 / nl) * ct;
    let efl = 1.0 / d;
    let f1 = -n1 * efl;
    let f2 = n2 * efl;

    Prescription {
        d1: Some(d1),
        d2: Some(d2),
        d: Some(d),
        n1: Some(n1),
        nl: Some(nl),
        n2: Some(n2),
        r1: Some(r1),
        r2: Some(r2),
        ct: Some(ct),
        p1: Some(p1),
        p2: Some(p2),
        f1: Some(f1),
        f2: Some(f2),
        efl: Some(efl),
        ffl: Some(f1 + p1),
        bfl: Some(f2 + p2),
        nps: Some(f2 + f1),
    }
}

#[test]
fn resolves_the_reference_lens_from_the_base_quantities() {
    let mut model = LensModel::new(reference_base());
    let outcome = model.calculate().expect("base six determine the lens");

    match outcome {
        Outcome::Resolved { computed } => assert_eq!(computed.len(), 11),
        other => panic!("expected a resolution, got {other:?}"),
    }

    let expected = reference_full();
    for variable in Variable::ALL {
        let value = model.prescription.get(variable).expect("all resolved");
        assert_relative_eq!(
            value,
            expected.get(variable).unwrap(),
            max_relative = 1e-12
        );
    }

    // Anchors worth pinning explicitly.
    assert_relative_eq!(model.prescription.d1.unwrap(), 0.01, max_relative = 1e-12);
    assert_relative_eq!(model.prescription.d2.unwrap(), 0.01, max_relative = 1e-12);
}

#[test]
fn every_equation_residual_vanishes_after_resolution() {
    let mut model = LensModel::new(reference_base());
    model.calculate().expect("base six determine the lens");

    for equation in &EQUATIONS {
        let residual: f64 =
            equation.residual(&|variable| model.prescription.get(variable).unwrap());
        assert!(
            residual.abs() < 1e-9,
            "`{}` residual is {:.3e}",
            equation.label,
            residual
        );
    }
}

#[test]
fn consistency_identities_hold_after_resolution() {
    let mut model = LensModel::new(reference_base());
    model.calculate().expect("base six determine the lens");
    let p = &model.prescription;

    let (n1, n2) = (p.n1.unwrap(), p.n2.unwrap());
    let efl = p.efl.unwrap();
    let (f1, f2) = (p.f1.unwrap(), p.f2.unwrap());

    assert_relative_eq!(f1, -n1 * efl, max_relative = 1e-12);
    assert_relative_eq!(f2, n2 * efl, max_relative = 1e-12);
    assert_relative_eq!(p.nps.unwrap(), f1 + f2, max_relative = 1e-12);
    assert_relative_eq!(p.bfl.unwrap(), f2 + p.p2.unwrap(), max_relative = 1e-12);
    assert_relative_eq!(p.ffl.unwrap(), f1 + p.p1.unwrap(), max_relative = 1e-12);
}

#[test]
fn fully_specified_input_is_a_no_op() {
    let full = reference_full();
    let mut model = LensModel::new(full.clone());

    let outcome = model.calculate().expect("nothing to do");
    assert_eq!(outcome, Outcome::AlreadyComplete);
    assert_eq!(model.prescription, full);
}

#[test]
fn calculate_is_idempotent() {
    let mut model = LensModel::new(reference_base());
    model.calculate().expect("base six determine the lens");
    let first = model.prescription.clone();

    let outcome = model.calculate().expect("second run finds nothing missing");
    assert_eq!(outcome, Outcome::AlreadyComplete);
    assert_eq!(model.prescription, first);
}

#[test]
fn thickness_follows_from_total_power() {
    // CT withheld, D supplied instead: eq 3 is solved for CT.
    let expected = reference_full();
    let mut model = LensModel::new(Prescription {
        ct: None,
        d: expected.d,
        ..reference_base()
    });
    model.calculate().expect("still fully determined");

    assert_relative_eq!(
        model.prescription.ct.unwrap(),
        expected.ct.unwrap(),
        max_relative = 1e-9
    );
    assert_relative_eq!(
        model.prescription.efl.unwrap(),
        expected.efl.unwrap(),
        max_relative = 1e-9
    );
}

#[test]
fn lens_bending_resolves_by_substitution() {
    // The classic bending problem: indices, thickness, and the focal
    // specification are known; both radii are recovered.
    let expected = reference_full();
    let mut model = LensModel::new(Prescription {
        n1: expected.n1,
        nl: expected.nl,
        n2: expected.n2,
        ct: expected.ct,
        efl: expected.efl,
        bfl: expected.bfl,
        ..Default::default()
    });
    model.calculate().expect("focal specification determines the radii");

    assert_relative_eq!(model.prescription.r1.unwrap(), 50.0, max_relative = 1e-9);
    assert_relative_eq!(model.prescription.r2.unwrap(), -50.0, max_relative = 1e-9);
    assert_relative_eq!(
        model.prescription.ffl.unwrap(),
        expected.ffl.unwrap(),
        max_relative = 1e-9
    );
}

#[test]
fn underdetermined_input_fails_as_unsolvable() {
    let mut model = LensModel::new(Prescription {
        n1: Some(1.0),
        nl: Some(1.5),
        ..Default::default()
    });
    let error = model.calculate().expect_err("two knowns cannot pin the lens");
    assert!(matches!(error, SolveError::Unsolvable { .. }), "{error}");
}

#[test]
fn the_all_unknown_model_fails_as_unsolvable() {
    let mut model = LensModel::default();
    let error = model.calculate().expect_err("no anchor values at all");
    assert!(matches!(error, SolveError::Unsolvable { .. }), "{error}");
}

#[test]
fn report_lists_every_variable_in_order() {
    let mut model = LensModel::new(reference_base());
    model.calculate().expect("base six determine the lens");

    let report = model.to_string();
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines.len(), 17);
    assert!(lines[0].starts_with("D1: 0.01"));
    assert!(lines[16].starts_with("NPS: "));
    assert!(!report.contains("unknown"));
}
