//! Real roots of the pivot polynomial.
//!
//! Degrees one and two are solved in closed form (the quadratic in its
//! numerically stable formulation). Higher degrees delegate to the
//! eigenvalues of the companion matrix, keeping the near-real ones.

use nalgebra::{DMatrix, DVector};
use num_complex::Complex64;

use super::rational::Poly;

/// An eigenvalue counts as real when its imaginary part is below this,
/// relative to its magnitude.
const IMAGINARY_TOLERANCE: f64 = 1e-8;

/// All real roots of `poly`, sorted ascending. Constants (including the
/// zero polynomial) have none.
pub(crate) fn real_roots(poly: &Poly) -> Vec<f64> {
    let coeffs = poly.coefficients();
    let mut roots = match coeffs.len() {
        0 | 1 => Vec::new(),
        2 => vec![-coeffs[0] / coeffs[1]],
        3 => quadratic_roots(coeffs[0], coeffs[1], coeffs[2]),
        _ => companion_roots(coeffs),
    };
    roots.retain(|root| root.is_finite());
    roots.sort_by(f64::total_cmp);
    roots
}

/// Roots of `c + b*t + a*t^2`, avoiding cancellation between `-b` and the
/// discriminant.
fn quadratic_roots(c: f64, b: f64, a: f64) -> Vec<f64> {
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return Vec::new();
    }
    let q = -0.5 * (b + b.signum() * discriminant.sqrt());
    if q == 0.0 {
        // b and the discriminant both vanished, so c did too: double root.
        return vec![0.0];
    }
    vec![q / a, c / q]
}

/// Eigenvalues of the Frobenius companion matrix of the monic polynomial.
fn companion_roots(coeffs: &[f64]) -> Vec<f64> {
    let n = coeffs.len() - 1;
    let lead = coeffs[n];
    let companion = DMatrix::<f64>::from_fn(n, n, |row, col| {
        if col == n - 1 {
            -coeffs[row] / lead
        } else if row == col + 1 {
            1.0
        } else {
            0.0
        }
    });

    let eigenvalues: DVector<Complex64> = companion.complex_eigenvalues();
    eigenvalues
        .iter()
        .filter(|eig| eig.im.abs() <= IMAGINARY_TOLERANCE * (1.0 + eig.re.abs()))
        .map(|eig| eig.re)
        .collect()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn poly(coeffs: &[f64]) -> Poly {
        // Build through the public arithmetic to respect the trim invariant.
        coeffs.iter().enumerate().fold(Poly::zero(), |acc, (i, &c)| {
            let mut term = Poly::constant(c);
            for _ in 0..i {
                term = term.mul(&Poly::identity());
            }
            acc.add(&term)
        })
    }

    #[test]
    fn constants_have_no_roots() {
        assert!(real_roots(&Poly::zero()).is_empty());
        assert!(real_roots(&Poly::constant(2.0)).is_empty());
    }

    #[test]
    fn linear_root() {
        // 3 - 2t
        assert_eq!(real_roots(&poly(&[3.0, -2.0])), vec![1.5]);
    }

    #[test]
    fn quadratic_roots_are_sorted() {
        // (t - 1)(t + 4) = -4 - 3t + t^2
        let roots = real_roots(&poly(&[-4.0, -3.0, 1.0]));
        assert_eq!(roots.len(), 2);
        assert_relative_eq!(roots[0], -4.0, max_relative = 1e-12);
        assert_relative_eq!(roots[1], 1.0, max_relative = 1e-12);
    }

    #[test]
    fn complex_pair_yields_no_real_roots() {
        // 1 + t^2
        assert!(real_roots(&poly(&[1.0, 0.0, 1.0])).is_empty());
    }

    #[test]
    fn cubic_via_companion_matrix() {
        // (t - 1)(t - 2)(t - 3) = -6 + 11t - 6t^2 + t^3
        let roots = real_roots(&poly(&[-6.0, 11.0, -6.0, 1.0]));
        assert_eq!(roots.len(), 3);
        assert_relative_eq!(roots[0], 1.0, max_relative = 1e-6);
        assert_relative_eq!(roots[1], 2.0, max_relative = 1e-6);
        assert_relative_eq!(roots[2], 3.0, max_relative = 1e-6);
    }
}
