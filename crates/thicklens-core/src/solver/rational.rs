//! Univariate rational-function arithmetic for the simultaneous fallback.
//!
//! Every catalogue relation is linear-fractional in each variable it
//! references, so once all unknowns but one pivot are expressed in terms of
//! that pivot, every intermediate value is a ratio of polynomials in it.
//! Rationals are closed under the four field operations, which is exactly
//! what re-running the substitution loop symbolically requires.

use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::algebra::Scalar;

/// Leading coefficients below this fraction of the largest coefficient are
/// treated as cancellation noise and trimmed.
const TRIM_RELATIVE: f64 = 1e-10;

/// A dense polynomial, coefficients in ascending degree order.
///
/// Invariant: trimmed; an empty coefficient vector is the zero polynomial.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Poly {
    coeffs: Vec<f64>,
}

impl Poly {
    pub fn zero() -> Self {
        Poly { coeffs: Vec::new() }
    }

    pub fn constant(value: f64) -> Self {
        Poly::trimmed(vec![value])
    }

    /// The indeterminate itself.
    pub fn identity() -> Self {
        Poly {
            coeffs: vec![0.0, 1.0],
        }
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Degree of the polynomial; zero for constants and for the zero
    /// polynomial.
    pub fn degree(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coeffs
    }

    /// Horner evaluation.
    pub fn eval(&self, t: f64) -> f64 {
        self.coeffs.iter().rev().fold(0.0, |acc, &c| acc * t + c)
    }

    pub fn add(&self, other: &Poly) -> Poly {
        let len = self.coeffs.len().max(other.coeffs.len());
        let coeffs = (0..len)
            .map(|i| {
                self.coeffs.get(i).copied().unwrap_or(0.0)
                    + other.coeffs.get(i).copied().unwrap_or(0.0)
            })
            .collect();
        Poly::trimmed(coeffs)
    }

    pub fn sub(&self, other: &Poly) -> Poly {
        self.add(&other.neg())
    }

    pub fn neg(&self) -> Poly {
        Poly {
            coeffs: self.coeffs.iter().map(|&c| -c).collect(),
        }
    }

    pub fn mul(&self, other: &Poly) -> Poly {
        if self.is_zero() || other.is_zero() {
            return Poly::zero();
        }
        let mut coeffs = vec![0.0; self.coeffs.len() + other.coeffs.len() - 1];
        for (i, &a) in self.coeffs.iter().enumerate() {
            for (j, &b) in other.coeffs.iter().enumerate() {
                coeffs[i + j] += a * b;
            }
        }
        Poly::trimmed(coeffs)
    }

    fn trimmed(mut coeffs: Vec<f64>) -> Poly {
        let largest = coeffs.iter().fold(0.0_f64, |acc, &c| acc.max(c.abs()));
        if largest == 0.0 {
            return Poly::zero();
        }
        while let Some(&last) = coeffs.last() {
            if last.abs() <= largest * TRIM_RELATIVE {
                coeffs.pop();
            } else {
                break;
            }
        }
        Poly { coeffs }
    }
}

/// A ratio of two polynomials in the pivot unknown.
#[derive(Debug, Clone)]
pub(crate) struct Rational {
    num: Poly,
    den: Poly,
}

impl Rational {
    pub fn constant(value: f64) -> Self {
        Rational {
            num: Poly::constant(value),
            den: Poly::constant(1.0),
        }
    }

    /// The pivot unknown itself.
    pub fn variable() -> Self {
        Rational {
            num: Poly::identity(),
            den: Poly::constant(1.0),
        }
    }

    pub fn numerator(&self) -> &Poly {
        &self.num
    }

    /// Evaluate at `t`; `None` where the denominator vanishes or the ratio
    /// is not finite.
    pub fn eval(&self, t: f64) -> Option<f64> {
        let den = self.den.eval(t);
        if !den.is_finite() || den.abs() < f64::MIN_POSITIVE {
            return None;
        }
        let value = self.num.eval(t) / den;
        value.is_finite().then_some(value)
    }
}

impl Add for Rational {
    type Output = Rational;

    fn add(self, rhs: Rational) -> Rational {
        Rational {
            num: self.num.mul(&rhs.den).add(&rhs.num.mul(&self.den)),
            den: self.den.mul(&rhs.den),
        }
    }
}

impl Sub for Rational {
    type Output = Rational;

    fn sub(self, rhs: Rational) -> Rational {
        self + (-rhs)
    }
}

impl Mul for Rational {
    type Output = Rational;

    fn mul(self, rhs: Rational) -> Rational {
        Rational {
            num: self.num.mul(&rhs.num),
            den: self.den.mul(&rhs.den),
        }
    }
}

impl Div for Rational {
    type Output = Rational;

    fn div(self, rhs: Rational) -> Rational {
        Rational {
            num: self.num.mul(&rhs.den),
            den: self.den.mul(&rhs.num),
        }
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational {
            num: self.num.neg(),
            den: self.den,
        }
    }
}

impl Scalar for Rational {
    fn from_f64(value: f64) -> Self {
        Rational::constant(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horner_evaluation() {
        // 2 - 3t + t^2
        let poly = Poly::trimmed(vec![2.0, -3.0, 1.0]);
        assert_eq!(poly.eval(0.0), 2.0);
        assert_eq!(poly.eval(1.0), 0.0);
        assert_eq!(poly.eval(2.0), 0.0);
        assert_eq!(poly.eval(4.0), 6.0);
    }

    #[test]
    fn multiplication_and_degree() {
        // (1 + t)(1 - t) = 1 - t^2
        let a = Poly::trimmed(vec![1.0, 1.0]);
        let b = Poly::trimmed(vec![1.0, -1.0]);
        let product = a.mul(&b);
        assert_eq!(product.coefficients(), &[1.0, 0.0, -1.0]);
        assert_eq!(product.degree(), 2);
    }

    #[test]
    fn cancellation_noise_is_trimmed() {
        let a = Poly::trimmed(vec![0.0, 1.0]);
        let sum = a.sub(&a);
        assert!(sum.is_zero());
    }

    #[test]
    fn rational_field_operations() {
        let t = Rational::variable();
        // t + 1/t = (t^2 + 1)/t
        let expr = t.clone() + Rational::constant(1.0) / t;
        assert_eq!(expr.eval(2.0), Some(2.5));
        assert_eq!(expr.eval(0.0), None);
    }

    #[test]
    fn division_by_zero_has_no_value() {
        let t = Rational::variable();
        let expr = Rational::constant(1.0) / (t - Rational::constant(3.0));
        assert_eq!(expr.eval(3.0), None);
        assert_eq!(expr.eval(4.0), Some(1.0));
    }
}
