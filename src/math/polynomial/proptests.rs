//! Property-based tests for polynomial arithmetic.

use proptest::prelude::*;

use crate::math::polynomial::polynomial::Polynomial;
use crate::math::polynomial::polynomialerror::PolynomialError;

const SAMPLE_POINTS: [f64; 6] = [-2.0, -1.0, -0.5, 0.0, 1.0, 2.5];

// Small integer coefficients keep sums and products exact in f64
fn small_coeff() -> impl Strategy<Value = f64> {
    (-20i32..20i32).prop_map(f64::from)
}

// Raw coefficient lists, leading zeros allowed
fn raw_coeffs() -> impl Strategy<Value = Vec<f64>> {
    proptest::collection::vec(small_coeff(), 0..=6)
}

fn small_poly() -> impl Strategy<Value = Polynomial> {
    proptest::collection::vec(small_coeff(), 1..=5).prop_map(Polynomial::new)
}

fn nonzero_poly() -> impl Strategy<Value = Polynomial> {
    small_poly().prop_filter("polynomial must be non-zero", |p| !p.is_zero())
}

// Σ |a_k|·|x|^k, the scale against which rounding error is measured
fn magnitude(p: &Polynomial, x: f64) -> f64 {
    p.coefficients()
        .iter()
        .fold(0.0, |acc, c| acc * x.abs() + c.abs())
}

fn assert_close_at_samples(lhs: &Polynomial, rhs: &Polynomial) -> Result<(), TestCaseError> {
    for x in SAMPLE_POINTS {
        let tolerance = 1e-9 * (1.0 + magnitude(lhs, x) + magnitude(rhs, x));
        prop_assert!(
            (lhs.value(x) - rhs.value(x)).abs() <= tolerance,
            "{} and {} differ at {}", lhs, rhs, x
        );
    }
    Ok(())
}

proptest! {
    #[test]
    fn normalized_leading_coefficient(coefs in raw_coeffs()) {
        let p = Polynomial::new(coefs);
        prop_assert!(p.leading_coefficient() != 0.0 || p.coefficients() == [0.0]);
        prop_assert_eq!(p.degree(), p.coefficients().len() - 1);
    }

    #[test]
    fn normalization_preserves_values(coefs in raw_coeffs()) {
        let p = Polynomial::new(coefs.clone());
        let x: f64 = 1.5;
        let direct: f64 = coefs.iter().rev().enumerate()
            .map(|(k, c)| c * x.powi(k as i32))
            .sum();
        prop_assert!((p.value(x) - direct).abs() <= 1e-9 * (1.0 + magnitude(&p, x)));
    }

    #[test]
    fn sum_commutative(a in small_poly(), b in small_poly()) {
        prop_assert_eq!(a.sum(&b), b.sum(&a));
    }

    #[test]
    fn sum_identity(a in small_poly()) {
        prop_assert_eq!(a.sum(&Polynomial::zero()), a.clone());
        prop_assert_eq!(Polynomial::zero().sum(&a), a);
    }

    #[test]
    fn difference_anticommutative(a in small_poly(), b in small_poly()) {
        prop_assert_eq!(b.difference(&a), a.difference(&b).neg());
    }

    #[test]
    fn difference_with_self_is_zero(a in small_poly()) {
        prop_assert!(a.difference(&a).is_zero());
    }

    #[test]
    fn prod_degree_law(a in nonzero_poly(), b in nonzero_poly()) {
        prop_assert_eq!(a.prod(&b).degree(), a.degree() + b.degree());
    }

    #[test]
    fn prod_commutative(a in small_poly(), b in small_poly()) {
        prop_assert_eq!(a.prod(&b), b.prod(&a));
    }

    #[test]
    fn pow_matches_repeated_prod(a in small_poly()) {
        prop_assert_eq!(a.pow(0).unwrap(), Polynomial::one());
        prop_assert_eq!(a.pow(3).unwrap(), a.prod(&a).prod(&a));
    }

    #[test]
    fn pow_negative_rejected(a in small_poly(), n in i32::MIN..0) {
        prop_assert!(matches!(a.pow(n), Err(PolynomialError::InvalidArgument(_))));
    }

    #[test]
    fn division_reconstructs_dividend(a in small_poly(), b in nonzero_poly()) {
        let (quotient, remainder) = a.division(&b).unwrap();
        if b.degree() > 0 {
            prop_assert!(remainder.degree() < b.degree());
        } else {
            prop_assert!(remainder.is_zero());
        }
        assert_close_at_samples(&quotient.prod(&b).sum(&remainder), &a)?;
    }

    #[test]
    fn division_by_zero_rejected(a in small_poly()) {
        prop_assert_eq!(a.division(&Polynomial::zero()), Err(PolynomialError::DivisionByZero));
    }

    #[test]
    fn derivative_of_antiderivative(a in small_poly()) {
        let recovered = a.antiderivative().diff(1).unwrap();
        prop_assert_eq!(recovered.degree(), a.degree());
        assert_close_at_samples(&recovered, &a)?;
    }

    #[test]
    fn repeated_diff_lowers_degree(a in nonzero_poly(), n in 1i32..8) {
        let derivative = a.diff(n).unwrap();
        let expected = a.degree().saturating_sub(n as usize);
        prop_assert_eq!(derivative.degree(), expected);
        prop_assert_eq!(a.diff(n).unwrap(), (1..n).fold(a.diff(1).unwrap(), |d, _| d.diff(1).unwrap()));
    }

    #[test]
    fn integral_flips_with_bounds(a in small_poly(), left in -3.0f64..3.0, right in -3.0f64..3.0) {
        let forward = a.integrate(left, right);
        let backward = a.integrate(right, left);
        prop_assert!((forward + backward).abs() <= 1e-9 * (1.0 + forward.abs()));
    }
}
