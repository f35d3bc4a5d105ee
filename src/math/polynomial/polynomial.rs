use std::iter;
use std::ops::{
    Add,
    Mul,
    Neg,
    Sub
};
use std::str::FromStr;

use serde::{
    Deserialize,
    Serialize
};
use tracing::{
    debug,
    trace
};

use crate::math::curve::curve::{
    Curve,
    CurveIntegration
};
use crate::math::polynomial::polynomialerror::PolynomialError;

// ─────────────────────────────────────────────────────────────────────────────
// Polynomial
// ─────────────────────────────────────────────────────────────────────────────
//
// Dense single-variable polynomial over f64, stored highest degree first:
//
//   [a_n, a_{n-1}, ..., a_1, a_0]  <->  a_n·x^n + ... + a_1·x + a_0
//
// Normalized form: a_n != 0.0, except for the zero polynomial which is [0.0].
// Every constructor and every arithmetic result goes through `Polynomial::new`,
// so the invariant holds for all instances.

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<f64>", into = "Vec<f64>")]
pub struct Polynomial {
    coefs: Vec<f64>
}

impl Polynomial {
    /// Builds a polynomial from coefficients ordered highest degree first,
    /// stripping leading zeros. An empty list is the zero polynomial.
    pub fn new(mut coefs: Vec<f64>) -> Polynomial {
        if coefs.is_empty() {
            return Polynomial::zero();
        }

        let first_nonzero = coefs
            .iter()
            .position(|&c| c != 0.0)
            .unwrap_or(coefs.len() - 1);
        coefs.drain(..first_nonzero);

        // -0.0 collapses to the canonical zero polynomial
        if coefs.len() == 1 && coefs[0] == 0.0 {
            coefs[0] = 0.0;
        }

        Polynomial { coefs }
    }

    /// Parses every coefficient as a real number; the first one that fails
    /// aborts construction.
    pub fn parse<S: AsRef<str>>(inputs: &[S]) -> Result<Polynomial, PolynomialError> {
        let coefs = inputs
            .iter()
            .enumerate()
            .map(|(position, input)| parse_coefficient(position, input.as_ref()))
            .collect::<Result<Vec<f64>, PolynomialError>>()?;
        Ok(Polynomial::new(coefs))
    }

    /// Accepts JSON numbers and strings holding a real number.
    pub fn from_json_values(values: &[serde_json::Value]) -> Result<Polynomial, PolynomialError> {
        let coefs = values
            .iter()
            .enumerate()
            .map(|(position, value)| match value {
                serde_json::Value::Number(number) => number
                    .as_f64()
                    .ok_or_else(|| PolynomialError::parse_error(position, number.to_string())),
                serde_json::Value::String(text) => parse_coefficient(position, text),
                other => {
                    debug!(position, value = %other, "coefficient is not a number");
                    Err(PolynomialError::parse_error(position, other.to_string()))
                }
            })
            .collect::<Result<Vec<f64>, PolynomialError>>()?;
        Ok(Polynomial::new(coefs))
    }

    pub fn zero() -> Polynomial {
        Polynomial { coefs: vec![0.0] }
    }

    pub fn one() -> Polynomial {
        Polynomial::constant(1.0)
    }

    pub fn constant(value: f64) -> Polynomial {
        Polynomial::new(vec![value])
    }

    /// `coef·x^degree`
    pub fn monomial(coef: f64, degree: usize) -> Polynomial {
        Polynomial::new(
            iter::once(coef)
                .chain(iter::repeat_n(0.0, degree))
                .collect()
        )
    }

    pub fn degree(&self) -> usize {
        self.coefs.len() - 1
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefs
    }

    pub fn leading_coefficient(&self) -> f64 {
        self.coefs[0]
    }

    pub fn is_zero(&self) -> bool {
        self.coefs.len() == 1 && self.coefs[0] == 0.0
    }

    /// Horner evaluation at `point`.
    pub fn value(&self, point: f64) -> f64 {
        let mut result = self.coefs[0];
        for &coef in &self.coefs[1..] {
            result = f64::mul_add(result, point, coef);
        }
        result
    }

    pub fn sum(&self, other: &Polynomial) -> Polynomial {
        self.combine(other, |lhs, rhs| lhs + rhs)
    }

    /// `self - other`
    pub fn difference(&self, other: &Polynomial) -> Polynomial {
        self.combine(other, |lhs, rhs| lhs - rhs)
    }

    pub fn neg(&self) -> Polynomial {
        Polynomial::new(self.coefs.iter().map(|c| -c).collect())
    }

    pub fn prod(&self, other: &Polynomial) -> Polynomial {
        let n = other.degree();
        other
            .coefficients()
            .iter()
            .enumerate()
            .map(|(i, &coef)| self.scale_and_shift(coef, n - i))
            .fold(Polynomial::zero(), |acc, partial| acc.sum(&partial))
    }

    pub fn pow(&self, n: i32) -> Result<Polynomial, PolynomialError> {
        if n < 0 {
            return Err(PolynomialError::invalid_argument("power cannot be negative"));
        }
        if n == 0 {
            return Ok(Polynomial::one());
        }
        Ok((1..n).fold(self.clone(), |acc, _| acc.prod(self)))
    }

    /// Long division, returning `(quotient, remainder)` with
    /// `self == quotient * other + remainder` and
    /// `remainder.degree() < other.degree()` for a non-constant divisor.
    pub fn division(&self, other: &Polynomial) -> Result<(Polynomial, Polynomial), PolynomialError> {
        if other.is_zero() {
            return Err(PolynomialError::DivisionByZero);
        }

        if other.degree() == 0 {
            let quotient = self.scale_and_shift(1.0 / other.leading_coefficient(), 0);
            return Ok((quotient, Polynomial::zero()));
        }

        let divisor = other;
        let mut dividend = self.clone();
        let mut quotient = Polynomial::zero();

        while dividend.degree() >= divisor.degree() {
            let degree = dividend.degree();
            let shift = degree - divisor.degree();
            let coef = dividend.leading_coefficient() / divisor.leading_coefficient();
            trace!(degree, shift, coef, "long division step");

            quotient = quotient.sum(&Polynomial::monomial(coef, shift));
            // the leading term cancels exactly in theory; drop it even when
            // rounding leaves a residue so the degree strictly decreases
            dividend = dividend
                .difference(&divisor.scale_and_shift(coef, shift))
                .without_terms_from(degree);
        }

        Ok((quotient, dividend))
    }

    /// n-th derivative, `n >= 1`.
    pub fn diff(&self, n: i32) -> Result<Polynomial, PolynomialError> {
        if n < 1 {
            return Err(PolynomialError::invalid_argument(
                "derivative order cannot be less than one"
            ));
        }

        let mut derivative = self.derivative_once();
        for _ in 1..n {
            if derivative.is_zero() {
                break;
            }
            derivative = derivative.derivative_once();
        }
        Ok(derivative)
    }

    /// Antiderivative whose constant of integration is zero.
    pub fn antiderivative(&self) -> Polynomial {
        let degree = self.degree();
        let coefs = self.coefs
            .iter()
            .enumerate()
            .map(|(i, &coef)| coef / (degree - i + 1) as f64)
            .chain(iter::once(0.0))
            .collect();
        Polynomial::new(coefs)
    }

    /// Definite integral over `[left, right]`.
    pub fn integrate(&self, left: f64, right: f64) -> f64 {
        let antiderivative = self.antiderivative();
        antiderivative.value(right) - antiderivative.value(left)
    }

    /// `coef·self·x^shift`
    fn scale_and_shift(&self, coef: f64, shift: usize) -> Polynomial {
        Polynomial::new(
            self.coefs
                .iter()
                .map(|c| coef * c)
                .chain(iter::repeat_n(0.0, shift))
                .collect()
        )
    }

    fn derivative_once(&self) -> Polynomial {
        let degree = self.degree();
        let coefs = self.coefs[..degree]
            .iter()
            .enumerate()
            .map(|(i, &coef)| coef * (degree - i) as f64)
            .collect();
        Polynomial::new(coefs)
    }

    /// Right-aligned (constant term to constant term) element-wise combination.
    fn combine(&self, other: &Polynomial, op: impl Fn(f64, f64) -> f64) -> Polynomial {
        let lhs = self.coefficients();
        let rhs = other.coefficients();
        let len = lhs.len().max(rhs.len());
        let coefs = (0..len)
            .rev()
            .map(|power| op(coef_of_power(lhs, power), coef_of_power(rhs, power)))
            .collect();
        Polynomial::new(coefs)
    }

    /// Drops every term of degree `degree` or higher.
    fn without_terms_from(self, degree: usize) -> Polynomial {
        if self.degree() < degree {
            return self;
        }
        let skip = self.degree() - degree + 1;
        Polynomial::new(self.coefs[skip..].to_vec())
    }
}

fn coef_of_power(coefs: &[f64], power: usize) -> f64 {
    if power < coefs.len() {
        coefs[coefs.len() - 1 - power]
    } else {
        0.0
    }
}

fn parse_coefficient(position: usize, input: &str) -> Result<f64, PolynomialError> {
    input.trim().parse::<f64>().map_err(|error| {
        debug!(position, input, %error, "cannot parse coefficient");
        PolynomialError::parse_error(position, input)
    })
}

impl From<Vec<f64>> for Polynomial {
    fn from(coefs: Vec<f64>) -> Polynomial {
        Polynomial::new(coefs)
    }
}

impl From<Polynomial> for Vec<f64> {
    fn from(polynomial: Polynomial) -> Vec<f64> {
        polynomial.coefs
    }
}

/// Coefficients separated by commas and/or whitespace, highest degree first.
impl FromStr for Polynomial {
    type Err = PolynomialError;

    fn from_str(s: &str) -> Result<Polynomial, PolynomialError> {
        let tokens: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .collect();
        Polynomial::parse(&tokens)
    }
}

impl Add for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: &Polynomial) -> Polynomial {
        self.sum(rhs)
    }
}

impl Sub for &Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: &Polynomial) -> Polynomial {
        self.difference(rhs)
    }
}

impl Mul for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: &Polynomial) -> Polynomial {
        self.prod(rhs)
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        Polynomial::neg(self)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Trait 實作
// ─────────────────────────────────────────────────────────────────────────────

impl Curve for Polynomial {
    fn value(&self, x: f64) -> f64 {
        Polynomial::value(self, x)
    }

    fn derivative(&self, x: f64) -> f64 {
        self.derivative_once().value(x)
    }
}

impl CurveIntegration for Polynomial {
    fn integral(&self, a: f64, b: f64) -> f64 {
        self.integrate(a, b)
    }
}
