use serde::{
    Serialize,
    Deserialize
};

use crate::math::polynomial::polynomial::Polynomial;
use crate::math::polynomial::polynomialerror::PolynomialError;

/// Only the `name` field of a JSON object; used to key registry entries.
#[derive(Clone, Serialize, Deserialize)]
pub struct NamedJsonObject {
    name: String
}

impl NamedJsonObject {
    pub fn name(&self) -> &String {
        &self.name
    }
}

/// JSON form of a named polynomial:
///
/// ```json
/// { "name": "p", "coefficients": [2, "-6", 0, 15] }
/// ```
///
/// Coefficients stay raw JSON until `to_polynomial` so that a bad entry
/// surfaces as a `PolynomialError::ParseError` with its position.
#[derive(Clone, Serialize, Deserialize)]
pub struct NamedPolynomial {
    name: String,
    coefficients: Vec<serde_json::Value>
}

impl NamedPolynomial {
    pub fn name(&self) -> &String {
        &self.name
    }

    pub fn to_polynomial(&self) -> Result<Polynomial, PolynomialError> {
        Polynomial::from_json_values(&self.coefficients)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_polynomial_from_json() {
        let named: NamedPolynomial = serde_json::from_str(
            r#"{"name": "p", "coefficients": [0, 2, "-6", 0, 15]}"#
        ).unwrap();
        assert_eq!(named.name(), "p");
        assert_eq!(named.to_polynomial().unwrap().to_string(), "2x**3 - 6x**2 + 15");
    }

    #[test]
    fn test_named_polynomial_bad_coefficient() {
        let named: NamedPolynomial = serde_json::from_str(
            r#"{"name": "r", "coefficients": [1, "abc"]}"#
        ).unwrap();
        assert_eq!(named.to_polynomial(), Err(PolynomialError::parse_error(1, "abc")));
    }
}
