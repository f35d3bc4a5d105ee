use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PolynomialError {
    /// A coefficient could not be read as a real number.
    #[error("cannot convert coefficient #{position} ('{input}') to a real number")]
    ParseError {
        position: usize,
        input: String
    },

    #[error("{0}")]
    InvalidArgument(String),

    #[error("division by the zero polynomial")]
    DivisionByZero
}

impl PolynomialError {
    pub fn parse_error(position: usize, input: impl Into<String>) -> PolynomialError {
        PolynomialError::ParseError { position, input: input.into() }
    }

    pub fn invalid_argument(message: &str) -> PolynomialError {
        PolynomialError::InvalidArgument(message.to_owned())
    }
}
