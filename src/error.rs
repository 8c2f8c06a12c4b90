//! Error types for the armpick library.

use thiserror::Error;

/// Result type alias for policy operations.
pub type Result<T> = std::result::Result<T, BanditError>;

/// Errors that can occur while building or driving a policy.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BanditError {
    /// A construction parameter is out of range (arm count, epsilon, tau, beta, c).
    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    /// A call-time argument is malformed (wrong length, non-finite estimate).
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    /// Numerical computation error.
    #[error("numerical error: {message}")]
    NumericalError { message: String },
}

impl BanditError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }

    pub(crate) fn input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BanditError::InvalidConfiguration {
            message: "epsilon must be between 0 and 1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid configuration: epsilon must be between 0 and 1"
        );

        let err = BanditError::input("expected 3 mean estimates, got 2");
        assert_eq!(
            err.to_string(),
            "invalid input: expected 3 mean estimates, got 2"
        );

        let err = BanditError::NumericalError {
            message: "probabilities sum to zero".to_string(),
        };
        assert_eq!(err.to_string(), "numerical error: probabilities sum to zero");
    }
}
