//! Error types for the quote pipeline.

use thiserror::Error;
use zeel_core::ValidationError;

/// A specialized Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// A numeric edge case detected during schedule computation.
///
/// These are rare and signal a genuine input/formula mismatch. They are
/// surfaced as errors rather than letting NaN or infinity reach the caller
/// as corrupted numeric output.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComputationError {
    /// An intermediate result was NaN or infinite.
    #[error("Non-finite result in {operation}: {value}")]
    NonFinite {
        /// The computation step that produced the value.
        operation: String,
        /// The offending value.
        value: f64,
    },

    /// The schedule walk did not drive the balance to zero.
    #[error("Residual balance of {residual} after the final period")]
    ResidualBalance {
        /// Balance left outstanding after the final period.
        residual: f64,
    },
}

impl ComputationError {
    /// Creates a non-finite result error.
    #[must_use]
    pub fn non_finite(operation: impl Into<String>, value: f64) -> Self {
        Self::NonFinite {
            operation: operation.into(),
            value,
        }
    }
}

/// The error type returned by the quote pipeline.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// The request failed field validation; nothing was computed.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The computation hit a numeric edge case; no partial result exists.
    #[error("Computation error: {0}")]
    Computation(#[from] ComputationError),
}

impl EngineError {
    /// Returns the offending request field, when the error is a
    /// validation failure.
    #[must_use]
    pub fn field(&self) -> Option<&'static str> {
        match self {
            EngineError::Validation(err) => Some(err.field()),
            EngineError::Computation(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_non_finite_display() {
        let err = ComputationError::non_finite("annuity payment", f64::INFINITY);
        assert!(err.to_string().contains("annuity payment"));
        assert!(err.to_string().contains("inf"));
    }

    #[test]
    fn test_validation_field_passthrough() {
        let err = EngineError::from(ValidationError::NegativeRate { value: dec!(-1) });
        assert_eq!(err.field(), Some("annual_rate_percent"));

        let err = EngineError::from(ComputationError::ResidualBalance { residual: 12.5 });
        assert_eq!(err.field(), None);
    }
}
