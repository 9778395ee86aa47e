//! Error types for request validation.
//!
//! Validation failures are local and recoverable: the caller shows an inline
//! message next to the offending field and never contacts the backend.

use rust_decimal::Decimal;
use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, ValidationError>;

/// A malformed or out-of-range quote request field.
///
/// Each variant carries the offending value so callers can render a precise
/// inline message; [`ValidationError::field`] names the field it belongs to.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Principal must be strictly positive.
    #[error("Principal must be positive, got {value}")]
    NonPositivePrincipal {
        /// The rejected principal amount.
        value: Decimal,
    },

    /// Term must be at least one month.
    #[error("Term must be at least one month, got {months}")]
    InvalidTerm {
        /// The rejected term length in months.
        months: u32,
    },

    /// Annual rate must be non-negative.
    #[error("Annual rate must be non-negative, got {value}%")]
    NegativeRate {
        /// The rejected annual rate in percent.
        value: Decimal,
    },

    /// Principal falls outside the caller-configured product limits.
    #[error("Principal {value} is outside the allowed range [{min}, {max}]")]
    PrincipalOutOfRange {
        /// The rejected principal amount.
        value: Decimal,
        /// Smallest principal the product allows.
        min: Decimal,
        /// Largest principal the product allows.
        max: Decimal,
    },

    /// Term falls outside the caller-configured product limits.
    #[error("Term of {months} months is outside the allowed range [{min}, {max}]")]
    TermOutOfRange {
        /// The rejected term length in months.
        months: u32,
        /// Shortest term the product allows, in months.
        min: u32,
        /// Longest term the product allows, in months.
        max: u32,
    },

    /// Requested rate is not offered by the product's rate policy.
    #[error("Rate {value}% is not offered by this product (allowed {min}%-{max}%)")]
    RateNotOffered {
        /// The requested annual rate in percent.
        value: Decimal,
        /// Lowest selectable annual rate in percent.
        min: Decimal,
        /// Highest selectable annual rate in percent.
        max: Decimal,
    },

    /// A product rate policy requires a rate but none was supplied.
    #[error("A rate selection is required for this product")]
    RateRequired,
}

impl ValidationError {
    /// Names the request field the error belongs to.
    ///
    /// Display collaborators use this to attach the message to the right
    /// form input.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::NonPositivePrincipal { .. }
            | ValidationError::PrincipalOutOfRange { .. } => "principal",
            ValidationError::InvalidTerm { .. } | ValidationError::TermOutOfRange { .. } => {
                "term_months"
            }
            ValidationError::NegativeRate { .. }
            | ValidationError::RateNotOffered { .. }
            | ValidationError::RateRequired => "annual_rate_percent",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_error_display() {
        let err = ValidationError::NonPositivePrincipal { value: dec!(-500) };
        assert!(err.to_string().contains("must be positive"));
        assert!(err.to_string().contains("-500"));
    }

    #[test]
    fn test_field_names() {
        let err = ValidationError::NonPositivePrincipal { value: dec!(0) };
        assert_eq!(err.field(), "principal");

        let err = ValidationError::InvalidTerm { months: 0 };
        assert_eq!(err.field(), "term_months");

        let err = ValidationError::NegativeRate { value: dec!(-2) };
        assert_eq!(err.field(), "annual_rate_percent");
    }

    #[test]
    fn test_range_error_display() {
        let err = ValidationError::RateNotOffered {
            value: dec!(7.5),
            min: dec!(2),
            max: dec!(5),
        };
        assert!(err.to_string().contains("7.5"));
        assert!(err.to_string().contains("2%-5%"));
    }
}
