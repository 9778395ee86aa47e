//! Caller-side product configuration.
//!
//! Business policy — which rates a product offers, how large a loan may be —
//! is not engine responsibility. These types give every caller (the
//! calculator page, the application preview, the admin console) the same
//! enforcement code instead of divergent arithmetic, while the engine itself
//! stays policy-free.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use zeel_core::{CoreResult, LoanQuoteRequest, ValidationError};

/// How a product determines its annual rate.
///
/// The fixed-rate product and the slider-selectable product share one
/// engine; only this policy differs between them. A promotional override is
/// simply a different [`RatePolicy::Fixed`] value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RatePolicy {
    /// The product dictates the rate; any requested rate is ignored.
    Fixed(Decimal),
    /// The borrower selects a rate within an inclusive range.
    Selectable {
        /// Lowest selectable annual rate in percent.
        min: Decimal,
        /// Highest selectable annual rate in percent.
        max: Decimal,
    },
}

impl RatePolicy {
    /// Resolves the effective annual rate for a quote.
    ///
    /// # Errors
    ///
    /// For a selectable product, a missing selection yields
    /// [`ValidationError::RateRequired`] and an out-of-range selection
    /// yields [`ValidationError::RateNotOffered`].
    pub fn resolve(&self, requested: Option<Decimal>) -> CoreResult<Decimal> {
        match self {
            RatePolicy::Fixed(rate) => Ok(*rate),
            RatePolicy::Selectable { min, max } => {
                let value = requested.ok_or(ValidationError::RateRequired)?;
                if value < *min || value > *max {
                    return Err(ValidationError::RateNotOffered {
                        value,
                        min: *min,
                        max: *max,
                    });
                }
                Ok(value)
            }
        }
    }
}

/// Caller-supplied principal and term bounds for a loan product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanLimits {
    /// Smallest principal the product allows
    pub min_principal: Decimal,
    /// Largest principal the product allows
    pub max_principal: Decimal,
    /// Shortest term the product allows, in months
    pub min_term_months: u32,
    /// Longest term the product allows, in months
    pub max_term_months: u32,
}

impl LoanLimits {
    /// Creates a new set of limits.
    #[must_use]
    pub fn new(
        min_principal: Decimal,
        max_principal: Decimal,
        min_term_months: u32,
        max_term_months: u32,
    ) -> Self {
        Self {
            min_principal,
            max_principal,
            min_term_months,
            max_term_months,
        }
    }

    /// Checks a request against the product limits.
    ///
    /// # Errors
    ///
    /// Returns the range violation, carrying the offending value and the
    /// allowed bounds for the caller's inline message.
    pub fn check(&self, request: &LoanQuoteRequest) -> CoreResult<()> {
        if request.principal < self.min_principal || request.principal > self.max_principal {
            return Err(ValidationError::PrincipalOutOfRange {
                value: request.principal,
                min: self.min_principal,
                max: self.max_principal,
            });
        }

        if request.term_months < self.min_term_months || request.term_months > self.max_term_months
        {
            return Err(ValidationError::TermOutOfRange {
                months: request.term_months,
                min: self.min_term_months,
                max: self.max_term_months,
            });
        }

        Ok(())
    }
}
