//! Loan quote request parameters.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{CoreResult, ValidationError};
use crate::types::Currency;

/// Parameters for a single loan quote.
///
/// A request is created fresh per call, never mutated, and never persisted.
/// Every input is an explicit field: the engine reads no ambient or global
/// state, so a request fully determines its schedule.
///
/// # Example
///
/// ```rust
/// use zeel_core::types::LoanQuoteRequest;
/// use rust_decimal_macros::dec;
///
/// // ₮3,000,000 over 6 months at the 2% product rate
/// let request = LoanQuoteRequest::new(dec!(3_000_000), dec!(2), 6);
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanQuoteRequest {
    /// Loan principal in the request currency, at minor-unit precision
    pub principal: Decimal,
    /// Annual interest rate as a percentage (`2` means 2% per year)
    pub annual_rate_percent: Decimal,
    /// Repayment term in months
    pub term_months: u32,
    /// Currency the loan is quoted in
    #[serde(default)]
    pub currency: Currency,
}

impl LoanQuoteRequest {
    /// Creates a new request in the platform's home currency.
    #[must_use]
    pub fn new(principal: Decimal, annual_rate_percent: Decimal, term_months: u32) -> Self {
        Self {
            principal,
            annual_rate_percent,
            term_months,
            currency: Currency::default(),
        }
    }

    /// Sets the quote currency.
    #[must_use]
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Checks every field before any computation proceeds.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found, carrying the offending
    /// value and naming the field it belongs to. No partial result is ever
    /// produced from an invalid request.
    pub fn validate(&self) -> CoreResult<()> {
        if self.principal <= Decimal::ZERO {
            return Err(ValidationError::NonPositivePrincipal {
                value: self.principal,
            });
        }

        if self.term_months == 0 {
            return Err(ValidationError::InvalidTerm {
                months: self.term_months,
            });
        }

        if self.annual_rate_percent < Decimal::ZERO {
            return Err(ValidationError::NegativeRate {
                value: self.annual_rate_percent,
            });
        }

        Ok(())
    }
}
