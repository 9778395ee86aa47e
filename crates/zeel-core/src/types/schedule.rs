//! The full repayment schedule returned by a quote.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{Currency, PaymentPeriod};

/// A complete amortization schedule for one quote.
///
/// Produced once per request, immutable, and returned by value. Display,
/// charting, and export collaborators consume it as a read-only,
/// JSON-serializable structure; none of them can alter it after the fact.
///
/// # Example
///
/// ```rust,ignore
/// let schedule = zeel_engine::quote(&request)?;
/// for period in schedule.periods() {
///     println!("{:>2}  {:>12}  {:>12}", period.month, period.interest, period.remaining_balance);
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanSchedule {
    /// Fixed periodic payment
    payment: Decimal,
    /// Quote currency
    currency: Currency,
    /// Per-month breakdown, ordered by month, one entry per term month
    periods: Vec<PaymentPeriod>,
    /// Sum of all interest portions
    total_interest: Decimal,
    /// Sum of all payments
    total_payment: Decimal,
}

impl LoanSchedule {
    /// Assembles a schedule from its parts.
    #[must_use]
    pub fn new(
        payment: Decimal,
        currency: Currency,
        periods: Vec<PaymentPeriod>,
        total_interest: Decimal,
        total_payment: Decimal,
    ) -> Self {
        Self {
            payment,
            currency,
            periods,
            total_interest,
            total_payment,
        }
    }

    /// Returns the fixed periodic payment.
    #[must_use]
    pub fn payment(&self) -> Decimal {
        self.payment
    }

    /// Returns the quote currency.
    #[must_use]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the per-month breakdown, ordered by month.
    #[must_use]
    pub fn periods(&self) -> &[PaymentPeriod] {
        &self.periods
    }

    /// Returns the term length in months.
    #[must_use]
    pub fn term_months(&self) -> u32 {
        self.periods.len() as u32
    }

    /// Returns the sum of all interest portions.
    #[must_use]
    pub fn total_interest(&self) -> Decimal {
        self.total_interest
    }

    /// Returns the sum of all payments.
    #[must_use]
    pub fn total_payment(&self) -> Decimal {
        self.total_payment
    }

    /// Returns the sum of all principal portions.
    ///
    /// Equal to the requested principal exactly, in minor units.
    #[must_use]
    pub fn total_principal(&self) -> Decimal {
        self.periods.iter().map(|p| p.principal).sum()
    }

    /// Returns the final period, if the schedule is non-empty.
    #[must_use]
    pub fn final_period(&self) -> Option<&PaymentPeriod> {
        self.periods.last()
    }

    /// Returns true when the final period leaves no outstanding balance.
    #[must_use]
    pub fn is_fully_amortized(&self) -> bool {
        self.final_period().is_some_and(PaymentPeriod::settles_loan)
    }
}
