//! Schedule totals.

use rust_decimal::Decimal;

use zeel_core::PaymentPeriod;

/// Aggregated totals over a rounded schedule.
///
/// `total_payment` equals the periodic payment times the term exactly;
/// `total_payment − (principal + total_interest)` is bounded by the
/// schedule's rounding residue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleSummary {
    /// Sum of all interest portions
    pub total_interest: Decimal,
    /// Sum of all payments
    pub total_payment: Decimal,
    /// Sum of all principal portions
    pub total_principal: Decimal,
}

impl ScheduleSummary {
    /// Reduces a schedule's periods into totals.
    #[must_use]
    pub fn of(periods: &[PaymentPeriod]) -> Self {
        let mut total_interest = Decimal::ZERO;
        let mut total_payment = Decimal::ZERO;
        let mut total_principal = Decimal::ZERO;

        for period in periods {
            total_interest += period.interest;
            total_payment += period.payment;
            total_principal += period.principal;
        }

        Self {
            total_interest,
            total_payment,
            total_principal,
        }
    }
}
