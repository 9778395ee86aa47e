//! Per-period schedule generation in full floating precision.
//!
//! The walk runs entirely in `f64`; nothing here is rounded. Rounding to the
//! currency's minor unit happens once, at the presentation boundary (see
//! [`crate::rounding`]), because rounding intermediate balances accumulates
//! drift over the term.

use crate::error::ComputationError;

/// Relative tolerance for the terminal balance check.
const RESIDUAL_TOLERANCE: f64 = 1e-6;

/// One month of the schedule walk, in full floating precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawPeriod {
    /// Month index, 1-based
    pub month: u32,
    /// Interest accrued on the balance carried into this month
    pub interest: f64,
    /// Principal repaid this month
    pub principal: f64,
    /// The fixed periodic payment
    pub payment: f64,
    /// Balance outstanding after this month
    pub remaining_balance: f64,
}

/// Walks the term month by month, producing the unrounded schedule.
///
/// State is the remaining balance, initialized to `principal`. Each month
/// accrues `balance · rate` of interest; the rest of the payment repays
/// principal, clamped to the remaining balance so floating-point residue on
/// the final month can never drive the balance negative.
///
/// # Errors
///
/// Returns [`ComputationError::ResidualBalance`] if the final month leaves a
/// balance outside tolerance — that is a computation bug or an inconsistent
/// payment, not a valid schedule — and [`ComputationError::NonFinite`] if
/// interest accrual degenerates.
pub fn amortize(
    principal: f64,
    monthly_rate: f64,
    payment: f64,
    term_months: u32,
) -> Result<Vec<RawPeriod>, ComputationError> {
    let mut periods = Vec::with_capacity(term_months as usize);
    let mut balance = principal;

    for month in 1..=term_months {
        let interest = balance * monthly_rate;
        if !interest.is_finite() {
            return Err(ComputationError::non_finite("interest accrual", interest));
        }

        let principal_portion = (payment - interest).min(balance);
        balance = (balance - principal_portion).max(0.0);

        periods.push(RawPeriod {
            month,
            interest,
            principal: principal_portion,
            payment,
            remaining_balance: balance,
        });
    }

    if balance.abs() > RESIDUAL_TOLERANCE * principal.max(1.0) {
        return Err(ComputationError::ResidualBalance { residual: balance });
    }

    // Clear the floating-point residue left by the final subtraction so the
    // terminal balance is exactly zero.
    if let Some(last) = periods.last_mut() {
        last.remaining_balance = 0.0;
    }

    Ok(periods)
}
