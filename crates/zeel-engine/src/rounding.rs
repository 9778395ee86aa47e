//! Minor-unit rounding at the presentation boundary.
//!
//! The schedule walk runs in full `f64` precision; this module is the single
//! place amounts are rounded. The final period's principal portion absorbs
//! the accumulated residue so the rounded principal portions sum to the
//! requested principal exactly and the terminal balance is exactly zero.

use rust_decimal::{Decimal, RoundingStrategy};

use zeel_core::{Currency, PaymentPeriod};

use crate::error::ComputationError;
use crate::schedule::RawPeriod;

/// Retail money rounding: midpoints round away from zero.
const STRATEGY: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;

/// Rounds an amount to the currency's minor unit.
///
/// # Errors
///
/// Returns [`ComputationError::NonFinite`] if the value cannot be
/// represented as a decimal (NaN or out of range).
pub fn round_amount(value: f64, currency: Currency) -> Result<Decimal, ComputationError> {
    let decimal = Decimal::from_f64_retain(value)
        .ok_or_else(|| ComputationError::non_finite("minor-unit rounding", value))?;
    Ok(decimal.round_dp_with_strategy(currency.decimal_places(), STRATEGY))
}

/// Converts the raw walk into presentable periods.
///
/// Interest portions round per period. Principal portions are derived from
/// the rounded payment with the same clamp discipline as the raw walk, and
/// the final period takes whatever balance remains, so the rounded schedule
/// repays `principal` exactly. Intermediate balances are never rounded from
/// their raw values; they are chained from the rounded portions instead,
/// which keeps the published sequence internally consistent.
///
/// `payment` must already be rounded to the currency's minor unit.
///
/// # Errors
///
/// Returns [`ComputationError::NonFinite`] if a raw interest value cannot be
/// rounded.
pub fn round_periods(
    raw: &[RawPeriod],
    principal: Decimal,
    payment: Decimal,
    currency: Currency,
) -> Result<Vec<PaymentPeriod>, ComputationError> {
    let places = currency.decimal_places();
    let mut remaining = principal.round_dp_with_strategy(places, STRATEGY);
    let mut periods = Vec::with_capacity(raw.len());
    let final_month = raw.len() as u32;

    for row in raw {
        let interest = round_amount(row.interest, currency)?;

        let principal_portion = if row.month == final_month {
            // Absorb the rounding residue: the last period repays whatever
            // is still outstanding, no more and no less.
            remaining
        } else {
            (payment - interest).min(remaining)
        };

        remaining -= principal_portion;
        periods.push(PaymentPeriod::new(
            row.month,
            interest,
            principal_portion,
            payment,
            remaining,
        ));
    }

    Ok(periods)
}
