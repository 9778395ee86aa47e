//! The quote pipeline.
//!
//! `Request → Validate → ConvertRate → SolvePayment → GenerateSchedule →
//! Round → Aggregate → Result`. Strictly linear and deterministic: there is
//! nothing to retry, and a request either yields a complete schedule or an
//! error.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use zeel_core::{Currency, LoanQuoteRequest, LoanSchedule};

use crate::error::{ComputationError, EngineResult};
use crate::payment::annuity_payment;
use crate::policy::RatePolicy;
use crate::rate::monthly_rate;
use crate::rounding::{round_amount, round_periods};
use crate::schedule::amortize;
use crate::summary::ScheduleSummary;

/// Computes the full repayment schedule for a quote request.
///
/// This is the engine's single entry point; the calculator page and the
/// application preview both go through it. It is pure and side-effect-free,
/// so callers may invoke it on every slider movement without coordination.
///
/// # Errors
///
/// Returns a validation error before any arithmetic if a request field is
/// malformed, or a computation error if the arithmetic degenerates. No
/// partial schedule is ever returned.
///
/// # Example
///
/// ```rust
/// use rust_decimal_macros::dec;
/// use zeel_core::LoanQuoteRequest;
///
/// let request = LoanQuoteRequest::new(dec!(1_000_000), dec!(2), 12);
/// let schedule = zeel_engine::quote(&request).unwrap();
///
/// assert_eq!(schedule.payment(), dec!(84_239));
/// assert_eq!(schedule.term_months(), 12);
/// assert_eq!(schedule.total_principal(), dec!(1_000_000));
/// ```
pub fn quote(request: &LoanQuoteRequest) -> EngineResult<LoanSchedule> {
    request.validate()?;

    let principal = to_f64(request.principal, "principal conversion")?;
    let rate = monthly_rate(to_f64(request.annual_rate_percent, "rate conversion")?);

    let payment = annuity_payment(principal, rate, request.term_months)?;
    log::debug!(
        "solved payment {:.4} for {} over {} months at {:.6}/month",
        payment,
        request.principal,
        request.term_months,
        rate
    );

    let raw = amortize(principal, rate, payment, request.term_months)?;

    let rounded_payment = round_amount(payment, request.currency)?;
    let periods = round_periods(&raw, request.principal, rounded_payment, request.currency)?;
    let summary = ScheduleSummary::of(&periods);

    Ok(LoanSchedule::new(
        rounded_payment,
        request.currency,
        periods,
        summary.total_interest,
        summary.total_payment,
    ))
}

/// Quotes a product by resolving its rate policy first.
///
/// The application preview uses this with a [`RatePolicy::Fixed`] (or promo
/// override) product; the calculator uses it with the product's selectable
/// range and the slider value.
///
/// # Errors
///
/// As [`quote`], plus the policy resolution errors of
/// [`RatePolicy::resolve`].
pub fn quote_product(
    principal: Decimal,
    term_months: u32,
    currency: Currency,
    policy: &RatePolicy,
    requested_rate: Option<Decimal>,
) -> EngineResult<LoanSchedule> {
    let annual_rate = policy.resolve(requested_rate)?;
    let request =
        LoanQuoteRequest::new(principal, annual_rate, term_months).with_currency(currency);
    quote(&request)
}

fn to_f64(value: Decimal, operation: &'static str) -> Result<f64, ComputationError> {
    value
        .to_f64()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ComputationError::non_finite(operation, f64::NAN))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use zeel_core::ValidationError;

    use crate::error::EngineError;

    #[test]
    fn test_quote_rejects_before_computing() {
        let request = LoanQuoteRequest::new(dec!(-1), dec!(2), 12);
        let err = quote(&request).unwrap_err();
        assert_eq!(
            err,
            EngineError::Validation(ValidationError::NonPositivePrincipal { value: dec!(-1) })
        );
    }

    #[test]
    fn test_quote_is_deterministic() {
        let request = LoanQuoteRequest::new(dec!(1_000_000), dec!(2), 12);
        let first = quote(&request).unwrap();
        let second = quote(&request).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_quote_product_fixed() {
        let schedule = quote_product(
            dec!(3_000_000),
            6,
            Currency::MNT,
            &RatePolicy::Fixed(dec!(2)),
            None,
        )
        .unwrap();
        assert_eq!(schedule.term_months(), 6);
        assert_eq!(schedule.payment(), dec!(502_921));
    }

    #[test]
    fn test_quote_product_selectable_propagates_policy_error() {
        let policy = RatePolicy::Selectable {
            min: dec!(2),
            max: dec!(5),
        };
        let err = quote_product(dec!(1_000_000), 12, Currency::MNT, &policy, None).unwrap_err();
        assert_eq!(err, EngineError::Validation(ValidationError::RateRequired));
    }
}
