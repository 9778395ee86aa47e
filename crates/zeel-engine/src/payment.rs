//! Fixed periodic payment solving.

use crate::error::ComputationError;

/// Computes the fixed payment that fully amortizes `principal` over
/// `term_months` periods at the given monthly rate.
///
/// Uses the ordinary annuity formula `P·r / (1 − (1+r)^−n)` when the rate is
/// positive, and the explicit `P / n` branch at zero rate so an interest-free
/// loan never divides by zero.
///
/// Callers are expected to have validated `principal > 0`, `term_months ≥ 1`
/// and `monthly_rate ≥ 0` beforehand; this function only guards the
/// arithmetic itself.
///
/// # Errors
///
/// Returns [`ComputationError::NonFinite`] if the discount factor or the
/// payment overflows to infinity or collapses to NaN, instead of letting
/// either propagate into the schedule.
pub fn annuity_payment(
    principal: f64,
    monthly_rate: f64,
    term_months: u32,
) -> Result<f64, ComputationError> {
    let payment = if monthly_rate == 0.0 {
        principal / f64::from(term_months)
    } else {
        let discount = (1.0 + monthly_rate).powf(-f64::from(term_months));
        if !discount.is_finite() {
            return Err(ComputationError::non_finite("discount factor", discount));
        }
        principal * monthly_rate / (1.0 - discount)
    };

    if !payment.is_finite() {
        return Err(ComputationError::non_finite("annuity payment", payment));
    }

    Ok(payment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rate::monthly_rate;
    use approx::assert_relative_eq;

    #[test]
    fn test_annuity_formula() {
        // ₮1,000,000 at 2%/year over 12 months
        let payment = annuity_payment(1_000_000.0, monthly_rate(2.0), 12).unwrap();
        assert_relative_eq!(payment, 84_238.867_284_103_31, epsilon = 1e-6);
    }

    #[test]
    fn test_zero_rate_divides_evenly() {
        let payment = annuity_payment(100_000.0, 0.0, 10).unwrap();
        assert_eq!(payment, 10_000.0);
    }

    #[test]
    fn test_single_period_pays_principal_plus_interest() {
        // For n=1 the formula reduces to P·(1+r)
        let r = monthly_rate(2.0);
        let payment = annuity_payment(500_000.0, r, 1).unwrap();
        assert_relative_eq!(payment, 500_000.0 * (1.0 + r), epsilon = 1e-9);
    }

    #[test]
    fn test_payment_exceeds_even_split_when_rate_positive() {
        let payment = annuity_payment(3_000_000.0, monthly_rate(2.0), 6).unwrap();
        assert!(payment > 3_000_000.0 / 6.0);
    }

    #[test]
    fn test_vanishing_rate_is_detected() {
        // 1 + 1e-300 rounds to exactly 1.0, collapsing the denominator;
        // the division must surface as an error, not an infinite payment.
        let result = annuity_payment(1_000_000.0, 1e-300, 12);
        assert!(matches!(
            result,
            Err(ComputationError::NonFinite { .. })
        ));
    }

    #[test]
    fn test_payment_overflow_is_detected() {
        // At n=1 the payment is P·(1+r); for P = f64::MAX that overflows.
        let result = annuity_payment(f64::MAX, monthly_rate(2.0), 1);
        assert!(matches!(result, Err(ComputationError::NonFinite { .. })));
    }
}
