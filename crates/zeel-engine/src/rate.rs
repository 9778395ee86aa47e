//! Annual-to-periodic rate conversion.

/// Repayment periods per year. Monthly compounding is the only period
/// granularity the platform quotes in.
pub const PERIODS_PER_YEAR: u32 = 12;

/// Converts an annual percentage rate to the monthly periodic rate.
///
/// `2` (for 2%/year) becomes `0.02 / 12 ≈ 0.0016667`. Whether the annual
/// rate is a fixed product rate or a slider selection is caller policy; by
/// the time a rate reaches this function the distinction is gone.
///
/// # Example
///
/// ```rust
/// use zeel_engine::rate::monthly_rate;
///
/// let r = monthly_rate(2.0);
/// assert!((r - 0.0016666666666666668).abs() < 1e-15);
/// ```
#[must_use]
pub fn monthly_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / 100.0 / f64::from(PERIODS_PER_YEAR)
}
