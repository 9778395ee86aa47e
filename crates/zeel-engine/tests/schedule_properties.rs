//! Property tests for the schedule invariants.
//!
//! These hold for every valid combination of principal, rate, and term, not
//! just the product scenarios: the schedule has one period per month, repays
//! the principal exactly, and walks the balance monotonically to zero.

use proptest::prelude::*;
use rust_decimal::Decimal;

use zeel_core::LoanQuoteRequest;
use zeel_engine::quote;

fn requests() -> impl Strategy<Value = LoanQuoteRequest> {
    (
        1_000i64..=50_000_000,
        0u32..=3_600, // annual rate in hundredths of a percent, up to 36%
        1u32..=360,
    )
        .prop_map(|(principal, rate_centipct, term)| {
            LoanQuoteRequest::new(
                Decimal::from(principal),
                Decimal::new(i64::from(rate_centipct), 2),
                term,
            )
        })
}

proptest! {
    #[test]
    fn one_period_per_month(request in requests()) {
        let schedule = quote(&request).unwrap();
        prop_assert_eq!(schedule.term_months(), request.term_months);

        for (index, period) in schedule.periods().iter().enumerate() {
            prop_assert_eq!(period.month, index as u32 + 1);
        }
    }

    #[test]
    fn principal_portions_repay_the_loan_exactly(request in requests()) {
        let schedule = quote(&request).unwrap();
        prop_assert_eq!(schedule.total_principal(), request.principal);
    }

    #[test]
    fn balance_is_non_increasing_and_ends_at_zero(request in requests()) {
        let schedule = quote(&request).unwrap();

        let mut previous = request.principal;
        for period in schedule.periods() {
            prop_assert!(period.remaining_balance <= previous);
            previous = period.remaining_balance;
        }
        prop_assert_eq!(previous, Decimal::ZERO);
    }

    #[test]
    fn totals_match_the_period_sums(request in requests()) {
        let schedule = quote(&request).unwrap();

        let interest: Decimal = schedule.periods().iter().map(|p| p.interest).sum();
        let payments: Decimal = schedule.periods().iter().map(|p| p.payment).sum();

        prop_assert_eq!(schedule.total_interest(), interest);
        prop_assert_eq!(schedule.total_payment(), payments);
        prop_assert_eq!(
            schedule.total_payment(),
            schedule.payment() * Decimal::from(schedule.term_months())
        );
    }

    #[test]
    fn interest_free_loans_accrue_nothing(
        principal in 1_000i64..=50_000_000,
        term in 1u32..=360,
    ) {
        let request = LoanQuoteRequest::new(Decimal::from(principal), Decimal::ZERO, term);
        let schedule = quote(&request).unwrap();

        prop_assert_eq!(schedule.total_interest(), Decimal::ZERO);
        prop_assert_eq!(schedule.total_principal(), request.principal);

        // Every payment is the rounded even split, so the payment total can
        // drift from the principal by at most half a minor unit per month.
        let drift = schedule.total_payment() - request.principal;
        prop_assert!(drift.abs() * Decimal::TWO <= Decimal::from(term));
    }

    #[test]
    fn identical_requests_quote_identically(request in requests()) {
        let first = quote(&request).unwrap();
        let second = quote(&request).unwrap();
        prop_assert_eq!(first, second);
    }
}
