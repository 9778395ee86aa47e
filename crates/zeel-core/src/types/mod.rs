//! Domain types for loan quoting.
//!
//! This module provides type-safe representations of the quote pipeline's
//! inputs and outputs:
//!
//! - [`LoanQuoteRequest`]: Validated quote parameters
//! - [`PaymentPeriod`]: One month's interest/principal/balance breakdown
//! - [`LoanSchedule`]: The full repayment schedule with totals
//! - [`Currency`]: Currency codes with minor-unit precision

mod currency;
mod period;
mod request;
mod schedule;

pub use currency::Currency;
pub use period::PaymentPeriod;
pub use request::LoanQuoteRequest;
pub use schedule::LoanSchedule;
