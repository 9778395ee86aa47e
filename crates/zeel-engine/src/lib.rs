//! # Zeel Engine
//!
//! Loan amortization and repayment-schedule engine for the Zeel lending
//! platform.
//!
//! This crate provides:
//!
//! - **Rate conversion**: Annual percentage rate to monthly periodic rate
//! - **Payment solving**: The fixed annuity payment for a principal and term
//! - **Schedule generation**: Per-month interest/principal/balance breakdown
//! - **Totals**: Total interest and total payment over the schedule
//! - **Product policy**: Fixed vs. selectable rate, principal/term limits,
//!   applied caller-side
//!
//! The engine is a pure pipeline: no I/O, no ambient state, no retries. A
//! quote either produces a complete, internally consistent
//! [`LoanSchedule`](zeel_core::LoanSchedule) or an error. Amounts are
//! computed in full floating precision and rounded once, at the presentation
//! boundary, to the quote currency's minor unit; the final period absorbs
//! the rounding residue so the schedule repays the principal exactly.
//!
//! ## Example
//!
//! ```rust
//! use rust_decimal_macros::dec;
//! use zeel_engine::prelude::*;
//!
//! // ₮1,000,000 over 12 months at 2%/year
//! let request = LoanQuoteRequest::new(dec!(1_000_000), dec!(2), 12);
//! let schedule = quote(&request).unwrap();
//!
//! assert_eq!(schedule.payment(), dec!(84_239));
//! assert_eq!(schedule.total_interest(), dec!(10_865));
//! assert!(schedule.is_fully_amortized());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::similar_names)]

pub mod engine;
pub mod error;
pub mod payment;
pub mod policy;
pub mod rate;
pub mod rounding;
pub mod schedule;
pub mod summary;


/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::engine::{quote, quote_product};
    pub use crate::error::{ComputationError, EngineError, EngineResult};
    pub use crate::policy::{LoanLimits, RatePolicy};
    pub use crate::summary::ScheduleSummary;
    pub use zeel_core::prelude::*;
}

// Re-export commonly used items at crate root
pub use engine::{quote, quote_product};
pub use error::{ComputationError, EngineError, EngineResult};
pub use policy::{LoanLimits, RatePolicy};
