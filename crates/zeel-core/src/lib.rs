//! # Zeel Core
//!
//! Domain types and validation for the Zeel loan amortization engine.
//!
//! This crate provides the foundational building blocks used throughout Zeel:
//!
//! - **Types**: Domain-specific types like `LoanQuoteRequest`, `PaymentPeriod`,
//!   `LoanSchedule`, `Currency`
//! - **Validation**: Field-level request validation with structured errors
//!
//! ## Design Philosophy
//!
//! - **Explicit Inputs**: Every quote parameter is passed explicitly; nothing
//!   is read from ambient or global state
//! - **Value Semantics**: Requests and schedules are computed, returned, and
//!   discarded — there is no lifecycle or persistence here
//! - **Serializable Surface**: Every public type serializes to JSON for the
//!   display and export collaborators
//!
//! ## Example
//!
//! ```rust
//! use zeel_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let request = LoanQuoteRequest::new(dec!(1_000_000), dec!(2), 12);
//! assert!(request.validate().is_ok());
//! assert_eq!(request.currency, Currency::MNT);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::cast_possible_truncation)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreResult, ValidationError};
    pub use crate::types::{Currency, LoanQuoteRequest, LoanSchedule, PaymentPeriod};
}

// Re-export commonly used types at crate root
pub use error::{CoreResult, ValidationError};
pub use types::{Currency, LoanQuoteRequest, LoanSchedule, PaymentPeriod};
