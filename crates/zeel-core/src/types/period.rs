//! A single repayment period.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One month's breakdown of a repayment schedule.
///
/// Amounts are at the quote currency's minor-unit precision. The `payment`
/// equals `interest + principal` on every period except possibly the final
/// one, where the schedule's rounding residue is absorbed into the principal
/// portion so the schedule repays the loan principal exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentPeriod {
    /// Month index, 1-based, up to the term length
    pub month: u32,
    /// Interest portion of this month's payment
    pub interest: Decimal,
    /// Principal portion of this month's payment
    pub principal: Decimal,
    /// The fixed periodic payment
    pub payment: Decimal,
    /// Outstanding balance after this month's payment
    pub remaining_balance: Decimal,
}

impl PaymentPeriod {
    /// Creates a new payment period.
    #[must_use]
    pub fn new(
        month: u32,
        interest: Decimal,
        principal: Decimal,
        payment: Decimal,
        remaining_balance: Decimal,
    ) -> Self {
        Self {
            month,
            interest,
            principal,
            payment,
            remaining_balance,
        }
    }

    /// Returns the amount by which this period's payment differs from its
    /// interest + principal split.
    ///
    /// Zero everywhere except possibly the final period, which absorbs the
    /// schedule's rounding residue.
    #[must_use]
    pub fn rounding_residue(&self) -> Decimal {
        self.payment - self.interest - self.principal
    }

    /// Returns true once the loan is fully repaid.
    #[must_use]
    pub fn settles_loan(&self) -> bool {
        self.remaining_balance == Decimal::ZERO
    }
}
