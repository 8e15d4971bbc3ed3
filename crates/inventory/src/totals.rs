use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockledger_core::{LedgerError, LedgerResult, ValueObject};

/// Running aggregates of a ledger: total inventory value and estimated profit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Totals {
    pub value: Decimal,
    pub profit: Decimal,
}

impl ValueObject for Totals {}

impl Totals {
    pub const ZERO: Totals = Totals {
        value: Decimal::ZERO,
        profit: Decimal::ZERO,
    };

    pub const fn new(value: Decimal, profit: Decimal) -> Self {
        Self { value, profit }
    }

    /// Component-wise sum. Fails with `Overflow` out of range, or with
    /// `Precision` if either sum would have to be rounded.
    pub fn checked_add(self, other: Totals) -> LedgerResult<Totals> {
        Ok(Totals {
            value: exact_add(self.value, other.value)?,
            profit: exact_add(self.profit, other.profit)?,
        })
    }

    pub fn checked_sub(self, other: Totals) -> LedgerResult<Totals> {
        Ok(Totals {
            value: exact_add(self.value, -other.value)?,
            profit: exact_add(self.profit, -other.profit)?,
        })
    }
}

/// `a + b`, refusing results that rust_decimal had to round to fit in 96 bits.
fn exact_add(a: Decimal, b: Decimal) -> LedgerResult<Decimal> {
    let sum = a.checked_add(b).ok_or(LedgerError::Overflow)?;
    if sum.checked_sub(b) != Some(a) || sum.checked_sub(a) != Some(b) {
        return Err(LedgerError::Precision);
    }
    Ok(sum)
}
