use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockledger_core::{Entity, LedgerError, LedgerResult, ProductId};

use crate::totals::Totals;

/// The mutable part of a product: everything `Ledger::update` replaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFields {
    pub name: String,
    pub category: String,
    pub unit_price: Decimal,
    /// Units on hand. Negative values (back-orders) are allowed.
    pub quantity: i64,
    /// Profit margin in percent (`20` means 20%).
    pub margin_percent: Decimal,
}

impl ProductFields {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        unit_price: Decimal,
        quantity: i64,
        margin_percent: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            unit_price,
            quantity,
            margin_percent,
        }
    }
}

/// One tracked product.
///
/// Records handed out by the ledger are copies; writing to their fields has
/// no effect on the ledger or its totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub unit_price: Decimal,
    pub quantity: i64,
    pub margin_percent: Decimal,
}

impl Record {
    pub fn new(id: ProductId, fields: ProductFields) -> Self {
        let ProductFields {
            name,
            category,
            unit_price,
            quantity,
            margin_percent,
        } = fields;

        Self {
            id,
            name,
            category,
            unit_price,
            quantity,
            margin_percent,
        }
    }

    pub fn fields(&self) -> ProductFields {
        ProductFields {
            name: self.name.clone(),
            category: self.category.clone(),
            unit_price: self.unit_price,
            quantity: self.quantity,
            margin_percent: self.margin_percent,
        }
    }

    /// `unit_price * quantity`, or `None` on overflow.
    pub fn revenue(&self) -> Option<Decimal> {
        self.unit_price.checked_mul(Decimal::from(self.quantity))
    }

    /// `revenue * margin_percent / 100`, or `None` on overflow.
    ///
    /// Quotients that do not terminate within 28 digits are rounded here,
    /// once per record. The ledger adds and removes that same rounded value,
    /// so totals never drift from it.
    pub fn profit(&self) -> Option<Decimal> {
        self.revenue()?
            .checked_mul(self.margin_percent)?
            .checked_div(Decimal::ONE_HUNDRED)
    }

    /// What this record adds to the ledger totals.
    pub fn contribution(&self) -> LedgerResult<Totals> {
        let value = self.revenue().ok_or(LedgerError::Overflow)?;
        let profit = self.profit().ok_or(LedgerError::Overflow)?;
        Ok(Totals::new(value, profit))
    }
}

impl Entity for Record {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.id
    }
}
