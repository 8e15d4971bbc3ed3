//! Inventory ledger.
//!
//! Products are kept in an ordered map keyed by [`ProductId`], alongside two
//! running totals (inventory value and estimated profit) that every mutation
//! keeps in step with the records. The [`codec`] and [`persist`] modules move
//! whole ledgers to and from a flat comma-separated text file.

pub mod codec;
pub mod ledger;
pub mod persist;
pub mod record;
pub mod totals;

pub use codec::{FieldError, LoadReport, SkippedLine};
pub use ledger::Ledger;
pub use record::{ProductFields, Record};
pub use totals::Totals;

pub use stockledger_core::{LedgerError, LedgerResult, ProductId};
