//! `stockledger-core` — shared building blocks for the inventory ledger.
//!
//! This crate contains **pure domain** primitives (no IO, no terminal concerns).

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{LedgerError, LedgerResult};
pub use id::ProductId;
pub use value_object::ValueObject;
