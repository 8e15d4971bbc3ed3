//! Ledger error model.

use thiserror::Error;

use crate::id::ProductId;

/// Result type used across the ledger crates.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Ledger-level error.
///
/// A malformed line during load never becomes a `LedgerError`; it is
/// skipped and listed in the load report instead.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// `add` was called with an id that is already present.
    #[error("product {0} already exists")]
    DuplicateKey(ProductId),

    /// The requested product is not in the ledger.
    #[error("product {0} not found")]
    NotFound(ProductId),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A text field holds a character the flat file format cannot represent.
    #[error("product {id}: {field} contains a comma or line break")]
    InvalidField { id: ProductId, field: &'static str },

    /// Decimal arithmetic left the representable range.
    #[error("arithmetic overflow while updating totals")]
    Overflow,

    /// A total would need more significant digits than a decimal holds and
    /// could only be stored rounded.
    #[error("totals cannot be kept exact at this precision")]
    Precision,

    /// The backing file could not be opened, read or written.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl LedgerError {
    pub fn duplicate_key(id: ProductId) -> Self {
        Self::DuplicateKey(id)
    }

    pub fn not_found(id: ProductId) -> Self {
        Self::NotFound(id)
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn invalid_field(id: ProductId, field: &'static str) -> Self {
        Self::InvalidField { id, field }
    }
}
