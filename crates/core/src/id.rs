//! Strongly-typed identifiers used across the ledger.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::LedgerError;

/// Identifier of a product (the ledger key).
///
/// Ordering is numeric, which is what gives listings and saved files their
/// ascending-id order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i64);

impl ProductId {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for ProductId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<ProductId> for i64 {
    fn from(value: ProductId) -> Self {
        value.0
    }
}

impl FromStr for ProductId {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<i64>()
            .map_err(|e| LedgerError::invalid_id(format!("ProductId {s:?}: {e}")))?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_surrounding_whitespace() {
        let id: ProductId = " 12 ".parse().unwrap();
        assert_eq!(id, ProductId::new(12));
        assert_eq!(id.to_string(), "12");
    }

    #[test]
    fn rejects_non_numeric() {
        let err = "12a".parse::<ProductId>().unwrap_err();
        match err {
            LedgerError::InvalidId(msg) => assert!(msg.contains("12a")),
            other => panic!("Expected InvalidId, got {other:?}"),
        }
    }

    #[test]
    fn orders_numerically() {
        let mut ids = vec![ProductId::new(10), ProductId::new(-1), ProductId::new(2)];
        ids.sort();
        assert_eq!(ids, vec![ProductId::new(-1), ProductId::new(2), ProductId::new(10)]);
    }

    #[test]
    fn serializes_transparently() {
        let json = serde_json::to_string(&ProductId::new(5)).unwrap();
        assert_eq!(json, "5");
    }
}
