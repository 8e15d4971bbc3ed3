use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use tracing::debug;

use stockledger_core::{LedgerError, LedgerResult, ProductId};

use crate::record::{ProductFields, Record};
use crate::totals::Totals;

/// Ordered store of products plus their running totals.
///
/// `records` and `totals` only change together, inside a single `&mut self`
/// call. Each mutation computes the next totals first (which is where
/// overflow is detected) and writes records and totals afterwards, so a failed
/// call leaves both untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    records: BTreeMap<ProductId, Record>,
    totals: Totals,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.records.contains_key(&id)
    }

    /// Current `(value, profit)` aggregates. Never rescans.
    pub fn totals(&self) -> Totals {
        self.totals
    }

    /// Insert a new product. Fails with `DuplicateKey` if the id is taken.
    pub fn add(&mut self, record: Record) -> LedgerResult<()> {
        let id = record.id;
        let Entry::Vacant(slot) = self.records.entry(id) else {
            return Err(LedgerError::duplicate_key(id));
        };

        let next = self.totals.checked_add(record.contribution()?)?;
        slot.insert(record);
        self.totals = next;

        debug!(product_id = %id, totals = ?self.totals, "product added");
        Ok(())
    }

    /// Remove a product, returning what was stored.
    pub fn remove(&mut self, id: ProductId) -> LedgerResult<Record> {
        let Entry::Occupied(entry) = self.records.entry(id) else {
            return Err(LedgerError::not_found(id));
        };

        let next = self.totals.checked_sub(entry.get().contribution()?)?;
        let removed = entry.remove();
        self.totals = next;

        debug!(product_id = %id, totals = ?self.totals, "product removed");
        Ok(removed)
    }

    /// Borrow a stored product.
    pub fn get(&self, id: ProductId) -> Option<&Record> {
        self.records.get(&id)
    }

    /// Copy of a stored product.
    pub fn find(&self, id: ProductId) -> Option<Record> {
        self.get(id).cloned()
    }

    /// Replace every mutable field of an existing product.
    ///
    /// The old contribution is taken out of the totals and the new one put
    /// in, as one step.
    pub fn update(&mut self, id: ProductId, fields: ProductFields) -> LedgerResult<()> {
        let Some(current) = self.records.get_mut(&id) else {
            return Err(LedgerError::not_found(id));
        };

        let replacement = Record::new(id, fields);
        let next = self
            .totals
            .checked_sub(current.contribution()?)?
            .checked_add(replacement.contribution()?)?;
        *current = replacement;
        self.totals = next;

        debug!(product_id = %id, totals = ?self.totals, "product updated");
        Ok(())
    }

    /// Products in ascending id order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Record> + ExactSizeIterator + '_ {
        self.records.values()
    }

    /// Copies of all products in ascending id order.
    pub fn list(&self) -> Vec<Record> {
        self.iter().cloned().collect()
    }

    /// Drop every product and zero the totals.
    pub fn clear(&mut self) {
        self.records.clear();
        self.totals = Totals::ZERO;
    }

    /// Insert or replace without the duplicate check. Used by the loader,
    /// where a later line with the same id wins.
    pub(crate) fn upsert(&mut self, record: Record) -> LedgerResult<Option<Record>> {
        let previous = match self.records.get(&record.id) {
            Some(existing) => existing.contribution()?,
            None => Totals::ZERO,
        };
        let next = self
            .totals
            .checked_sub(previous)?
            .checked_add(record.contribution()?)?;

        let replaced = self.records.insert(record.id, record);
        self.totals = next;
        Ok(replaced)
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Record;
    type IntoIter = std::collections::btree_map::Values<'a, ProductId, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.values()
    }
}
