//! Shared mutable cart store.

use std::sync::{Mutex, MutexGuard};

use cartwheel_core::{CartEntryId, ProductId};

use super::StoreError;
use crate::models::CartEntry;

/// The outcome of an add-or-merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpsertOutcome {
    /// The affected entry's id.
    pub id: CartEntryId,
    /// True if an existing entry's quantity was incremented, false if a new
    /// entry was created.
    pub merged: bool,
}

/// Mutable mapping from entry id to (product, quantity), one cart per
/// process.
///
/// Entries are kept in creation order, which is the order reads report.
/// Every operation takes the mutex exactly once; in particular the
/// add-or-merge lookup and increment happen under a single guard, so
/// concurrent adds of the same product serialize instead of losing updates.
#[derive(Debug, Default)]
pub struct CartStore {
    entries: Mutex<Vec<CartEntry>>,
}

impl CartStore {
    /// Create an empty cart store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` of a product, merging into an existing entry for the
    /// same product if there is one.
    ///
    /// The caller is responsible for validating that the product exists and
    /// that the quantity is positive; the store only upholds the
    /// one-entry-per-product invariant.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LockPoisoned` if the store mutex is poisoned.
    pub fn upsert(
        &self,
        product_id: &ProductId,
        quantity: u32,
    ) -> Result<UpsertOutcome, StoreError> {
        let mut entries = self.lock()?;

        if let Some(entry) = entries.iter_mut().find(|e| &e.product_id == product_id) {
            // Quantities are tiny in practice; saturate rather than wrap
            entry.quantity = entry.quantity.saturating_add(quantity);
            return Ok(UpsertOutcome {
                id: entry.id.clone(),
                merged: true,
            });
        }

        let id = CartEntryId::generate();
        entries.push(CartEntry {
            id: id.clone(),
            product_id: product_id.clone(),
            quantity,
        });
        Ok(UpsertOutcome { id, merged: false })
    }

    /// Delete the entry with the given id.
    ///
    /// Returns `true` if an entry was removed, `false` if the id was unknown
    /// (the cart is unchanged either way).
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LockPoisoned` if the store mutex is poisoned.
    pub fn remove(&self, entry_id: &CartEntryId) -> Result<bool, StoreError> {
        let mut entries = self.lock()?;
        let before = entries.len();
        entries.retain(|e| &e.id != entry_id);
        Ok(entries.len() < before)
    }

    /// A copy of all entries in creation order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LockPoisoned` if the store mutex is poisoned.
    pub fn snapshot(&self) -> Result<Vec<CartEntry>, StoreError> {
        Ok(self.lock()?.clone())
    }

    /// Remove all entries. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LockPoisoned` if the store mutex is poisoned.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.lock()?.clear();
        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<CartEntry>>, StoreError> {
        self.entries.lock().map_err(|_| StoreError::LockPoisoned)
    }

    /// Poison the store mutex so every subsequent operation fails, standing
    /// in for a persistence failure in tests.
    #[cfg(test)]
    pub(crate) fn poison(&self) {
        std::thread::scope(|scope| {
            let handle = scope.spawn(|| {
                let _guard = self.entries.lock();
                panic!("poisoning cart store for test");
            });
            assert!(handle.join().is_err());
        });
    }
}
