//! Cart business logic.

use cartwheel_core::{CartEntryId, ProductId, line_subtotal, round_to_cents};
use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{CartView, LineItem};
use crate::store::cart::UpsertOutcome;
use crate::store::{CartStore, CatalogStore, StoreError};

/// Errors from cart operations.
#[derive(Debug, Error)]
pub enum CartError {
    /// The product id does not resolve in the catalog.
    #[error("unknown product: {0}")]
    UnknownProduct(ProductId),

    /// No cart entry with the given id exists.
    #[error("unknown cart entry: {0}")]
    UnknownEntry(CartEntryId),

    /// The requested quantity is zero or negative.
    #[error("quantity must be positive, got {0}")]
    InvalidQuantity(i64),

    /// The store layer failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Cart operations over the catalog and cart stores.
pub struct CartService<'a> {
    catalog: &'a CatalogStore,
    cart: &'a CartStore,
}

impl<'a> CartService<'a> {
    /// Create a new cart service borrowing the shared stores.
    #[must_use]
    pub const fn new(catalog: &'a CatalogStore, cart: &'a CartStore) -> Self {
        Self { catalog, cart }
    }

    /// Add `quantity` of a product to the cart, merging into the existing
    /// entry for that product if one exists.
    ///
    /// Returns the affected entry's id and whether it was a merge, so the
    /// caller needs no follow-up read.
    ///
    /// # Errors
    ///
    /// - `CartError::InvalidQuantity` if `quantity` is zero or negative
    /// - `CartError::UnknownProduct` if the product is not in the catalog
    /// - `CartError::Store` if the cart store fails
    pub fn add_item(
        &self,
        product_id: &ProductId,
        quantity: i64,
    ) -> Result<UpsertOutcome, CartError> {
        let quantity =
            u32::try_from(quantity).map_err(|_| CartError::InvalidQuantity(quantity))?;
        if quantity == 0 {
            return Err(CartError::InvalidQuantity(0));
        }
        if !self.catalog.contains(product_id) {
            return Err(CartError::UnknownProduct(product_id.clone()));
        }

        Ok(self.cart.upsert(product_id, quantity)?)
    }

    /// Delete a cart entry entirely (no partial-quantity removal).
    ///
    /// # Errors
    ///
    /// - `CartError::UnknownEntry` if no entry with that id exists
    /// - `CartError::Store` if the cart store fails
    pub fn remove_item(&self, entry_id: &CartEntryId) -> Result<(), CartError> {
        if self.cart.remove(entry_id)? {
            Ok(())
        } else {
            Err(CartError::UnknownEntry(entry_id.clone()))
        }
    }

    /// Join every cart entry with its product, computing subtotals and the
    /// rounded grand total. Items come back in entry-creation order.
    ///
    /// # Errors
    ///
    /// - `CartError::Store` if the cart store fails, or if an entry
    ///   references a product the catalog does not know
    pub fn get_cart(&self) -> Result<CartView, CartError> {
        let entries = self.cart.snapshot()?;

        let mut items = Vec::with_capacity(entries.len());
        let mut total = Decimal::ZERO;
        for entry in entries {
            let product = self.catalog.get(&entry.product_id).ok_or_else(|| {
                StoreError::DataCorruption(format!(
                    "cart entry {} references unknown product {}",
                    entry.id, entry.product_id
                ))
            })?;

            let subtotal = line_subtotal(product.price, entry.quantity);
            total += subtotal;
            items.push(LineItem {
                id: entry.id,
                quantity: entry.quantity,
                product_id: entry.product_id,
                name: product.name.clone(),
                price: product.price,
                image: product.image.clone(),
                subtotal,
            });
        }

        Ok(CartView {
            items,
            total: round_to_cents(total),
        })
    }

    /// Remove all cart entries. Idempotent.
    ///
    /// # Errors
    ///
    /// - `CartError::Store` if the cart store fails
    pub fn clear(&self) -> Result<(), CartError> {
        Ok(self.cart.clear()?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::store::demo_catalog;

    fn stores() -> (CatalogStore, CartStore) {
        (CatalogStore::new(demo_catalog()), CartStore::new())
    }

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_add_unknown_product_fails() {
        let (catalog, cart) = stores();
        let service = CartService::new(&catalog, &cart);

        let err = service.add_item(&ProductId::new("999"), 1).unwrap_err();
        assert!(matches!(err, CartError::UnknownProduct(_)));
        assert!(service.get_cart().unwrap().items.is_empty());
    }

    #[test]
    fn test_add_non_positive_quantity_fails() {
        let (catalog, cart) = stores();
        let service = CartService::new(&catalog, &cart);

        assert!(matches!(
            service.add_item(&ProductId::new("1"), 0),
            Err(CartError::InvalidQuantity(0))
        ));
        assert!(matches!(
            service.add_item(&ProductId::new("1"), -3),
            Err(CartError::InvalidQuantity(-3))
        ));
    }

    #[test]
    fn test_repeated_adds_merge_into_one_entry() {
        let (catalog, cart) = stores();
        let service = CartService::new(&catalog, &cart);
        let product = ProductId::new("1");

        let first = service.add_item(&product, 2).unwrap();
        assert!(!first.merged);

        let second = service.add_item(&product, 1).unwrap();
        assert!(second.merged);
        assert_eq!(second.id, first.id);

        let view = service.get_cart().unwrap();
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items.first().unwrap().quantity, 3);
    }

    #[test]
    fn test_totals_match_worked_example() {
        // Seed product "1" costs 99.99
        let (catalog, cart) = stores();
        let service = CartService::new(&catalog, &cart);
        let product = ProductId::new("1");

        service.add_item(&product, 2).unwrap();
        assert_eq!(service.get_cart().unwrap().total, dec("199.98"));

        service.add_item(&product, 1).unwrap();
        let view = service.get_cart().unwrap();
        assert_eq!(view.total, dec("299.97"));
        assert_eq!(view.items.len(), 1);
    }

    #[test]
    fn test_empty_cart_total_is_zero() {
        let (catalog, cart) = stores();
        let view = CartService::new(&catalog, &cart).get_cart().unwrap();

        assert!(view.items.is_empty());
        assert_eq!(view.total, Decimal::ZERO);
    }

    #[test]
    fn test_get_cart_enriches_line_items() {
        let (catalog, cart) = stores();
        let service = CartService::new(&catalog, &cart);

        service.add_item(&ProductId::new("4"), 2).unwrap();
        let view = service.get_cart().unwrap();

        let item = view.items.first().unwrap();
        assert_eq!(item.name, "USB-C Cable");
        assert_eq!(item.price, dec("19.99"));
        assert_eq!(item.subtotal, dec("39.98"));
        assert!(item.image.starts_with("https://"));
    }

    #[test]
    fn test_total_sums_across_products() {
        let (catalog, cart) = stores();
        let service = CartService::new(&catalog, &cart);

        service.add_item(&ProductId::new("2"), 1).unwrap(); // 24.99
        service.add_item(&ProductId::new("4"), 3).unwrap(); // 3 x 19.99
        assert_eq!(service.get_cart().unwrap().total, dec("84.96"));
    }

    #[test]
    fn test_remove_unknown_entry_fails_and_preserves_cart() {
        let (catalog, cart) = stores();
        let service = CartService::new(&catalog, &cart);
        service.add_item(&ProductId::new("1"), 1).unwrap();

        let err = service
            .remove_item(&CartEntryId::new("no-such-entry"))
            .unwrap_err();
        assert!(matches!(err, CartError::UnknownEntry(_)));
        assert_eq!(service.get_cart().unwrap().items.len(), 1);
    }

    #[test]
    fn test_remove_then_empty_total() {
        let (catalog, cart) = stores();
        let service = CartService::new(&catalog, &cart);

        let added = service.add_item(&ProductId::new("3"), 2).unwrap();
        service.remove_item(&added.id).unwrap();

        let view = service.get_cart().unwrap();
        assert!(view.items.is_empty());
        assert_eq!(view.total, Decimal::ZERO);
    }

    #[test]
    fn test_clear_empties_the_cart() {
        let (catalog, cart) = stores();
        let service = CartService::new(&catalog, &cart);

        service.add_item(&ProductId::new("1"), 1).unwrap();
        service.add_item(&ProductId::new("2"), 1).unwrap();
        service.clear().unwrap();

        assert!(service.get_cart().unwrap().items.is_empty());
    }
}
