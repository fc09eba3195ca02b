//! Cart models.

use cartwheel_core::{CartEntryId, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One stored cart row binding a product to a quantity.
///
/// Invariant: the cart holds at most one entry per product; adds merge into
/// the existing entry instead of creating a second row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartEntry {
    /// Entry identifier (UUID v4, minted on insert).
    pub id: CartEntryId,
    /// The product this entry refers to.
    pub product_id: ProductId,
    /// Number of units. Always positive.
    pub quantity: u32,
}

/// A cart entry enriched with product details and a computed subtotal.
///
/// Derived on every read; never stored. The same shape is accepted back on
/// checkout as the submitted cart snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Cart entry identifier.
    pub id: CartEntryId,
    /// Number of units.
    pub quantity: u32,
    /// The product this line refers to.
    pub product_id: ProductId,
    /// Product display name.
    pub name: String,
    /// Unit price.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Product image URL.
    #[serde(default)]
    pub image: String,
    /// `quantity × price` for this line.
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,
}

/// The enriched cart: ordered line items plus a grand total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartView {
    /// Line items in entry-creation order.
    pub items: Vec<LineItem>,
    /// Sum of subtotals, rounded to cents (half-up).
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

impl CartView {
    /// An empty cart with a zero total.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: Decimal::ZERO,
        }
    }
}
