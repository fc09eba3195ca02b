//! Catalog models.

use cartwheel_core::ProductId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A purchasable item in the catalog.
///
/// Products are seeded once at process start and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog identifier (seeded, e.g. `"1"`).
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price. Non-negative.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Image URL for the product card.
    pub image: String,
}
