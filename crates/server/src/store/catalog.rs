//! Read-only product catalog.

use std::collections::HashMap;

use cartwheel_core::ProductId;
use rust_decimal::Decimal;

use crate::models::Product;

/// Immutable table of purchasable items.
///
/// Seeded once at process start; lookups never take a lock because nothing
/// mutates after construction.
#[derive(Debug)]
pub struct CatalogStore {
    products: Vec<Product>,
    by_id: HashMap<ProductId, usize>,
}

impl CatalogStore {
    /// Build a catalog from seed data, indexing by product id.
    ///
    /// If the seed contains duplicate ids, the last occurrence wins the
    /// index slot; seed data is trusted, not validated.
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        let by_id = products
            .iter()
            .enumerate()
            .map(|(idx, p)| (p.id.clone(), idx))
            .collect();
        Self { products, by_id }
    }

    /// All products in seed order.
    #[must_use]
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.by_id.get(id).and_then(|&idx| self.products.get(idx))
    }

    /// Whether a product id resolves in the catalog.
    #[must_use]
    pub fn contains(&self, id: &ProductId) -> bool {
        self.by_id.contains_key(id)
    }
}

/// The built-in demo catalog the server seeds at startup.
#[must_use]
pub fn demo_catalog() -> Vec<Product> {
    let seed: [(&str, &str, i64, &str); 8] = [
        (
            "1",
            "Wireless Headphones",
            9999,
            "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=300&h=300&fit=crop",
        ),
        (
            "2",
            "Smartphone Case",
            2499,
            "https://images.unsplash.com/photo-1601593346740-925612772716?w=300&h=300&fit=crop",
        ),
        (
            "3",
            "Bluetooth Speaker",
            7999,
            "https://images.unsplash.com/photo-1608043152269-423dbba4e7e1?w=300&h=300&fit=crop",
        ),
        (
            "4",
            "USB-C Cable",
            1999,
            "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=300&h=300&fit=crop",
        ),
        (
            "5",
            "Laptop Stand",
            4999,
            "https://images.unsplash.com/photo-1527864550417-7fd91fc51a46?w=300&h=300&fit=crop",
        ),
        (
            "6",
            "Wireless Mouse",
            3499,
            "https://images.unsplash.com/photo-1615663245857-ac93bb7c39e7?w=300&h=300&fit=crop",
        ),
        (
            "7",
            "Mechanical Keyboard",
            8999,
            "https://images.unsplash.com/photo-1541140532154-b024d705b90a?w=300&h=300&fit=crop",
        ),
        (
            "8",
            "4K Monitor",
            29999,
            "https://images.unsplash.com/photo-1527443224154-c4a3942d3acf?w=300&h=300&fit=crop",
        ),
    ];

    seed.into_iter()
        .map(|(id, name, cents, image)| Product {
            id: ProductId::new(id),
            name: name.to_string(),
            // Prices seeded in cents to stay exact
            price: Decimal::new(cents, 2),
            image: image.to_string(),
        })
        .collect()
}
