//! In-memory stores for catalog and cart state.
//!
//! All state lives in process memory and is lost on restart; there is no
//! on-disk format and no migration story. The catalog is seeded once at
//! startup and read-only thereafter. The cart is a single shared mutable
//! store guarded by a mutex (one cart per process, no per-user isolation).

pub mod cart;
pub mod catalog;

pub use cart::CartStore;
pub use catalog::{CatalogStore, demo_catalog};

use thiserror::Error;

/// Errors surfaced by the store layer.
///
/// These are the in-memory analogues of persistence failures and map to
/// HTTP 500 at the API boundary.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A store mutex was poisoned by a panicking writer.
    #[error("store lock poisoned")]
    LockPoisoned,

    /// Stored data violates an invariant (e.g. a cart row referencing a
    /// product the catalog does not know).
    #[error("store data corrupted: {0}")]
    DataCorruption(String),
}
