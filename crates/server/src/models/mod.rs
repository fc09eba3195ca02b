//! Domain and wire models for the cart API.
//!
//! These structs define the JSON shapes the API exposes. Money fields are
//! `rust_decimal::Decimal` internally and serialize as JSON numbers via
//! `rust_decimal::serde::float`, matching the wire format clients already
//! consume.

pub mod cart;
pub mod catalog;
pub mod receipt;

pub use cart::{CartEntry, CartView, LineItem};
pub use catalog::Product;
pub use receipt::{CustomerInfo, Receipt};
