//! Business logic services for the cart API.
//!
//! # Services
//!
//! - [`cart`] - Cart operations: add-or-merge, enriched reads, removal, clear
//! - [`checkout`] - Checkout validation, receipt minting, best-effort cart clear
//!
//! Services are cheap borrowed handles over the stores held in application
//! state; construct one per call.

pub mod cart;
pub mod checkout;

pub use cart::{CartError, CartService};
pub use checkout::{CheckoutError, CheckoutService};
