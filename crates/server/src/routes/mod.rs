//! HTTP route handlers for the cart API.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health            - Health check (wired in main)
//!
//! # Products
//! GET    /api/products      - List all products
//!
//! # Cart
//! GET    /api/cart          - Enriched cart with line items and total
//! POST   /api/cart          - Add item (merges into an existing entry)
//! DELETE /api/cart/{id}     - Remove a cart entry
//!
//! # Checkout
//! POST   /api/checkout      - Validate a cart snapshot and mint a receipt
//! ```

pub mod cart;
pub mod checkout;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    use axum::routing::delete;

    Router::new()
        .route("/", get(cart::show).post(cart::add))
        .route("/{id}", delete(cart::remove))
}

/// Create all API routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(products::list))
        .nest("/cart", cart_routes())
        .route("/checkout", post(checkout::submit))
}

/// Create all routes for the server.
pub fn routes() -> Router<AppState> {
    Router::new().nest("/api", api_routes())
}
