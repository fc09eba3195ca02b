//! Product route handlers.

use axum::{Json, extract::State};
use tracing::instrument;

use crate::models::Product;
use crate::state::AppState;

/// List all purchasable products in seed order.
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.catalog().list().to_vec())
}
