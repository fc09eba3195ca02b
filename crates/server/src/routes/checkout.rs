//! Checkout route handlers.

use axum::{Json, extract::State};
use serde::Deserialize;
use tracing::instrument;

use crate::error::Result;
use crate::models::{CustomerInfo, LineItem, Receipt};
use crate::services::CheckoutService;
use crate::state::AppState;

/// Checkout request body: the client's cart snapshot plus customer details.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    #[serde(default)]
    pub cart_items: Vec<LineItem>,
    pub customer_info: Option<CustomerInfo>,
}

/// Validate the submitted cart and return a receipt.
///
/// On success the server-side cart is cleared best-effort.
#[instrument(skip(state, body), fields(items = body.cart_items.len()))]
pub async fn submit(
    State(state): State<AppState>,
    Json(body): Json<CheckoutRequest>,
) -> Result<Json<Receipt>> {
    let receipt =
        CheckoutService::new(state.cart()).checkout(body.cart_items, body.customer_info)?;
    Ok(Json(receipt))
}
