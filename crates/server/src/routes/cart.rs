//! Cart route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use cartwheel_core::{CartEntryId, ProductId};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::models::CartView;
use crate::services::CartService;
use crate::state::AppState;

/// Add-to-cart request body.
///
/// `product_id` is an `Option` so a missing field gets the 400 response and
/// message clients expect, instead of a deserialization rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub product_id: Option<String>,
    pub quantity: Option<i64>,
}

/// Response for a successful add-to-cart.
#[derive(Debug, Serialize)]
pub struct AddToCartResponse {
    pub message: String,
    pub id: CartEntryId,
}

/// Response for a successful cart-entry removal.
#[derive(Debug, Serialize)]
pub struct RemoveFromCartResponse {
    pub message: String,
}

/// Get the enriched cart: line items in creation order plus the total.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Result<Json<CartView>> {
    let view = CartService::new(state.catalog(), state.cart()).get_cart()?;
    Ok(Json(view))
}

/// Add an item to the cart, merging into an existing entry for the same
/// product. Quantity defaults to 1.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    Json(body): Json<AddToCartRequest>,
) -> Result<Json<AddToCartResponse>> {
    let Some(product_id) = body.product_id else {
        return Err(AppError::BadRequest("Product ID is required".to_string()));
    };
    let product_id = ProductId::new(product_id);
    let quantity = body.quantity.unwrap_or(1);

    let outcome = CartService::new(state.catalog(), state.cart()).add_item(&product_id, quantity)?;

    let message = if outcome.merged {
        "Cart updated successfully"
    } else {
        "Item added to cart"
    };
    Ok(Json(AddToCartResponse {
        message: message.to_string(),
        id: outcome.id,
    }))
}

/// Remove a cart entry entirely.
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RemoveFromCartResponse>> {
    let entry_id = CartEntryId::new(id);
    CartService::new(state.catalog(), state.cart()).remove_item(&entry_id)?;

    Ok(Json(RemoveFromCartResponse {
        message: "Item removed from cart".to_string(),
    }))
}
