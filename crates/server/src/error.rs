//! Unified error handling for the cart API.
//!
//! Provides a unified `AppError` type that maps the service and store error
//! taxonomy onto HTTP status codes with a JSON `{"error": message}` body.
//! All route handlers should return `Result<T, AppError>`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::services::{CartError, CheckoutError};
use crate::store::StoreError;

/// Application-level error type for the cart API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Cart operation failed.
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    /// Checkout validation failed.
    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// Store operation failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log server errors before the detail is masked
        if matches!(self, Self::Store(_) | Self::Cart(CartError::Store(_))) {
            tracing::error!(error = %self, "Request error");
        }

        let status = match &self {
            Self::Cart(err) => match err {
                CartError::UnknownProduct(_) | CartError::UnknownEntry(_) => StatusCode::NOT_FOUND,
                CartError::InvalidQuantity(_) => StatusCode::BAD_REQUEST,
                CartError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Checkout(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Cart(err) => match err {
                CartError::UnknownProduct(_) => "Product not found".to_string(),
                CartError::UnknownEntry(_) => "Cart item not found".to_string(),
                CartError::InvalidQuantity(q) => {
                    format!("Quantity must be a positive integer, got {q}")
                }
                CartError::Store(_) => "Internal server error".to_string(),
            },
            Self::Checkout(err) => match err {
                CheckoutError::EmptyCart => "Cart is empty".to_string(),
                CheckoutError::MissingCustomerInfo => "Customer info is required".to_string(),
                CheckoutError::MissingName => "Customer name is required".to_string(),
                CheckoutError::InvalidEmail(e) => format!("Invalid customer email: {e}"),
            },
            Self::Store(_) => "Internal server error".to_string(),
            Self::BadRequest(msg) => msg.clone(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use cartwheel_core::{CartEntryId, ProductId};

    use super::*;

    fn get_status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_not_found_statuses() {
        assert_eq!(
            get_status(CartError::UnknownProduct(ProductId::new("999")).into()),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(CartError::UnknownEntry(CartEntryId::new("nope")).into()),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_bad_request_statuses() {
        assert_eq!(
            get_status(CartError::InvalidQuantity(-1).into()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(CheckoutError::EmptyCart.into()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::BadRequest("Product ID is required".to_string())),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_store_errors_are_internal_and_masked() {
        let response = AppError::Store(StoreError::LockPoisoned).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response =
            AppError::Cart(CartError::Store(StoreError::DataCorruption("bad row".to_string())))
                .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::BadRequest("invalid input".to_string());
        assert_eq!(err.to_string(), "Bad request: invalid input");

        let err: AppError = CheckoutError::EmptyCart.into();
        assert_eq!(err.to_string(), "Checkout error: cart is empty");
    }
}
