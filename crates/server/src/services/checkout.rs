//! Checkout business logic.

use cartwheel_core::{Email, EmailError, ReceiptId, ReceiptStatus, line_subtotal, round_to_cents};
use chrono::Utc;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{CustomerInfo, LineItem, Receipt};
use crate::store::CartStore;

/// Errors from checkout validation.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The submitted item list is empty.
    #[error("cart is empty")]
    EmptyCart,

    /// No customer info was submitted.
    #[error("customer info is required")]
    MissingCustomerInfo,

    /// The customer name is blank.
    #[error("customer name is required")]
    MissingName,

    /// The customer email fails structural validation.
    #[error("invalid customer email: {0}")]
    InvalidEmail(#[from] EmailError),
}

/// Checkout over the shared cart store.
pub struct CheckoutService<'a> {
    cart: &'a CartStore,
}

impl<'a> CheckoutService<'a> {
    /// Create a new checkout service borrowing the shared cart store.
    #[must_use]
    pub const fn new(cart: &'a CartStore) -> Self {
        Self { cart }
    }

    /// Validate a submitted cart snapshot and mint a receipt.
    ///
    /// The receipt total is the sum of `quantity × price` over the submitted
    /// items, rounded to cents. On success the cart store is cleared as a
    /// best-effort side effect: a failed clear is logged but the receipt is
    /// still returned. Validation runs before any side effect, so a rejected
    /// checkout leaves the cart untouched.
    ///
    /// # Errors
    ///
    /// - `CheckoutError::EmptyCart` if `items` is empty
    /// - `CheckoutError::MissingCustomerInfo` / `MissingName` /
    ///   `InvalidEmail` if the customer details fail validation
    pub fn checkout(
        &self,
        items: Vec<LineItem>,
        customer_info: Option<CustomerInfo>,
    ) -> Result<Receipt, CheckoutError> {
        if items.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        let customer_info = customer_info.ok_or(CheckoutError::MissingCustomerInfo)?;
        if customer_info.name.trim().is_empty() {
            return Err(CheckoutError::MissingName);
        }
        // Structural check only; the receipt echoes the raw submitted string
        Email::parse(&customer_info.email)?;

        let total: Decimal = items
            .iter()
            .map(|item| line_subtotal(item.price, item.quantity))
            .sum();

        let receipt = Receipt {
            id: ReceiptId::generate(),
            timestamp: Utc::now(),
            customer_info,
            items,
            total: round_to_cents(total),
            status: ReceiptStatus::Completed,
        };

        // Best-effort: checkout success is not contingent on the clear
        if let Err(e) = self.cart.clear() {
            tracing::error!(error = %e, receipt_id = %receipt.id, "failed to clear cart after checkout");
        }

        Ok(receipt)
    }
}
