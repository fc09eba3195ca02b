//! Checkout receipt models.

use cartwheel_core::{ReceiptId, ReceiptStatus};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::LineItem;

/// Customer details submitted with a checkout.
///
/// The email is kept as the raw submitted string; structural validation
/// happens in the checkout service before a receipt is minted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerInfo {
    /// Customer display name. Must be non-blank.
    pub name: String,
    /// Customer email address. Must parse structurally.
    pub email: String,
}

/// Immutable record produced by a successful checkout.
///
/// Receipts are returned to the caller and not retained; there is no order
/// history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Receipt identifier (UUID v4).
    pub id: ReceiptId,
    /// Checkout time.
    pub timestamp: DateTime<Utc>,
    /// The customer details as submitted.
    pub customer_info: CustomerInfo,
    /// Snapshot of the submitted line items.
    pub items: Vec<LineItem>,
    /// Grand total, rounded to cents (half-up).
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    /// Always `completed`; there are no pending or partial checkouts.
    pub status: ReceiptStatus,
}
