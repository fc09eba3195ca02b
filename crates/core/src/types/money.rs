//! Money arithmetic helpers over [`rust_decimal::Decimal`].
//!
//! Prices and totals are exact decimals end to end; floats only appear at the
//! JSON boundary. Every customer-facing total goes through [`round_to_cents`]
//! so the rounding mode stays consistent across cart views and receipts.

use rust_decimal::{Decimal, RoundingStrategy};

/// Round a monetary amount to whole cents.
///
/// Uses half-up rounding (`MidpointAwayFromZero`): `2.005` rounds to `2.01`.
#[must_use]
pub fn round_to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Subtotal for `quantity` units at `price` each.
#[must_use]
pub fn line_subtotal(price: Decimal, quantity: u32) -> Decimal {
    price * Decimal::from(quantity)
}
