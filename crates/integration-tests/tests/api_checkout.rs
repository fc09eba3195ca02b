//! Integration tests for the checkout endpoint.
//!
//! These tests require a running server (cargo run -p cartwheel-server).
//!
//! Run with: cargo test -p cartwheel-integration-tests -- --ignored

use cartwheel_server::models::Receipt;
use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

/// Base URL for the cart API (configurable via environment).
fn base_url() -> String {
    std::env::var("CARTWHEEL_BASE_URL").unwrap_or_else(|_| "http://localhost:5000".to_string())
}

async fn fetch_cart(client: &Client) -> Value {
    client
        .get(format!("{}/api/cart", base_url()))
        .send()
        .await
        .expect("Failed to fetch cart")
        .json()
        .await
        .expect("Failed to parse cart")
}

#[tokio::test]
#[ignore = "Requires running server"]
async fn test_checkout_empty_cart_rejected() {
    let client = Client::new();
    let base_url = base_url();

    let resp = client
        .post(format!("{base_url}/api/checkout"))
        .json(&json!({
            "cartItems": [],
            "customerInfo": { "name": "Ada Lovelace", "email": "ada@example.com" },
        }))
        .send()
        .await
        .expect("Failed to post checkout");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("Failed to parse error");
    assert_eq!(body["error"], "Cart is empty");
}

#[tokio::test]
#[ignore = "Requires running server"]
async fn test_checkout_returns_receipt_and_clears_cart() {
    let client = Client::new();
    let base_url = base_url();

    // Put something in the cart and snapshot it the way the UI does
    let resp = client
        .post(format!("{base_url}/api/cart"))
        .json(&json!({ "productId": "3", "quantity": 2 }))
        .send()
        .await
        .expect("Failed to add to cart");
    assert_eq!(resp.status(), StatusCode::OK);

    let cart = fetch_cart(&client).await;
    assert!(!cart["items"].as_array().expect("items array").is_empty());

    let resp = client
        .post(format!("{base_url}/api/checkout"))
        .json(&json!({
            "cartItems": cart["items"],
            "customerInfo": { "name": "Ada Lovelace", "email": "ada@example.com" },
        }))
        .send()
        .await
        .expect("Failed to post checkout");
    assert_eq!(resp.status(), StatusCode::OK);

    // The receipt deserializes into the server's wire type
    let receipt: Receipt = resp.json().await.expect("Failed to parse receipt");
    assert_eq!(receipt.customer_info.name, "Ada Lovelace");
    assert_eq!(receipt.total.to_string(), "159.98");
    assert_eq!(receipt.items.len(), 1);

    // Checkout clears the server-side cart
    let cart = fetch_cart(&client).await;
    assert!(cart["items"].as_array().expect("items array").is_empty());
    assert_eq!(cart["total"], json!(0.0));
}

#[tokio::test]
#[ignore = "Requires running server"]
async fn test_checkout_requires_customer_info() {
    let client = Client::new();
    let base_url = base_url();

    // Seed the cart so validation reaches the customer-info checks
    client
        .post(format!("{base_url}/api/cart"))
        .json(&json!({ "productId": "2" }))
        .send()
        .await
        .expect("Failed to add to cart");
    let cart = fetch_cart(&client).await;

    let resp = client
        .post(format!("{base_url}/api/checkout"))
        .json(&json!({ "cartItems": cart["items"] }))
        .send()
        .await
        .expect("Failed to post checkout");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // The rejected checkout must not clear the cart
    let cart = fetch_cart(&client).await;
    assert!(!cart["items"].as_array().expect("items array").is_empty());
}
