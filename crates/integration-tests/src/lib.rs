//! Integration tests for Cartwheel.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the server
//! cargo run -p cartwheel-server
//!
//! # Run integration tests against it
//! cargo test -p cartwheel-integration-tests -- --ignored
//! ```
//!
//! The base URL defaults to `http://localhost:5000` and can be overridden
//! via `CARTWHEEL_BASE_URL`.
//!
//! # Test Categories
//!
//! - `api_cart` - Product listing and cart mutation endpoints
//! - `api_checkout` - Checkout validation and receipts
//!
//! Note: the server holds one global cart per process, so these suites
//! mutate shared state. Run against a freshly started server.
