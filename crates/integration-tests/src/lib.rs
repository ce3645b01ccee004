//! Integration tests for the TacWorld storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p tacworld-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `storefront_cart` - Cart scenarios (add/remove/total invariants)
//! - `storefront_fit` - Configurator state and recommendation contracts
//! - `storefront_advisory` - Advisory chat and image extraction contracts
//!
//! The tests exercise the library-level model contracts directly; no
//! running server or network access is required.

#![cfg_attr(not(test), forbid(unsafe_code))]
