//! TacWorld Core - Shared types library.
//!
//! This crate provides the common types used across the TacWorld storefront:
//! - `storefront` - Public-facing catalog, configurator, and cart
//! - `integration-tests` - Cross-crate scenario tests
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no async.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, categories, and
//!   chat roles

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
