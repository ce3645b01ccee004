//! Domain models for visitor session state.
//!
//! Everything here is plain data with named operations — no I/O — so the
//! state model is unit-testable independent of any route handler. The
//! structs are serde-serializable because they live in the visitor's
//! session between requests.

pub mod cart;
pub mod chat;
pub mod selection;
pub mod session;

pub use cart::{Cart, CartLineItem, ValidationError};
pub use chat::ChatMessage;
pub use selection::{FitSelection, Selection};
