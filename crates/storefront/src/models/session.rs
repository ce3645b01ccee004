//! Session storage keys.
//!
//! All visitor state lives in the session (in-memory store): the cart, the
//! selection/configurator state, and the advisor chat. Nothing is persisted
//! beyond the session's lifetime.

/// Session keys for visitor state.
pub mod keys {
    /// Key for the visitor's cart.
    pub const CART: &str = "cart";

    /// Key for selection and configurator state.
    pub const SELECTION: &str = "selection";

    /// Key for the advisor chat session (transcript + wire history).
    pub const ADVISOR_CHAT: &str = "advisor_chat";
}
