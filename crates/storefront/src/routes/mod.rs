//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page (catalog, configurator, widgets)
//! GET  /health                 - Health check
//!
//! # Products (HTMX fragments)
//! GET  /products/{id}/modal    - Product detail drawer
//! POST /products/close         - Close the detail drawer
//!
//! # Cart (HTMX fragments)
//! GET  /cart                   - Cart drawer
//! POST /cart/add               - Add to cart (opens the drawer, triggers cart-updated)
//! POST /cart/remove            - Remove line item (idempotent)
//! POST /cart/open              - Open the cart drawer
//! POST /cart/close             - Close the cart drawer
//! GET  /cart/count             - Cart count badge
//!
//! # Configurator (HTMX fragments)
//! POST /fit/manufacturer       - Select firearm make (resets model + preview)
//! POST /fit/model              - Select firearm model (resets preview)
//! GET  /fit/preview            - Current preview pane
//! POST /fit/preview/generate   - Generate an AI preview image
//! POST /fit/submit             - Resolve the recommended holster
//!
//! # Advisor chat (HTMX fragments)
//! GET  /chat                   - Chat window (creates the session on first use)
//! POST /chat/send              - Send a message, re-render the transcript
//! ```
//!
//! Controls that start an advisory round trip disable themselves while the
//! request is in flight (`hx-disabled-elt`), which also serializes chat
//! sends per session.

pub mod cart;
pub mod chat;
pub mod fit;
pub mod home;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};
use tower_sessions::Session;

use crate::error::Result;
use crate::models::session::keys;
use crate::models::{Cart, Selection};
use crate::state::AppState;

/// Create the storefront router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        .route("/products/{id}/modal", get(products::modal))
        .route("/products/close", post(products::close))
        .route("/cart", get(cart::drawer))
        .route("/cart/add", post(cart::add))
        .route("/cart/remove", post(cart::remove))
        .route("/cart/open", post(cart::open))
        .route("/cart/close", post(cart::close))
        .route("/cart/count", get(cart::count))
        .route("/fit/manufacturer", post(fit::select_manufacturer))
        .route("/fit/model", post(fit::select_model))
        .route("/fit/preview", get(fit::preview))
        .route("/fit/preview/generate", post(fit::generate_preview))
        .route("/fit/submit", post(fit::submit))
        .route("/chat", get(chat::window))
        .route("/chat/send", post(chat::send))
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Load the visitor's cart, or an empty one.
pub(crate) async fn load_cart(session: &Session) -> Result<Cart> {
    Ok(session.get::<Cart>(keys::CART).await?.unwrap_or_default())
}

/// Store the visitor's cart.
pub(crate) async fn store_cart(session: &Session, cart: &Cart) -> Result<()> {
    session.insert(keys::CART, cart).await?;
    Ok(())
}

/// Load the visitor's selection state, or the defaults.
pub(crate) async fn load_selection(session: &Session) -> Result<Selection> {
    Ok(session
        .get::<Selection>(keys::SELECTION)
        .await?
        .unwrap_or_default())
}

/// Store the visitor's selection state.
pub(crate) async fn store_selection(session: &Session, selection: &Selection) -> Result<()> {
    session.insert(keys::SELECTION, selection).await?;
    Ok(())
}
