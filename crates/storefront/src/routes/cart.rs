//! Cart route handlers.
//!
//! Cart operations use HTMX fragments: every mutation responds with a
//! `cart-updated` trigger, and the drawer and navbar badge listen for it
//! and refetch themselves. The cart itself lives in the visitor session;
//! checkout is a visual placeholder with no order pipeline behind it.

use std::collections::BTreeMap;

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{AppendHeaders, Html, IntoResponse, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use tacworld_core::{LineItemId, OptionId, ProductId};

use crate::error::{AppError, Result};
use crate::models::Cart;
use crate::state::AppState;

use super::{load_cart, load_selection, store_cart, store_selection};

/// Form field prefix for option selections (`option_hand=Right Hand`).
const OPTION_FIELD_PREFIX: &str = "option_";

/// Cart line display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub line_id: String,
    pub name: String,
    pub options: String,
    pub line_total: String,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub total: String,
    pub count: usize,
    pub open: bool,
}

impl CartView {
    fn build(cart: &Cart, open: bool) -> Self {
        Self {
            items: cart
                .lines()
                .iter()
                .map(|line| CartItemView {
                    line_id: line.id.to_string(),
                    name: line.product.name.clone(),
                    options: line
                        .selected_options
                        .values()
                        .cloned()
                        .collect::<Vec<_>>()
                        .join(" / "),
                    line_total: line.line_total().display(),
                })
                .collect(),
            total: cart.total().display(),
            count: cart.count(),
            open,
        }
    }
}

/// Cart drawer fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_drawer.html")]
pub struct CartDrawerTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: usize,
}

/// Add-to-cart form data.
///
/// Submitted as `product_id` plus one `option_<id>` field per product
/// option; captured as raw pairs because the option set varies by product.
#[derive(Debug)]
pub struct AddToCartForm {
    pub product_id: ProductId,
    pub selected_options: BTreeMap<OptionId, String>,
}

impl AddToCartForm {
    fn parse(pairs: Vec<(String, String)>) -> Result<Self> {
        let mut product_id = None;
        let mut selected_options = BTreeMap::new();

        for (key, value) in pairs {
            if key == "product_id" {
                product_id = Some(ProductId::new(value));
            } else if let Some(option_id) = key.strip_prefix(OPTION_FIELD_PREFIX) {
                selected_options.insert(OptionId::new(option_id), value);
            }
        }

        let product_id =
            product_id.ok_or_else(|| AppError::BadRequest("missing product_id".to_owned()))?;

        Ok(Self {
            product_id,
            selected_options,
        })
    }
}

/// Remove-from-cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub line_id: String,
}

/// Empty response carrying the `cart-updated` trigger.
fn cart_updated() -> Response {
    (AppendHeaders([("HX-Trigger", "cart-updated")]), Html("")).into_response()
}

/// Display the cart drawer (HTMX).
#[instrument(skip(session))]
pub async fn drawer(session: Session) -> Result<CartDrawerTemplate> {
    let cart = load_cart(&session).await?;
    let selection = load_selection(&session).await?;

    Ok(CartDrawerTemplate {
        cart: CartView::build(&cart, selection.is_cart_open()),
    })
}

/// Add an item to the cart (HTMX).
///
/// Validates the option selection, appends a new line item, closes the
/// detail drawer, and opens the cart drawer.
#[instrument(skip(state, session, pairs))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response> {
    let form = AddToCartForm::parse(pairs)?;

    let product = state
        .catalog()
        .find(&form.product_id)
        .ok_or_else(|| AppError::NotFound(format!("product {}", form.product_id)))?;

    let mut cart = load_cart(&session).await?;
    cart.add_item(product, form.selected_options)?;
    store_cart(&session, &cart).await?;

    let mut selection = load_selection(&session).await?;
    selection.close_product();
    selection.open_cart();
    store_selection(&session, &selection).await?;

    Ok(cart_updated())
}

/// Remove a line item from the cart (HTMX).
///
/// Removal is an exact line-identity match and is idempotent: a repeated
/// click on the same line is a no-op, not an error.
#[instrument(skip(session))]
pub async fn remove(session: Session, Form(form): Form<RemoveFromCartForm>) -> Result<Response> {
    let line_id = form
        .line_id
        .parse::<LineItemId>()
        .map_err(|e| AppError::BadRequest(format!("invalid line id: {e}")))?;

    let mut cart = load_cart(&session).await?;
    cart.remove_item(&line_id);
    store_cart(&session, &cart).await?;

    Ok(cart_updated())
}

/// Open the cart drawer (HTMX).
#[instrument(skip(session))]
pub async fn open(session: Session) -> Result<Response> {
    let mut selection = load_selection(&session).await?;
    selection.open_cart();
    store_selection(&session, &selection).await?;

    Ok(cart_updated())
}

/// Close the cart drawer (HTMX).
#[instrument(skip(session))]
pub async fn close(session: Session) -> Result<Response> {
    let mut selection = load_selection(&session).await?;
    selection.close_cart();
    store_selection(&session, &selection).await?;

    Ok(cart_updated())
}

/// Get the cart count badge (HTMX).
#[instrument(skip(session))]
pub async fn count(session: Session) -> Result<CartCountTemplate> {
    let cart = load_cart(&session).await?;
    Ok(CartCountTemplate {
        count: cart.count(),
    })
}
