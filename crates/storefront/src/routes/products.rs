//! Product detail route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse},
};
use tower_sessions::Session;
use tracing::instrument;

use tacworld_core::ProductId;

use crate::catalog::Product;
use crate::error::{AppError, Result};
use crate::state::AppState;

use super::{load_selection, store_selection};

/// Option display data for the detail drawer.
#[derive(Clone)]
pub struct OptionView {
    pub id: String,
    pub name: String,
    pub values: Vec<String>,
}

/// Product display data for the detail drawer.
#[derive(Clone)]
pub struct ProductDetailView {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: String,
    pub description: String,
    pub features: Vec<String>,
    pub rating: String,
    pub reviews: u32,
    pub best_seller: bool,
    pub options: Vec<OptionView>,
}

impl From<&Product> for ProductDetailView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            category: product.category.label().to_owned(),
            price: product.price.display(),
            description: product.description.clone(),
            features: product.features.clone(),
            rating: format!("{:.1}", product.rating),
            reviews: product.reviews,
            best_seller: product.best_seller,
            options: product
                .options
                .iter()
                .map(|option| OptionView {
                    id: option.id.to_string(),
                    name: option.name.clone(),
                    values: option.values.clone(),
                })
                .collect(),
        }
    }
}

/// Product detail drawer template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/product_modal.html")]
pub struct ProductModalTemplate {
    pub product: ProductDetailView,
}

/// Open the detail drawer on a product (HTMX).
#[instrument(skip(state, session))]
pub async fn modal(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<String>,
) -> Result<ProductModalTemplate> {
    let product_id = ProductId::new(id);
    let product = state
        .catalog()
        .find(&product_id)
        .ok_or_else(|| AppError::NotFound(format!("product {product_id}")))?;

    let mut selection = load_selection(&session).await?;
    selection.view_product(product_id);
    store_selection(&session, &selection).await?;

    Ok(ProductModalTemplate {
        product: ProductDetailView::from(product),
    })
}

/// Close the detail drawer (HTMX).
#[instrument(skip(session))]
pub async fn close(session: Session) -> Result<impl IntoResponse> {
    let mut selection = load_selection(&session).await?;
    selection.close_product();
    store_selection(&session, &selection).await?;

    Ok(Html(""))
}
