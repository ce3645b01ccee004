//! Configurator ("Holster Finder") route handlers.
//!
//! The manufacturer and model dropdowns are dependent: choosing a make
//! resets the model, and either change invalidates the generated preview.
//! Preview generation calls the advisory backend and falls back to the
//! recommended product's static image when no image comes back.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{AppendHeaders, IntoResponse, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::advisory::GeneratedImage;
use crate::catalog::Product;
use crate::error::{AppError, Result};
use crate::routes::products::{ProductDetailView, ProductModalTemplate};
use crate::state::AppState;

use super::{load_selection, store_selection};

/// Model dropdown fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/fit_models.html")]
pub struct FitModelsTemplate {
    pub manufacturer: String,
    pub model: String,
    pub models: Vec<String>,
}

/// Recommended product shown when no generated preview is available.
#[derive(Clone)]
pub struct RecommendedView {
    pub name: String,
    pub price: String,
}

impl From<&Product> for RecommendedView {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price.display(),
        }
    }
}

/// Preview pane fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/fit_preview.html")]
pub struct FitPreviewTemplate {
    /// Data URI of the generated image, when one exists for the pair.
    pub preview_uri: Option<String>,
    /// Static fallback, shown once a model is chosen.
    pub recommended: Option<RecommendedView>,
}

/// Manufacturer selection form data.
#[derive(Debug, Deserialize)]
pub struct ManufacturerForm {
    #[serde(default)]
    pub manufacturer: String,
}

/// Model selection form data.
#[derive(Debug, Deserialize)]
pub struct ModelForm {
    #[serde(default)]
    pub model: String,
}

/// Fit submission form data.
#[derive(Debug, Deserialize)]
pub struct SubmitFitForm {
    #[serde(default)]
    pub manufacturer: String,
    #[serde(default)]
    pub model: String,
}

/// Select a firearm manufacturer (HTMX).
///
/// Resets the model and drops any generated preview.
#[instrument(skip(state, session))]
pub async fn select_manufacturer(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<ManufacturerForm>,
) -> Result<Response> {
    let mut selection = load_selection(&session).await?;
    selection.fit.set_manufacturer(form.manufacturer);
    store_selection(&session, &selection).await?;

    let models = state
        .catalog()
        .models_for(selection.fit.manufacturer())
        .to_vec();

    Ok((
        AppendHeaders([("HX-Trigger", "fit-updated")]),
        FitModelsTemplate {
            manufacturer: selection.fit.manufacturer().to_owned(),
            model: String::new(),
            models,
        },
    )
        .into_response())
}

/// Select a firearm model (HTMX).
///
/// Keeps the manufacturer but drops any stale preview.
#[instrument(skip(state, session))]
pub async fn select_model(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<ModelForm>,
) -> Result<Response> {
    let mut selection = load_selection(&session).await?;
    selection.fit.set_model(form.model);
    store_selection(&session, &selection).await?;

    let models = state
        .catalog()
        .models_for(selection.fit.manufacturer())
        .to_vec();

    Ok((
        AppendHeaders([("HX-Trigger", "fit-updated")]),
        FitModelsTemplate {
            manufacturer: selection.fit.manufacturer().to_owned(),
            model: selection.fit.model().to_owned(),
            models,
        },
    )
        .into_response())
}

/// Render the current preview pane (HTMX).
#[instrument(skip(state, session))]
pub async fn preview(
    State(state): State<AppState>,
    session: Session,
) -> Result<FitPreviewTemplate> {
    let selection = load_selection(&session).await?;
    Ok(build_preview(&state, &selection))
}

/// Generate an AI preview image for the chosen pair (HTMX).
///
/// Requires a complete selection. A `None` from the advisory client means
/// "no preview available", not an error: the pane falls back to the
/// recommended product's static image.
#[instrument(skip(state, session))]
pub async fn generate_preview(
    State(state): State<AppState>,
    session: Session,
) -> Result<FitPreviewTemplate> {
    let mut selection = load_selection(&session).await?;
    if !selection.fit.is_complete() {
        return Err(AppError::BadRequest(
            "select a manufacturer and model first".to_owned(),
        ));
    }

    let manufacturer = selection.fit.manufacturer().to_owned();
    let model = selection.fit.model().to_owned();

    if let Some(image) = state
        .advisory()
        .generate_preview_image(&manufacturer, &model)
        .await
    {
        // Cache only if the pair is still the one we generated for; the
        // visitor may have changed the selection while the call was in
        // flight, and a stale preview must not survive that.
        let mut current = load_selection(&session).await?;
        if current.fit.manufacturer() == manufacturer && current.fit.model() == model {
            current.fit.set_preview(image);
            store_selection(&session, &current).await?;
            selection = current;
        }
    }

    Ok(build_preview(&state, &selection))
}

/// Resolve the fit to a recommended holster and open its detail view (HTMX).
#[instrument(skip(state, session))]
pub async fn submit(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<SubmitFitForm>,
) -> Result<ProductModalTemplate> {
    if form.manufacturer.is_empty() || form.model.is_empty() {
        return Err(AppError::BadRequest(
            "both manufacturer and model are required".to_owned(),
        ));
    }

    let product = state
        .catalog()
        .recommend_fit(&form.manufacturer, &form.model)
        .clone();

    let mut selection = load_selection(&session).await?;
    selection.view_product(product.id.clone());
    store_selection(&session, &selection).await?;

    Ok(ProductModalTemplate {
        product: ProductDetailView::from(&product),
    })
}

fn build_preview(state: &AppState, selection: &crate::models::Selection) -> FitPreviewTemplate {
    let preview_uri = selection.fit.preview().map(GeneratedImage::as_data_uri);

    let recommended = if selection.fit.model().is_empty() {
        None
    } else {
        Some(RecommendedView::from(state.catalog().recommend_fit(
            selection.fit.manufacturer(),
            selection.fit.model(),
        )))
    };

    FitPreviewTemplate {
        preview_uri,
        recommended,
    }
}
