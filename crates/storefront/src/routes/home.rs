//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use tacworld_core::CategoryFilter;

use crate::catalog::Product;
use crate::error::{AppError, Result};
use crate::filters;
use crate::state::AppState;

use super::{load_selection, store_selection};

/// Product display data for the catalog grid.
#[derive(Clone)]
pub struct ProductCardView {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: String,
    pub description: String,
    pub rating: String,
    pub reviews: u32,
    pub best_seller: bool,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            category: product.category.label().to_owned(),
            price: product.price.display(),
            description: product.description.clone(),
            rating: format!("{:.1}", product.rating),
            reviews: product.reviews,
            best_seller: product.best_seller,
        }
    }
}

/// A category filter tab.
#[derive(Clone)]
pub struct CategoryTabView {
    pub slug: String,
    pub label: String,
    pub active: bool,
}

/// A customer testimonial.
#[derive(Clone)]
pub struct TestimonialView {
    pub author: String,
    pub role: String,
    pub text: String,
}

/// Home page query parameters.
#[derive(Debug, Deserialize)]
pub struct HomeQuery {
    pub category: Option<String>,
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home/index.html")]
pub struct HomeTemplate {
    pub products: Vec<ProductCardView>,
    pub tabs: Vec<CategoryTabView>,
    pub manufacturers: Vec<String>,
    pub testimonials: Vec<TestimonialView>,
}

/// Display the home page with the catalog grid filtered by category.
#[instrument(skip(state, session))]
pub async fn index(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<HomeQuery>,
) -> Result<HomeTemplate> {
    let mut selection = load_selection(&session).await?;

    if let Some(raw) = query.category {
        let filter = raw
            .parse::<CategoryFilter>()
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        selection.active_category = filter;
        store_selection(&session, &selection).await?;
    }

    let products = state
        .catalog()
        .filter_by_category(selection.active_category)
        .into_iter()
        .map(ProductCardView::from)
        .collect();

    // Same tab set the shop has always shown: All plus the stocked categories
    let tabs = category_tabs(selection.active_category);

    let manufacturers = state
        .catalog()
        .manufacturers()
        .map(str::to_owned)
        .collect();

    let testimonials = state
        .catalog()
        .testimonials()
        .iter()
        .map(|t| TestimonialView {
            author: t.author.clone(),
            role: t.role.clone(),
            text: t.text.clone(),
        })
        .collect();

    Ok(HomeTemplate {
        products,
        tabs,
        manufacturers,
        testimonials,
    })
}

fn category_tabs(active: CategoryFilter) -> Vec<CategoryTabView> {
    use tacworld_core::Category;

    let shown = [
        CategoryFilter::All,
        CategoryFilter::Only(Category::Duty),
        CategoryFilter::Only(Category::Hybrid),
        CategoryFilter::Only(Category::Shoulder),
    ];

    shown
        .into_iter()
        .map(|filter| CategoryTabView {
            slug: filter.slug().to_owned(),
            label: match filter {
                CategoryFilter::All => "All".to_owned(),
                CategoryFilter::Only(category) => category.label().to_owned(),
            },
            active: filter == active,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tacworld_core::Category;

    #[test]
    fn test_category_tabs_mark_the_active_filter() {
        let tabs = category_tabs(CategoryFilter::Only(Category::Duty));
        let active: Vec<_> = tabs.iter().filter(|t| t.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].slug, "duty");
    }

    #[test]
    fn test_category_tabs_default_to_all() {
        let tabs = category_tabs(CategoryFilter::All);
        assert!(tabs[0].active);
        assert_eq!(tabs[0].label, "All");
    }

    #[test]
    fn test_product_card_view_formats_price() {
        let catalog = crate::catalog::Catalog::load();
        let product = &catalog.products()[0];
        let view = ProductCardView::from(product);
        assert!(view.price.starts_with('$'));
    }
}
