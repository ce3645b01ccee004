//! Integration tests for the configurator: catalog lookups, selection
//! state transitions, and the recommendation contract.

use tacworld_core::{Category, CategoryFilter};
use tacworld_storefront::advisory::GeneratedImage;
use tacworld_storefront::catalog::Catalog;
use tacworld_storefront::models::Selection;

fn preview() -> GeneratedImage {
    GeneratedImage {
        mime_type: "image/png".to_owned(),
        data: "ZmFrZS1ieXRlcw==".to_owned(),
    }
}

// =============================================================================
// Catalog filtering
// =============================================================================

#[test]
fn test_all_filter_returns_catalog_order() {
    let catalog = Catalog::load();
    let all = catalog.filter_by_category(CategoryFilter::All);

    let expected: Vec<_> = catalog.products().iter().map(|p| &p.id).collect();
    let actual: Vec<_> = all.iter().map(|p| &p.id).collect();
    assert_eq!(actual, expected);
}

#[test]
fn test_each_stocked_category_filters_to_matching_products() {
    let catalog = Catalog::load();

    for category in [Category::Duty, Category::Hybrid, Category::Shoulder] {
        let filtered = catalog.filter_by_category(CategoryFilter::Only(category));
        assert!(!filtered.is_empty(), "no products for {category}");
        assert!(filtered.iter().all(|p| p.category == category));
    }
}

#[test]
fn test_unstocked_category_is_empty_not_an_error() {
    let catalog = Catalog::load();
    assert!(
        catalog
            .filter_by_category(CategoryFilter::Only(Category::Leather))
            .is_empty()
    );
}

#[test]
fn test_every_manufacturer_has_models() {
    let catalog = Catalog::load();
    let manufacturers: Vec<_> = catalog.manufacturers().map(str::to_owned).collect();
    assert!(!manufacturers.is_empty());

    for manufacturer in &manufacturers {
        assert!(
            !catalog.models_for(manufacturer).is_empty(),
            "{manufacturer} has no models"
        );
    }
}

#[test]
fn test_unknown_manufacturer_yields_empty_models() {
    let catalog = Catalog::load();
    assert!(catalog.models_for("Norinco").is_empty());
    assert!(catalog.models_for("").is_empty());
}

// =============================================================================
// Recommendation contract
// =============================================================================

#[test]
fn test_submit_fit_is_deterministic_for_identical_inputs() {
    let catalog = Catalog::load();

    let first = catalog.recommend_fit("Glock", "G19 Gen 3/4/5").id.clone();
    for _ in 0..5 {
        assert_eq!(catalog.recommend_fit("Glock", "G19 Gen 3/4/5").id, first);
    }
}

#[test]
fn test_recommendation_never_fails_on_unlisted_pairs() {
    let catalog = Catalog::load();

    // Pairs absent from the fitment table still resolve to a real product
    for (manufacturer, model) in [
        ("Glock", "G99"),
        ("Norinco", "Type 54"),
        ("", ""),
    ] {
        let recommended = catalog.recommend_fit(manufacturer, model);
        assert!(catalog.find(&recommended.id).is_some());
    }
}

// =============================================================================
// Selection state transitions
// =============================================================================

#[test]
fn test_manufacturer_change_invalidates_model_and_preview() {
    let mut selection = Selection::default();

    selection.fit.set_manufacturer("Glock");
    selection.fit.set_model("G17");
    selection.fit.set_preview(preview());
    assert!(selection.fit.preview().is_some());

    // A -> B: model and preview both reset
    selection.fit.set_manufacturer("Beretta");
    assert_eq!(selection.fit.manufacturer(), "Beretta");
    assert!(selection.fit.model().is_empty());
    assert!(selection.fit.preview().is_none());

    // B -> A again: still reset, no stale state resurfaces
    selection.fit.set_model("92FS");
    selection.fit.set_preview(preview());
    selection.fit.set_manufacturer("Glock");
    assert!(selection.fit.model().is_empty());
    assert!(selection.fit.preview().is_none());
}

#[test]
fn test_model_change_keeps_manufacturer_and_drops_preview() {
    let mut selection = Selection::default();
    selection.fit.set_manufacturer("Sig Sauer");
    selection.fit.set_model("P365");
    selection.fit.set_preview(preview());

    selection.fit.set_model("P320 Compact");
    assert_eq!(selection.fit.manufacturer(), "Sig Sauer");
    assert!(selection.fit.preview().is_none());
}

#[test]
fn test_detail_view_and_cart_drawer_are_orthogonal() {
    let catalog = Catalog::load();
    let mut selection = Selection::default();

    let recommended = catalog.recommend_fit("Glock", "G19 Gen 3/4/5").id.clone();
    selection.view_product(recommended.clone());
    selection.open_cart();
    assert_eq!(selection.selected_product(), Some(&recommended));
    assert!(selection.is_cart_open());

    // Closing one leaves the other alone
    selection.close_product();
    assert!(selection.selected_product().is_none());
    assert!(selection.is_cart_open());
}

#[test]
fn test_selection_survives_session_serialization() {
    let mut selection = Selection::default();
    selection.fit.set_manufacturer("CZ");
    selection.fit.set_model("Shadow 2");
    selection.fit.set_preview(preview());
    selection.active_category = CategoryFilter::Only(Category::Shoulder);

    let json = serde_json::to_string(&selection).expect("serialize");
    let back: Selection = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(back.fit.manufacturer(), "CZ");
    assert_eq!(back.fit.model(), "Shadow 2");
    assert_eq!(back.fit.preview(), selection.fit.preview());
    assert_eq!(back.active_category, selection.active_category);
}
