//! Selection and configurator state.
//!
//! Each field is an independent piece of view state, mutated only through
//! the named operations here so the transitions stay testable: the detail
//! drawer, the category filter, the cart drawer flag, and the dependent
//! manufacturer/model pair with its cached preview image.

use serde::{Deserialize, Serialize};

use tacworld_core::{CategoryFilter, ProductId};

use crate::advisory::GeneratedImage;

/// Per-visitor selection state, stored in the session between requests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Selection {
    /// Product shown in the detail drawer, or `None` when closed.
    selected_product: Option<ProductId>,
    /// Active catalog filter. Always defined; defaults to `All`.
    pub active_category: CategoryFilter,
    /// Whether the cart drawer is open.
    cart_open: bool,
    /// Configurator state.
    pub fit: FitSelection,
}

impl Selection {
    /// Open the detail view on a product.
    pub fn view_product(&mut self, id: ProductId) {
        self.selected_product = Some(id);
    }

    /// Close the detail view. Also called on add-to-cart commit.
    pub fn close_product(&mut self) {
        self.selected_product = None;
    }

    /// Product currently shown in the detail view, if any.
    #[must_use]
    pub fn selected_product(&self) -> Option<&ProductId> {
        self.selected_product.as_ref()
    }

    /// Open the cart drawer.
    pub fn open_cart(&mut self) {
        self.cart_open = true;
    }

    /// Close the cart drawer.
    pub fn close_cart(&mut self) {
        self.cart_open = false;
    }

    /// Whether the cart drawer is open.
    #[must_use]
    pub const fn is_cart_open(&self) -> bool {
        self.cart_open
    }
}

/// The configurator's dependent manufacturer/model selection.
///
/// The model is only meaningful while a manufacturer is chosen, and the
/// generated preview is only meaningful for the exact pair it was generated
/// for — both setters below enforce that by clearing downstream state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FitSelection {
    manufacturer: String,
    model: String,
    generated_preview: Option<GeneratedImage>,
}

impl FitSelection {
    /// Chosen manufacturer, or empty when unset.
    #[must_use]
    pub fn manufacturer(&self) -> &str {
        &self.manufacturer
    }

    /// Chosen model, or empty when unset.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Cached preview for the current manufacturer/model pair.
    #[must_use]
    pub fn preview(&self) -> Option<&GeneratedImage> {
        self.generated_preview.as_ref()
    }

    /// Whether both selections are made.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.manufacturer.is_empty() && !self.model.is_empty()
    }

    /// Select a manufacturer.
    ///
    /// Always resets the model and drops any generated preview; both belong
    /// to the previous pair.
    pub fn set_manufacturer(&mut self, manufacturer: impl Into<String>) {
        self.manufacturer = manufacturer.into();
        self.model.clear();
        self.generated_preview = None;
    }

    /// Select a model, keeping the manufacturer.
    ///
    /// Drops any generated preview; it belongs to the previous pair.
    pub fn set_model(&mut self, model: impl Into<String>) {
        self.model = model.into();
        self.generated_preview = None;
    }

    /// Cache a preview generated for the current pair.
    pub fn set_preview(&mut self, image: GeneratedImage) {
        self.generated_preview = Some(image);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preview() -> GeneratedImage {
        GeneratedImage {
            mime_type: "image/png".to_owned(),
            data: "aGVsbG8=".to_owned(),
        }
    }

    #[test]
    fn test_defaults() {
        let selection = Selection::default();
        assert!(selection.selected_product().is_none());
        assert_eq!(selection.active_category, CategoryFilter::All);
        assert!(!selection.is_cart_open());
        assert!(selection.fit.manufacturer().is_empty());
        assert!(selection.fit.model().is_empty());
    }

    #[test]
    fn test_detail_view_open_close() {
        let mut selection = Selection::default();
        selection.view_product(ProductId::new("h201"));
        assert_eq!(
            selection.selected_product(),
            Some(&ProductId::new("h201"))
        );
        selection.close_product();
        assert!(selection.selected_product().is_none());
    }

    #[test]
    fn test_set_manufacturer_clears_model_and_preview() {
        let mut fit = FitSelection::default();
        fit.set_manufacturer("Glock");
        fit.set_model("G17");
        fit.set_preview(preview());

        fit.set_manufacturer("Beretta");
        assert_eq!(fit.manufacturer(), "Beretta");
        assert!(fit.model().is_empty());
        assert!(fit.preview().is_none());
    }

    #[test]
    fn test_manufacturer_round_trip_clears_model_both_times() {
        let mut fit = FitSelection::default();

        fit.set_manufacturer("Glock");
        fit.set_model("G17");
        fit.set_manufacturer("Beretta");
        assert!(fit.model().is_empty());

        fit.set_model("92FS");
        fit.set_manufacturer("Glock");
        assert!(fit.model().is_empty());
    }

    #[test]
    fn test_set_model_keeps_manufacturer_but_drops_preview() {
        let mut fit = FitSelection::default();
        fit.set_manufacturer("Sig Sauer");
        fit.set_model("P365");
        fit.set_preview(preview());

        fit.set_model("P226");
        assert_eq!(fit.manufacturer(), "Sig Sauer");
        assert_eq!(fit.model(), "P226");
        assert!(fit.preview().is_none());
    }

    #[test]
    fn test_is_complete() {
        let mut fit = FitSelection::default();
        assert!(!fit.is_complete());
        fit.set_manufacturer("CZ");
        assert!(!fit.is_complete());
        fit.set_model("Shadow 2");
        assert!(fit.is_complete());
    }
}
