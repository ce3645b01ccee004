//! The shopping cart model.
//!
//! The cart is an ordered sequence of line items, each a by-value copy of a
//! product plus the option values chosen at add time. Line items are the
//! unit of removal: quantity is fixed at 1 per add, and adding the same
//! product twice produces two independently removable lines. The total is
//! derived on demand, never cached.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use tacworld_core::{CurrencyCode, LineItemId, OptionId, Price};

use crate::catalog::Product;

/// Caller supplied an incomplete or invalid option selection.
///
/// This is a programmer error: the presentation layer always submits one
/// valid value per product option, so none of these occur through normal
/// UI flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// No value was supplied for an option the product declares.
    #[error("missing selection for option '{0}'")]
    MissingOption(OptionId),

    /// The supplied value is not in the option's allowed list.
    #[error("value '{value}' is not allowed for option '{option}'")]
    InvalidValue {
        /// The option the value was supplied for.
        option: OptionId,
        /// The rejected value.
        value: String,
    },

    /// A value was supplied for an option the product does not declare.
    #[error("product does not declare option '{0}'")]
    UnknownOption(OptionId),
}

/// A line item in the cart.
///
/// Product data is copied by value at add time, so later catalog changes
/// cannot retroactively alter cart contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    /// Line identity, distinct from the product ID and unique within the
    /// cart for its lifetime.
    pub id: LineItemId,
    /// The product as it was when added.
    pub product: Product,
    /// Chosen value per product option. Exactly one entry per option the
    /// product declares.
    pub selected_options: BTreeMap<OptionId, String>,
    /// Always 1 at creation; repeat adds create new lines instead.
    pub quantity: u32,
}

impl CartLineItem {
    /// Price × quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> Price {
        Price::new(
            self.product.price.amount * Decimal::from(self.quantity),
            self.product.price.currency_code,
        )
    }
}

/// The visitor's cart: an insertion-ordered sequence of line items.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLineItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Current line items, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLineItem] {
        &self.lines
    }

    /// Whether the cart has no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of line items (not the quantity sum). Drives the cart badge.
    #[must_use]
    pub fn count(&self) -> usize {
        self.lines.len()
    }

    /// Append a line item for `product` with the given option selection.
    ///
    /// The selection must supply exactly one value per option the product
    /// declares, each drawn from that option's allowed values.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if a declared option is missing, a
    /// value is outside its option's allowed list, or the selection names
    /// an option the product does not declare.
    pub fn add_item(
        &mut self,
        product: &Product,
        selected_options: BTreeMap<OptionId, String>,
    ) -> Result<&CartLineItem, ValidationError> {
        validate_selection(product, &selected_options)?;

        self.lines.push(CartLineItem {
            id: LineItemId::generate(),
            product: product.clone(),
            selected_options,
            quantity: 1,
        });

        tracing::debug!(product = %product.id, count = self.lines.len(), "line item added");

        // Just pushed, so last() is always Some
        Ok(self.lines.last().expect("line was just pushed"))
    }

    /// Remove the line item with exactly this identity.
    ///
    /// No-op when the identity is absent: removal is idempotent by design,
    /// since UI double-clicks must not crash.
    pub fn remove_item(&mut self, id: &LineItemId) {
        self.lines.retain(|line| &line.id != id);
    }

    /// Sum of price × quantity over current line items. `$0.00` when empty.
    #[must_use]
    pub fn total(&self) -> Price {
        let amount: Decimal = self.lines.iter().map(|l| l.line_total().amount).sum();
        let currency_code = self
            .lines
            .first()
            .map_or(CurrencyCode::default(), |l| l.product.price.currency_code);
        Price::new(amount, currency_code)
    }
}

/// Check a selection against the product's declared options.
fn validate_selection(
    product: &Product,
    selection: &BTreeMap<OptionId, String>,
) -> Result<(), ValidationError> {
    for option in &product.options {
        let value = selection
            .get(&option.id)
            .ok_or_else(|| ValidationError::MissingOption(option.id.clone()))?;

        if !option.values.iter().any(|v| v == value) {
            return Err(ValidationError::InvalidValue {
                option: option.id.clone(),
                value: value.clone(),
            });
        }
    }

    for chosen in selection.keys() {
        if !product.options.iter().any(|o| &o.id == chosen) {
            return Err(ValidationError::UnknownOption(chosen.clone()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use rust_decimal::Decimal;
    use tacworld_core::ProductId;

    fn catalog_product(catalog: &Catalog, id: &str) -> Product {
        catalog
            .find(&ProductId::new(id))
            .expect("known product")
            .clone()
    }

    fn selection(pairs: &[(&str, &str)]) -> BTreeMap<OptionId, String> {
        pairs
            .iter()
            .map(|&(k, v)| (OptionId::new(k), v.to_owned()))
            .collect()
    }

    #[test]
    fn test_add_item_copies_selection_and_increments_count() {
        let catalog = Catalog::load();
        let product = catalog_product(&catalog, "h201");
        let chosen = selection(&[("hand", "Right Hand"), ("color", "Black")]);

        let mut cart = Cart::new();
        let line = cart
            .add_item(&product, chosen.clone())
            .expect("valid selection");

        assert_eq!(line.selected_options, chosen);
        assert_eq!(line.quantity, 1);
        assert_eq!(cart.count(), 1);
    }

    #[test]
    fn test_line_item_identities_are_distinct() {
        let catalog = Catalog::load();
        let product = catalog_product(&catalog, "h201");
        let chosen = selection(&[("hand", "Right Hand"), ("color", "Black")]);

        let mut cart = Cart::new();
        let first = cart
            .add_item(&product, chosen.clone())
            .expect("valid selection")
            .id;
        let second = cart.add_item(&product, chosen).expect("valid selection").id;

        assert_ne!(first, second);
        assert_ne!(first.to_string(), product.id.to_string());
    }

    #[test]
    fn test_add_item_rejects_missing_option() {
        let catalog = Catalog::load();
        let product = catalog_product(&catalog, "h201");

        let mut cart = Cart::new();
        let err = cart
            .add_item(&product, selection(&[("hand", "Right Hand")]))
            .expect_err("missing color");

        assert_eq!(err, ValidationError::MissingOption(OptionId::new("color")));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_item_rejects_invalid_value() {
        let catalog = Catalog::load();
        let product = catalog_product(&catalog, "h201");

        let mut cart = Cart::new();
        let err = cart
            .add_item(
                &product,
                selection(&[("hand", "Right Hand"), ("color", "Chartreuse")]),
            )
            .expect_err("invalid finish");

        assert_eq!(
            err,
            ValidationError::InvalidValue {
                option: OptionId::new("color"),
                value: "Chartreuse".to_owned(),
            }
        );
    }

    #[test]
    fn test_add_item_rejects_unknown_option() {
        let catalog = Catalog::load();
        let product = catalog_product(&catalog, "h201");

        let mut cart = Cart::new();
        let err = cart
            .add_item(
                &product,
                selection(&[
                    ("hand", "Right Hand"),
                    ("color", "Black"),
                    ("engraving", "Yes"),
                ]),
            )
            .expect_err("undeclared option");

        assert_eq!(
            err,
            ValidationError::UnknownOption(OptionId::new("engraving"))
        );
    }

    #[test]
    fn test_remove_item_is_exact_identity_and_idempotent() {
        let catalog = Catalog::load();
        let product = catalog_product(&catalog, "h201");
        let chosen = selection(&[("hand", "Right Hand"), ("color", "Black")]);

        let mut cart = Cart::new();
        let first = cart
            .add_item(&product, chosen.clone())
            .expect("valid selection")
            .id;
        let second = cart.add_item(&product, chosen).expect("valid selection").id;

        cart.remove_item(&first);
        assert_eq!(cart.count(), 1);
        assert_eq!(cart.lines()[0].id, second);

        // Removing again is a no-op, not an error
        cart.remove_item(&first);
        assert_eq!(cart.count(), 1);
    }

    #[test]
    fn test_remove_absent_identity_leaves_cart_unchanged() {
        let catalog = Catalog::load();
        let product = catalog_product(&catalog, "c904");

        let mut cart = Cart::new();
        cart.add_item(
            &product,
            selection(&[("hand", "Left Hand"), ("color", "Mahogany")]),
        )
        .expect("valid selection");

        let before_total = cart.total();
        cart.remove_item(&LineItemId::generate());

        assert_eq!(cart.count(), 1);
        assert_eq!(cart.total(), before_total);
    }

    #[test]
    fn test_total_tracks_add_and_remove() {
        let catalog = Catalog::load();
        let product = catalog_product(&catalog, "h201");

        let mut cart = Cart::new();
        assert_eq!(cart.total().amount, Decimal::ZERO);

        let first = cart
            .add_item(
                &product,
                selection(&[("hand", "Right Hand"), ("color", "Black")]),
            )
            .expect("valid selection")
            .id;
        assert_eq!(cart.total().amount, product.price.amount);
        assert_eq!(cart.count(), 1);

        cart.add_item(
            &product,
            selection(&[("hand", "Left Hand"), ("color", "Mahogany")]),
        )
        .expect("valid selection");
        assert_eq!(
            cart.total().amount,
            product.price.amount * Decimal::from(2u32)
        );
        assert_eq!(cart.count(), 2);

        cart.remove_item(&first);
        assert_eq!(cart.total().amount, product.price.amount);
        assert_eq!(cart.count(), 1);
    }

    #[test]
    fn test_cart_preserves_insertion_order() {
        let catalog = Catalog::load();
        let duty = catalog_product(&catalog, "h201");
        let chest = catalog_product(&catalog, "d109");
        let chosen = selection(&[("hand", "Right Hand"), ("color", "Black")]);

        let mut cart = Cart::new();
        cart.add_item(&duty, chosen.clone()).expect("valid");
        cart.add_item(&chest, chosen).expect("valid");

        let ids: Vec<_> = cart.lines().iter().map(|l| l.product.id.clone()).collect();
        assert_eq!(ids, vec![duty.id, chest.id]);
    }

    #[test]
    fn test_cart_serde_round_trip() {
        let catalog = Catalog::load();
        let product = catalog_product(&catalog, "d602r");

        let mut cart = Cart::new();
        cart.add_item(
            &product,
            selection(&[("hand", "Right Hand"), ("color", "Mahogany")]),
        )
        .expect("valid selection");

        let json = serde_json::to_string(&cart).expect("serialize");
        let back: Cart = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.count(), 1);
        assert_eq!(back.total(), cart.total());
        assert_eq!(back.lines()[0].id, cart.lines()[0].id);
    }
}
