//! Static product catalog and firearm fitment table.
//!
//! The catalog is built once at process start and shared read-only for the
//! life of the process. Products are never mutated or removed after load;
//! cart line items copy product data by value, so nothing here is ever
//! aliased mutably.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use tacworld_core::{Category, CategoryFilter, CurrencyCode, OptionId, Price, ProductId};

/// A configurable option on a product (e.g., draw hand, leather finish).
///
/// The value list is ordered and never empty; the first value is the
/// default selection in the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductOption {
    /// Option ID, unique within the product.
    pub id: OptionId,
    /// Display name (e.g., "Draw Hand").
    pub name: String,
    /// Allowed values, in display order. Never empty.
    pub values: Vec<String>,
}

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog ID (human-assigned slug).
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Holster category.
    pub category: Category,
    /// Price. Non-negative by construction.
    pub price: Price,
    /// Marketing description.
    pub description: String,
    /// Static image reference, relative to the product image root.
    pub image: String,
    /// Configurable options. Every cart add must choose one value per option.
    pub options: Vec<ProductOption>,
    /// Feature tags shown on the product card.
    pub features: Vec<String>,
    /// Average review rating.
    pub rating: f64,
    /// Number of reviews.
    pub reviews: u32,
    /// Whether the product carries the "Best Seller" badge.
    pub best_seller: bool,
}

/// A manufacturer and the firearm models the configurator offers for it.
#[derive(Debug, Clone)]
pub struct Fitment {
    /// Manufacturer name as shown in the dropdown.
    pub manufacturer: String,
    /// Model names, in display order.
    pub models: Vec<String>,
}

/// A customer testimonial shown on the home page.
#[derive(Debug, Clone)]
pub struct Testimonial {
    /// Display name.
    pub author: String,
    /// Role or buyer badge.
    pub role: String,
    /// Quote text.
    pub text: String,
    /// Star rating out of 5.
    pub rating: u8,
}

/// The catalog store: product list plus fitment lookup table.
///
/// Cheaply cloneable via `Arc`; all accessors are read-only and infallible.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Arc<Vec<Product>>,
    fitments: Arc<Vec<Fitment>>,
    testimonials: Arc<Vec<Testimonial>>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::load()
    }
}

impl Catalog {
    /// Build the catalog. Called once at startup.
    #[must_use]
    pub fn load() -> Self {
        Self {
            products: Arc::new(build_products()),
            fitments: Arc::new(build_fitments()),
            testimonials: Arc::new(build_testimonials()),
        }
    }

    /// All products, in stable catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Products passing the category filter, preserving catalog order.
    ///
    /// An unmatched category yields an empty vec, never an error.
    #[must_use]
    pub fn filter_by_category(&self, filter: CategoryFilter) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| filter.matches(p.category))
            .collect()
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn find(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Manufacturer names for the configurator dropdown, in display order.
    pub fn manufacturers(&self) -> impl Iterator<Item = &str> {
        self.fitments.iter().map(|f| f.manufacturer.as_str())
    }

    /// Model list for a manufacturer.
    ///
    /// Unknown manufacturers yield an empty slice; the configurator must
    /// never fail on an unrecognized make.
    #[must_use]
    pub fn models_for(&self, manufacturer: &str) -> &[String] {
        self.fitments
            .iter()
            .find(|f| f.manufacturer == manufacturer)
            .map_or(&[], |f| f.models.as_slice())
    }

    /// Customer testimonials, in display order.
    #[must_use]
    pub fn testimonials(&self) -> &[Testimonial] {
        &self.testimonials
    }

    /// Resolve a fit request to a recommended product.
    ///
    /// Deterministic for any input, including manufacturer/model pairs
    /// absent from the fitment table: prefers the best-selling duty
    /// holster, then the first duty holster, then the first catalog entry.
    #[must_use]
    pub fn recommend_fit(&self, manufacturer: &str, model: &str) -> &Product {
        tracing::debug!(manufacturer, model, "resolving fit recommendation");

        self.products
            .iter()
            .find(|p| p.category == Category::Duty && p.best_seller)
            .or_else(|| self.products.iter().find(|p| p.category == Category::Duty))
            .or_else(|| self.products.first())
            .expect("catalog is never empty")
    }
}

fn usd(cents: i64) -> Price {
    Price::from_cents(cents, CurrencyCode::USD)
}

/// Options shared by the current product line.
fn default_options() -> Vec<ProductOption> {
    vec![
        ProductOption {
            id: OptionId::new("hand"),
            name: "Draw Hand".to_owned(),
            values: vec!["Right Hand".to_owned(), "Left Hand".to_owned()],
        },
        ProductOption {
            id: OptionId::new("color"),
            name: "Leather Finish".to_owned(),
            values: vec!["Mahogany".to_owned(), "Black".to_owned()],
        },
    ]
}

fn tags(features: &[&str]) -> Vec<String> {
    features.iter().map(|&f| f.to_owned()).collect()
}

#[allow(clippy::too_many_lines)]
fn build_products() -> Vec<Product> {
    vec![
        // --- Duty holsters ---
        Product {
            id: ProductId::new("gcode-xst"),
            name: "G-Code XST KYDEX Holster for Beretta 92FS".to_owned(),
            category: Category::Duty,
            price: usd(6500),
            description: "Precision molded Kydex duty holster featuring G-Code's \
                proprietary XST retention system. Rapid-access security for the \
                Beretta 92FS platform."
                .to_owned(),
            image: "products/gcode-xst.jpg".to_owned(),
            options: default_options(),
            features: tags(&["Kydex Shell", "XST Retention", "Duty Ready"]),
            rating: 4.8,
            reviews: 24,
            best_seller: false,
        },
        Product {
            id: ProductId::new("h201"),
            name: "Falco Professional Leather Duty Holster Model H201".to_owned(),
            category: Category::Duty,
            price: usd(12995),
            description: "Professional grade full-grain leather duty holster. \
                Hand-boned for specific firearm fit with reinforced stitching for \
                long-term operational durability."
                .to_owned(),
            image: "products/h201.jpg".to_owned(),
            options: default_options(),
            features: tags(&["Full Grain Leather", "Hand-Boned", "Level 1 Retention"]),
            rating: 4.9,
            reviews: 42,
            best_seller: true,
        },
        Product {
            id: ProductId::new("h202"),
            name: "Falco Duty Leather Holster for Gun with Light Model H202".to_owned(),
            category: Category::Duty,
            price: usd(13995),
            description: "Premium leather duty holster designed to accommodate \
                modern weapon-mounted lights. Combines old-world materials with \
                tactical light compatibility."
                .to_owned(),
            image: "products/h202.jpg".to_owned(),
            options: default_options(),
            features: tags(&["Light Compatible", "Reinforced Mouth", "Steel Core Support"]),
            rating: 4.8,
            reviews: 31,
            best_seller: false,
        },
        Product {
            id: ProductId::new("c909"),
            name: "Falco LVL II Pancake OWB KYDEX Holster Model C909 2021".to_owned(),
            category: Category::Duty,
            price: usd(19995),
            description: "Advanced Level II retention Kydex pancake holster. Offers \
                high security with a mechanical thumb release in a slim, \
                body-hugging OWB profile."
                .to_owned(),
            image: "products/c909.jpg".to_owned(),
            options: default_options(),
            features: tags(&["Kydex Construction", "Level II Retention", "Slim Profile"]),
            rating: 5.0,
            reviews: 18,
            best_seller: false,
        },
        // --- Hybrid holsters ---
        Product {
            id: ProductId::new("c904"),
            name: "Falco Kydex Belt Holster On Leather Platform Model C904 2021".to_owned(),
            category: Category::Hybrid,
            price: usd(11995),
            description: "Leather platform holster with belt slits on both sides \
                that curve the holster comfortably around your body shape when \
                threaded on a gun belt."
                .to_owned(),
            image: "products/c904.jpg".to_owned(),
            options: default_options(),
            features: tags(&["Leather Platform", "Kydex Shell", "Body-Contouring"]),
            rating: 4.9,
            reviews: 56,
            best_seller: false,
        },
        Product {
            id: ProductId::new("c908"),
            name: "Falco Compact Hybrid OWB Holster Model C908 2021".to_owned(),
            category: Category::Hybrid,
            price: usd(10995),
            description: "Minimalist hybrid OWB holster designed for sub-compact \
                firearms. Features a premium leather backing for comfort and a \
                rigid Kydex front for fast draw."
                .to_owned(),
            image: "products/c908.jpg".to_owned(),
            options: default_options(),
            features: tags(&["Deep Concealment", "Compact Base", "Adjustable Tension"]),
            rating: 4.7,
            reviews: 29,
            best_seller: false,
        },
        // --- Shoulder systems ---
        Product {
            id: ProductId::new("d632l"),
            name: "Falco Horizontal Shoulder Holster for Guns with Light and Red Dot \
                Model D632L"
                .to_owned(),
            category: Category::Shoulder,
            price: usd(25995),
            description: "Maximum capacity horizontal shoulder system. Full \
                compatibility with weapon lights and red dot optics. Includes \
                balanced double magazine pouch."
                .to_owned(),
            image: "products/d632l.jpg".to_owned(),
            options: default_options(),
            features: tags(&["Light/Optic Ready", "Balanced Harness", "Horizontal Draw"]),
            rating: 5.0,
            reviews: 14,
            best_seller: false,
        },
        Product {
            id: ProductId::new("d602r"),
            name: "Falco Leather Horizontal Shoulder Holster for Guns with Red Dot \
                Model D602R"
                .to_owned(),
            category: Category::Shoulder,
            price: usd(21595),
            description: "Precision horizontal shoulder holster specifically cut for \
                slide-mounted red dot sights. Hand-molded leather ensures perfect \
                firearm retention."
                .to_owned(),
            image: "products/d602r.jpg".to_owned(),
            options: default_options(),
            features: tags(&["Optic Cut", "Adjustable Harness", "Premium Cowhide"]),
            rating: 4.9,
            reviews: 38,
            best_seller: false,
        },
        Product {
            id: ProductId::new("d602l"),
            name: "Falco Leather Horizontal Shoulder Holster for Guns with Light / \
                Laser Model D602L"
                .to_owned(),
            category: Category::Shoulder,
            price: usd(21995),
            description: "Horizontal shoulder carry solution for firearms equipped \
                with underslung lights or lasers. Hand-crafted for all-day \
                concealment and comfort."
                .to_owned(),
            image: "products/d602l.jpg".to_owned(),
            options: default_options(),
            features: tags(&["Laser/Light Support", "Custom Molded", "Horizontal Profile"]),
            rating: 4.8,
            reviews: 25,
            best_seller: false,
        },
        Product {
            id: ProductId::new("d109"),
            name: "Falco FORESTER Style Chest Leather Holster, Model D109 Forester".to_owned(),
            category: Category::Shoulder,
            price: usd(21995),
            description: "Premium chest-mount holster designed for outdoor and \
                hiking use. Keeps the firearm accessible while wearing packs or \
                heavy outerwear."
                .to_owned(),
            image: "products/d109.jpg".to_owned(),
            options: default_options(),
            features: tags(&["Chest Mounted", "Rugged Stitching", "Quick Release"]),
            rating: 4.8,
            reviews: 22,
            best_seller: false,
        },
        Product {
            id: ProductId::new("d209"),
            name: "Falco FORESTER Style Chest Leather Holster, Model D209 Forester".to_owned(),
            category: Category::Shoulder,
            price: usd(19595),
            description: "Optimized chest holster for smaller frame firearms. The \
                Forester series keeps the weapon centered on the torso for maximum \
                stability during movement."
                .to_owned(),
            image: "products/d209.jpg".to_owned(),
            options: default_options(),
            features: tags(&["Lightweight Design", "Centered Carry", "Adjustable Straps"]),
            rating: 4.7,
            reviews: 19,
            best_seller: false,
        },
    ]
}

fn build_fitments() -> Vec<Fitment> {
    fn fitment(manufacturer: &str, models: &[&str]) -> Fitment {
        Fitment {
            manufacturer: manufacturer.to_owned(),
            models: models.iter().map(|&m| m.to_owned()).collect(),
        }
    }

    vec![
        fitment("Glock", &["G19 Gen 3/4/5", "G17", "G43/43X", "G48", "G26"]),
        fitment(
            "Sig Sauer",
            &["P365", "P365XL", "P320 Compact", "P320 Full", "P226", "P229"],
        ),
        fitment(
            "Smith & Wesson",
            &["M&P Shield Plus", "M&P 2.0 Compact", "J-Frame Revolver"],
        ),
        fitment(
            "Colt",
            &["1911 Government 5\"", "1911 Commander 4.25\"", "Python 4\""],
        ),
        fitment("CZ", &["P-10 C", "75 SP-01", "Shadow 2"]),
        fitment("H&K", &["VP9", "P30", "USP Compact"]),
        fitment("Walther", &["PDP Compact", "PPQ M2"]),
        fitment("Springfield", &["Hellcat", "Hellcat Pro", "Echelon"]),
        fitment("Beretta", &["92FS", "M9A4", "PX4 Storm"]),
    ]
}

fn build_testimonials() -> Vec<Testimonial> {
    fn quote(author: &str, role: &str, text: &str) -> Testimonial {
        Testimonial {
            author: author.to_owned(),
            role: role.to_owned(),
            text: text.to_owned(),
            rating: 5,
        }
    }

    vec![
        quote(
            "Capt. Mark S.",
            "L.E.O. Florida",
            "The H201 is my primary duty holster. The break-in was fast and the \
             retention is as secure as any Kydex holster I've used.",
        ),
        quote(
            "Richard T.",
            "Verified Buyer",
            "The rig fits my Sig with a Romeo1 and TLR-7 perfectly. Most shoulder \
             rigs don't handle lights well, but this one is flawless.",
        ),
        quote(
            "Elena G.",
            "Outdoor Enthusiast",
            "The Forester Chest Rig is essential for bear country hiking. Stable \
             even on steep terrain and quick to access.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_catalog_invariants() {
        let catalog = Catalog::load();
        assert!(!catalog.products().is_empty());

        for product in catalog.products() {
            assert!(
                product.price.amount >= Decimal::ZERO,
                "negative price on {}",
                product.id
            );
            for option in &product.options {
                assert!(
                    !option.values.is_empty(),
                    "empty option values on {}",
                    product.id
                );
            }
        }
    }

    #[test]
    fn test_product_ids_are_unique() {
        let catalog = Catalog::load();
        for (i, a) in catalog.products().iter().enumerate() {
            for b in catalog.products().iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_filter_all_returns_full_catalog_in_order() {
        let catalog = Catalog::load();
        let all = catalog.filter_by_category(CategoryFilter::All);
        assert_eq!(all.len(), catalog.products().len());
        for (filtered, original) in all.iter().zip(catalog.products()) {
            assert_eq!(filtered.id, original.id);
        }
    }

    #[test]
    fn test_filter_by_category_preserves_relative_order() {
        let catalog = Catalog::load();
        let duty = catalog.filter_by_category(CategoryFilter::Only(Category::Duty));
        assert!(!duty.is_empty());
        assert!(duty.iter().all(|p| p.category == Category::Duty));

        // Relative order matches the unfiltered catalog
        let expected: Vec<_> = catalog
            .products()
            .iter()
            .filter(|p| p.category == Category::Duty)
            .map(|p| p.id.clone())
            .collect();
        let actual: Vec<_> = duty.iter().map(|p| p.id.clone()).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_filter_unmatched_category_is_empty_not_error() {
        let catalog = Catalog::load();
        let iwb = catalog.filter_by_category(CategoryFilter::Only(Category::Iwb));
        assert!(iwb.is_empty());
    }

    #[test]
    fn test_models_for_known_manufacturer() {
        let catalog = Catalog::load();
        let models = catalog.models_for("Glock");
        assert!(models.contains(&"G19 Gen 3/4/5".to_owned()));
    }

    #[test]
    fn test_models_for_unknown_manufacturer_is_empty() {
        let catalog = Catalog::load();
        assert!(catalog.models_for("Daewoo").is_empty());
    }

    #[test]
    fn test_recommend_fit_is_deterministic() {
        let catalog = Catalog::load();
        let first = catalog.recommend_fit("Glock", "G19 Gen 3/4/5");
        let second = catalog.recommend_fit("Glock", "G19 Gen 3/4/5");
        assert_eq!(first.id, second.id);
    }

    #[test]
    fn test_recommend_fit_tolerates_unknown_pair() {
        let catalog = Catalog::load();
        let product = catalog.recommend_fit("Daewoo", "DP51");
        assert!(catalog.find(&product.id).is_some());
    }

    #[test]
    fn test_recommend_fit_prefers_best_selling_duty() {
        let catalog = Catalog::load();
        let product = catalog.recommend_fit("Glock", "G17");
        assert_eq!(product.category, Category::Duty);
        assert!(product.best_seller);
    }
}
