//! Holster categories and the catalog category filter.

use serde::{Deserialize, Serialize};

/// Holster category.
///
/// Closed set fixed by the catalog; products never change category after
/// load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Inside-the-waistband concealed carry.
    Iwb,
    /// Duty holsters.
    Duty,
    /// OWB hybrid (Kydex shell on leather platform).
    Hybrid,
    /// Shoulder systems and chest rigs.
    Shoulder,
    /// Premium leather.
    Leather,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Self; 5] = [
        Self::Iwb,
        Self::Duty,
        Self::Hybrid,
        Self::Shoulder,
        Self::Leather,
    ];

    /// Human-readable label shown in the UI.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Iwb => "IWB Concealed",
            Self::Duty => "Duty Holsters",
            Self::Hybrid => "OWB Hybrid",
            Self::Shoulder => "Shoulder Systems",
            Self::Leather => "Premium Leather",
        }
    }

    /// URL-safe slug used in query strings.
    #[must_use]
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::Iwb => "iwb",
            Self::Duty => "duty",
            Self::Hybrid => "hybrid",
            Self::Shoulder => "shoulder",
            Self::Leather => "leather",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slug())
    }
}

/// Error parsing a category slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCategoryError(pub String);

impl std::fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown category: {}", self.0)
    }
}

impl std::error::Error for ParseCategoryError {}

impl std::str::FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "iwb" => Ok(Self::Iwb),
            "duty" => Ok(Self::Duty),
            "hybrid" => Ok(Self::Hybrid),
            "shoulder" => Ok(Self::Shoulder),
            "leather" => Ok(Self::Leather),
            other => Err(ParseCategoryError(other.to_owned())),
        }
    }
}

/// Catalog category filter: a specific category or the "All" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    /// No filtering; the full catalog.
    #[default]
    All,
    /// Only products in the given category.
    Only(Category),
}

impl CategoryFilter {
    /// Whether a product in `category` passes this filter.
    #[must_use]
    pub fn matches(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(only) => *only == category,
        }
    }

    /// URL-safe slug used in query strings.
    #[must_use]
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(category) => category.slug(),
        }
    }
}

impl std::str::FromStr for CategoryFilter {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(Self::All)
        } else {
            s.parse::<Category>().map(Self::Only)
        }
    }
}
