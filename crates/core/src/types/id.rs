//! Newtype IDs for type-safe entity references.
//!
//! Catalog identities (products, options) are human-assigned slugs, so their
//! wrappers are string-backed. Per-session identities (cart line items, chat
//! messages) are minted fresh with `generate()` and are UUID-backed; the only
//! contract is uniqueness within a session.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to define a type-safe, string-backed ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_str()`
/// - `From<&str>`, `From<String>`, and `Display` implementations
///
/// # Example
///
/// ```rust
/// # use tacworld_core::define_id;
/// define_id!(ProductId);
/// define_id!(OptionId);
///
/// let product_id = ProductId::new("h201");
/// let option_id = OptionId::new("hand");
///
/// // These are different types, so this won't compile:
/// // let _: ProductId = option_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

// Catalog entity IDs
define_id!(ProductId);
define_id!(OptionId);

/// Identity of a cart line item.
///
/// Minted fresh on every add-to-cart so that two line items for the same
/// product are independently removable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineItemId(Uuid);

impl LineItemId {
    /// Mint a fresh, session-unique line item ID.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for LineItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for LineItemId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Identity of a chat transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(Uuid);

impl MessageId {
    /// Mint a fresh, session-unique message ID.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_id_round_trip() {
        let id = ProductId::new("h201");
        assert_eq!(id.as_str(), "h201");
        assert_eq!(id.to_string(), "h201");

        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"h201\"");

        let back: ProductId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, id);
    }

    #[test]
    fn test_line_item_ids_are_unique() {
        let a = LineItemId::generate();
        let b = LineItemId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_line_item_id_parse_round_trip() {
        let id = LineItemId::generate();
        let parsed: LineItemId = id.to_string().parse().expect("parse");
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_line_item_id_rejects_garbage() {
        assert!("not-a-uuid".parse::<LineItemId>().is_err());
    }
}
