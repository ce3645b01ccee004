//! Shared type definitions.

mod category;
mod chat;
mod id;
mod price;

pub use category::{Category, CategoryFilter, ParseCategoryError};
pub use chat::ChatRole;
pub use id::{LineItemId, MessageId, OptionId, ProductId};
pub use price::{CurrencyCode, Price};
