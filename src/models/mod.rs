//! Core data models for Spendbook
//!
//! Purchases (items), the categories that group them, and the typed ids that
//! link the two.

pub mod category;
pub mod ids;
pub mod item;

pub use category::Category;
pub use ids::{CategoryId, ItemId};
pub use item::{
    Item, ItemInput, ItemValidationError, ItemWithCategory, HIGH_VALUE_THRESHOLD, MIN_NAME_LEN,
};
