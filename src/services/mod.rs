//! Service layer for Spendbook
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, category resolution, and listing queries.

pub mod category;
pub mod item;
pub mod query;

pub use category::CategoryService;
pub use item::ItemService;
pub use query::{ItemFilter, ItemQuery, ItemSort, SortDirection, SortKey};
