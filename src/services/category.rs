//! Category service
//!
//! Categories are never created directly by the user; items name them and
//! `find_or_create` resolves or creates the row.

use crate::audit::EntityType;
use crate::error::{SpendbookError, SpendbookResult};
use crate::models::{Category, CategoryId};
use crate::storage::{CategoryUsage, Storage};

/// Service for category management
pub struct CategoryService<'a> {
    storage: &'a Storage,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Look up a category by trimmed, case-insensitive name, creating it if absent
    ///
    /// A newly created category keeps the caller's casing. Not atomic across
    /// processes; a single user is assumed.
    pub fn find_or_create(&self, name: &str) -> SpendbookResult<Category> {
        let name = name.trim();

        if let Some(existing) = self.storage.categories().get_by_name(name)? {
            return Ok(existing);
        }

        let category = self.storage.categories().insert(name)?;

        self.storage.log_create(
            EntityType::Category,
            category.id.to_string(),
            Some(category.name.clone()),
            &category,
        )?;

        Ok(category)
    }

    /// Get a category by ID
    pub fn get(&self, id: CategoryId) -> SpendbookResult<Category> {
        self.storage
            .categories()
            .get(id)?
            .ok_or_else(|| SpendbookError::category_not_found(id.to_string()))
    }

    /// List all categories in creation order
    pub fn list(&self) -> SpendbookResult<Vec<Category>> {
        self.storage.categories().get_all()
    }

    /// List all categories with their item counts
    pub fn list_with_usage(&self) -> SpendbookResult<Vec<CategoryUsage>> {
        self.storage.categories().get_usage()
    }
}
