//! Item service
//!
//! Provides business logic for purchases: validated create and update,
//! permanent deletion, and filtered/sorted listings.

use std::collections::BTreeSet;

use crate::audit::{AuditEntry, EntityType};
use crate::config::Settings;
use crate::error::{SpendbookError, SpendbookResult};
use crate::models::{Item, ItemId, ItemInput, ItemWithCategory};
use crate::storage::{NewItem, Storage};

use super::category::CategoryService;
use super::query::{ItemFilter, ItemQuery, ItemSort};

/// Service for item management
pub struct ItemService<'a> {
    storage: &'a Storage,
}

impl<'a> ItemService<'a> {
    /// Create a new item service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Validate the input, resolve its category, and persist a new item
    pub fn create(&self, input: &ItemInput, settings: &Settings) -> SpendbookResult<Item> {
        input.validate(settings.high_value_purchases)?;

        let category = CategoryService::new(self.storage).find_or_create(&input.category_name)?;

        let item = self.storage.items().insert(&NewItem {
            name: &input.name,
            price: input.price,
            purchase_date: input.purchase_date,
            about: input.about.as_deref(),
            category_id: category.id,
        })?;

        self.storage.log_create(
            EntityType::Item,
            item.id.to_string(),
            Some(item.name.clone()),
            &item,
        )?;

        Ok(item)
    }

    /// Get an item with its category
    pub fn get(&self, id: ItemId) -> SpendbookResult<ItemWithCategory> {
        self.storage
            .items()
            .get(id)?
            .ok_or_else(|| SpendbookError::item_not_found(id.to_string()))
    }

    /// Validate the input and overwrite an existing item
    ///
    /// The category is only reassigned when the name differs
    /// case-insensitively from the current one.
    pub fn update(
        &self,
        id: ItemId,
        input: &ItemInput,
        settings: &Settings,
    ) -> SpendbookResult<Item> {
        input.validate(settings.high_value_purchases)?;

        let current = self.get(id)?;
        let before = current.item.clone();
        let mut item = current.item;

        if !current.category.matches_name(&input.category_name) {
            let category =
                CategoryService::new(self.storage).find_or_create(&input.category_name)?;
            item.category_id = category.id;
        }

        item.name = input.name.clone();
        item.price = input.price;
        item.about = input.about.clone();
        item.purchase_date = input.purchase_date;

        if !self.storage.items().update(&item)? {
            return Err(SpendbookError::item_not_found(id.to_string()));
        }

        let changes = describe_changes(&before, &item);
        if !changes.is_empty() {
            self.storage.log_update(
                EntityType::Item,
                item.id.to_string(),
                Some(item.name.clone()),
                &before,
                &item,
                Some(changes.join(", ")),
            )?;
        }

        Ok(item)
    }

    /// Permanently delete the given items
    ///
    /// Repeated ids are deleted once. Stops at the first id that doesn't
    /// exist; items before it stay deleted.
    pub fn delete_many(&self, ids: &[ItemId]) -> SpendbookResult<usize> {
        let mut entries = Vec::with_capacity(ids.len());
        let mut seen = BTreeSet::new();
        let mut result = Ok(());

        for &id in ids {
            if !seen.insert(id) {
                continue;
            }

            let existing = match self.storage.items().get(id) {
                Ok(Some(existing)) => existing,
                Ok(None) => {
                    result = Err(SpendbookError::item_not_found(id.to_string()));
                    break;
                }
                Err(e) => {
                    result = Err(e);
                    break;
                }
            };

            if let Err(e) = self.storage.items().delete(id) {
                result = Err(e);
                break;
            }

            entries.push(AuditEntry::delete(
                EntityType::Item,
                id.to_string(),
                Some(existing.item.name.clone()),
                &existing.item,
            ));
        }

        let deleted = entries.len();
        self.storage.log_deletes(entries)?;
        result.map(|_| deleted)
    }

    /// List items in store order, optionally filtered and sorted
    pub fn list_items(
        &self,
        filter: Option<ItemFilter>,
        sort: Option<ItemSort>,
    ) -> SpendbookResult<Vec<ItemWithCategory>> {
        self.query(&ItemQuery { filter, sort })
    }

    /// Run a prepared query
    pub fn query(&self, query: &ItemQuery) -> SpendbookResult<Vec<ItemWithCategory>> {
        let entries = self.storage.items().get_all()?;
        Ok(query.apply(entries))
    }
}

fn describe_changes(before: &Item, after: &Item) -> Vec<String> {
    let mut changes = Vec::new();
    if before.name != after.name {
        changes.push(format!("name: {} -> {}", before.name, after.name));
    }
    if before.price != after.price {
        changes.push(format!("price: {:.2} -> {:.2}", before.price, after.price));
    }
    if before.purchase_date != after.purchase_date {
        changes.push(format!(
            "date: {} -> {}",
            before.purchase_date, after.purchase_date
        ));
    }
    if before.about != after.about {
        changes.push("about changed".to_string());
    }
    if before.category_id != after.category_id {
        changes.push(format!(
            "category: {} -> {}",
            before.category_id, after.category_id
        ));
    }
    changes
}
