//! Presentation controller
//!
//! The App struct owns the item table as a front end shows it: the active
//! view, the display rows and which rows are checked. Every intent goes
//! through here, and every mutation ends with a full refresh.

use std::collections::BTreeSet;
use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime};

use crate::config::Settings;
use crate::error::{SpendbookError, SpendbookResult};
use crate::export;
use crate::models::{Item, ItemId, ItemInput, ItemWithCategory};
use crate::services::{ItemFilter, ItemQuery, ItemService, ItemSort};
use crate::storage::Storage;

/// Which listing the table currently shows
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ListView {
    #[default]
    All,
    Search(String),
    Filter(ItemFilter),
    Sort(ItemSort),
}

impl ListView {
    /// Query whose result, once prepended row by row, gives the display order
    fn query(&self) -> ItemQuery {
        match self {
            Self::All => ItemQuery::new(),
            Self::Search(text) => ItemQuery::new().filter(ItemFilter::NameContains(text.clone())),
            Self::Filter(filter) => ItemQuery::new().filter(filter.clone()),
            Self::Sort(sort) => {
                ItemQuery::new().sort(ItemSort::new(sort.key, sort.direction.reversed()))
            }
        }
    }
}

/// One row of the item table
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRow {
    pub id: ItemId,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub date: NaiveDate,
    pub selected: bool,
}

impl ItemRow {
    fn from_entry(entry: ItemWithCategory) -> Self {
        Self {
            id: entry.item.id,
            name: entry.item.name,
            category: entry.category.name,
            price: entry.item.price,
            date: entry.item.purchase_date,
            selected: false,
        }
    }
}

/// Main controller state
pub struct App<'a> {
    storage: &'a Storage,
    settings: Settings,
    view: ListView,
    rows: Vec<ItemRow>,
}

impl<'a> App<'a> {
    /// Create the controller and load the full listing
    pub fn new(storage: &'a Storage, settings: Settings) -> SpendbookResult<Self> {
        let mut app = Self {
            storage,
            settings,
            view: ListView::All,
            rows: Vec::new(),
        };
        app.refresh()?;
        Ok(app)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn view(&self) -> &ListView {
        &self.view
    }

    /// Current display rows, first row at index 0
    pub fn rows(&self) -> &[ItemRow] {
        &self.rows
    }

    /// Re-query the current view and rebuild the rows; clears all checks
    pub fn refresh(&mut self) -> SpendbookResult<()> {
        let entries = ItemService::new(self.storage).query(&self.view.query())?;

        // Each loaded item is prepended
        self.rows = entries.into_iter().rev().map(ItemRow::from_entry).collect();
        Ok(())
    }

    /// Switch to another view and refresh
    pub fn show(&mut self, view: ListView) -> SpendbookResult<()> {
        self.view = view;
        self.refresh()
    }

    pub fn search(&mut self, text: impl Into<String>) -> SpendbookResult<()> {
        self.show(ListView::Search(text.into()))
    }

    pub fn filter(&mut self, filter: ItemFilter) -> SpendbookResult<()> {
        self.show(ListView::Filter(filter))
    }

    pub fn sort(&mut self, sort: ItemSort) -> SpendbookResult<()> {
        self.show(ListView::Sort(sort))
    }

    /// Look up one item with its category
    pub fn item(&self, id: ItemId) -> SpendbookResult<ItemWithCategory> {
        ItemService::new(self.storage).get(id)
    }

    /// Check or uncheck a displayed row
    pub fn set_checked(&mut self, id: ItemId, checked: bool) -> SpendbookResult<()> {
        let row = self
            .rows
            .iter_mut()
            .find(|row| row.id == id)
            .ok_or_else(|| SpendbookError::item_not_found(id.to_string()))?;
        row.selected = checked;
        Ok(())
    }

    /// Uncheck everything if the first row is checked, otherwise check everything
    pub fn toggle_all(&mut self) {
        let checked = !self.rows.first().map(|row| row.selected).unwrap_or(false);
        for row in &mut self.rows {
            row.selected = checked;
        }
    }

    /// Checked rows in display order
    pub fn checked_items(&self) -> Vec<&ItemRow> {
        self.rows.iter().filter(|row| row.selected).collect()
    }

    fn checked_ids(&self) -> BTreeSet<ItemId> {
        self.checked_items().iter().map(|row| row.id).collect()
    }

    fn single_checked(&self) -> SpendbookResult<ItemId> {
        match self.checked_items().as_slice() {
            [row] => Ok(row.id),
            _ => Err(SpendbookError::Selection("Select exactly one item!".to_string())),
        }
    }

    /// Record a new item, then show the full list
    pub fn add_item(&mut self, input: &ItemInput) -> SpendbookResult<Item> {
        let item = ItemService::new(self.storage).create(input, &self.settings)?;
        self.show(ListView::All)?;
        Ok(item)
    }

    /// Edit form pre-filled from the single checked item
    pub fn edit_form(&self) -> SpendbookResult<ItemInput> {
        let id = self.single_checked()?;
        let entry = ItemService::new(self.storage).get(id)?;
        Ok(ItemInput::from_existing(&entry))
    }

    /// Overwrite the single checked item, then show the full list
    pub fn edit_checked(&mut self, input: &ItemInput) -> SpendbookResult<Item> {
        let id = self.single_checked()?;
        let item = ItemService::new(self.storage).update(id, input, &self.settings)?;
        self.show(ListView::All)?;
        Ok(item)
    }

    /// Delete every checked item, then show the full list
    pub fn delete_checked(&mut self) -> SpendbookResult<usize> {
        let ids: Vec<ItemId> = self.checked_ids().into_iter().collect();
        if ids.is_empty() {
            return Err(SpendbookError::Selection(
                "Select at least one item!".to_string(),
            ));
        }

        let result = ItemService::new(self.storage).delete_many(&ids);
        self.show(ListView::All)?;
        result
    }

    /// Persist the user's answer to the high-value purchase prompt
    pub fn answer_high_value_prompt(&mut self, granted: bool) -> SpendbookResult<()> {
        self.settings
            .record_high_value_answer(granted, self.storage.paths())
    }

    /// Write the report file for all items
    pub fn export_report(&self, now: NaiveDateTime) -> SpendbookResult<PathBuf> {
        export::export_report_file(self.storage, &self.settings, now)
    }
}
