//! Item repository backed by the `items` table
//!
//! Reads always join the owning category so callers get `ItemWithCategory`.

use chrono::{NaiveDate, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::SpendbookError;
use crate::models::{Category, CategoryId, Item, ItemId, ItemWithCategory};

const SELECT_ITEMS: &str = "
    SELECT i.id, i.name, i.price, i.purchase_date, i.about, i.created_at, i.category_id,
           c.name, c.created_at
    FROM items i
    JOIN categories c ON c.id = i.category_id";

/// Column values for a row about to be inserted
#[derive(Debug, Clone)]
pub struct NewItem<'i> {
    pub name: &'i str,
    pub price: f64,
    pub purchase_date: NaiveDate,
    pub about: Option<&'i str>,
    pub category_id: CategoryId,
}

/// Repository for item persistence
pub struct ItemRepository<'a> {
    conn: &'a Connection,
}

fn row_to_entry(row: &Row<'_>) -> rusqlite::Result<ItemWithCategory> {
    let category_id: CategoryId = row.get(6)?;
    Ok(ItemWithCategory {
        item: Item {
            id: row.get(0)?,
            name: row.get(1)?,
            price: row.get(2)?,
            purchase_date: row.get(3)?,
            about: row.get(4)?,
            created_at: row.get(5)?,
            category_id,
        },
        category: Category {
            id: category_id,
            name: row.get(7)?,
            created_at: row.get(8)?,
        },
    })
}

impl<'a> ItemRepository<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Get an item by ID
    pub fn get(&self, id: ItemId) -> Result<Option<ItemWithCategory>, SpendbookError> {
        let sql = format!("{} WHERE i.id = ?1", SELECT_ITEMS);
        let entry = self
            .conn
            .query_row(&sql, params![id], row_to_entry)
            .optional()?;
        Ok(entry)
    }

    /// Get all items in store order (ascending id)
    pub fn get_all(&self) -> Result<Vec<ItemWithCategory>, SpendbookError> {
        let sql = format!("{} ORDER BY i.id", SELECT_ITEMS);
        let mut stmt = self.conn.prepare(&sql)?;
        let entries = stmt
            .query_map([], row_to_entry)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(entries)
    }

    /// Insert a new item and return it with its assigned id
    pub fn insert(&self, new_item: &NewItem<'_>) -> Result<Item, SpendbookError> {
        let created_at = Utc::now();
        self.conn.execute(
            "INSERT INTO items (name, price, purchase_date, about, created_at, category_id)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                new_item.name,
                new_item.price,
                new_item.purchase_date,
                new_item.about,
                created_at,
                new_item.category_id,
            ],
        )?;

        Ok(Item {
            id: ItemId::new(self.conn.last_insert_rowid()),
            name: new_item.name.to_string(),
            price: new_item.price,
            purchase_date: new_item.purchase_date,
            about: new_item.about.map(str::to_string),
            created_at,
            category_id: new_item.category_id,
        })
    }

    /// Write every mutable column of an existing item
    ///
    /// Returns false if no row with that id exists.
    pub fn update(&self, item: &Item) -> Result<bool, SpendbookError> {
        let changed = self.conn.execute(
            "UPDATE items
             SET name = ?1, price = ?2, purchase_date = ?3, about = ?4, category_id = ?5
             WHERE id = ?6",
            params![
                item.name,
                item.price,
                item.purchase_date,
                item.about,
                item.category_id,
                item.id,
            ],
        )?;
        Ok(changed > 0)
    }

    /// Delete an item; returns false if it did not exist
    pub fn delete(&self, id: ItemId) -> Result<bool, SpendbookError> {
        let changed = self
            .conn
            .execute("DELETE FROM items WHERE id = ?1", params![id])?;
        Ok(changed > 0)
    }

    /// Number of items linked to a category
    pub fn count_in_category(&self, category_id: CategoryId) -> Result<usize, SpendbookError> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM items WHERE category_id = ?1",
            params![category_id],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }
}
