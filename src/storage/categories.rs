//! Category repository backed by the `categories` table

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::SpendbookError;
use crate::models::{Category, CategoryId};

const SELECT_CATEGORIES: &str = "SELECT id, name, created_at FROM categories";

/// Repository for category persistence
pub struct CategoryRepository<'a> {
    conn: &'a Connection,
}

/// A category with the number of items linked to it
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryUsage {
    pub category: Category,
    pub item_count: usize,
}

fn row_to_category(row: &Row<'_>) -> rusqlite::Result<Category> {
    Ok(Category {
        id: row.get(0)?,
        name: row.get(1)?,
        created_at: row.get(2)?,
    })
}

impl<'a> CategoryRepository<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Get a category by ID
    pub fn get(&self, id: CategoryId) -> Result<Option<Category>, SpendbookError> {
        let sql = format!("{} WHERE id = ?1", SELECT_CATEGORIES);
        let category = self
            .conn
            .query_row(&sql, params![id], row_to_category)
            .optional()?;
        Ok(category)
    }

    /// Get all categories in creation order
    pub fn get_all(&self) -> Result<Vec<Category>, SpendbookError> {
        let sql = format!("{} ORDER BY id", SELECT_CATEGORIES);
        let mut stmt = self.conn.prepare(&sql)?;
        let categories = stmt
            .query_map([], row_to_category)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(categories)
    }

    /// Find a category by name (case-insensitive, Unicode aware)
    ///
    /// SQLite's `lower()` only folds ASCII, so the comparison happens here.
    pub fn get_by_name(&self, name: &str) -> Result<Option<Category>, SpendbookError> {
        Ok(self
            .get_all()?
            .into_iter()
            .find(|category| category.matches_name(name)))
    }

    /// Insert a new category and return it with its assigned id
    pub fn insert(&self, name: &str) -> Result<Category, SpendbookError> {
        let created_at = Utc::now();
        self.conn.execute(
            "INSERT INTO categories (name, created_at) VALUES (?1, ?2)",
            params![name, created_at],
        )?;

        Ok(Category {
            id: CategoryId::new(self.conn.last_insert_rowid()),
            name: name.to_string(),
            created_at,
        })
    }

    /// All categories with their item counts, in creation order
    pub fn get_usage(&self) -> Result<Vec<CategoryUsage>, SpendbookError> {
        let mut stmt = self.conn.prepare(
            "SELECT c.id, c.name, c.created_at, COUNT(i.id)
             FROM categories c
             LEFT JOIN items i ON i.category_id = c.id
             GROUP BY c.id
             ORDER BY c.id",
        )?;

        let usage = stmt
            .query_map([], |row| {
                let count: i64 = row.get(3)?;
                Ok(CategoryUsage {
                    category: row_to_category(row)?,
                    item_count: count as usize,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(usage)
    }
}
