//! Storage layer for Spendbook
//!
//! Owns the SQLite connection and hands out lightweight repositories that
//! borrow it. Also wires the audit log so services can record changes.

pub mod categories;
pub mod init;
pub mod items;

pub use categories::{CategoryRepository, CategoryUsage};
pub use init::initialize_storage;
pub use items::{ItemRepository, NewItem};

use rusqlite::Connection;
use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::SpendbookPaths;
use crate::error::SpendbookError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: SpendbookPaths,
    conn: Connection,
    audit: AuditLogger,
}

impl Storage {
    /// Open (creating if needed) the database under the given paths
    pub fn new(paths: SpendbookPaths) -> Result<Self, SpendbookError> {
        paths.ensure_directories()?;

        let conn = Connection::open(paths.database_file()).map_err(|e| {
            SpendbookError::Storage(format!(
                "Failed to open {}: {}",
                paths.database_file().display(),
                e
            ))
        })?;
        init::setup_database(&conn)?;

        Ok(Self {
            audit: AuditLogger::new(paths.audit_log()),
            conn,
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &SpendbookPaths {
        &self.paths
    }

    pub fn categories(&self) -> CategoryRepository<'_> {
        CategoryRepository::new(&self.conn)
    }

    pub fn items(&self) -> ItemRepository<'_> {
        ItemRepository::new(&self.conn)
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Record a create operation in the audit log
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), SpendbookError> {
        self.audit
            .log(&AuditEntry::create(entity_type, entity_id, entity_name, entity))
    }

    /// Record an update operation in the audit log
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
        diff_summary: Option<String>,
    ) -> Result<(), SpendbookError> {
        self.audit.log(&AuditEntry::update(
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
            diff_summary,
        ))
    }

    /// Record several delete operations in the audit log
    pub fn log_deletes(&self, entries: Vec<AuditEntry>) -> Result<(), SpendbookError> {
        self.audit.log_batch(&entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendbookPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(storage.paths().database_file().exists());
        assert!(temp_dir.path().join("reports").exists());
        assert!(storage.categories().get_all().unwrap().is_empty());
    }

    #[test]
    fn test_data_survives_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendbookPaths::with_base_dir(temp_dir.path().to_path_buf());

        {
            let storage = Storage::new(paths.clone()).unwrap();
            storage.categories().insert("Food").unwrap();
        }

        let storage = Storage::new(paths).unwrap();
        let categories = storage.categories().get_all().unwrap();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].name, "Food");
    }

    #[test]
    fn test_log_create_writes_audit_entry() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendbookPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        let category = storage.categories().insert("Food").unwrap();
        storage
            .log_create(
                EntityType::Category,
                category.id.to_string(),
                Some(category.name.clone()),
                &category,
            )
            .unwrap();

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].entity_name.as_deref(), Some("Food"));
    }
}
