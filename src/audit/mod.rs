//! Audit logging for Spendbook
//!
//! Every category creation and item create/update/delete is appended to
//! `audit.log` as one JSON object per line (JSONL), with before/after values.
//!
//! # Example
//!
//! ```rust,ignore
//! use spendbook::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! let entry = AuditEntry::create(EntityType::Item, "12", Some("Milk 2L".into()), &item);
//! logger.log(&entry)?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
