//! Spendbook - personal expense tracker
//!
//! This library provides the core functionality for the Spendbook expense
//! tracker: purchases grouped into categories, kept in a local SQLite
//! database, browsable through search, filter and sort views, and exportable
//! as a spreadsheet report.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (categories, items, typed ids)
//! - `storage`: SQLite storage layer
//! - `services`: Business logic layer
//! - `audit`: Audit logging system
//! - `export`: Spreadsheet report export
//! - `app`: Presentation controller (display rows and checked selection)
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use spendbook::app::App;
//! use spendbook::config::{paths::SpendbookPaths, settings::Settings};
//! use spendbook::storage::Storage;
//!
//! let paths = SpendbookPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths)?;
//! let app = App::new(&storage, settings)?;
//! ```

pub mod app;
pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{SpendbookError, SpendbookResult};
