//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the controller and services.

pub mod item;
pub mod report;

pub use item::{handle_item_command, ItemCommands};
pub use report::{handle_categories_command, handle_export_command, handle_history_command};
