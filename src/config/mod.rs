//! Configuration module for Spendbook
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence (including the high-value purchase consent)

pub mod paths;
pub mod settings;

pub use paths::SpendbookPaths;
pub use settings::{HighValueConsent, Settings};
