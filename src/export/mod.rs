//! Export module for Spendbook
//!
//! Produces the spreadsheet-compatible expense report.

pub mod report;

pub use report::{export_report_file, report_file_name, write_report};
