//! Read-only CLI commands: categories, report export and change history

use chrono::Local;

use crate::app::App;
use crate::display::format_category_usage;
use crate::error::SpendbookResult;
use crate::services::CategoryService;
use crate::storage::Storage;

/// List categories with how many items each holds
pub fn handle_categories_command(storage: &Storage) -> SpendbookResult<()> {
    let usage = CategoryService::new(storage).list_with_usage()?;
    print!("{}", format_category_usage(&usage));
    Ok(())
}

/// Write the spreadsheet report into the reports directory
pub fn handle_export_command(app: &App<'_>) -> SpendbookResult<()> {
    let path = app.export_report(Local::now().naive_local())?;
    println!("Report saved to {}", path.display());
    Ok(())
}

/// Show the most recent audit log entries, oldest first
pub fn handle_history_command(storage: &Storage, limit: usize) -> SpendbookResult<()> {
    let entries = storage.audit().read_recent(limit)?;

    if entries.is_empty() {
        println!("No changes recorded yet.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
