//! Spreadsheet report export
//!
//! Writes every item as a CSV sheet: a header row, one row per item in store
//! order, and two annotation cells (title and generation time) in column G.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use chrono::NaiveDateTime;

use crate::config::Settings;
use crate::display::DISPLAY_COLUMNS;
use crate::error::{SpendbookError, SpendbookResult};
use crate::models::ItemWithCategory;
use crate::services::ItemService;
use crate::storage::Storage;

/// Zero-based index of the annotation column (G)
pub const ANNOTATION_COLUMN: usize = 6;

/// Label of the notes column appended after the table columns
pub const DESCRIPTION_LABEL: &str = "Description";

/// Header row: the table columns without `ID` and `Selected`, plus `Description`
pub fn report_header() -> Vec<&'static str> {
    let mut header: Vec<&'static str> = DISPLAY_COLUMNS[1..DISPLAY_COLUMNS.len() - 1].to_vec();
    header.push(DESCRIPTION_LABEL);
    header
}

/// Text of the G2 cell
pub fn generated_label(generated_at: NaiveDateTime) -> String {
    format!("REPORT OF {}", generated_at.format("%H:%M %d.%m.%Y"))
}

/// File name derived from the generation time
pub fn report_file_name(generated_at: NaiveDateTime) -> String {
    format!("report_{}.csv", generated_at.format("%H_%M_%d_%m_%Y"))
}

/// Write the report for all items to any writer
///
/// Prices are written as stored; dates use the configured format.
pub fn write_report<W: Write>(
    storage: &Storage,
    writer: W,
    settings: &Settings,
    generated_at: NaiveDateTime,
) -> SpendbookResult<()> {
    let entries = ItemService::new(storage).list_items(None, None)?;
    write_entries(&entries, writer, settings, generated_at)
}

fn write_entries<W: Write>(
    entries: &[ItemWithCategory],
    writer: W,
    settings: &Settings,
    generated_at: NaiveDateTime,
) -> SpendbookResult<()> {
    let mut csv = csv::WriterBuilder::new().flexible(true).from_writer(writer);

    let mut rows: Vec<Vec<String>> = Vec::with_capacity(entries.len() + 2);
    rows.push(report_header().into_iter().map(String::from).collect());

    for entry in entries {
        rows.push(vec![
            entry.item.name.clone(),
            entry.category.name.clone(),
            entry.item.price.to_string(),
            entry.item.purchase_date.format(&settings.date_format).to_string(),
            entry.item.about.clone().unwrap_or_default(),
        ]);
    }

    // G2 needs a second row even for an empty report
    if rows.len() < 2 {
        rows.push(Vec::new());
    }

    annotate(&mut rows[0], settings.report_title.clone());
    annotate(&mut rows[1], generated_label(generated_at));

    for row in &rows {
        csv.write_record(row)?;
    }

    csv.flush()
        .map_err(|e| SpendbookError::Export(format!("Failed to write report: {}", e)))?;
    Ok(())
}

fn annotate(row: &mut Vec<String>, text: String) {
    row.resize(ANNOTATION_COLUMN, String::new());
    row.push(text);
}

/// Write the report into the reports directory and return its path
///
/// A second export within the same minute overwrites the first.
pub fn export_report_file(
    storage: &Storage,
    settings: &Settings,
    generated_at: NaiveDateTime,
) -> SpendbookResult<PathBuf> {
    let dir = storage.paths().reports_dir();
    std::fs::create_dir_all(&dir)
        .map_err(|e| SpendbookError::Io(format!("Failed to create reports directory: {}", e)))?;

    let path = dir.join(report_file_name(generated_at));
    let file = File::create(&path).map_err(|e| {
        SpendbookError::Export(format!("Failed to create {}: {}", path.display(), e))
    })?;

    write_report(storage, file, settings, generated_at)?;
    Ok(path)
}
