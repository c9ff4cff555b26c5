//! Item display formatting
//!
//! Formats the item table (the controller's display rows) and single-item
//! details for terminal output.

use super::{truncate, DISPLAY_COLUMNS};
use crate::app::ItemRow;
use crate::models::ItemWithCategory;

const TABLE_WIDTH: usize = 6 + 1 + 24 + 1 + 16 + 1 + 14 + 1 + 10 + 1 + 8;

/// Format display rows as a table with a header line
pub fn format_item_table(rows: &[ItemRow], currency: &str, date_format: &str) -> String {
    if rows.is_empty() {
        return "No items found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>6} {:24} {:16} {:>14} {:10} {:>8}\n",
        DISPLAY_COLUMNS[0],
        DISPLAY_COLUMNS[1],
        DISPLAY_COLUMNS[2],
        DISPLAY_COLUMNS[3],
        DISPLAY_COLUMNS[4],
        DISPLAY_COLUMNS[5]
    ));
    output.push_str(&"-".repeat(TABLE_WIDTH));
    output.push('\n');

    for row in rows {
        let price = format!("{}{:.2}", currency, row.price);
        let selected = if row.selected { "[x]" } else { "[ ]" };

        output.push_str(&format!(
            "{:>6} {} {} {:>14} {:10} {:>8}\n",
            row.id,
            truncate(&row.name, 24),
            truncate(&row.category, 16),
            price,
            row.date.format(date_format).to_string(),
            selected
        ));
    }

    output.push_str(&"-".repeat(TABLE_WIDTH));
    output.push('\n');
    let total: f64 = rows.iter().map(|r| r.price).sum();
    output.push_str(&format!(
        "{} item(s), total {}{:.2}\n",
        rows.len(),
        currency,
        total
    ));

    output
}

/// Format item details for display
pub fn format_item_details(entry: &ItemWithCategory, currency: &str, date_format: &str) -> String {
    let item = &entry.item;
    let mut output = String::new();

    output.push_str(&format!("Item:     {} ({})\n", item.name, item.id));
    output.push_str(&format!("Category: {}\n", entry.category.name));
    output.push_str(&format!("Price:    {}{:.2}\n", currency, item.price));
    output.push_str(&format!("Date:     {}\n", item.purchase_date.format(date_format)));

    if let Some(about) = &item.about {
        output.push_str(&format!("About:    {}\n", about));
    }

    output
}
