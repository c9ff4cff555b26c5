//! Display formatting for terminal output
//!
//! Renders the item table, category usage and audit history as plain text.

pub mod category;
pub mod item;

pub use category::format_category_usage;
pub use item::{format_item_details, format_item_table};

/// Column labels of the item table, in display order
pub const DISPLAY_COLUMNS: [&str; 6] = ["ID", "Name", "Category", "Price", "Date", "Selected"];

/// Truncate a string to a maximum number of characters, padding short ones
pub(crate) fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Milk", 6), "Milk  ");
        assert_eq!(truncate("Chocolate cake", 8), "Choco...");
        assert_eq!(truncate("Шоколадный торт", 8), "Шокол...");
    }
}
