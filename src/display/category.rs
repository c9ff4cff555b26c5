//! Category display formatting

use crate::storage::CategoryUsage;

/// Format categories with their item counts
pub fn format_category_usage(usage: &[CategoryUsage]) -> String {
    if usage.is_empty() {
        return "No categories found.\n\nCategories are created when an item names one.\n"
            .to_string();
    }

    let name_width = usage
        .iter()
        .map(|u| u.category.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>4}  {:width$}  {:>5}\n",
        "ID",
        "Name",
        "Items",
        width = name_width
    ));
    output.push_str(&"-".repeat(4 + 2 + name_width + 2 + 5));
    output.push('\n');

    for entry in usage {
        output.push_str(&format!(
            "{:>4}  {:width$}  {:>5}\n",
            entry.category.id,
            entry.category.name,
            entry.item_count,
            width = name_width
        ));
    }

    output
}
