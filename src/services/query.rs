//! Filter and sort primitives for item listings
//!
//! Filters are predicates over `ItemWithCategory`; sorts are stable, so ties
//! keep store order. A query may carry both, applied filter-first.

use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::models::ItemWithCategory;

/// Predicate applied to each listed item
#[derive(Debug, Clone, PartialEq)]
pub enum ItemFilter {
    /// Case-insensitive substring match on the item name
    NameContains(String),
    /// Exact match on the category name
    Category(String),
    /// Purchase date within `start..=end`, measured as elapsed days
    Period { start: NaiveDate, end: NaiveDate },
}

impl ItemFilter {
    /// Check whether an item passes this filter
    pub fn matches(&self, entry: &ItemWithCategory) -> bool {
        match self {
            Self::NameContains(needle) => entry
                .item
                .name
                .to_lowercase()
                .contains(&needle.to_lowercase()),
            Self::Category(name) => entry.category.name == *name,
            Self::Period { start, end } => {
                let elapsed = entry.item.purchase_date.signed_duration_since(*start);
                let range = end.signed_duration_since(*start);
                elapsed >= chrono::Duration::zero() && elapsed <= range
            }
        }
    }
}

/// Field to sort by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Price,
    Date,
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction
    pub fn reversed(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// A sort key with direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemSort {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl ItemSort {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    fn compare(&self, a: &ItemWithCategory, b: &ItemWithCategory) -> Ordering {
        let ordering = match self.key {
            SortKey::Price => a.item.price.total_cmp(&b.item.price),
            SortKey::Date => a.item.purchase_date.cmp(&b.item.purchase_date),
        };

        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    /// Stable in-place sort
    pub fn apply(&self, entries: &mut [ItemWithCategory]) {
        entries.sort_by(|a, b| self.compare(a, b));
    }
}

/// Options for listing items
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemQuery {
    pub filter: Option<ItemFilter>,
    pub sort: Option<ItemSort>,
}

impl ItemQuery {
    /// Create a new empty query (every item, store order)
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only items matching the filter
    pub fn filter(mut self, filter: ItemFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Sort the result
    pub fn sort(mut self, sort: ItemSort) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Apply filter then sort to a store-ordered listing
    pub fn apply(&self, mut entries: Vec<ItemWithCategory>) -> Vec<ItemWithCategory> {
        if let Some(filter) = &self.filter {
            entries.retain(|entry| filter.matches(entry));
        }
        if let Some(sort) = &self.sort {
            sort.apply(&mut entries);
        }
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, CategoryId, Item, ItemId};
    use chrono::Utc;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(id: i64, name: &str, category: &str, price: f64, date: NaiveDate) -> ItemWithCategory {
        ItemWithCategory {
            item: Item {
                id: ItemId::new(id),
                name: name.to_string(),
                price,
                purchase_date: date,
                about: None,
                created_at: Utc::now(),
                category_id: CategoryId::new(1),
            },
            category: Category {
                id: CategoryId::new(1),
                name: category.to_string(),
                created_at: Utc::now(),
            },
        }
    }

    fn ids(entries: &[ItemWithCategory]) -> Vec<i64> {
        entries.iter().map(|e| e.item.id.get()).collect()
    }

    #[test]
    fn test_name_search_case_insensitive() {
        let filter = ItemFilter::NameContains("milk".to_string());
        assert!(filter.matches(&entry(1, "Milk 2L", "Food", 1.0, day(2024, 1, 1))));
        assert!(!filter.matches(&entry(2, "Eggs", "Food", 1.0, day(2024, 1, 1))));

        let filter = ItemFilter::NameContains("МОЛОКО".to_string());
        assert!(filter.matches(&entry(3, "Молоко 1л", "Еда", 1.0, day(2024, 1, 1))));
    }

    #[test]
    fn test_category_filter_is_exact() {
        let filter = ItemFilter::Category("Food".to_string());
        assert!(filter.matches(&entry(1, "Milk", "Food", 1.0, day(2024, 1, 1))));
        assert!(!filter.matches(&entry(2, "Milk", "food", 1.0, day(2024, 1, 1))));
        assert!(!filter.matches(&entry(3, "Milk", "Food court", 1.0, day(2024, 1, 1))));
    }

    #[test]
    fn test_period_filter() {
        let filter = ItemFilter::Period {
            start: day(2024, 1, 1),
            end: day(2024, 1, 10),
        };

        assert!(filter.matches(&entry(1, "Milk", "Food", 1.0, day(2024, 1, 5))));
        assert!(filter.matches(&entry(2, "Milk", "Food", 1.0, day(2024, 1, 1))));
        assert!(filter.matches(&entry(3, "Milk", "Food", 1.0, day(2024, 1, 10))));
        assert!(!filter.matches(&entry(4, "Milk", "Food", 1.0, day(2024, 1, 15))));
        assert!(!filter.matches(&entry(5, "Milk", "Food", 1.0, day(2023, 12, 31))));
    }

    #[test]
    fn test_period_filter_equals_date_range() {
        let start = day(2024, 2, 20);
        let end = day(2024, 3, 5);
        let filter = ItemFilter::Period { start, end };

        let mut date = day(2024, 2, 1);
        while date < day(2024, 4, 1) {
            let expected = start <= date && date <= end;
            assert_eq!(
                filter.matches(&entry(1, "Milk", "Food", 1.0, date)),
                expected,
                "mismatch on {}",
                date
            );
            date = date.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_inverted_period_matches_nothing() {
        let filter = ItemFilter::Period {
            start: day(2024, 1, 10),
            end: day(2024, 1, 1),
        };
        assert!(!filter.matches(&entry(1, "Milk", "Food", 1.0, day(2024, 1, 5))));
        assert!(!filter.matches(&entry(2, "Milk", "Food", 1.0, day(2024, 1, 10))));
    }

    #[test]
    fn test_sort_is_stable_both_directions() {
        let entries = vec![
            entry(1, "A", "Food", 5.0, day(2024, 1, 3)),
            entry(2, "B", "Food", 1.0, day(2024, 1, 1)),
            entry(3, "C", "Food", 5.0, day(2024, 1, 2)),
            entry(4, "D", "Food", 2.0, day(2024, 1, 2)),
        ];

        let asc = ItemQuery::new()
            .sort(ItemSort::new(SortKey::Price, SortDirection::Ascending))
            .apply(entries.clone());
        assert_eq!(ids(&asc), vec![2, 4, 1, 3]);

        let desc = ItemQuery::new()
            .sort(ItemSort::new(SortKey::Price, SortDirection::Descending))
            .apply(entries.clone());
        assert_eq!(ids(&desc), vec![1, 3, 4, 2]);

        let by_date = ItemQuery::new()
            .sort(ItemSort::new(SortKey::Date, SortDirection::Ascending))
            .apply(entries);
        assert_eq!(ids(&by_date), vec![2, 3, 4, 1]);
    }

    #[test]
    fn test_filter_and_sort_compose() {
        let entries = vec![
            entry(1, "Milk 2L", "Food", 3.0, day(2024, 1, 3)),
            entry(2, "Eggs", "Food", 1.0, day(2024, 1, 1)),
            entry(3, "Milk 1L", "Food", 2.0, day(2024, 1, 2)),
        ];

        let result = ItemQuery::new()
            .filter(ItemFilter::NameContains("milk".into()))
            .sort(ItemSort::new(SortKey::Price, SortDirection::Ascending))
            .apply(entries);
        assert_eq!(ids(&result), vec![3, 1]);
    }

    #[test]
    fn test_direction_reversed() {
        assert_eq!(SortDirection::Ascending.reversed(), SortDirection::Descending);
        assert_eq!(SortDirection::Descending.reversed(), SortDirection::Ascending);
    }
}
