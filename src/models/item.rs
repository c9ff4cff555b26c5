//! Item model
//!
//! An item is a single recorded purchase. `ItemInput` is the form payload used
//! to create or edit one and carries the validation rules shared by both.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::{CategoryId, ItemId};
use crate::config::HighValueConsent;

/// Minimum length (in characters) of trimmed item and category names
pub const MIN_NAME_LEN: usize = 3;

/// Prices above this need the user's one-time consent
pub const HIGH_VALUE_THRESHOLD: f64 = 100_000_000.0;

/// A recorded purchase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier, never reused
    pub id: ItemId,

    /// What was bought
    pub name: String,

    /// Price paid (non-negative)
    pub price: f64,

    /// Date of purchase
    pub purchase_date: NaiveDate,

    /// Free-form notes
    pub about: Option<String>,

    /// When the item was recorded
    pub created_at: DateTime<Utc>,

    /// Owning category
    pub category_id: CategoryId,
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {:.2}",
            self.purchase_date.format("%Y-%m-%d"),
            self.name,
            self.price
        )
    }
}

/// An item together with its resolved category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemWithCategory {
    pub item: Item,
    pub category: Category,
}

/// Form payload for creating or editing an item
#[derive(Debug, Clone, PartialEq)]
pub struct ItemInput {
    pub name: String,
    pub price: f64,
    pub about: Option<String>,
    pub purchase_date: NaiveDate,
    pub category_name: String,
}

impl ItemInput {
    /// Build an input, trimming text fields and dropping an empty note
    pub fn new(
        name: impl Into<String>,
        price: f64,
        about: Option<String>,
        purchase_date: NaiveDate,
        category_name: impl Into<String>,
    ) -> Self {
        let about = about
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty());

        Self {
            name: name.into().trim().to_string(),
            price,
            about,
            purchase_date,
            category_name: category_name.into().trim().to_string(),
        }
    }

    /// Pre-fill an input from an existing item, as the edit form does
    pub fn from_existing(entry: &ItemWithCategory) -> Self {
        Self {
            name: entry.item.name.clone(),
            price: entry.item.price,
            about: entry.item.about.clone(),
            purchase_date: entry.item.purchase_date,
            category_name: entry.category.name.clone(),
        }
    }

    /// Check the input, stopping at the first failing rule
    pub fn validate(&self, consent: HighValueConsent) -> Result<(), ItemValidationError> {
        if self.name.trim().chars().count() < MIN_NAME_LEN {
            return Err(ItemValidationError::NameTooShort);
        }

        if self.category_name.trim().chars().count() < MIN_NAME_LEN {
            return Err(ItemValidationError::CategoryTooShort);
        }

        if !self.price.is_finite() || self.price < 0.0 {
            return Err(ItemValidationError::InvalidPrice(self.price));
        }

        if self.price > HIGH_VALUE_THRESHOLD {
            match consent {
                HighValueConsent::Unset => return Err(ItemValidationError::ConfirmationRequired),
                HighValueConsent::Denied => return Err(ItemValidationError::PriceLimitExceeded),
                HighValueConsent::Granted => {}
            }
        }

        Ok(())
    }
}

/// Validation errors for item input
#[derive(Debug, Clone, PartialEq)]
pub enum ItemValidationError {
    NameTooShort,
    CategoryTooShort,
    InvalidPrice(f64),
    ConfirmationRequired,
    PriceLimitExceeded,
}

impl fmt::Display for ItemValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NameTooShort => write!(f, "name too short"),
            Self::CategoryTooShort => write!(f, "category too short"),
            Self::InvalidPrice(price) => {
                write!(f, "price must be a non-negative number (got {})", price)
            }
            Self::ConfirmationRequired => write!(f, "confirmation required"),
            Self::PriceLimitExceeded => write!(f, "price exceeds allowed limit"),
        }
    }
}

impl std::error::Error for ItemValidationError {}
