//! Item CLI commands
//!
//! Implements add, show, edit, delete and list. Each command drives the
//! presentation controller the same way an interactive front end would:
//! check rows, then act on the checked rows.

use std::io::{BufRead, Write};
use std::str::FromStr;

use chrono::NaiveDate;
use clap::{Subcommand, ValueEnum};

use crate::app::{App, ListView};
use crate::display::{format_item_details, format_item_table};
use crate::error::{SpendbookError, SpendbookResult};
use crate::models::{ItemId, ItemInput};
use crate::services::{ItemFilter, ItemSort, SortDirection, SortKey};

/// Sort field accepted on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortField {
    Price,
    Date,
}

impl From<SortField> for SortKey {
    fn from(field: SortField) -> Self {
        match field {
            SortField::Price => SortKey::Price,
            SortField::Date => SortKey::Date,
        }
    }
}

/// Item subcommands
#[derive(Subcommand)]
pub enum ItemCommands {
    /// Record a purchase
    Add {
        /// What was bought
        name: String,
        /// Price paid
        price: f64,
        /// Category name (created if it doesn't exist)
        #[arg(short, long)]
        category: String,
        /// Purchase date (YYYY-MM-DD, default: today)
        #[arg(short, long)]
        date: Option<String>,
        /// Notes
        #[arg(short, long)]
        about: Option<String>,
    },

    /// Show one purchase in full
    Show {
        /// Item ID
        id: String,
    },

    /// Edit a purchase; omitted fields keep their current value
    Edit {
        /// Item ID
        id: String,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        price: Option<f64>,
        #[arg(short, long)]
        category: Option<String>,
        /// Purchase date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
        #[arg(short, long, conflicts_with = "clear_about")]
        about: Option<String>,
        /// Remove the notes
        #[arg(long)]
        clear_about: bool,
    },

    /// Permanently delete purchases
    Delete {
        /// Item IDs
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Show purchases
    #[command(alias = "ls")]
    List {
        /// Case-insensitive search in item names
        #[arg(short, long, conflicts_with_all = ["category", "from", "sort"])]
        search: Option<String>,
        /// Exact category name
        #[arg(short, long, conflicts_with_all = ["from", "sort"])]
        category: Option<String>,
        /// Period start (YYYY-MM-DD)
        #[arg(long, requires = "to", conflicts_with = "sort")]
        from: Option<String>,
        /// Period end (YYYY-MM-DD)
        #[arg(long, requires = "from")]
        to: Option<String>,
        /// Sort by field
        #[arg(long, value_enum)]
        sort: Option<SortField>,
        /// Sort descending
        #[arg(long, requires = "sort")]
        desc: bool,
    },
}

/// Handle an item command
pub fn handle_item_command(app: &mut App<'_>, cmd: ItemCommands) -> SpendbookResult<()> {
    let currency = app.settings().currency_symbol.clone();
    let date_format = app.settings().date_format.clone();

    match cmd {
        ItemCommands::Add {
            name,
            price,
            category,
            date,
            about,
        } => {
            let input = ItemInput::new(name, price, about, parse_date_or_today(date.as_deref())?, category);
            let item = confirming(app, |app| app.add_item(&input))?;

            println!("Added item: {} ({})", item.name, item.id);
            println!("  Price: {}{:.2}", currency, item.price);
            println!("  Date:  {}", item.purchase_date.format(&date_format));
        }

        ItemCommands::Show { id } => {
            let entry = app.item(parse_item_id(&id)?)?;
            print!("{}", format_item_details(&entry, &currency, &date_format));
        }

        ItemCommands::Edit {
            id,
            name,
            price,
            category,
            date,
            about,
            clear_about,
        } => {
            let id = parse_item_id(&id)?;
            app.set_checked(id, true)?;

            let current = app.edit_form()?;
            let about = if clear_about {
                None
            } else {
                about.or(current.about)
            };
            let purchase_date = match date {
                Some(date) => parse_date(&date)?,
                None => current.purchase_date,
            };
            let input = ItemInput::new(
                name.unwrap_or(current.name),
                price.unwrap_or(current.price),
                about,
                purchase_date,
                category.unwrap_or(current.category_name),
            );

            let item = confirming(app, |app| app.edit_checked(&input))?;
            println!("Updated item: {} ({})", item.name, item.id);
        }

        ItemCommands::Delete { ids } => {
            for id in &ids {
                app.set_checked(parse_item_id(id)?, true)?;
            }

            let deleted = app.delete_checked()?;
            println!("Deleted {} item(s)", deleted);
        }

        ItemCommands::List {
            search,
            category,
            from,
            to,
            sort,
            desc,
        } => {
            let view = if let Some(text) = search {
                ListView::Search(text)
            } else if let Some(name) = category {
                ListView::Filter(ItemFilter::Category(name))
            } else if let (Some(from), Some(to)) = (from, to) {
                ListView::Filter(ItemFilter::Period {
                    start: parse_date(&from)?,
                    end: parse_date(&to)?,
                })
            } else if let Some(field) = sort {
                let direction = if desc {
                    SortDirection::Descending
                } else {
                    SortDirection::Ascending
                };
                ListView::Sort(ItemSort::new(field.into(), direction))
            } else {
                ListView::All
            };

            app.show(view)?;
            print!("{}", format_item_table(app.rows(), &currency, &date_format));
        }
    }

    Ok(())
}

/// Run an action, asking the high-value question once if it needs an answer
///
/// After a "no" the retry fails with the price-limit error.
fn confirming<'a, T>(
    app: &mut App<'a>,
    mut action: impl FnMut(&mut App<'a>) -> SpendbookResult<T>,
) -> SpendbookResult<T> {
    match action(app) {
        Err(e) if e.needs_confirmation() => {
            let granted = prompt_yes_no(
                "This price is above 100,000,000. Allow recording purchases this large? (y/N): ",
            )?;
            app.answer_high_value_prompt(granted)?;
            action(app)
        }
        other => other,
    }
}

fn prompt_yes_no(question: &str) -> SpendbookResult<bool> {
    print!("{}", question);
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;

    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

fn parse_item_id(s: &str) -> SpendbookResult<ItemId> {
    ItemId::from_str(s)
        .map_err(|_| SpendbookError::InvalidInput(format!("Invalid item ID: '{}'", s)))
}

fn parse_date(s: &str) -> SpendbookResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        SpendbookError::InvalidInput(format!("Invalid date format: '{}'. Use YYYY-MM-DD", s))
    })
}

/// Parse a date string or return today's date
fn parse_date_or_today(s: Option<&str>) -> SpendbookResult<NaiveDate> {
    match s {
        Some(s) => parse_date(s),
        None => Ok(chrono::Local::now().date_naive()),
    }
}
