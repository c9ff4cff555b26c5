use anyhow::Result;
use clap::{Parser, Subcommand};

use spendbook::app::App;
use spendbook::cli::{
    handle_categories_command, handle_export_command, handle_history_command,
    handle_item_command, ItemCommands,
};
use spendbook::config::{paths::SpendbookPaths, settings::Settings};
use spendbook::storage::{init::needs_initialization, Storage};

#[derive(Parser)]
#[command(
    name = "spendbook",
    version,
    about = "Personal expense tracker",
    long_about = "Spendbook records purchases by category, lets you search, filter \
                  and sort them, and exports a spreadsheet report."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Item(ItemCommands),

    /// List categories and their item counts
    Categories,

    /// Export all items to a spreadsheet report
    Export,

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = SpendbookPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Init) => {
            if paths.is_initialized() && !needs_initialization(&paths) {
                println!("Spendbook is already initialized at: {}", paths.base_dir().display());
                return Ok(());
            }

            println!("Initializing Spendbook at: {}", paths.base_dir().display());
            spendbook::storage::init::initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Run 'spendbook add <name> <price> --category <category>' to record a purchase.");
        }
        Some(Commands::Config) => {
            println!("Spendbook Configuration");
            println!("=======================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Database:          {}", paths.database_file().display());
            println!("Reports directory: {}", paths.reports_dir().display());
            println!("Audit log:         {}", paths.audit_log().display());
            println!(
                "Initialized:       {}",
                if paths.is_initialized() { "yes" } else { "no" }
            );
            println!();
            println!("Settings:");
            println!("  High-value purchases: {:?}", settings.high_value_purchases);
            println!("  Currency symbol:      {}", settings.currency_symbol);
            println!("  Date format:          {}", settings.date_format);
            println!("  Report title:         {}", settings.report_title);
        }
        Some(Commands::Categories) => {
            let storage = Storage::new(paths)?;
            handle_categories_command(&storage)?;
        }
        Some(Commands::History { limit }) => {
            let storage = Storage::new(paths)?;
            handle_history_command(&storage, limit)?;
        }
        Some(Commands::Export) => {
            let storage = Storage::new(paths)?;
            let app = App::new(&storage, settings)?;
            handle_export_command(&app)?;
        }
        Some(Commands::Item(cmd)) => {
            let storage = Storage::new(paths)?;
            let mut app = App::new(&storage, settings)?;
            handle_item_command(&mut app, cmd)?;
        }
        None => {
            println!("Spendbook - personal expense tracker");
            println!();
            println!("Run 'spendbook --help' for usage information.");
        }
    }

    Ok(())
}
