//! CLI entry point for the `exlib` command-line tool.

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

use expression_library::cli::commands;
use expression_library::config::{load_config, resolve_store_path, LibraryConfig};
use expression_library::engine::ExpressionLibrary;
use expression_library::storage::FileStore;
use expression_library::types::{CategoryFilter, LibraryResult, RECENT_PANEL_LIMIT};

#[derive(Parser)]
#[command(
    name = "exlib",
    about = "Expression library CLI: browse, search, favorite and copy code expressions"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Path to the state store (JSON)
    #[arg(long)]
    store: Option<PathBuf>,

    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Path to a catalog JSON file (overrides the config)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List expressions, optionally filtered
    List {
        /// Case-insensitive search over name, description, tags and category
        #[arg(long)]
        search: Option<String>,
        /// Category name, or "All"
        #[arg(long, default_value = "All")]
        category: String,
        /// Only show favorites
        #[arg(long)]
        favorites: bool,
    },
    /// Show one expression in full
    Show {
        /// Entry ID
        id: String,
    },
    /// Toggle an expression's favorite status
    Favorite {
        /// Entry ID
        id: String,
    },
    /// Copy an expression's code to the clipboard
    Copy {
        /// Entry ID
        id: String,
    },
    /// List recently copied expressions
    Recent {
        /// Maximum entries to show
        #[arg(long, default_value_t = RECENT_PANEL_LIMIT)]
        limit: usize,
    },
    /// Toggle between light and dark mode
    Theme,
    /// List categories with entry counts
    Categories,
    /// Show persisted state
    Status,
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let mut config = match &cli.config {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        None => LibraryConfig::default(),
    };
    if let Some(catalog) = &cli.catalog {
        config.catalog_path = Some(catalog.display().to_string());
    }

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        config.log_level_filter()
    };
    env_logger::Builder::new().filter_level(level).init();

    let store_path = resolve_store_path(cli.store.as_deref(), &config);
    match run(cli.command, &config, &store_path, json) {
        Ok(true) => {}
        Ok(false) => process::exit(2),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

/// Build the library and dispatch. Returns false when a copy failed at
/// the clipboard.
fn run(
    command: Commands,
    config: &LibraryConfig,
    store_path: &Path,
    json: bool,
) -> LibraryResult<bool> {
    let catalog = config.load_catalog()?;
    let store = FileStore::open(store_path)?;
    let mut library = ExpressionLibrary::with_options(
        catalog,
        store,
        config.clipboard(),
        config.library_options(),
    );

    match command {
        Commands::List {
            search,
            category,
            favorites,
        } => {
            let category: CategoryFilter = category.parse()?;
            commands::cmd_list(&mut library, search.as_deref(), category, favorites, json)?;
        }
        Commands::Show { id } => commands::cmd_show(&library, &id, json)?,
        Commands::Favorite { id } => commands::cmd_favorite(&mut library, &id, json)?,
        Commands::Copy { id } => return commands::cmd_copy(&mut library, &id, json),
        Commands::Recent { limit } => commands::cmd_recent(&library, limit, json)?,
        Commands::Theme => commands::cmd_theme(&mut library, json)?,
        Commands::Categories => commands::cmd_categories(&library, json)?,
        Commands::Status => commands::cmd_status(&library, json)?,
    }
    Ok(true)
}
