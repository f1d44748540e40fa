use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use livraria_cli::cli::{
    handle_add, handle_backup_command, handle_export, handle_find, handle_import, handle_list,
    handle_remove, handle_show, handle_update_price, BackupCommands,
};
use livraria_cli::config::{paths::LivrariaPaths, settings::Settings};
use livraria_cli::store::BookStore;

#[derive(Parser)]
#[command(
    name = "livraria",
    version,
    about = "Command-line book catalog manager",
    long_about = "livraria is a local book catalog manager. Records live in an \
                  embedded SQLite database; every change is snapshotted to a \
                  rolling set of timestamped backups, and the catalog can be \
                  exported to or imported from CSV."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the catalog database
    Init,

    /// Add a new book
    Add {
        /// Book title
        title: String,
        /// Author name
        author: String,
        /// Publication year
        #[arg(short, long)]
        year: Option<i64>,
        /// Price
        #[arg(short, long)]
        price: Option<f64>,
    },

    /// List every book in the catalog
    List,

    /// Show one book in detail
    Show {
        /// Book id
        id: i64,
    },

    /// Update the price of a book
    UpdatePrice {
        /// Book id
        id: i64,
        /// New price
        price: f64,
    },

    /// Remove a book
    Remove {
        /// Book id
        id: i64,
    },

    /// Find books by author (exact match)
    Find {
        /// Author name
        author: String,
    },

    /// Export the catalog to CSV
    Export {
        /// Output file (defaults to exports/livros_exportados.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Import books from a CSV file
    Import {
        /// Path to CSV file
        file: PathBuf,
    },

    /// Backup management commands
    #[command(subcommand)]
    Backup(BackupCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = LivrariaPaths::new()?;
    paths.ensure_directories()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let already_initialized = paths.is_initialized();
    let store = BookStore::new(paths.clone(), settings.backup_retention);
    store.initialize()?;

    match cli.command {
        Commands::Init => {
            if already_initialized {
                println!("Catalog already initialized at {}", paths.db_file().display());
            } else {
                println!("Catalog initialized at {}", paths.db_file().display());
            }
        }
        Commands::Add {
            title,
            author,
            year,
            price,
        } => {
            handle_add(&store, title, author, year, price)?;
        }
        Commands::List => {
            handle_list(&store)?;
        }
        Commands::Show { id } => {
            handle_show(&store, id)?;
        }
        Commands::UpdatePrice { id, price } => {
            handle_update_price(&store, id, price)?;
        }
        Commands::Remove { id } => {
            handle_remove(&store, id)?;
        }
        Commands::Find { author } => {
            handle_find(&store, &author)?;
        }
        Commands::Export { output } => {
            handle_export(&store, &paths, output)?;
        }
        Commands::Import { file } => {
            handle_import(&store, &file)?;
        }
        Commands::Backup(cmd) => {
            handle_backup_command(store.backup_manager(), cmd)?;
        }
        Commands::Config => {
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Database:         {}", paths.db_file().display());
            println!("Backups:          {}", paths.backup_dir().display());
            println!("Exports:          {}", paths.export_dir().display());
            println!(
                "Retention:        keep {} snapshot(s)",
                settings.backup_retention.keep_count
            );
        }
    }

    Ok(())
}
