use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use expense_tracker::cli::{
    handle_add_command, handle_backup_command, handle_list_command, handle_report_command,
    handle_search_command, handle_summary_command, BackupCommands, Session,
};
use expense_tracker::config::paths::DATA_DIR_ENV;
use expense_tracker::config::{ExpensePaths, Settings};
use expense_tracker::models::Category;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Personal expense tracker",
    long_about = "Records expenses in a local CSV file, summarizes spending by \
                  category, and writes timestamped text reports."
)]
struct Cli {
    /// Base directory for data, reports, and settings
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    /// Log level for messages written to stderr (RUST_LOG takes precedence)
    #[arg(long, global = true, default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory, an empty expenses file, and default settings
    Init,

    /// Add a new expense
    Add {
        /// Amount spent (non-negative)
        #[arg(allow_negative_numbers = true)]
        amount: String,
        /// Category: Food/Transport/Entertainment/Shopping/Bills/Salary/Other
        category: String,
        /// Expense date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Optional description
        description: Option<String>,
    },

    /// List all expenses
    #[command(alias = "ls")]
    List,

    /// Show totals and percentages by category
    Summary,

    /// Generate a finance report and save it under reports/
    Report {
        /// Report name, used in the title and the file name
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Search expenses by category or description
    Search {
        /// Case-insensitive search term
        term: String,
    },

    /// Backup management commands
    #[command(subcommand)]
    Backup(BackupCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.log_level);

    let paths = match cli.data_dir {
        Some(dir) => ExpensePaths::with_base_dir(dir),
        None => ExpensePaths::new()?,
    };
    debug!("Using base directory {}", paths.base_dir().display());

    match cli.command {
        Commands::Init => {
            println!("Initializing expense tracker at: {}", paths.base_dir().display());
            expense_tracker::storage::initialize_storage(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Categories: {}", Category::choices());
            println!("Run 'expenses add <amount> <category>' to record an expense.");
        }
        Commands::Add {
            amount,
            category,
            date,
            description,
        } => {
            let mut session = Session::open(paths)?;
            handle_add_command(&mut session, amount, category, date, description)?;
        }
        Commands::List => handle_list_command(&Session::open(paths)?)?,
        Commands::Summary => handle_summary_command(&Session::open(paths)?)?,
        Commands::Report { name } => handle_report_command(&Session::open(paths)?, name)?,
        Commands::Search { term } => handle_search_command(&Session::open(paths)?, &term)?,
        Commands::Backup(cmd) => handle_backup_command(&Session::open(paths)?, cmd)?,
        Commands::Config => {
            let settings = Settings::load_or_create(&paths)?;
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!();
            println!("Paths:");
            println!("  Base directory: {}", paths.base_dir().display());
            println!("  Expenses file:  {}", paths.expenses_file().display());
            println!("  Reports:        {}", paths.reports_dir().display());
            println!("  Settings:       {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!(
                "  Currency: {} ({})",
                settings.currency_name, settings.currency_symbol
            );
            println!("  Default report name: {}", settings.default_report_name);
            println!("  Initialized: {}", paths.is_initialized());
        }
    }

    Ok(())
}

/// Initializes the tracing subscriber.
fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        // Default level applies to this crate only
        None => EnvFilter::new(format!(
            "expense_tracker={},{}={}",
            level,
            env!("CARGO_CRATE_NAME"),
            level
        )),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
