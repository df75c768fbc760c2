use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use rental_ledger::cli::{handle_ledger_command, run_shell, LedgerCommand};
use rental_ledger::config::{RentalPaths, Settings};
use rental_ledger::services::RentalLedger;
use rental_ledger::storage::Storage;

#[derive(Parser)]
#[command(
    name = "rental",
    version,
    about = "Vehicle rental record manager",
    long_about = "Tracks vehicles, customers and rental transactions, storing \
                  everything in plain comma-separated text files."
)]
struct Cli {
    /// Directory holding config.json and the data files
    #[arg(long, global = true, env = "RENTAL_LEDGER_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Ledger(LedgerCommand),

    /// Start an interactive session
    #[command(alias = "console")]
    Shell,

    /// Initialize the data directory and default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => RentalPaths::with_base_dir(dir),
        None => RentalPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Ledger(cmd)) => {
            let mut ledger = RentalLedger::open(Storage::new(paths)?, &settings);
            handle_ledger_command(&mut ledger, &settings, cmd)?;
        }
        Some(Commands::Shell) => {
            let mut ledger = RentalLedger::open(Storage::new(paths)?, &settings);
            let stdin = std::io::stdin();
            run_shell(&mut ledger, &settings, stdin.lock())?;
        }
        Some(Commands::Init) => {
            println!("Initializing rental ledger at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Run 'rental vehicle add --help' to register your first vehicle.");
        }
        Some(Commands::Config) => {
            println!("Rental Ledger Configuration");
            println!("===========================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Vehicles file:   {}", paths.vehicles_file().display());
            println!("Customers file:  {}", paths.customers_file().display());
            println!("Records file:    {}", paths.records_file().display());
            println!("Initialized:     {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!(
                "  Restore status from history: {}",
                settings.restore_status_from_history
            );
        }
        None => {
            println!("Rental ledger - vehicle rental record manager");
            println!();
            println!("Run 'rental --help' for usage information.");
            println!("Run 'rental shell' for an interactive session.");
        }
    }

    Ok(())
}
