//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the rental ledger. The same commands drive the
//! one-shot binary and the interactive shell.

pub mod customer;
pub mod rental;
pub mod shell;
pub mod vehicle;

pub use customer::{handle_customer_command, CustomerCommands};
pub use shell::run_shell;
pub use vehicle::{handle_vehicle_command, VehicleCommands};

use clap::Subcommand;

use crate::config::Settings;
use crate::display::history::format_rental_history;
use crate::error::RentalResult;
use crate::services::{Outcome, RentalLedger};

/// Commands that operate on the ledger
#[derive(Subcommand)]
pub enum LedgerCommand {
    /// Vehicle management commands
    #[command(subcommand)]
    Vehicle(VehicleCommands),

    /// Customer management commands
    #[command(subcommand)]
    Customer(CustomerCommands),

    /// Rent an available vehicle to a customer
    Rent {
        /// License plate
        plate: String,
        /// Customer ID
        customer_id: String,
        /// Rental amount (e.g. "100.00")
        #[arg(short, long)]
        amount: String,
        /// Rental date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Return a rented vehicle
    Return {
        /// License plate
        plate: String,
        /// Customer ID
        customer_id: String,
        /// Extra fees charged on return
        #[arg(short, long, default_value = "0")]
        fees: String,
        /// Return date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Show the full rental history
    History,
}

/// Handle a ledger command
pub fn handle_ledger_command(
    ledger: &mut RentalLedger,
    settings: &Settings,
    cmd: LedgerCommand,
) -> RentalResult<()> {
    match cmd {
        LedgerCommand::Vehicle(cmd) => handle_vehicle_command(ledger, cmd),
        LedgerCommand::Customer(cmd) => handle_customer_command(ledger, cmd),
        LedgerCommand::Rent {
            plate,
            customer_id,
            amount,
            date,
        } => rental::handle_rent(ledger, &plate, &customer_id, &amount, date.as_deref()),
        LedgerCommand::Return {
            plate,
            customer_id,
            fees,
            date,
        } => rental::handle_return(ledger, &plate, &customer_id, &fees, date.as_deref()),
        LedgerCommand::History => {
            println!("=== Rental History ===");
            print!(
                "{}",
                format_rental_history(
                    ledger.history(),
                    ledger.customers(),
                    &settings.currency_symbol
                )
            );
            Ok(())
        }
    }
}

/// Print the user-facing result of a ledger mutation
///
/// Rejections are expected outcomes and are printed, not returned as errors.
fn report(outcome: Outcome, success: impl FnOnce() -> String) {
    match outcome {
        Outcome::Applied { persist_error } => {
            println!("{}", success());
            if let Some(e) = persist_error {
                eprintln!("Warning: change was not saved to disk: {}", e);
            }
        }
        Outcome::Rejected(rejection) => println!("Error: {}", rejection),
    }
}
