//! Interactive console session
//!
//! Reads one command per line and runs it against a single ledger, so
//! in-memory changes such as `status` persist for the whole session.

use std::io::{self, BufRead, Write};

use clap::{Parser, Subcommand};

use crate::config::Settings;
use crate::error::RentalResult;
use crate::services::RentalLedger;

use super::vehicle::parse_status;
use super::{handle_ledger_command, report, LedgerCommand};

#[derive(Parser)]
#[command(name = "", no_binary_name = true, disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand)]
enum ShellCommand {
    #[command(flatten)]
    Ledger(LedgerCommand),

    /// Overwrite a vehicle's status for this session
    Status {
        /// License plate
        plate: String,
        /// New status (available, held, rented, undermaintenance, outofservice)
        status: String,
    },
}

/// Run the shell until `exit`, `quit` or end of input
pub fn run_shell<R: BufRead>(
    ledger: &mut RentalLedger,
    settings: &Settings,
    input: R,
) -> RentalResult<()> {
    println!("Rental ledger shell. Type 'help' for commands, 'exit' to quit.");
    prompt()?;

    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();

        match trimmed {
            "" => {}
            "exit" | "quit" => break,
            _ => match ShellLine::try_parse_from(trimmed.split_whitespace()) {
                Ok(parsed) => {
                    if let Err(e) = dispatch(ledger, settings, parsed.command) {
                        println!("Error: {}", e);
                    }
                }
                Err(e) => {
                    let _ = e.print();
                }
            },
        }

        prompt()?;
    }

    println!();
    Ok(())
}

fn dispatch(
    ledger: &mut RentalLedger,
    settings: &Settings,
    command: ShellCommand,
) -> RentalResult<()> {
    match command {
        ShellCommand::Ledger(cmd) => handle_ledger_command(ledger, settings, cmd),
        ShellCommand::Status { plate, status } => {
            let status = parse_status(&status)?;
            report(ledger.set_vehicle_status(&plate, status), || {
                format!("Vehicle {} is now {}", plate.to_uppercase(), status)
            });
            Ok(())
        }
    }
}

fn prompt() -> RentalResult<()> {
    print!("rental> ");
    io::stdout().flush()?;
    Ok(())
}
