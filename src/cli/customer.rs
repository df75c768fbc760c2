//! Customer CLI commands

use clap::Subcommand;

use crate::display::customer::format_customer_list;
use crate::error::{RentalError, RentalResult};
use crate::models::Customer;
use crate::services::RentalLedger;

use super::report;

/// Customer subcommands
#[derive(Subcommand)]
pub enum CustomerCommands {
    /// Register a new customer
    Add {
        /// Customer ID (any unique text)
        id: String,
        /// Customer name
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },
    /// List all customers
    List,
    /// Show a customer
    Show {
        /// Customer ID
        id: String,
    },
}

/// Handle a customer command
pub fn handle_customer_command(
    ledger: &mut RentalLedger,
    cmd: CustomerCommands,
) -> RentalResult<()> {
    match cmd {
        CustomerCommands::Add { id, name } => {
            let name = name.join(" ");
            if id.trim().is_empty() || name.trim().is_empty() {
                return Err(RentalError::Validation(
                    "Customer ID and name cannot be empty".into(),
                ));
            }

            let customer = Customer::new(id.trim(), name.trim());
            let message = format!("Customer added successfully. ({})", customer);
            report(ledger.add_customer(customer), || message);
        }

        CustomerCommands::List => {
            println!("=== Customers ===");
            print!("{}", format_customer_list(ledger.customers()));
        }

        CustomerCommands::Show { id } => {
            let customer = ledger
                .find_customer_by_id(&id)
                .ok_or_else(|| RentalError::customer_not_found(&id))?;
            println!("{}", customer);
        }
    }

    Ok(())
}
