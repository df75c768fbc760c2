//! Rental history display formatting
//!
//! Records are shown in insertion order with the customer's name resolved
//! from the customer list.

use crate::models::{Customer, RentalRecord};

/// Format the rental history as a table
pub fn format_rental_history(
    records: &[RentalRecord],
    customers: &[Customer],
    currency_symbol: &str,
) -> String {
    if records.is_empty() {
        return "  No rental history found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "|{:<10} | {:<12} | {:<20} | {:<12} | {:<12} |\n",
        "Type", "Plate", "Customer", "Date", "Amount"
    ));
    output.push('|');
    output.push_str(&"-".repeat(79));
    output.push_str("|\n");

    for record in records {
        let customer_name = customers
            .iter()
            .find(|c| c.id() == record.customer_id())
            .map(Customer::name)
            .unwrap_or(record.customer_id());

        output.push_str(&format!(
            "| {:<9} | {:<12} | {:<20} | {:<12} | {:<12} |\n",
            record.kind().tag(),
            record.license_plate(),
            customer_name,
            record.date().format("%Y-%m-%d").to_string(),
            record.amount().format_with_symbol(currency_symbol),
        ));
    }

    output
}
