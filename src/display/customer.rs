//! Customer display formatting

use crate::models::Customer;

/// Format all customers, one per line
pub fn format_customer_list(customers: &[Customer]) -> String {
    if customers.is_empty() {
        return "  No customers found.\n".to_string();
    }

    customers
        .iter()
        .map(|c| format!("  {}\n", c))
        .collect()
}
