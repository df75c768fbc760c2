//! Display formatting for terminal output
//!
//! Renders vehicles, customers and rental history as plain-text tables.

pub mod customer;
pub mod history;
pub mod vehicle;

pub use customer::format_customer_list;
pub use history::format_rental_history;
pub use vehicle::{format_vehicle_details, format_vehicle_table};
