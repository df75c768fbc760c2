//! Core data models for the rental ledger
//!
//! Vehicles, customers and the rental records that link them.

pub mod customer;
pub mod money;
pub mod record;
pub mod vehicle;

pub use customer::Customer;
pub use money::{Money, MoneyParseError};
pub use record::{RecordKind, RentalRecord};
pub use vehicle::{Vehicle, VehicleKind, VehicleStatus};
