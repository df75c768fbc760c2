//! Service layer for the rental ledger
//!
//! The service layer owns the in-memory state and applies the business
//! rules on top of the storage layer.

pub mod ledger;

pub use ledger::{Outcome, Rejection, RentalLedger};
