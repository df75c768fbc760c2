//! Rental ledger - vehicle rental record manager
//!
//! Tracks vehicles, customers and rent/return transactions, persisting each
//! change as one line in a flat comma-separated file.
//!
//! # Architecture
//!
//! - `config`: Data directory resolution and user settings
//! - `error`: Custom error types
//! - `models`: Vehicles, customers, rental records and money
//! - `storage`: Flat-file line codec and append-only logs
//! - `services`: The rental ledger and its business rules
//! - `display`: Table formatting for terminal output
//! - `cli`: Command handlers and the interactive shell
//!
//! # Example
//!
//! ```rust,ignore
//! use rental_ledger::config::{RentalPaths, Settings};
//! use rental_ledger::services::RentalLedger;
//! use rental_ledger::storage::Storage;
//!
//! let paths = RentalPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut ledger = RentalLedger::open(Storage::new(paths)?, &settings);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::RentalError;
