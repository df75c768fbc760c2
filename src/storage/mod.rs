//! Storage layer for the rental ledger
//!
//! Three independent append-only flat files, one per entity type, sharing a
//! comma-separated line codec.

pub mod codec;
pub mod line_log;

pub use codec::LineCodec;
pub use line_log::{LineLog, LoadReport};

use crate::config::paths::RentalPaths;
use crate::error::RentalError;
use crate::models::{Customer, RentalRecord, Vehicle};

/// Storage coordinator that provides access to all logs
pub struct Storage {
    paths: RentalPaths,
    pub vehicles: LineLog<Vehicle>,
    pub customers: LineLog<Customer>,
    pub records: LineLog<RentalRecord>,
}

impl Storage {
    /// Create a new Storage instance, creating the data directory if needed
    pub fn new(paths: RentalPaths) -> Result<Self, RentalError> {
        paths.ensure_directories()?;

        Ok(Self {
            vehicles: LineLog::new(paths.vehicles_file()),
            customers: LineLog::new(paths.customers_file()),
            records: LineLog::new(paths.records_file()),
            paths,
        })
    }

    pub fn paths(&self) -> &RentalPaths {
        &self.paths
    }
}
