//! Configuration module for the rental ledger
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution for the data files
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::RentalPaths;
pub use settings::Settings;
