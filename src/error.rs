//! Custom error types for the rental ledger
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Business-rule outcomes (duplicates, a
//! vehicle that is not available) are not errors; see `services::ledger`.

use thiserror::Error;

/// The main error type for rental ledger operations
#[derive(Error, Debug)]
pub enum RentalError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Input-contract violations (license plate format, missing plate)
    #[error("Validation error: {0}")]
    Validation(String),

    /// A persisted line could not be decoded
    #[error("Parse error: {0}")]
    Parse(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl RentalError {
    /// Create a "not found" error for vehicles
    pub fn vehicle_not_found(plate: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Vehicle",
            identifier: plate.into(),
        }
    }

    /// Create a "not found" error for customers
    pub fn customer_not_found(id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Customer",
            identifier: id.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for RentalError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for RentalError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for RentalError {
    fn from(err: csv::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

/// Result type alias for rental ledger operations
pub type RentalResult<T> = Result<T, RentalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RentalError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = RentalError::vehicle_not_found("ABC123");
        assert_eq!(err.to_string(), "Vehicle not found: ABC123");
        assert!(err.is_not_found());

        let err = RentalError::customer_not_found("42");
        assert_eq!(err.to_string(), "Customer not found: 42");
    }

    #[test]
    fn test_validation_error() {
        let err = RentalError::Validation("bad plate".into());
        assert!(err.is_validation());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let rental_err: RentalError = io_err.into();
        assert!(matches!(rental_err, RentalError::Io(_)));
    }
}
