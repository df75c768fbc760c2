//! Path management for the rental ledger
//!
//! ## Path Resolution Order
//!
//! 1. `RENTAL_LEDGER_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/rental-ledger` or `~/.config/rental-ledger`
//! 3. Windows: `%APPDATA%\rental-ledger`

use std::path::PathBuf;

use crate::error::RentalError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "RENTAL_LEDGER_DATA_DIR";

/// Manages all paths used by the rental ledger
#[derive(Debug, Clone)]
pub struct RentalPaths {
    base_dir: PathBuf,
}

impl RentalPaths {
    /// Create a new RentalPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home/config directory can be determined.
    pub fn new() -> Result<Self, RentalError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create RentalPaths with a custom base directory
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory holding the three flat files
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn vehicles_file(&self) -> PathBuf {
        self.data_dir().join("vehicles.txt")
    }

    pub fn customers_file(&self) -> PathBuf {
        self.data_dir().join("customers.txt")
    }

    pub fn records_file(&self) -> PathBuf {
        self.data_dir().join("rental_records.txt")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), RentalError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| RentalError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| RentalError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if the ledger has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, RentalError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                RentalError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("rental-ledger"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, RentalError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| RentalError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("rental-ledger"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RentalPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var(DATA_DIR_ENV, custom_path);

        let paths = RentalPaths::new().unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());

        env::remove_var(DATA_DIR_ENV);
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RentalPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(paths.data_dir().exists());
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RentalPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.vehicles_file(),
            temp_dir.path().join("data").join("vehicles.txt")
        );
        assert_eq!(
            paths.customers_file(),
            temp_dir.path().join("data").join("customers.txt")
        );
        assert_eq!(
            paths.records_file(),
            temp_dir.path().join("data").join("rental_records.txt")
        );
    }
}
