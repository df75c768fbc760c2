//! Rental ledger service
//!
//! The in-memory authority for vehicles, customers and rental history. It
//! enforces duplicate checks and the rent/return status rules, then appends
//! each accepted change to the flat files.
//!
//! Persistence is best-effort: a failed append is reported on the returned
//! [`Outcome`] but the in-memory change stays applied.

use chrono::NaiveDate;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::config::Settings;
use crate::error::{RentalError, RentalResult};
use crate::models::{
    Customer, Money, RecordKind, RentalRecord, Vehicle, VehicleStatus,
};
use crate::storage::{LineCodec, LineLog, Storage};

/// A business rule that prevented an operation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("Vehicle with license plate {0} already exists.")]
    DuplicateVehicle(String),

    #[error("Customer with ID {0} already exists.")]
    DuplicateCustomer(String),

    #[error("No vehicle with license plate {0}.")]
    VehicleNotFound(String),

    #[error("No customer with ID {0}.")]
    CustomerNotFound(String),

    #[error("Vehicle {plate} is not available for renting (status: {status}).")]
    NotAvailable {
        plate: String,
        status: VehicleStatus,
    },

    #[error("Vehicle {plate} is not rented (status: {status}).")]
    NotRented {
        plate: String,
        status: VehicleStatus,
    },
}

/// Result of a ledger mutation
#[derive(Debug)]
pub enum Outcome {
    /// The change was applied in memory. `persist_error` is set if writing
    /// it to disk failed.
    Applied { persist_error: Option<RentalError> },
    /// Nothing changed
    Rejected(Rejection),
}

impl Outcome {
    fn committed(persisted: RentalResult<()>) -> Self {
        let persist_error = persisted.err();
        if let Some(e) = &persist_error {
            error!("Change applied in memory but not saved: {}", e);
        }
        Self::Applied { persist_error }
    }

    fn rejected(rejection: Rejection) -> Self {
        debug!("Rejected: {}", rejection);
        Self::Rejected(rejection)
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::Rejected(rejection) => Some(rejection),
            Self::Applied { .. } => None,
        }
    }

    pub fn persist_error(&self) -> Option<&RentalError> {
        match self {
            Self::Applied { persist_error } => persist_error.as_ref(),
            Self::Rejected(_) => None,
        }
    }
}

/// Owns all vehicles, customers and rental history
pub struct RentalLedger {
    storage: Storage,
    vehicles: Vec<Vehicle>,
    customers: Vec<Customer>,
    history: Vec<RentalRecord>,
}

impl RentalLedger {
    /// Build a ledger from the persisted files
    ///
    /// Loads vehicles, then customers, then rental records. Unreadable files
    /// and malformed lines are logged and skipped.
    pub fn open(storage: Storage, settings: &Settings) -> Self {
        let mut ledger = Self {
            storage,
            vehicles: Vec::new(),
            customers: Vec::new(),
            history: Vec::new(),
        };

        ledger.load_vehicles();
        ledger.load_customers();
        ledger.load_records(settings.restore_status_from_history);
        info!(
            vehicles = ledger.vehicles.len(),
            customers = ledger.customers.len(),
            records = ledger.history.len(),
            "Data loaded"
        );

        ledger
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Register a vehicle
    ///
    /// # Errors
    ///
    /// Returns a validation error if the vehicle has no license plate.
    pub fn add_vehicle(&mut self, vehicle: Vehicle) -> RentalResult<Outcome> {
        let plate = vehicle
            .license_plate()
            .ok_or_else(|| {
                RentalError::Validation("Vehicle must have a license plate before it is added".into())
            })?
            .to_string();

        if self.find_vehicle_by_plate(&plate).is_some() {
            return Ok(Outcome::rejected(Rejection::DuplicateVehicle(plate)));
        }

        let persisted = self.storage.vehicles.append(&vehicle);
        self.vehicles.push(vehicle);
        info!(plate = %plate, "Vehicle added");

        Ok(Outcome::committed(persisted))
    }

    /// Register a customer; ids are compared exactly
    pub fn add_customer(&mut self, customer: Customer) -> Outcome {
        if self.find_customer_by_id(customer.id()).is_some() {
            return Outcome::rejected(Rejection::DuplicateCustomer(customer.id().to_string()));
        }

        let persisted = self.storage.customers.append(&customer);
        info!(customer_id = %customer.id(), "Customer added");
        self.customers.push(customer);

        Outcome::committed(persisted)
    }

    /// Rent an `Available` vehicle to a customer
    pub fn rent_vehicle(
        &mut self,
        plate: &str,
        customer_id: &str,
        date: NaiveDate,
        amount: Money,
    ) -> Outcome {
        self.transition(RecordKind::Rent, plate, customer_id, date, amount)
    }

    /// Take back a `Rented` vehicle; `extra_fees` is stored as the record amount
    pub fn return_vehicle(
        &mut self,
        plate: &str,
        customer_id: &str,
        date: NaiveDate,
        extra_fees: Money,
    ) -> Outcome {
        self.transition(RecordKind::Return, plate, customer_id, date, extra_fees)
    }

    fn transition(
        &mut self,
        kind: RecordKind,
        plate: &str,
        customer_id: &str,
        date: NaiveDate,
        amount: Money,
    ) -> Outcome {
        let Some(index) = self.vehicles.iter().position(|v| v.has_plate(plate)) else {
            return Outcome::rejected(Rejection::VehicleNotFound(plate.to_uppercase()));
        };

        if self.find_customer_by_id(customer_id).is_none() {
            return Outcome::rejected(Rejection::CustomerNotFound(customer_id.to_string()));
        }

        let vehicle = &mut self.vehicles[index];
        let stored_plate = vehicle
            .license_plate()
            .map(str::to_string)
            .unwrap_or_else(|| plate.to_uppercase());

        let (required, next) = match kind {
            RecordKind::Rent => (VehicleStatus::Available, VehicleStatus::Rented),
            RecordKind::Return => (VehicleStatus::Rented, VehicleStatus::Available),
        };

        if vehicle.status() != required {
            let status = vehicle.status();
            return Outcome::rejected(match kind {
                RecordKind::Rent => Rejection::NotAvailable {
                    plate: stored_plate,
                    status,
                },
                RecordKind::Return => Rejection::NotRented {
                    plate: stored_plate,
                    status,
                },
            });
        }

        vehicle.set_status(next);

        let record = RentalRecord::new(kind, stored_plate, customer_id, date, amount);
        let persisted = self.storage.records.append(&record);
        info!(
            kind = %kind,
            plate = %record.license_plate(),
            customer_id = %customer_id,
            "Rental record added"
        );
        self.history.push(record);

        Outcome::committed(persisted)
    }

    /// Overwrite a registered vehicle's status (in memory only)
    pub fn set_vehicle_status(&mut self, plate: &str, status: VehicleStatus) -> Outcome {
        match self.vehicles.iter_mut().find(|v| v.has_plate(plate)) {
            Some(vehicle) => {
                vehicle.set_status(status);
                Outcome::Applied { persist_error: None }
            }
            None => Outcome::rejected(Rejection::VehicleNotFound(plate.to_uppercase())),
        }
    }

    /// Case-insensitive plate lookup
    pub fn find_vehicle_by_plate(&self, plate: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.has_plate(plate))
    }

    /// Exact id lookup
    pub fn find_customer_by_id(&self, id: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id() == id)
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Vehicles in insertion order, optionally restricted to one status
    pub fn vehicles_with_status(&self, status: Option<VehicleStatus>) -> Vec<&Vehicle> {
        self.vehicles
            .iter()
            .filter(|v| status.map_or(true, |s| v.status() == s))
            .collect()
    }

    pub fn available_vehicles(&self) -> Vec<&Vehicle> {
        self.vehicles_with_status(Some(VehicleStatus::Available))
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Rental records in insertion order
    pub fn history(&self) -> &[RentalRecord] {
        &self.history
    }

    fn load_vehicles(&mut self) {
        let mut loaded = 0;
        for vehicle in read_log(&self.storage.vehicles) {
            let plate = vehicle.license_plate().unwrap_or_default();
            if self.find_vehicle_by_plate(plate).is_some() {
                warn!(plate = %plate, "Duplicate vehicle in file, keeping first occurrence");
                continue;
            }
            self.vehicles.push(vehicle);
            loaded += 1;
        }
        info!("Loaded {} vehicles from file", loaded);
    }

    fn load_customers(&mut self) {
        let mut loaded = 0;
        for customer in read_log(&self.storage.customers) {
            if self.find_customer_by_id(customer.id()).is_some() {
                warn!(customer_id = %customer.id(), "Duplicate customer in file, keeping first occurrence");
                continue;
            }
            self.customers.push(customer);
            loaded += 1;
        }
        info!("Loaded {} customers from file", loaded);
    }

    fn load_records(&mut self, restore_status: bool) {
        let mut loaded = 0;
        for record in read_log(&self.storage.records) {
            if self.find_customer_by_id(record.customer_id()).is_none() {
                warn!(customer_id = %record.customer_id(), "Dropping record for unknown customer");
                continue;
            }

            let Some(vehicle) = self
                .vehicles
                .iter_mut()
                .find(|v| v.has_plate(record.license_plate()))
            else {
                warn!(plate = %record.license_plate(), "Dropping record for unknown vehicle");
                continue;
            };

            if restore_status {
                vehicle.set_status(match record.kind() {
                    RecordKind::Rent => VehicleStatus::Rented,
                    RecordKind::Return => VehicleStatus::Available,
                });
            }

            self.history.push(record);
            loaded += 1;
        }
        info!("Loaded {} rental records from file", loaded);
    }
}

fn read_log<T: LineCodec>(log: &LineLog<T>) -> Vec<T> {
    match log.load() {
        Ok(report) => {
            if report.skipped > 0 {
                warn!(
                    path = %log.path().display(),
                    "Skipped {} malformed {} lines",
                    report.skipped,
                    T::ENTITY
                );
            }
            report.items
        }
        Err(e) => {
            error!("Error loading {} data: {}", T::ENTITY, e);
            Vec::new()
        }
    }
}
