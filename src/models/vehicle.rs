//! Vehicle model
//!
//! A rentable asset. Shared fields live on [`Vehicle`]; the variant-specific
//! data lives in [`VehicleKind`].

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{RentalError, RentalResult};

static PLATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{3}[0-9]{3}$").expect("plate pattern is valid"));

/// Rental status of a vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VehicleStatus {
    #[default]
    Available,
    Held,
    Rented,
    UnderMaintenance,
    OutOfService,
}

impl VehicleStatus {
    pub const ALL: [VehicleStatus; 5] = [
        Self::Available,
        Self::Held,
        Self::Rented,
        Self::UnderMaintenance,
        Self::OutOfService,
    ];

    /// Parse a status name, ignoring case, spaces, dashes and underscores
    pub fn parse(s: &str) -> Option<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "available" => Some(Self::Available),
            "held" => Some(Self::Held),
            "rented" => Some(Self::Rented),
            "undermaintenance" | "maintenance" => Some(Self::UnderMaintenance),
            "outofservice" => Some(Self::OutOfService),
            _ => None,
        }
    }
}

impl fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available => write!(f, "Available"),
            Self::Held => write!(f, "Held"),
            Self::Rented => write!(f, "Rented"),
            Self::UnderMaintenance => write!(f, "UnderMaintenance"),
            Self::OutOfService => write!(f, "OutOfService"),
        }
    }
}

/// Variant-specific vehicle data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum VehicleKind {
    Car { seats: u32 },
    Minibus { accessible: bool },
    PickupTruck { cargo_size: f64, has_trailer: bool },
}

impl VehicleKind {
    /// Tag written to `vehicles.txt`
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Car { .. } => "Car",
            Self::Minibus { .. } => "Minibus",
            Self::PickupTruck { .. } => "PickupTruck",
        }
    }

    /// Human-readable type label used in tables
    pub fn label(&self) -> &'static str {
        match self {
            Self::Car { .. } => "Car",
            Self::Minibus { .. } => "Minibus",
            Self::PickupTruck { .. } => "Pickup Truck",
        }
    }

    /// Extra column text appended to [`Vehicle::info`]
    fn extra_info(&self) -> String {
        match self {
            Self::Car { seats } => format!("Seats: {}", seats),
            Self::Minibus { accessible } => {
                format!("Accessible: {}", if *accessible { "Yes" } else { "No" })
            }
            Self::PickupTruck {
                cargo_size,
                has_trailer,
            } => format!(
                "Cargo: {}, Trailer: {}",
                cargo_size,
                if *has_trailer { "Yes" } else { "No" }
            ),
        }
    }
}

/// A rentable vehicle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    license_plate: Option<String>,
    make: Option<String>,
    model: Option<String>,
    year: i32,
    status: VehicleStatus,
    kind: VehicleKind,
}

impl Vehicle {
    /// Create a vehicle with no plate and status `Available`
    ///
    /// Make and model are title-cased; blank input leaves them unset.
    pub fn new(make: Option<&str>, model: Option<&str>, year: i32, kind: VehicleKind) -> Self {
        Self {
            license_plate: None,
            make: make.and_then(title_case),
            model: model.and_then(title_case),
            year,
            status: VehicleStatus::Available,
            kind,
        }
    }

    pub fn car(make: &str, model: &str, year: i32, seats: u32) -> Self {
        Self::new(Some(make), Some(model), year, VehicleKind::Car { seats })
    }

    pub fn minibus(make: &str, model: &str, year: i32, accessible: bool) -> Self {
        Self::new(Some(make), Some(model), year, VehicleKind::Minibus { accessible })
    }

    pub fn pickup_truck(
        make: &str,
        model: &str,
        year: i32,
        cargo_size: f64,
        has_trailer: bool,
    ) -> Self {
        Self::new(
            Some(make),
            Some(model),
            year,
            VehicleKind::PickupTruck {
                cargo_size,
                has_trailer,
            },
        )
    }

    /// Builder-style plate assignment
    pub fn with_plate(mut self, plate: &str) -> RentalResult<Self> {
        self.set_license_plate(plate)?;
        Ok(self)
    }

    /// Assign a license plate
    ///
    /// The plate must be three letters followed by three digits. Input is
    /// matched case-insensitively and stored uppercase. On failure the
    /// previous plate is kept.
    pub fn set_license_plate(&mut self, plate: &str) -> RentalResult<()> {
        let normalized = plate.to_uppercase();
        if !is_valid_plate(&normalized) {
            return Err(RentalError::Validation(format!(
                "Invalid license plate '{}'. Must be 3 letters followed by 3 numbers.",
                plate
            )));
        }
        self.license_plate = Some(normalized);
        Ok(())
    }

    /// Overwrite the status without any transition check
    pub fn set_status(&mut self, status: VehicleStatus) {
        self.status = status;
    }

    pub fn license_plate(&self) -> Option<&str> {
        self.license_plate.as_deref()
    }

    pub fn make(&self) -> Option<&str> {
        self.make.as_deref()
    }

    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn status(&self) -> VehicleStatus {
        self.status
    }

    pub fn kind(&self) -> &VehicleKind {
        &self.kind
    }

    /// True if this vehicle carries `plate`, ignoring case
    pub fn has_plate(&self, plate: &str) -> bool {
        self.license_plate
            .as_deref()
            .is_some_and(|own| own.eq_ignore_ascii_case(plate))
    }

    /// One-line structured summary used in tabular listings
    pub fn info(&self) -> String {
        format!(
            "| {} | {} | {} | {} | {} | {}",
            self.license_plate().unwrap_or("-"),
            self.make().unwrap_or("-"),
            self.model().unwrap_or("-"),
            self.year,
            self.status,
            self.kind.extra_info()
        )
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [Plate: {}, Make: {}, Model: {}, Year: {}, Status: {}]",
            self.kind.tag(),
            self.license_plate().unwrap_or("-"),
            self.make().unwrap_or("-"),
            self.model().unwrap_or("-"),
            self.year,
            self.status
        )
    }
}

/// Check a plate against the `AAA000` format (uppercase letters)
pub fn is_valid_plate(plate: &str) -> bool {
    PLATE_PATTERN.is_match(plate)
}

/// First character uppercase, the rest lowercase; blank input yields `None`
pub fn title_case(input: &str) -> Option<String> {
    let trimmed = input.trim();
    let mut chars = trimmed.chars();
    let first = chars.next()?;

    let mut result: String = first.to_uppercase().collect();
    result.push_str(&chars.as_str().to_lowercase());
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_car() -> Vehicle {
        Vehicle::car("Test", "Model", 2020, 4)
    }

    #[test]
    fn test_new_vehicle_defaults() {
        let car = Vehicle::car("toyota", "CAMRY", 2020, 4);
        assert_eq!(car.make(), Some("Toyota"));
        assert_eq!(car.model(), Some("Camry"));
        assert_eq!(car.year(), 2020);
        assert_eq!(car.status(), VehicleStatus::Available);
        assert_eq!(car.license_plate(), None);
        assert_eq!(car.kind(), &VehicleKind::Car { seats: 4 });
    }

    #[test]
    fn test_blank_make_and_model_are_unset() {
        let vehicle = Vehicle::new(Some("   "), None, 2019, VehicleKind::Minibus { accessible: true });
        assert_eq!(vehicle.make(), None);
        assert_eq!(vehicle.model(), None);
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("ford"), Some("Ford".to_string()));
        assert_eq!(title_case("  F-150  "), Some("F-150".to_string()));
        assert_eq!(title_case("x"), Some("X".to_string()));
        assert_eq!(title_case(""), None);
    }

    #[test]
    fn test_valid_plates() {
        let mut car = test_car();
        for plate in ["AAA100", "ABC567", "ZZZ999"] {
            car.set_license_plate(plate).unwrap();
            assert_eq!(car.license_plate(), Some(plate));
        }

        car.set_license_plate("abc123").unwrap();
        assert_eq!(car.license_plate(), Some("ABC123"));
    }

    #[test]
    fn test_invalid_plates_keep_previous() {
        let mut car = test_car();
        car.set_license_plate("ABC567").unwrap();

        for plate in ["", "AAA1000", "ZZZ99", "ABC12D", "123ABC", "AB1234", " ABC123"] {
            let err = car.set_license_plate(plate).unwrap_err();
            assert!(err.is_validation(), "{} should be rejected", plate);
            assert_eq!(car.license_plate(), Some("ABC567"));
        }
    }

    #[test]
    fn test_invalid_plate_on_fresh_vehicle_stays_unset() {
        let mut car = test_car();
        assert!(car.set_license_plate("nope").is_err());
        assert_eq!(car.license_plate(), None);
    }

    #[test]
    fn test_set_status_is_unconditional() {
        let mut car = test_car();
        for status in VehicleStatus::ALL {
            car.set_status(status);
            assert_eq!(car.status(), status);
        }
    }

    #[test]
    fn test_has_plate_ignores_case() {
        let car = test_car().with_plate("ABC123").unwrap();
        assert!(car.has_plate("abc123"));
        assert!(!car.has_plate("ABC124"));
        assert!(!test_car().has_plate("ABC123"));
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(VehicleStatus::parse("available"), Some(VehicleStatus::Available));
        assert_eq!(VehicleStatus::parse("RENTED"), Some(VehicleStatus::Rented));
        assert_eq!(
            VehicleStatus::parse("under-maintenance"),
            Some(VehicleStatus::UnderMaintenance)
        );
        assert_eq!(VehicleStatus::parse("OutOfService"), Some(VehicleStatus::OutOfService));
        assert_eq!(VehicleStatus::parse("gone"), None);
    }

    #[test]
    fn test_info_includes_variant_fields() {
        let car = Vehicle::car("toyota", "camry", 2020, 4).with_plate("ABC567").unwrap();
        assert_eq!(car.info(), "| ABC567 | Toyota | Camry | 2020 | Available | Seats: 4");

        let bus = Vehicle::minibus("ford", "transit", 2018, false).with_plate("BUS001").unwrap();
        assert!(bus.info().ends_with("Accessible: No"));

        let truck = Vehicle::pickup_truck("ford", "f150", 2021, 5.5, true)
            .with_plate("TRK100")
            .unwrap();
        assert!(truck.info().ends_with("Cargo: 5.5, Trailer: Yes"));
    }

    #[test]
    fn test_display() {
        let truck = Vehicle::pickup_truck("ram", "1500", 2022, 6.0, false)
            .with_plate("RAM150")
            .unwrap();
        assert_eq!(
            truck.to_string(),
            "PickupTruck [Plate: RAM150, Make: Ram, Model: 1500, Year: 2022, Status: Available]"
        );
    }

    #[test]
    fn test_kind_labels() {
        let truck = VehicleKind::PickupTruck {
            cargo_size: 1.0,
            has_trailer: false,
        };
        assert_eq!(truck.tag(), "PickupTruck");
        assert_eq!(truck.label(), "Pickup Truck");
        assert_eq!(VehicleKind::Car { seats: 2 }.label(), "Car");
    }
}
