//! Vehicle CLI commands
//!
//! Implements CLI commands for registering and listing vehicles.

use clap::Subcommand;

use crate::display::vehicle::{format_vehicle_details, format_vehicle_table};
use crate::error::{RentalError, RentalResult};
use crate::models::{Vehicle, VehicleKind, VehicleStatus};
use crate::services::RentalLedger;

use super::report;

/// Vehicle subcommands
#[derive(Subcommand)]
pub enum VehicleCommands {
    /// Register a new vehicle
    Add {
        /// License plate (3 letters followed by 3 digits)
        #[arg(short, long)]
        plate: String,
        /// Manufacturer
        #[arg(long)]
        make: Option<String>,
        /// Model name
        #[arg(long)]
        model: Option<String>,
        /// Model year
        #[arg(short, long)]
        year: i32,
        /// Vehicle type (car, minibus, pickup-truck)
        #[arg(short = 't', long = "type", default_value = "car")]
        vehicle_type: String,
        /// Number of seats (car only)
        #[arg(long)]
        seats: Option<u32>,
        /// Wheelchair accessible (minibus only)
        #[arg(long)]
        accessible: Option<bool>,
        /// Cargo bed size (pickup truck only)
        #[arg(long)]
        cargo_size: Option<f64>,
        /// Has a trailer (pickup truck only)
        #[arg(long)]
        trailer: bool,
    },
    /// List vehicles
    List {
        /// Only show vehicles with this status (e.g. available, rented)
        #[arg(short, long)]
        status: Option<String>,
    },
    /// List vehicles that can be rented
    Available,
    /// Show vehicle details
    Show {
        /// License plate
        plate: String,
    },
}

/// Handle a vehicle command
pub fn handle_vehicle_command(ledger: &mut RentalLedger, cmd: VehicleCommands) -> RentalResult<()> {
    match cmd {
        VehicleCommands::Add {
            plate,
            make,
            model,
            year,
            vehicle_type,
            seats,
            accessible,
            cargo_size,
            trailer,
        } => {
            let kind = build_kind(&vehicle_type, seats, accessible, cargo_size, trailer)?;
            let vehicle =
                Vehicle::new(make.as_deref(), model.as_deref(), year, kind).with_plate(&plate)?;
            let plate = vehicle.license_plate().unwrap_or_default().to_string();

            report(ledger.add_vehicle(vehicle)?, || {
                format!("Vehicle added successfully! ({})", plate)
            });
        }

        VehicleCommands::List { status } => {
            let filter = status.as_deref().map(parse_status).transpose()?;
            print!(
                "{}",
                format_vehicle_table(&ledger.vehicles_with_status(filter), filter)
            );
        }

        VehicleCommands::Available => {
            print!(
                "{}",
                format_vehicle_table(&ledger.available_vehicles(), Some(VehicleStatus::Available))
            );
        }

        VehicleCommands::Show { plate } => {
            let vehicle = ledger
                .find_vehicle_by_plate(&plate)
                .ok_or_else(|| RentalError::vehicle_not_found(&plate))?;
            print!("{}", format_vehicle_details(vehicle));
        }
    }

    Ok(())
}

/// Parse a status name for filtering, ignoring case
pub fn parse_status(raw: &str) -> RentalResult<VehicleStatus> {
    VehicleStatus::parse(raw).ok_or_else(|| {
        RentalError::Validation(format!(
            "Invalid status: '{}'. Valid statuses: available, held, rented, undermaintenance, outofservice",
            raw
        ))
    })
}

/// Build the variant data, filling unspecified fields with defaults
fn build_kind(
    vehicle_type: &str,
    seats: Option<u32>,
    accessible: Option<bool>,
    cargo_size: Option<f64>,
    trailer: bool,
) -> RentalResult<VehicleKind> {
    let normalized = vehicle_type.to_lowercase().replace(['-', '_', ' '], "");

    match normalized.as_str() {
        "car" => Ok(VehicleKind::Car {
            seats: seats.unwrap_or(5),
        }),
        "minibus" | "bus" => Ok(VehicleKind::Minibus {
            accessible: accessible.unwrap_or(true),
        }),
        "pickuptruck" | "pickup" | "truck" => {
            let cargo_size = cargo_size.unwrap_or(5.0);
            if !cargo_size.is_finite() || cargo_size < 0.0 {
                return Err(RentalError::Validation(format!(
                    "Invalid cargo size: {}",
                    cargo_size
                )));
            }
            Ok(VehicleKind::PickupTruck {
                cargo_size,
                has_trailer: trailer,
            })
        }
        _ => Err(RentalError::Validation(format!(
            "Invalid vehicle type: '{}'. Valid types: car, minibus, pickup-truck",
            vehicle_type
        ))),
    }
}
