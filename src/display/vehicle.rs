//! Vehicle display formatting
//!
//! Formats the vehicle collection as a fixed-width table.

use crate::models::{Vehicle, VehicleStatus};

/// Format vehicles as a table, titled after the status filter
///
/// `vehicles` is expected to be already filtered by `filter`.
pub fn format_vehicle_table(vehicles: &[&Vehicle], filter: Option<VehicleStatus>) -> String {
    let mut output = String::new();

    match filter {
        None => output.push_str("=== All Vehicles ===\n"),
        Some(status) => output.push_str(&format!("=== {} Vehicles ===\n", status)),
    }

    output.push_str(&format!(
        "|{:<16} | {:<12} | {:<12} | {:<12} | {:<6} | {:<18} |\n",
        "Type", "Plate", "Make", "Model", "Year", "Status"
    ));
    output.push('|');
    output.push_str(&"-".repeat(92));
    output.push_str("|\n");

    if vehicles.is_empty() {
        match filter {
            None => output.push_str("  No Vehicles found.\n"),
            Some(status) => output.push_str(&format!("  No vehicles with Status: {}\n", status)),
        }
        return output;
    }

    for vehicle in vehicles {
        output.push_str(&format!(
            "| {:<15} | {:<12} | {:<12} | {:<12} | {:<6} | {:<18} |\n",
            vehicle.kind().label(),
            vehicle.license_plate().unwrap_or("-"),
            vehicle.make().unwrap_or("-"),
            vehicle.model().unwrap_or("-"),
            vehicle.year(),
            vehicle.status().to_string(),
        ));
    }

    output
}

/// Format a single vehicle's details
pub fn format_vehicle_details(vehicle: &Vehicle) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", vehicle));
    output.push_str(&format!("  Type:   {}\n", vehicle.kind().label()));
    output.push_str(&format!("  Info:   {}\n", vehicle.info()));
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fleet() -> Vec<Vehicle> {
        let mut truck = Vehicle::pickup_truck("ford", "f150", 2021, 5.0, false)
            .with_plate("TRK100")
            .unwrap();
        truck.set_status(VehicleStatus::Rented);
        vec![
            Vehicle::car("toyota", "camry", 2020, 4).with_plate("ABC567").unwrap(),
            truck,
        ]
    }

    #[test]
    fn test_format_all_vehicles() {
        let vehicles = fleet();
        let refs: Vec<&Vehicle> = vehicles.iter().collect();
        let output = format_vehicle_table(&refs, None);

        assert!(output.starts_with("=== All Vehicles ===\n"));
        assert!(output.contains("| Car             | ABC567       | Toyota       | Camry        | 2020   | Available          |"));
        assert!(output.contains("| Pickup Truck    | TRK100"));
        assert!(output.contains("Rented"));
    }

    #[test]
    fn test_format_filtered_title() {
        let vehicles = fleet();
        let refs: Vec<&Vehicle> = vehicles
            .iter()
            .filter(|v| v.status() == VehicleStatus::Rented)
            .collect();
        let output = format_vehicle_table(&refs, Some(VehicleStatus::Rented));

        assert!(output.starts_with("=== Rented Vehicles ===\n"));
        assert!(output.contains("TRK100"));
        assert!(!output.contains("ABC567"));
    }

    #[test]
    fn test_format_empty() {
        assert!(format_vehicle_table(&[], None).contains("No Vehicles found."));
        assert!(format_vehicle_table(&[], Some(VehicleStatus::Held))
            .contains("No vehicles with Status: Held"));
    }

    #[test]
    fn test_format_details() {
        let vehicles = fleet();
        let output = format_vehicle_details(&vehicles[0]);
        assert!(output.contains("Car [Plate: ABC567"));
        assert!(output.contains("Seats: 4"));
    }
}
