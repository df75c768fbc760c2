//! Flat-file line codec
//!
//! Each entity maps to one comma-separated line with no header and no
//! quoting:
//!
//! - vehicles: `plate,make,model,year,type[,type-specific...]`
//! - customers: `id,name`
//! - rental records: `kind,plate,customerId,YYYY-MM-DD,amount`
//!
//! Embedded commas are not escaped and corrupt the line.

use chrono::NaiveDate;
use csv::StringRecord;

use crate::error::{RentalError, RentalResult};
use crate::models::{Customer, Money, RecordKind, RentalRecord, Vehicle, VehicleKind};

/// Conversion between an entity and one line of fields
pub trait LineCodec: Sized {
    /// Entity name used in log messages
    const ENTITY: &'static str;

    fn encode(&self) -> RentalResult<Vec<String>>;

    fn decode(fields: &StringRecord) -> RentalResult<Self>;
}

impl LineCodec for Vehicle {
    const ENTITY: &'static str = "vehicle";

    fn encode(&self) -> RentalResult<Vec<String>> {
        let plate = self.license_plate().ok_or_else(|| {
            RentalError::Validation("Cannot persist a vehicle without a license plate".into())
        })?;

        let mut fields = vec![
            plate.to_string(),
            self.make().unwrap_or_default().to_string(),
            self.model().unwrap_or_default().to_string(),
            self.year().to_string(),
            self.kind().tag().to_string(),
        ];

        match self.kind() {
            VehicleKind::Car { seats } => fields.push(seats.to_string()),
            VehicleKind::Minibus { accessible } => fields.push(accessible.to_string()),
            VehicleKind::PickupTruck {
                cargo_size,
                has_trailer,
            } => {
                fields.push(cargo_size.to_string());
                fields.push(has_trailer.to_string());
            }
        }

        Ok(fields)
    }

    fn decode(fields: &StringRecord) -> RentalResult<Self> {
        if fields.len() < 5 {
            return Err(field_count_error(Self::ENTITY, "at least 5", fields.len()));
        }

        let year: i32 = parse_number(&fields[3], "year")?;

        let kind = match &fields[4] {
            "Car" => {
                expect_len(fields, 6)?;
                VehicleKind::Car {
                    seats: parse_number(&fields[5], "seats")?,
                }
            }
            "Minibus" => {
                expect_len(fields, 6)?;
                VehicleKind::Minibus {
                    accessible: parse_bool(&fields[5], "accessible")?,
                }
            }
            "PickupTruck" => {
                expect_len(fields, 7)?;
                let cargo_size: f64 = parse_number(&fields[5], "cargo size")?;
                if !cargo_size.is_finite() {
                    return Err(RentalError::Parse(format!(
                        "Invalid cargo size '{}'",
                        &fields[5]
                    )));
                }
                VehicleKind::PickupTruck {
                    cargo_size,
                    has_trailer: parse_bool(&fields[6], "trailer")?,
                }
            }
            other => {
                return Err(RentalError::Parse(format!(
                    "Unknown vehicle type '{}'",
                    other
                )))
            }
        };

        Vehicle::new(Some(&fields[1]), Some(&fields[2]), year, kind).with_plate(&fields[0])
    }
}

impl LineCodec for Customer {
    const ENTITY: &'static str = "customer";

    fn encode(&self) -> RentalResult<Vec<String>> {
        Ok(vec![self.id().to_string(), self.name().to_string()])
    }

    fn decode(fields: &StringRecord) -> RentalResult<Self> {
        expect_len(fields, 2)?;
        Ok(Customer::new(&fields[0], &fields[1]))
    }
}

impl LineCodec for RentalRecord {
    const ENTITY: &'static str = "rental record";

    fn encode(&self) -> RentalResult<Vec<String>> {
        Ok(vec![
            self.kind().tag().to_string(),
            self.license_plate().to_string(),
            self.customer_id().to_string(),
            self.date().format("%Y-%m-%d").to_string(),
            self.amount().to_plain_string(),
        ])
    }

    fn decode(fields: &StringRecord) -> RentalResult<Self> {
        expect_len(fields, 5)?;

        let kind = RecordKind::from_tag(&fields[0]).ok_or_else(|| {
            RentalError::Parse(format!("Unknown record kind '{}'", &fields[0]))
        })?;

        let date = NaiveDate::parse_from_str(&fields[3], "%Y-%m-%d")
            .map_err(|e| RentalError::Parse(format!("Invalid date '{}': {}", &fields[3], e)))?;

        let amount = Money::parse(&fields[4])
            .map_err(|e| RentalError::Parse(e.to_string()))?;

        Ok(RentalRecord::new(kind, &fields[1], &fields[2], date, amount))
    }
}

fn expect_len(fields: &StringRecord, expected: usize) -> RentalResult<()> {
    if fields.len() == expected {
        Ok(())
    } else {
        Err(field_count_error("line", &expected.to_string(), fields.len()))
    }
}

fn field_count_error(what: &str, expected: &str, actual: usize) -> RentalError {
    RentalError::Parse(format!(
        "Expected {} fields for {}, found {}",
        expected, what, actual
    ))
}

fn parse_number<T>(raw: &str, field: &str) -> RentalResult<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| RentalError::Parse(format!("Invalid {} '{}': {}", field, raw, e)))
}

fn parse_bool(raw: &str, field: &str) -> RentalResult<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(RentalError::Parse(format!(
            "Invalid {} flag '{}'",
            field, raw
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(line: &str) -> StringRecord {
        StringRecord::from(line.split(',').collect::<Vec<_>>())
    }

    #[test]
    fn test_encode_car() {
        let car = Vehicle::car("toyota", "CAMRY", 2020, 4).with_plate("abc567").unwrap();
        assert_eq!(
            car.encode().unwrap(),
            vec!["ABC567", "Toyota", "Camry", "2020", "Car", "4"]
        );
    }

    #[test]
    fn test_encode_pickup_truck() {
        let truck = Vehicle::pickup_truck("ford", "ranger", 2021, 5.5, true)
            .with_plate("TRK100")
            .unwrap();
        assert_eq!(
            truck.encode().unwrap().join(","),
            "TRK100,Ford,Ranger,2021,PickupTruck,5.5,true"
        );
    }

    #[test]
    fn test_encode_requires_plate() {
        let car = Vehicle::car("a", "b", 2000, 2);
        assert!(car.encode().unwrap_err().is_validation());
    }

    #[test]
    fn test_vehicle_round_trip() {
        let vehicles = vec![
            Vehicle::car("toyota", "camry", 2020, 4).with_plate("ABC567").unwrap(),
            Vehicle::minibus("mercedes", "sprinter", 2019, true).with_plate("BUS001").unwrap(),
            Vehicle::pickup_truck("ford", "f150", 2022, 6.25, false)
                .with_plate("TRK222")
                .unwrap(),
            Vehicle::new(None, None, 0, VehicleKind::Car { seats: 2 })
                .with_plate("NUL000")
                .unwrap(),
        ];

        for vehicle in vehicles {
            let fields = StringRecord::from(vehicle.encode().unwrap());
            assert_eq!(Vehicle::decode(&fields).unwrap(), vehicle);
        }
    }

    #[test]
    fn test_decode_rejects_malformed_vehicles() {
        for line in [
            "ABC123,Toyota,Camry,20x0,Car,4",
            "ABC123,Toyota,Camry,2020,Car",
            "ABC123,Toyota,Camry,2020,Car,4,extra",
            "ABC123,Toyota,Camry,2020,Boat,4",
            "ABC123,Toyota,Camry,2020,Minibus,maybe",
            "ABC123,Ford,F150,2020,PickupTruck,big,false",
            "ABC123,Ford,F150,2020,PickupTruck,NaN,false",
            "BAD,Toyota,Camry,2020,Car,4",
            "ABC123,Toyota",
        ] {
            assert!(Vehicle::decode(&record(line)).is_err(), "{} should fail", line);
        }
    }

    #[test]
    fn test_decode_bool_ignores_case() {
        let bus = Vehicle::decode(&record("BUS001,Ford,Transit,2018,Minibus,TRUE")).unwrap();
        assert_eq!(bus.kind(), &VehicleKind::Minibus { accessible: true });
    }

    #[test]
    fn test_customer_round_trip() {
        let customer = Customer::new("1", "Alice");
        let fields = StringRecord::from(customer.encode().unwrap());
        assert_eq!(Customer::decode(&fields).unwrap(), customer);

        assert!(Customer::decode(&record("1,Alice,Extra")).is_err());
        assert!(Customer::decode(&record("1")).is_err());
    }

    #[test]
    fn test_record_round_trip() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let rental = RentalRecord::new(RecordKind::Rent, "ABC567", "1", date, Money::from_cents(10000));

        let fields = rental.encode().unwrap();
        assert_eq!(fields.join(","), "RENT,ABC567,1,2024-01-10,100.00");
        assert_eq!(RentalRecord::decode(&StringRecord::from(fields)).unwrap(), rental);
    }

    #[test]
    fn test_record_accepts_single_decimal_amount() {
        let parsed = RentalRecord::decode(&record("RETURN,ABC567,1,2024-01-12,10.0")).unwrap();
        assert_eq!(parsed.kind(), RecordKind::Return);
        assert_eq!(parsed.amount(), Money::from_cents(1000));
    }

    #[test]
    fn test_decode_rejects_malformed_records() {
        for line in [
            "LEASE,ABC567,1,2024-01-10,100.00",
            "RENT,ABC567,1,2024-13-10,100.00",
            "RENT,ABC567,1,10/01/2024,100.00",
            "RENT,ABC567,1,2024-01-10,lots",
            "RENT,ABC567,1,2024-01-10",
        ] {
            assert!(RentalRecord::decode(&record(line)).is_err(), "{} should fail", line);
        }
    }
}
