//! Rent and return commands

use chrono::NaiveDate;

use crate::error::{RentalError, RentalResult};
use crate::models::Money;
use crate::services::RentalLedger;

use super::report;

/// Rent a vehicle and print the result
pub fn handle_rent(
    ledger: &mut RentalLedger,
    plate: &str,
    customer_id: &str,
    amount: &str,
    date: Option<&str>,
) -> RentalResult<()> {
    let amount = parse_amount(amount)?;
    let date = parse_date(date)?;
    let name = customer_name(ledger, customer_id);

    report(ledger.rent_vehicle(plate, customer_id, date, amount), || {
        format!("Vehicle rented to {}", name)
    });
    Ok(())
}

/// Return a vehicle and print the result
pub fn handle_return(
    ledger: &mut RentalLedger,
    plate: &str,
    customer_id: &str,
    fees: &str,
    date: Option<&str>,
) -> RentalResult<()> {
    let fees = parse_amount(fees)?;
    let date = parse_date(date)?;
    let name = customer_name(ledger, customer_id);

    report(ledger.return_vehicle(plate, customer_id, date, fees), || {
        format!("Vehicle returned by {}", name)
    });
    Ok(())
}

fn customer_name(ledger: &RentalLedger, customer_id: &str) -> String {
    ledger
        .find_customer_by_id(customer_id)
        .map(|c| c.name().to_string())
        .unwrap_or_else(|| customer_id.to_string())
}

/// Parse YYYY-MM-DD, defaulting to today
pub fn parse_date(date: Option<&str>) -> RentalResult<NaiveDate> {
    match date {
        Some(date_str) => NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| {
            RentalError::Validation(format!(
                "Invalid date format: '{}'. Use YYYY-MM-DD",
                date_str
            ))
        }),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

pub fn parse_amount(amount: &str) -> RentalResult<Money> {
    Money::parse(amount).map_err(|e| {
        RentalError::Validation(format!(
            "Invalid amount: '{}'. Use format like '100.00'. Error: {}",
            amount, e
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date(Some("2024-01-10")).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
        );
        assert!(parse_date(Some("01/10/2024")).unwrap_err().is_validation());
        assert!(parse_date(None).is_ok());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("100").unwrap(), Money::from_cents(10000));
        assert!(parse_amount("ten").unwrap_err().is_validation());
    }
}
