//! Rental record model
//!
//! An immutable RENT or RETURN transaction. Records reference their vehicle
//! and customer by plate and id rather than owning them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Direction of a rental transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordKind {
    Rent,
    Return,
}

impl RecordKind {
    /// Tag written to `rental_records.txt`
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Rent => "RENT",
            Self::Return => "RETURN",
        }
    }

    /// Parse a persisted tag (exact match)
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "RENT" => Some(Self::Rent),
            "RETURN" => Some(Self::Return),
            _ => None,
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A single entry in the rental history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalRecord {
    kind: RecordKind,
    license_plate: String,
    customer_id: String,
    date: NaiveDate,
    amount: Money,
}

impl RentalRecord {
    pub fn new(
        kind: RecordKind,
        license_plate: impl Into<String>,
        customer_id: impl Into<String>,
        date: NaiveDate,
        amount: Money,
    ) -> Self {
        Self {
            kind,
            license_plate: license_plate.into(),
            customer_id: customer_id.into(),
            date,
            amount,
        }
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    pub fn license_plate(&self) -> &str {
        &self.license_plate
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Rental amount for RENT, extra fees for RETURN
    pub fn amount(&self) -> Money {
        self.amount
    }
}
