//! Money type for rental amounts and fees
//!
//! Amounts are whole cents in an `i64`. The flat files store them as plain
//! decimal text such as `100.00`.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// ```
    /// use rental_ledger::models::Money;
    /// let amount = Money::from_cents(10000); // $100.00
    /// assert_eq!(amount.to_plain_string(), "100.00");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    pub const fn cents(self) -> i64 {
        self.0
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Parse an amount
    ///
    /// Accepts "100", "100.0", "100.00", "$100.00" and a leading '-'.
    /// Digits past the second decimal place are truncated.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(s.to_string());

        let (negative, rest) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, s),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);

        let (whole, fraction) = match rest.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (rest, ""),
        };

        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if !whole.chars().all(|c| c.is_ascii_digit())
            || !fraction.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }

        let dollars: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };

        let cents: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => fraction[..2].parse().map_err(|_| invalid())?,
        };

        let total = dollars
            .checked_mul(100)
            .and_then(|d| d.checked_add(cents))
            .ok_or_else(invalid)?;

        Ok(Self(if negative { -total } else { total }))
    }

    /// Plain decimal form used by the flat files (`100.00`, `-2.50`)
    pub fn to_plain_string(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        let magnitude = self.0.unsigned_abs();
        format!("{}{}.{:02}", sign, magnitude / 100, magnitude % 100)
    }

    /// Plain form prefixed by a currency symbol (`$100.00`, `-$2.50`)
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let plain = self.to_plain_string();
        match plain.strip_prefix('-') {
            Some(unsigned) => format!("-{}{}", symbol, unsigned),
            None => format!("{}{}", symbol, plain),
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyParseError {
    #[error("Invalid amount '{0}'")]
    InvalidFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_formatting() {
        assert_eq!(Money::from_cents(1050).to_string(), "$10.50");
        assert_eq!(Money::zero().to_string(), "$0.00");
        assert_eq!(Money::from_cents(-1050).format_with_symbol("€"), "-€10.50");
        assert_eq!(Money::from_cents(5).format_with_symbol("$"), "$0.05");
    }

    #[test]
    fn test_plain_string() {
        assert_eq!(Money::from_cents(10000).to_plain_string(), "100.00");
        assert_eq!(Money::from_cents(-250).to_plain_string(), "-2.50");
        assert_eq!(Money::from_cents(-5).to_plain_string(), "-0.05");
        assert_eq!(Money::zero().to_plain_string(), "0.00");
    }

    #[test]
    fn test_parse_accepted_forms() {
        for (raw, cents) in [
            ("100.00", 10000),
            ("100.0", 10000),
            ("100", 10000),
            ("$10.50", 1050),
            ("-10.50", -1050),
            (" 0.05 ", 5),
            (".5", 50),
            ("1.999", 199),
        ] {
            assert_eq!(Money::parse(raw).unwrap().cents(), cents, "{}", raw);
        }
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for raw in ["", "-", "abc", "1.2.3", "1e3", "12.x", "99999999999999999999"] {
            assert!(Money::parse(raw).is_err(), "{} should fail", raw);
        }
    }
}
