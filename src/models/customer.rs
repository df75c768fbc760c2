//! Customer model

use serde::{Deserialize, Serialize};
use std::fmt;

/// A registered customer
///
/// The id is caller-supplied and treated as an opaque, case-sensitive key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    customer_id: String,
    customer_name: String,
}

impl Customer {
    pub fn new(customer_id: impl Into<String>, customer_name: impl Into<String>) -> Self {
        Self {
            customer_id: customer_id.into(),
            customer_name: customer_name.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.customer_id
    }

    pub fn name(&self) -> &str {
        &self.customer_name
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ID: {} | Name: {}", self.customer_id, self.customer_name)
    }
}
