use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::email::EmailAddress;
use crate::employee::errors::EmployeeIdError;

/// Employee record as persisted by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub email: EmailAddress,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Store-assigned employee identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EmployeeId(pub i64);

impl EmployeeId {
    /// Parse an identifier taken from the request URL.
    ///
    /// # Errors
    /// * `Missing` - Parameter absent or empty
    /// * `InvalidFormat` - Not a base-10 integer
    pub fn from_query(value: Option<&str>) -> Result<Self, EmployeeIdError> {
        match value.map(str::trim) {
            None | Some("") => Err(EmployeeIdError::Missing),
            Some(raw) => raw
                .parse::<i64>()
                .map(EmployeeId)
                .map_err(|_| EmployeeIdError::InvalidFormat(raw.to_string())),
        }
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Validated employee fields, used both to create and to fully replace a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: EmailAddress,
    pub address: Option<String>,
}

impl EmployeeDetails {
    pub fn new(
        first_name: String,
        last_name: String,
        email: EmailAddress,
        address: Option<String>,
    ) -> Self {
        Self {
            first_name,
            last_name,
            email,
            address,
        }
    }
}
