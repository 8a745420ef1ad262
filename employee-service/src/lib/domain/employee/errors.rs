use thiserror::Error;

use crate::domain::email::EmailError;
use crate::domain::employee::models::EmployeeId;

/// Error for EmployeeId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmployeeIdError {
    #[error("ID is required")]
    Missing,

    #[error("Invalid ID: {0}")]
    InvalidFormat(String),
}

/// Top-level error for all employee operations
#[derive(Debug, Clone, Error)]
pub enum EmployeeError {
    // Value object validation errors (automatically converted via #[from])
    #[error(transparent)]
    InvalidEmployeeId(#[from] EmployeeIdError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    // Domain-level errors
    #[error("Employee not found: {0}")]
    NotFound(EmployeeId),

    #[error("Email already exists: {0}")]
    EmailAlreadyExists(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}
