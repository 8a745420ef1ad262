use thiserror::Error;

use crate::domain::email::EmailError;

/// Error for plaintext password input
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordInputError {
    #[error("Password is required")]
    Missing,
}

/// Top-level error for all admin operations
#[derive(Debug, Clone, Error)]
pub enum AdminError {
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Invalid password: {0}")]
    InvalidPassword(#[from] PasswordInputError),

    #[error("Admin not found: {0}")]
    NotFound(String),

    #[error("Email already exists: {0}")]
    EmailAlreadyExists(String),

    #[error("Password hashing failed: {0}")]
    PasswordHashing(String),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}
