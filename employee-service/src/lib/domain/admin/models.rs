use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::admin::errors::PasswordInputError;
use crate::domain::email::EmailAddress;

/// Admin account.
///
/// `password_hash` is always a PHC digest, never the submitted secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Admin {
    pub id: AdminId,
    pub email: EmailAddress,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl fmt::Debug for Admin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Admin")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}

/// Store-assigned admin identifier; also the subject of session tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AdminId(pub i64);

impl fmt::Display for AdminId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Non-empty plaintext password as submitted by a client.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub fn new(password: String) -> Result<Self, PasswordInputError> {
        if password.is_empty() {
            return Err(PasswordInputError::Missing);
        }
        Ok(Self(password))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

/// Command to create a new admin with validated fields
#[derive(Debug)]
pub struct CreateAdminCommand {
    pub email: EmailAddress,
    pub password: Password,
}

impl CreateAdminCommand {
    pub fn new(email: EmailAddress, password: Password) -> Self {
        Self { email, password }
    }
}

/// Command to update an admin.
///
/// Only the password can change; `None` persists the record unchanged.
#[derive(Debug, Default)]
pub struct UpdateAdminCommand {
    pub password: Option<Password>,
}

/// Row to insert, with the password already hashed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAdmin {
    pub email: EmailAddress,
    pub password_hash: String,
}
