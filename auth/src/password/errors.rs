use thiserror::Error;

/// Error type for password operations.
///
/// A wrong password is not an error: see [`PasswordMatch::Mismatch`](super::PasswordMatch).
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Stored password hash is malformed: {0}")]
    MalformedHash(String),
}
