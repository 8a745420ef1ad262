use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::password::PasswordMatch;

/// Authentication coordinator combining password verification and session tokens.
///
/// Owns the signing key and validity window; both are fixed at construction.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
    token_validity: Duration,
}

/// Result of successful authentication.
#[derive(Debug, Clone)]
pub struct AuthenticationResult {
    /// Signed session token
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

/// Uniform rejection of a presented session token.
///
/// The display text is identical whatever went wrong; [`TokenRejected::cause`]
/// is for server-side logs only.
#[derive(Debug, Clone, thiserror::Error)]
#[error("Invalid or expired token")]
pub struct TokenRejected(JwtError);

impl TokenRejected {
    pub fn cause(&self) -> &JwtError {
        &self.0
    }
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for HS256 signing
    /// * `token_validity` - Lifetime of issued session tokens
    pub fn new(jwt_secret: &[u8], token_validity: Duration) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            jwt_handler: JwtHandler::new(jwt_secret),
            token_validity,
        }
    }

    /// Verify credentials and issue a session token for `subject_id`.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Stored hash could not be checked
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        subject_id: i64,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if self.password_hasher.verify(password, stored_hash)? == PasswordMatch::Mismatch {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.issue_token(subject_id)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Issue a session token valid from now.
    pub fn issue_token(&self, subject_id: i64) -> Result<String, JwtError> {
        self.issue_token_at(subject_id, Utc::now())
    }

    /// Issue a session token as if it had been created at `issued_at`.
    pub fn issue_token_at(
        &self,
        subject_id: i64,
        issued_at: DateTime<Utc>,
    ) -> Result<String, JwtError> {
        let claims = Claims::for_subject(subject_id, issued_at, self.token_validity)?;
        self.jwt_handler.encode(&claims)
    }

    /// Validate a session token and return its subject identifier.
    pub fn verify_token(&self, token: &str) -> Result<i64, TokenRejected> {
        self.jwt_handler
            .decode::<Claims>(token)
            .and_then(|claims| claims.subject_id())
            .map_err(TokenRejected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    fn authenticator() -> Authenticator {
        Authenticator::new(SECRET, Duration::hours(24))
    }

    #[test]
    fn test_authenticate_success() {
        let authenticator = authenticator();
        let hash = PasswordHasher::new()
            .hash("my_password")
            .expect("Failed to hash password");

        let result = authenticator
            .authenticate("my_password", &hash, 17)
            .expect("Authentication failed");

        assert!(!result.access_token.is_empty());
        assert_eq!(authenticator.verify_token(&result.access_token).unwrap(), 17);
    }

    #[test]
    fn test_authenticate_invalid_password() {
        let authenticator = authenticator();
        let hash = PasswordHasher::new().hash("my_password").unwrap();

        let result = authenticator.authenticate("wrong_password", &hash, 17);
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_authenticate_malformed_hash() {
        let authenticator = authenticator();

        let result = authenticator.authenticate("my_password", "plaintext", 17);
        assert!(matches!(result, Err(AuthenticationError::PasswordError(_))));
    }

    #[test]
    fn test_token_valid_right_after_issuance() {
        let authenticator = authenticator();
        let token = authenticator.issue_token(3).unwrap();

        assert_eq!(authenticator.verify_token(&token).unwrap(), 3);
    }

    #[test]
    fn test_token_rejected_after_validity_window() {
        let authenticator = authenticator();
        let issued_at = Utc::now() - Duration::hours(24) - Duration::seconds(5);
        let token = authenticator.issue_token_at(3, issued_at).unwrap();

        let rejected = authenticator.verify_token(&token).unwrap_err();
        assert_eq!(rejected.cause(), &JwtError::TokenExpired);
        assert_eq!(rejected.to_string(), "Invalid or expired token");
    }

    #[test]
    fn test_token_from_other_key_rejected_uniformly() {
        let other = Authenticator::new(b"another_secret_key_of_32_bytes_ok", Duration::hours(24));
        let token = other.issue_token(3).unwrap();

        let rejected = authenticator().verify_token(&token).unwrap_err();
        assert_eq!(rejected.to_string(), "Invalid or expired token");
    }

    #[test]
    fn test_garbage_token_rejected() {
        assert!(authenticator().verify_token("invalid.token.here").is_err());
        assert!(authenticator().verify_token("").is_err());
    }
}
