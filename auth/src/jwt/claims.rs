use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::errors::JwtError;

/// Session token payload.
///
/// Carries the authenticated subject plus RFC 7519 `iat`/`exp` timestamps
/// (Unix seconds).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (stringified numeric identifier)
    pub sub: String,

    /// Issued at
    pub iat: i64,

    /// Expiration time
    pub exp: i64,
}

impl Claims {
    /// Build claims for a subject issued at `issued_at` and valid for `validity`.
    ///
    /// # Errors
    /// * `ExpiryOutOfRange` - `issued_at + validity` is not a representable instant
    pub fn for_subject(
        subject_id: i64,
        issued_at: DateTime<Utc>,
        validity: Duration,
    ) -> Result<Self, JwtError> {
        let expires_at = issued_at
            .checked_add_signed(validity)
            .ok_or(JwtError::ExpiryOutOfRange)?;

        Ok(Self {
            sub: subject_id.to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        })
    }

    /// Parse the subject back into its numeric identifier.
    pub fn subject_id(&self) -> Result<i64, JwtError> {
        self.sub
            .parse::<i64>()
            .map_err(|_| JwtError::InvalidSubject(self.sub.clone()))
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_for_subject() {
        let issued_at = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let claims = Claims::for_subject(42, issued_at, Duration::hours(24)).unwrap();

        assert_eq!(claims.sub, "42");
        assert_eq!(claims.iat, issued_at.timestamp());
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
        assert_eq!(claims.subject_id(), Ok(42));
    }

    #[test]
    fn test_subject_must_be_numeric() {
        let claims = Claims {
            sub: "alice".to_string(),
            iat: 0,
            exp: 10,
        };
        assert_eq!(
            claims.subject_id(),
            Err(JwtError::InvalidSubject("alice".to_string()))
        );
    }

    #[test]
    fn test_expiry_overflow_is_an_error() {
        let result = Claims::for_subject(1, Utc::now(), Duration::MAX);
        assert_eq!(result, Err(JwtError::ExpiryOutOfRange));
    }
}
