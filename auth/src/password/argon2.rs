use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::Error as HashError;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;

/// Outcome of checking a candidate password against a stored digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordMatch {
    Match,
    Mismatch,
}

impl PasswordMatch {
    pub fn is_match(self) -> bool {
        self == PasswordMatch::Match
    }
}

/// Password hashing implementation.
///
/// Argon2id with the library default cost parameters and a fresh random salt
/// for every digest.
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordHasher;

impl PasswordHasher {
    pub fn new() -> Self {
        Self
    }

    /// Hash a plaintext secret for storage.
    ///
    /// # Returns
    /// PHC string (algorithm, parameters, salt and digest)
    ///
    /// # Errors
    /// * `HashingFailed` - Argon2 rejected the input or parameters
    pub fn hash(&self, secret: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(secret.as_bytes(), &salt)
            .map(|digest| digest.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Check a candidate password against a stored PHC digest.
    ///
    /// Comparison is constant time (delegated to argon2).
    ///
    /// # Errors
    /// * `MalformedHash` - The stored digest cannot be parsed or checked
    pub fn verify(&self, candidate: &str, digest: &str) -> Result<PasswordMatch, PasswordError> {
        let parsed = PasswordHash::new(digest)
            .map_err(|e| PasswordError::MalformedHash(e.to_string()))?;

        match Argon2::default().verify_password(candidate.as_bytes(), &parsed) {
            Ok(()) => Ok(PasswordMatch::Match),
            Err(HashError::Password) => Ok(PasswordMatch::Mismatch),
            Err(e) => Err(PasswordError::MalformedHash(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash("s3cret-pass").expect("Failed to hash password");

        assert!(hash.starts_with("$argon2id$"));
        assert_eq!(
            hasher.verify("s3cret-pass", &hash).unwrap(),
            PasswordMatch::Match
        );
        assert_eq!(
            hasher.verify("wrong-pass", &hash).unwrap(),
            PasswordMatch::Mismatch
        );
    }

    #[test]
    fn test_same_secret_hashes_differ_but_both_verify() {
        let hasher = PasswordHasher::new();
        let first = hasher.hash("password123").unwrap();
        let second = hasher.hash("password123").unwrap();

        assert_ne!(first, second);
        assert!(hasher.verify("password123", &first).unwrap().is_match());
        assert!(hasher.verify("password123", &second).unwrap().is_match());
    }

    #[test]
    fn test_verify_malformed_hash() {
        let hasher = PasswordHasher::new();
        let result = hasher.verify("password", "not-a-phc-string");
        assert!(matches!(result, Err(PasswordError::MalformedHash(_))));
    }

    #[test]
    fn test_plaintext_is_not_accepted_as_digest() {
        let hasher = PasswordHasher::new();
        assert!(hasher.verify("password", "password").is_err());
    }
}
