//! Authentication utilities library
//!
//! Provides the credential and session primitives used by the employee service:
//! - Password hashing (Argon2id)
//! - Session token issuing and verification (HS256 JWT)
//! - Authentication coordination
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//! use auth::PasswordMatch;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert_eq!(hasher.verify("my_password", &hash).unwrap(), PasswordMatch::Match);
//! ```
//!
//! ## Login Flow
//! ```
//! use auth::Authenticator;
//! use auth::PasswordHasher;
//! use chrono::Duration;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!", Duration::hours(24));
//!
//! // Register: hash password
//! let hash = PasswordHasher::new().hash("password123").unwrap();
//!
//! // Login: verify and issue token for admin #1
//! let result = auth.authenticate("password123", &hash, 1).unwrap();
//!
//! // Protected request: verify token, recover subject
//! assert_eq!(auth.verify_token(&result.access_token).unwrap(), 1);
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use authenticator::TokenRejected;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use password::PasswordMatch;
