//! Password hashing port.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error("Stored password hash is malformed")]
    MalformedHash,
}

/// One-way password hashing.
///
/// Hashes are self-describing strings; `verify` must accept anything `hash`
/// produced, including hashes written with older parameters.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> Result<String, PasswordError>;

    /// Returns `Ok(false)` for a wrong password.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError>;
}
