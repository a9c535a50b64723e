//! Mock session validator for testing.
//!
//! Maps fixed tokens to identities so HTTP tests don't need signed JWTs.
//!
//! # Example
//!
//! ```ignore
//! let validator = MockSessionValidator::new()
//!     .with_identity("valid-token", Identity::new(account_id, "a@x.com"));
//!
//! let identity = validator.validate("valid-token")?;
//! ```

use std::collections::HashMap;

use crate::domain::foundation::{AccountId, AuthError, Identity};
use crate::ports::SessionValidator;

/// Tokens not in the map return `InvalidToken`.
#[derive(Debug, Default, Clone)]
pub struct MockSessionValidator {
    tokens: HashMap<String, Identity>,
    /// Returned for every validation when set.
    force_error: Option<AuthError>,
}

impl MockSessionValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a valid token that maps to an identity.
    pub fn with_identity(mut self, token: impl Into<String>, identity: Identity) -> Self {
        self.tokens.insert(token.into(), identity);
        self
    }

    /// Adds a valid token for a fresh account ID with the given email.
    pub fn with_test_account(self, token: impl Into<String>, email: impl Into<String>) -> Self {
        self.with_identity(token, Identity::new(AccountId::new(), email))
    }

    /// Forces all validations to return the specified error.
    pub fn with_error(mut self, error: AuthError) -> Self {
        self.force_error = Some(error);
        self
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }
}

impl SessionValidator for MockSessionValidator {
    fn validate(&self, token: &str) -> Result<Identity, AuthError> {
        if let Some(error) = &self.force_error {
            return Err(error.clone());
        }
        self.tokens
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_token_returns_identity() {
        let validator = MockSessionValidator::new().with_test_account("tok", "a@x.com");
        assert_eq!(validator.validate("tok").unwrap().email, "a@x.com");
        assert_eq!(validator.token_count(), 1);
    }

    #[test]
    fn unknown_token_is_invalid() {
        let validator = MockSessionValidator::new();
        assert_eq!(validator.validate("nope"), Err(AuthError::InvalidToken));
    }

    #[test]
    fn forced_error_wins() {
        let validator = MockSessionValidator::new()
            .with_test_account("tok", "a@x.com")
            .with_error(AuthError::TokenExpired);
        assert_eq!(validator.validate("tok"), Err(AuthError::TokenExpired));
    }
}
