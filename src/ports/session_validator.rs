//! Session validation port for bearer tokens.
//!
//! Provider-agnostic: the shipped implementation verifies HS256 JWTs, tests
//! use a mock that maps fixed tokens to identities.
//!
//! All implementations MUST validate:
//! - **Signature** against the process-wide secret
//! - **Expiry (exp)**: token must not be expired
//!
//! Validation is synchronous CPU work; nothing here touches the account store.

use crate::domain::foundation::{parse_bearer, AuthError, Identity};

/// Validates bearer tokens and extracts the caller identity.
///
/// # Contract
///
/// - `AuthError::InvalidToken` for malformed tokens or bad signatures
/// - `AuthError::TokenExpired` for expired tokens
pub trait SessionValidator: Send + Sync {
    /// Validate a raw token (without the `Bearer ` prefix).
    fn validate(&self, token: &str) -> Result<Identity, AuthError>;

    /// Validate a full `Authorization` header value.
    fn verify(&self, authorization: Option<&str>) -> Result<Identity, AuthError> {
        let token = parse_bearer(authorization)?;
        self.validate(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::AccountId;

    struct FixedValidator {
        token: &'static str,
        identity: Identity,
    }

    impl SessionValidator for FixedValidator {
        fn validate(&self, token: &str) -> Result<Identity, AuthError> {
            if token == self.token {
                Ok(self.identity.clone())
            } else {
                Err(AuthError::InvalidToken)
            }
        }
    }

    fn validator() -> FixedValidator {
        FixedValidator {
            token: "good",
            identity: Identity::new(AccountId::new(), "a@x.com"),
        }
    }

    #[test]
    fn verify_parses_header_before_validating() {
        let v = validator();
        assert_eq!(v.verify(Some("Bearer good")).unwrap().email, "a@x.com");
        assert_eq!(v.verify(Some("Bearer \"good\"")).unwrap().email, "a@x.com");
    }

    #[test]
    fn verify_rejects_missing_header_and_bad_token() {
        let v = validator();
        assert_eq!(v.verify(None), Err(AuthError::MissingCredential));
        assert_eq!(v.verify(Some("Bearer bad")), Err(AuthError::InvalidToken));
    }

    #[test]
    fn session_validator_trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn SessionValidator>();
    }
}
