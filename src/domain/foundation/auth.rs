//! Authentication types for the domain layer.
//!
//! These types represent the caller identity carried by a verified bearer
//! token. They have **no external dependencies** - the token format lives in
//! the `SessionValidator` adapter, not here.
//!
//! # Example
//!
//! ```ignore
//! // In HTTP middleware, after token validation:
//! let identity = Identity::new(account_id, "user@example.com");
//!
//! // Inject into request extensions for handlers to use
//! request.extensions_mut().insert(identity);
//! ```

use super::AccountId;
use thiserror::Error;

/// Caller identity extracted from a verified bearer token.
///
/// Trusted from the token alone; handlers that need the live account
/// re-validate it against the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// The account the token was issued to.
    pub account_id: AccountId,

    /// Email address recorded in the token claims.
    pub email: String,
}

impl Identity {
    /// Creates a new identity.
    pub fn new(account_id: AccountId, email: impl Into<String>) -> Self {
        Self {
            account_id,
            email: email.into(),
        }
    }
}

/// Authentication errors that can occur during credential verification.
///
/// Every variant except `Configuration` surfaces to clients as
/// `401 Unauthenticated`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No `Authorization` header was sent.
    #[error("Missing bearer credential")]
    MissingCredential,

    /// The header was not of the form `Bearer <token>`.
    #[error("Malformed bearer credential")]
    MalformedCredential,

    /// The token is malformed or its signature does not verify.
    #[error("Invalid token")]
    InvalidToken,

    /// The token's expiry claim is in the past.
    #[error("Token expired")]
    TokenExpired,

    /// The verifier itself is misconfigured (e.g. empty signing secret).
    #[error("Authentication misconfigured: {0}")]
    Configuration(String),
}

impl AuthError {
    /// Creates a configuration error with a message.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Returns true if the caller must present a different credential.
    pub fn is_unauthenticated(&self) -> bool {
        !matches!(self, AuthError::Configuration(_))
    }
}

/// Extracts the token from an `Authorization` header value.
///
/// Accepts `Bearer <token>` (scheme compared case-insensitively). The token is
/// the first whitespace-separated segment after the scheme, with wrapping
/// quote characters stripped, since some clients store tokens JSON-encoded.
pub fn parse_bearer(header: Option<&str>) -> Result<&str, AuthError> {
    let header = header.ok_or(AuthError::MissingCredential)?.trim();

    let (scheme, rest) = header
        .split_once(' ')
        .ok_or(AuthError::MalformedCredential)?;
    if !scheme.eq_ignore_ascii_case("Bearer") {
        return Err(AuthError::MalformedCredential);
    }

    let token = rest
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .trim_matches(|c| c == '"' || c == '\'');

    if token.is_empty() {
        return Err(AuthError::MalformedCredential);
    }
    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_new_creates_identity() {
        let id = AccountId::new();
        let identity = Identity::new(id, "test@example.com");

        assert_eq!(identity.account_id, id);
        assert_eq!(identity.email, "test@example.com");
    }

    #[test]
    fn parse_bearer_extracts_token() {
        assert_eq!(parse_bearer(Some("Bearer abc.def.ghi")), Ok("abc.def.ghi"));
    }

    #[test]
    fn parse_bearer_accepts_lowercase_scheme() {
        assert_eq!(parse_bearer(Some("bearer abc")), Ok("abc"));
    }

    #[test]
    fn parse_bearer_strips_wrapping_quotes() {
        assert_eq!(parse_bearer(Some("Bearer \"abc.def\"")), Ok("abc.def"));
        assert_eq!(parse_bearer(Some("Bearer 'abc'")), Ok("abc"));
    }

    #[test]
    fn parse_bearer_rejects_missing_header() {
        assert_eq!(parse_bearer(None), Err(AuthError::MissingCredential));
    }

    #[test]
    fn parse_bearer_rejects_missing_scheme() {
        assert_eq!(parse_bearer(Some("abc.def")), Err(AuthError::MalformedCredential));
    }

    #[test]
    fn parse_bearer_rejects_other_schemes() {
        assert_eq!(
            parse_bearer(Some("Basic dXNlcjpwYXNz")),
            Err(AuthError::MalformedCredential)
        );
    }

    #[test]
    fn parse_bearer_rejects_empty_token() {
        assert_eq!(parse_bearer(Some("Bearer ")), Err(AuthError::MalformedCredential));
        assert_eq!(parse_bearer(Some("Bearer \"\"")), Err(AuthError::MalformedCredential));
    }

    #[test]
    fn only_configuration_errors_are_not_unauthenticated() {
        assert!(AuthError::InvalidToken.is_unauthenticated());
        assert!(AuthError::TokenExpired.is_unauthenticated());
        assert!(AuthError::MissingCredential.is_unauthenticated());
        assert!(!AuthError::configuration("empty secret").is_unauthenticated());
    }
}
