//! HS256 JWT adapter for session tokens.
//!
//! Implements both `TokenIssuer` and `SessionValidator` with one shared
//! secret, so every token this process issues is accepted by it until `exp`.
//!
//! # Security
//!
//! - **Algorithm pinned** to HS256; tokens signed with anything else fail
//! - **Expiry (exp)** required and validated with zero leeway
//! - The secret is held as a `SecretString` and never logged

use std::time::Duration;

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::foundation::{AccountId, AuthError, Identity, Timestamp};
use crate::ports::{IssuedToken, SessionValidator, TokenIssuer};

/// Claims carried by a session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Account ID.
    pub sub: String,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

/// Issues and validates HS256 session tokens.
pub struct JwtSessions {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl JwtSessions {
    /// Creates the adapter. An empty secret is a configuration error.
    pub fn new(secret: &SecretString, ttl: Duration) -> Result<Self, AuthError> {
        let secret = secret.expose_secret();
        if secret.is_empty() {
            return Err(AuthError::configuration("JWT secret is empty"));
        }
        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        })
    }

    fn validation() -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp", "sub"]);
        validation
    }

    /// Signs arbitrary claims. Exposed for tests that need expired tokens.
    pub fn sign(&self, claims: &SessionClaims) -> Result<String, AuthError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key).map_err(|e| {
            tracing::error!(error = %e, "Failed to sign session token");
            AuthError::configuration(format!("token signing failed: {}", e))
        })
    }
}

impl TokenIssuer for JwtSessions {
    fn issue(&self, identity: &Identity) -> Result<IssuedToken, AuthError> {
        let issued_at = Timestamp::now();
        let expires_at = i64::try_from(self.ttl.as_secs())
            .ok()
            .and_then(|ttl| issued_at.checked_plus_secs(ttl))
            .ok_or_else(|| {
                tracing::error!(ttl_secs = self.ttl.as_secs(), "Token lifetime out of range");
                AuthError::configuration("token lifetime out of range")
            })?;
        let claims = SessionClaims {
            sub: identity.account_id.to_string(),
            email: identity.email.clone(),
            iat: issued_at.as_unix_secs(),
            exp: expires_at.as_unix_secs(),
        };

        Ok(IssuedToken {
            token: self.sign(&claims)?,
            expires_at,
        })
    }
}

impl SessionValidator for JwtSessions {
    fn validate(&self, token: &str) -> Result<Identity, AuthError> {
        let data = decode::<SessionClaims>(token, &self.decoding_key, &Self::validation())
            .map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Token expired");
                        AuthError::TokenExpired
                    }
                    _ => {
                        tracing::debug!(error = %e, "Token validation failed");
                        AuthError::InvalidToken
                    }
                }
            })?;

        let claims = data.claims;
        let account_id = claims.sub.parse::<Uuid>().map_err(|_| {
            tracing::warn!(sub = %claims.sub, "Invalid account ID in token");
            AuthError::InvalidToken
        })?;

        Ok(Identity::new(AccountId::from_uuid(account_id), claims.email))
    }
}

impl std::fmt::Debug for JwtSessions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtSessions")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}
