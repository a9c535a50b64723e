//! Authentication configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Minimum signing secret length for HS256.
pub const MIN_JWT_SECRET_BYTES: usize = 32;

/// Longest accepted session lifetime (one year).
pub const MAX_TOKEN_TTL_SECS: u64 = 365 * 24 * 60 * 60;

/// Authentication configuration (HS256 session tokens)
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Token signing secret
    pub jwt_secret: Option<SecretString>,

    /// Token lifetime in seconds
    #[serde(default = "default_token_ttl")]
    pub token_ttl_secs: u64,
}

impl AuthConfig {
    /// Get token lifetime as Duration
    pub fn token_ttl(&self) -> Duration {
        Duration::from_secs(self.token_ttl_secs)
    }

    /// Validate authentication configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let secret = self
            .jwt_secret
            .as_ref()
            .map(|s| s.expose_secret().as_str())
            .unwrap_or_default();
        if secret.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH__JWT_SECRET"));
        }
        if secret.len() < MIN_JWT_SECRET_BYTES {
            return Err(ValidationError::JwtSecretTooShort(MIN_JWT_SECRET_BYTES));
        }
        if self.token_ttl_secs == 0 || self.token_ttl_secs > MAX_TOKEN_TTL_SECS {
            return Err(ValidationError::InvalidTokenTtl);
        }
        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_ttl_secs: default_token_ttl(),
        }
    }
}

fn default_token_ttl() -> u64 {
    86_400
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_secret(secret: &str) -> AuthConfig {
        AuthConfig {
            jwt_secret: Some(SecretString::new(secret.to_string())),
            ..Default::default()
        }
    }

    #[test]
    fn test_auth_config_defaults() {
        let config = AuthConfig::default();
        assert_eq!(config.token_ttl(), Duration::from_secs(86_400));
    }

    #[test]
    fn test_missing_secret_fails() {
        assert!(matches!(
            AuthConfig::default().validate(),
            Err(ValidationError::MissingRequired(_))
        ));
        assert!(matches!(
            with_secret("").validate(),
            Err(ValidationError::MissingRequired(_))
        ));
    }

    #[test]
    fn test_short_secret_fails() {
        assert!(matches!(
            with_secret("short").validate(),
            Err(ValidationError::JwtSecretTooShort(32))
        ));
    }

    #[test]
    fn test_valid_secret_passes() {
        assert!(with_secret("0123456789abcdef0123456789abcdef").validate().is_ok());
    }

    #[test]
    fn test_token_ttl_bounds() {
        let ttl = |secs| AuthConfig {
            token_ttl_secs: secs,
            ..with_secret("0123456789abcdef0123456789abcdef")
        };
        assert!(ttl(1).validate().is_ok());
        assert!(ttl(MAX_TOKEN_TTL_SECS).validate().is_ok());
        for secs in [0, MAX_TOKEN_TTL_SECS + 1, 10_000_000_000_000, u64::MAX] {
            assert!(matches!(
                ttl(secs).validate(),
                Err(ValidationError::InvalidTokenTtl)
            ));
        }
    }

    #[test]
    fn test_debug_redacts_secret() {
        let debug = format!("{:?}", with_secret("0123456789abcdef0123456789abcdef"));
        assert!(!debug.contains("0123456789abcdef"));
    }
}
