//! Account-specific error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | ValidationFailed | 400 |
//! | EmailTaken | 400 |
//! | InvalidCredentials | 401 |
//! | Unauthenticated | 401 |
//! | NotFound | 404 |
//! | Configuration | 500 |
//! | Infrastructure | 500 |

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Account-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    /// A required field is missing or malformed.
    ValidationFailed { field: String, message: String },

    /// Another account already uses this email.
    EmailTaken(String),

    /// Unknown email or wrong password at login.
    InvalidCredentials,

    /// A verified token refers to an account that no longer exists.
    Unauthenticated,

    /// The account referenced by an authenticated call does not exist.
    NotFound,

    /// A required setting is absent.
    Configuration(String),

    /// Store or hashing failure.
    Infrastructure(String),
}

impl AccountError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        AccountError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn email_taken(email: impl Into<String>) -> Self {
        AccountError::EmailTaken(email.into())
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        AccountError::Configuration(message.into())
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        AccountError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            AccountError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            AccountError::EmailTaken(_) => ErrorCode::AccountExists,
            AccountError::InvalidCredentials | AccountError::Unauthenticated => {
                ErrorCode::Unauthorized
            }
            AccountError::NotFound => ErrorCode::AccountNotFound,
            AccountError::Configuration(_) => ErrorCode::ConfigurationError,
            AccountError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    /// Returns a user-facing message.
    pub fn message(&self) -> String {
        match self {
            AccountError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            AccountError::EmailTaken(_) => "An account with this email already exists".to_string(),
            AccountError::InvalidCredentials => "Invalid email or password".to_string(),
            AccountError::Unauthenticated => "Authentication required".to_string(),
            AccountError::NotFound => "Account not found".to_string(),
            AccountError::Configuration(msg) => format!("Service misconfigured: {}", msg),
            AccountError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for AccountError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AccountError {}

impl From<ValidationError> for AccountError {
    fn from(err: ValidationError) -> Self {
        AccountError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for AccountError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::AccountExists => AccountError::EmailTaken(
                err.details.get("email").cloned().unwrap_or_default(),
            ),
            ErrorCode::AccountNotFound => AccountError::NotFound,
            ErrorCode::ConfigurationError => AccountError::Configuration(err.message),
            _ => AccountError::Infrastructure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_store_error_becomes_email_taken() {
        let err = DomainError::new(ErrorCode::AccountExists, "duplicate key")
            .with_detail("email", "a@x.com");
        assert_eq!(AccountError::from(err), AccountError::email_taken("a@x.com"));
    }

    #[test]
    fn database_error_becomes_infrastructure() {
        let err = AccountError::from(DomainError::database("connection reset"));
        assert!(matches!(err, AccountError::Infrastructure(_)));
        assert_eq!(err.code(), ErrorCode::DatabaseError);
    }

    #[test]
    fn validation_error_keeps_field() {
        let err = AccountError::from(ValidationError::empty_field("password"));
        assert!(matches!(err, AccountError::ValidationFailed { ref field, .. } if field == "password"));
    }

    #[test]
    fn credential_failures_do_not_reveal_which_part_was_wrong() {
        assert_eq!(AccountError::InvalidCredentials.message(), "Invalid email or password");
        assert_eq!(AccountError::InvalidCredentials.code(), ErrorCode::Unauthorized);
    }
}
