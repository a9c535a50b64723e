//! HTTP error mapping.
//!
//! Every failure leaving the HTTP surface passes through `ApiError`, which
//! renders a `{ code, message }` JSON body with the matching status.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::account::AccountError;
use crate::domain::billing::ReconcileError;
use crate::domain::foundation::{AuthError, ErrorCode, ValidationError};
use crate::ports::WebhookRejection;

/// Standard error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Error returned by every HTTP handler.
#[derive(Debug)]
pub enum ApiError {
    Account(AccountError),
    Auth(AuthError),
    Webhook(WebhookRejection),
    Reconcile(ReconcileError),
}

impl ApiError {
    /// A 400 for a body that could not be read.
    pub fn bad_request(field: impl Into<String>, message: impl Into<String>) -> Self {
        ApiError::Account(AccountError::validation(field, message))
    }

    fn status_and_body(&self) -> (StatusCode, ErrorResponse) {
        match self {
            ApiError::Account(err) => {
                let status = match err {
                    AccountError::ValidationFailed { .. } | AccountError::EmailTaken(_) => {
                        StatusCode::BAD_REQUEST
                    }
                    AccountError::InvalidCredentials | AccountError::Unauthenticated => {
                        StatusCode::UNAUTHORIZED
                    }
                    AccountError::NotFound => StatusCode::NOT_FOUND,
                    AccountError::Configuration(_) | AccountError::Infrastructure(_) => {
                        StatusCode::INTERNAL_SERVER_ERROR
                    }
                };
                (status, ErrorResponse::new(err.code().to_string(), err.message()))
            }
            ApiError::Auth(AuthError::Configuration(msg)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new(
                    ErrorCode::ConfigurationError.to_string(),
                    format!("Service misconfigured: {}", msg),
                ),
            ),
            ApiError::Auth(err) => (
                StatusCode::UNAUTHORIZED,
                ErrorResponse::new(ErrorCode::Unauthorized.to_string(), err.to_string()),
            ),
            ApiError::Webhook(err) => (
                StatusCode::UNAUTHORIZED,
                ErrorResponse::new(ErrorCode::Unauthorized.to_string(), err.to_string()),
            ),
            ApiError::Reconcile(ReconcileError::Store(err)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new(err.code.to_string(), "Failed to record entitlement change"),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();

        if status.is_server_error() {
            tracing::error!(code = %body.code, error = ?self, "request failed");
        } else {
            tracing::debug!(code = %body.code, status = status.as_u16(), "request rejected");
        }

        (status, Json(body)).into_response()
    }
}

impl From<AccountError> for ApiError {
    fn from(err: AccountError) -> Self {
        ApiError::Account(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Account(AccountError::from(err))
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        ApiError::Auth(err)
    }
}

impl From<WebhookRejection> for ApiError {
    fn from(err: WebhookRejection) -> Self {
        ApiError::Webhook(err)
    }
}

impl From<ReconcileError> for ApiError {
    fn from(err: ReconcileError) -> Self {
        ApiError::Reconcile(err)
    }
}

/// Deserializes a JSON request body, mapping every failure to a 400.
pub fn parse_json<T: serde::de::DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body)
        .map_err(|e| ApiError::bad_request("body", format!("invalid JSON: {}", e)))
}
