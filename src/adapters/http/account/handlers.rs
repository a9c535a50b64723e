//! HTTP handlers for account endpoints.

use axum::{body::Bytes, extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::adapters::http::error::{parse_json, ApiError};
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::state::AppState;
use crate::application::handlers::{GetCurrentAccountQuery, LoginCommand, RegisterAccountCommand};

use super::dto::{AccountResponse, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};

fn required(field: &'static str, value: Option<String>) -> Result<String, ApiError> {
    value.ok_or_else(|| ApiError::bad_request(field, format!("{} is required", field)))
}

/// POST /api/v1/auth/register
pub async fn register(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let req: RegisterRequest = parse_json(&body)?;
    let cmd = RegisterAccountCommand {
        full_name: required("full_name", req.full_name)?,
        email: required("email", req.email)?,
        password: required("password", req.password)?,
    };

    let account = state.register_account_handler().handle(cmd).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "Account created".to_string(),
            account: account.into(),
        }),
    ))
}

/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<LoginResponse>, ApiError> {
    let req: LoginRequest = parse_json(&body)?;
    let cmd = LoginCommand {
        email: required("email", req.email)?,
        password: required("password", req.password)?,
    };

    let result = state.login_handler().handle(cmd).await?;
    Ok(Json(LoginResponse::new(result.token, result.account)))
}

/// GET /api/v1/auth/me
pub async fn me(
    State(state): State<AppState>,
    RequireAuth(identity): RequireAuth,
) -> Result<Json<AccountResponse>, ApiError> {
    let account = state
        .get_current_account_handler()
        .handle(GetCurrentAccountQuery {
            account_id: identity.account_id,
        })
        .await?;

    Ok(Json(account.into()))
}
