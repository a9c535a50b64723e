//! Route definitions for account endpoints.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::adapters::http::middleware::{auth_middleware, AuthState};
use crate::adapters::http::state::AppState;

use super::handlers::{login, me, register};

/// Routes nested under `/auth`.
///
/// - `POST /register` - public
/// - `POST /login` - public
/// - `GET /me` - bearer token required
pub fn account_routes(sessions: AuthState) -> Router<AppState> {
    let protected = Router::new()
        .route("/me", get(me))
        .route_layer(middleware::from_fn_with_state(sessions, auth_middleware));

    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .merge(protected)
}
