//! Route definitions for billing endpoints.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::adapters::http::middleware::{auth_middleware, AuthState};
use crate::adapters::http::state::AppState;

use super::handlers::{config_status, open_portal, receive_webhook, start_checkout};

/// Routes nested under `/billing`.
///
/// Checkout and portal require a bearer token. Webhooks are authenticated by
/// the `WebhookVerifier` port instead.
pub fn billing_routes(sessions: AuthState) -> Router<AppState> {
    let protected = Router::new()
        .route("/checkout", post(start_checkout))
        .route("/portal", post(open_portal))
        .route_layer(middleware::from_fn_with_state(sessions, auth_middleware));

    Router::new()
        .route("/config-status", get(config_status))
        .route("/webhooks", post(receive_webhook))
        .merge(protected)
}
