//! Top-level router composition.

use axum::{http::HeaderValue, routing::get, Router};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;

use super::account::account_routes;
use super::billing::billing_routes;
use super::state::AppState;

const LIVENESS_BANNER: &str = "Entitlement service is running";

/// Routes without transport layers. Used directly by integration tests.
///
/// - `GET /` - liveness
/// - `/api/v1/auth/*` - registration, login, current account
/// - `/api/v1/billing/*` - checkout, portal, config status, webhooks
pub fn api_router(state: AppState) -> Router {
    let api = Router::new()
        .nest("/auth", account_routes(state.sessions.clone()))
        .nest("/billing", billing_routes(state.sessions.clone()));

    Router::new()
        .route("/", get(liveness))
        .nest("/api/v1", api)
        .with_state(state)
}

/// Full application router with tracing, CORS and request timeout.
pub fn app_router(state: AppState, server: &ServerConfig) -> Router {
    api_router(state)
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(server))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

async fn liveness() -> &'static str {
    LIVENESS_BANNER
}
