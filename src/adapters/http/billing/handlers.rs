//! HTTP handlers for billing endpoints.

use axum::{
    body::Bytes,
    extract::State,
    http::HeaderMap,
    Json,
};

use crate::adapters::http::error::{parse_json, ApiError};
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::state::AppState;
use crate::application::handlers::{
    OpenPortalQuery, ReconcileEntitlementCommand, StartCheckoutCommand,
};
use crate::domain::billing::{BillingEnvironment, ReconcileOutcome, WebhookEvent};

use super::dto::{CheckoutRequest, CheckoutResponse, ConfigStatusResponse, PortalResponse};

/// POST /api/v1/billing/checkout
pub async fn start_checkout(
    State(state): State<AppState>,
    RequireAuth(identity): RequireAuth,
    body: Bytes,
) -> Result<Json<CheckoutResponse>, ApiError> {
    let req: CheckoutRequest = parse_json(&body)?;
    let products = req
        .products
        .ok_or_else(|| ApiError::bad_request("products", "products is required"))?
        .into_vec();

    let checkout_url = state
        .start_checkout_handler()
        .handle(StartCheckoutCommand {
            account_id: identity.account_id,
            products,
        })
        .await?;

    Ok(Json(CheckoutResponse { checkout_url }))
}

/// POST /api/v1/billing/portal
pub async fn open_portal(
    State(state): State<AppState>,
    RequireAuth(identity): RequireAuth,
) -> Result<Json<PortalResponse>, ApiError> {
    let portal_url = state
        .open_portal_handler()
        .handle(OpenPortalQuery {
            account_id: identity.account_id,
        })
        .await?;

    Ok(Json(PortalResponse { portal_url }))
}

/// GET /api/v1/billing/config-status
pub async fn config_status(State(state): State<AppState>) -> Json<ConfigStatusResponse> {
    Json(ConfigStatusResponse {
        environment: state.environment,
        sandbox_products: state.catalog.len(BillingEnvironment::Sandbox),
        live_products: state.catalog.len(BillingEnvironment::Live),
        access_token_configured: state.billing.access_token_configured,
        webhook_secret_configured: state.billing.webhook_secret_configured,
    })
}

/// POST /api/v1/billing/webhooks
///
/// Every accepted delivery is acknowledged with 200 and the outcome, so the
/// provider only retries on store failures.
pub async fn receive_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ReconcileOutcome>, ApiError> {
    state.webhooks.verify(&headers, &body)?;

    let event = WebhookEvent::from_slice(&body)?;

    let outcome = state
        .reconcile_entitlement_handler()
        .handle(ReconcileEntitlementCommand {
            event,
            environment: state.environment,
        })
        .await?;

    tracing::debug!(outcome = outcome.name(), "Webhook acknowledged");
    Ok(Json(outcome))
}
