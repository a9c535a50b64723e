//! HTTP adapter for checkout, portal, configuration status and webhooks.

pub mod dto;
mod handlers;
mod routes;

pub use dto::{CheckoutResponse, ConfigStatusResponse, PortalResponse};
pub use routes::billing_routes;
