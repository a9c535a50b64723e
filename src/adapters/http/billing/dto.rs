//! HTTP DTOs for billing endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::billing::BillingEnvironment;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Product list as sent by clients: a JSON array, or a comma-separated string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ProductList {
    Many(Vec<String>),
    Joined(String),
}

impl ProductList {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            ProductList::Many(products) => products,
            ProductList::Joined(joined) => joined.split(',').map(str::to_string).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckoutRequest {
    #[serde(default)]
    pub products: Option<ProductList>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutResponse {
    pub checkout_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalResponse {
    pub portal_url: String,
}

/// Billing setup as seen by operators. Reports presence, never values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigStatusResponse {
    pub environment: BillingEnvironment,
    pub sandbox_products: usize,
    pub live_products: usize,
    pub access_token_configured: bool,
    pub webhook_secret_configured: bool,
}
