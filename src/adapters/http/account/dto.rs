//! HTTP DTOs for account endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::account::{Account, EntitlementStatus};
use crate::domain::billing::Plan;
use crate::ports::IssuedToken;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Registration body. Fields are optional here so a missing one is a 400
/// naming the field rather than a generic deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterRequest {
    #[serde(default, alias = "fullName")]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Account summary. Never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountResponse {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub entitlement_status: EntitlementStatus,
    pub plan: Plan,
    pub external_order_id: Option<String>,
    pub external_product_id: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id.to_string(),
            email: account.email,
            full_name: account.full_name,
            entitlement_status: account.entitlement.status,
            plan: account.entitlement.plan,
            external_order_id: account.entitlement.external_order_id,
            external_product_id: account.entitlement.external_product_id,
            created_at: account.created_at.to_rfc3339(),
            updated_at: account.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
    pub account: AccountResponse,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    /// RFC 3339 expiry of `token`.
    pub expires_at: String,
    pub account: AccountResponse,
}

impl LoginResponse {
    pub fn new(token: IssuedToken, account: Account) -> Self {
        Self {
            token: token.token,
            expires_at: token.expires_at.to_rfc3339(),
            account: account.into(),
        }
    }
}
