//! Account aggregate.
//!
//! # Design Decisions
//!
//! - **Email is the reconciliation key**: unique, stored as given (no case folding)
//! - **Zero-valued entitlement at registration**: only billing notifications change it
//! - **Never deleted** by this service

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AccountId, Timestamp, ValidationError};

use super::{Entitlement, EntitlementPatch};

/// A registered account.
///
/// # Invariants
///
/// - `email` is non-empty and contains a single `@` with text on both sides
/// - `entitlement.plan` is the catalog resolution of `entitlement.external_product_id`
///   at the time of the last plan-bearing update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub email: String,
    pub full_name: String,
    /// PHC-format hash. Never leaves the service.
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub entitlement: Entitlement,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Account {
    /// Creates a freshly registered account with no entitlement.
    pub fn register(
        email: impl Into<String>,
        full_name: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let email = validate_email(email.into())?;
        let full_name = full_name.into().trim().to_string();
        if full_name.is_empty() {
            return Err(ValidationError::empty_field("full_name"));
        }

        let now = Timestamp::now();
        Ok(Self {
            id: AccountId::new(),
            email,
            full_name,
            password_hash: password_hash.into(),
            entitlement: Entitlement::default(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Applies a reconciliation patch and bumps `updated_at`.
    pub fn apply(&mut self, patch: &EntitlementPatch) {
        patch.apply_to(&mut self.entitlement);
        self.updated_at = Timestamp::now();
    }
}

/// Trims and checks the shape of an email address.
pub fn validate_email(email: String) -> Result<String, ValidationError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ValidationError::empty_field("email"));
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {
            Ok(email.to_string())
        }
        _ => Err(ValidationError::invalid_format(
            "email",
            "expected local@domain",
        )),
    }
}
