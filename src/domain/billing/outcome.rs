//! Results of reconciliation and checkout operations.

use serde::Serialize;
use thiserror::Error;

use crate::domain::account::EntitlementStatus;
use crate::domain::foundation::{AccountId, DomainError};

use super::Plan;

/// What the reconciliation engine did with one delivery.
///
/// Every variant is a successful acknowledgement; only store failures are
/// errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ReconcileOutcome {
    Applied {
        account_id: AccountId,
        status: EntitlementStatus,
        plan: Plan,
    },
    Ignored {
        event_type: String,
    },
    MissingIdentity,
    AccountNotFound {
        email: String,
    },
}

impl ReconcileOutcome {
    /// Short name used in logs and responses.
    pub fn name(&self) -> &'static str {
        match self {
            ReconcileOutcome::Applied { .. } => "applied",
            ReconcileOutcome::Ignored { .. } => "ignored",
            ReconcileOutcome::MissingIdentity => "missing_identity",
            ReconcileOutcome::AccountNotFound { .. } => "account_not_found",
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, ReconcileOutcome::Applied { .. })
    }
}

/// Reconciliation failed in a way the provider should retry.
#[derive(Debug, Clone, Error)]
pub enum ReconcileError {
    #[error("Account store failure: {0}")]
    Store(#[from] DomainError),
}

/// A checkout or portal link could not be produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("Billing is not configured: {0}")]
    NotConfigured(String),

    #[error("Invalid checkout base URL: {0}")]
    InvalidBaseUrl(String),
}

/// Inputs for a hosted checkout link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutRequest {
    pub products: Vec<String>,
    pub customer_email: String,
    pub customer_name: String,
    pub customer_external_id: AccountId,
}
