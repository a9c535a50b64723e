//! Webhook authenticity port.
//!
//! Deliveries reach the reconciliation engine only after this port accepts
//! them. Implementations decide what "verified" means: an HMAC check, a
//! trusted upstream gateway, or a test double.

use http::HeaderMap;
use thiserror::Error;

/// A delivery the verifier refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WebhookRejection {
    #[error("Missing webhook signature header: {0}")]
    MissingHeader(String),

    #[error("Invalid webhook signature")]
    InvalidSignature,
}

/// Accepts or rejects an inbound webhook delivery.
pub trait WebhookVerifier: Send + Sync {
    fn verify(&self, headers: &HeaderMap, body: &[u8]) -> Result<(), WebhookRejection>;
}
