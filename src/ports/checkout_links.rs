//! Outbound checkout and billing-portal link construction.

use crate::domain::billing::{CheckoutError, CheckoutRequest};
use crate::domain::foundation::AccountId;

/// Builds links into the provider's hosted checkout and customer portal.
pub trait CheckoutLinks: Send + Sync {
    fn checkout_url(&self, request: &CheckoutRequest) -> Result<String, CheckoutError>;

    fn portal_url(&self, customer_external_id: &AccountId) -> Result<String, CheckoutError>;
}
