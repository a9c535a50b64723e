//! Billing provider adapters.
//!
//! - `HostedCheckoutLinks` - Checkout and portal URLs on the provider's hosted pages
//! - `UpstreamVerifiedWebhooks` - Webhook verifier for gateway-verified deliveries

mod checkout_links;
mod webhook_verifier;

pub use checkout_links::HostedCheckoutLinks;
pub use webhook_verifier::UpstreamVerifiedWebhooks;
