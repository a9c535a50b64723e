//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence
//!
//! - `AccountStore` - Account records with an atomic email-keyed update
//!
//! ## Identity
//!
//! - `SessionValidator` - Bearer token verification
//! - `TokenIssuer` - Token signing at login
//! - `PasswordHasher` - One-way credential hashing
//!
//! ## Billing
//!
//! - `WebhookVerifier` - Authenticity boundary for provider notifications
//! - `CheckoutLinks` - Hosted checkout and portal URLs

mod account_store;
mod checkout_links;
mod password_hasher;
mod session_validator;
mod token_issuer;
mod webhook_verifier;

pub use account_store::AccountStore;
pub use checkout_links::CheckoutLinks;
pub use password_hasher::{PasswordError, PasswordHasher};
pub use session_validator::SessionValidator;
pub use token_issuer::{IssuedToken, TokenIssuer};
pub use webhook_verifier::{WebhookRejection, WebhookVerifier};
