//! Entitlement Service - billing-driven entitlement reconciliation.
//!
//! Accounts register and log in with email and password and receive a signed
//! bearer token. Billing provider notifications are classified, matched to an
//! account by customer email, resolved to a plan through a per-environment
//! product catalog, and applied as a single atomic update.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
