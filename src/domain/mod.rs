//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, identity, errors)
//! - `account` - Registered accounts and their entitlement state
//! - `billing` - Plan catalog, webhook events, and payload extraction

pub mod account;
pub mod billing;
pub mod foundation;
