//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `auth` - JWT sessions, Argon2 password hashing, test validator
//! - `billing` - hosted checkout links and the webhook trust boundary
//! - `http` - axum routes, middleware and error mapping
//! - `memory` - in-process account store
//! - `postgres` - PostgreSQL account store

pub mod auth;
pub mod billing;
pub mod http;
pub mod memory;
pub mod postgres;
