//! HTTP middleware for axum.
//!
//! - `auth` - Bearer authentication middleware and extractor

pub mod auth;

pub use auth::{auth_middleware, AuthState, RequireAuth};
