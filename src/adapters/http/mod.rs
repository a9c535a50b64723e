//! HTTP adapters - REST API implementations.
//!
//! Each area has its own routes, handlers and DTOs; `router` composes them
//! under `/api/v1`.

pub mod account;
pub mod billing;
pub mod error;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::{ApiError, ErrorResponse};
pub use router::{api_router, app_router};
pub use state::{AppState, BillingFlags};
