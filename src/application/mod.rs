//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::{
    // Account handlers
    GetCurrentAccountHandler, GetCurrentAccountQuery, LoginCommand, LoginHandler, LoginResult,
    RegisterAccountCommand, RegisterAccountHandler,
    // Billing handlers
    OpenPortalHandler, OpenPortalQuery, ReconcileEntitlementCommand, ReconcileEntitlementHandler,
    StartCheckoutCommand, StartCheckoutHandler,
};
