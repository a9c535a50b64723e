//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod account;
pub mod billing;

pub use account::{
    GetCurrentAccountHandler, GetCurrentAccountQuery, LoginCommand, LoginHandler, LoginResult,
    RegisterAccountCommand, RegisterAccountHandler,
};
pub use billing::{
    OpenPortalHandler, OpenPortalQuery, ReconcileEntitlementCommand, ReconcileEntitlementHandler,
    StartCheckoutCommand, StartCheckoutHandler,
};
