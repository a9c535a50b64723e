//! Account module - registered accounts and their entitlement state.

#[allow(clippy::module_inception)]
mod account;
mod entitlement;
mod errors;
mod status;

pub use account::{validate_email, Account};
pub use entitlement::{Change, Entitlement, EntitlementPatch};
pub use errors::AccountError;
pub use status::EntitlementStatus;
