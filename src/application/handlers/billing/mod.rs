//! Billing command handlers.

mod open_portal;
mod reconcile_entitlement;
mod start_checkout;

pub use open_portal::{OpenPortalHandler, OpenPortalQuery};
pub use reconcile_entitlement::{ReconcileEntitlementCommand, ReconcileEntitlementHandler};
pub use start_checkout::{StartCheckoutCommand, StartCheckoutHandler};
