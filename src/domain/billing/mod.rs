//! Billing module - catalog resolution and webhook interpretation.
//!
//! Pure domain logic: nothing here performs I/O. The reconciliation engine in
//! the application layer combines these pieces with the account store.

mod catalog;
mod environment;
mod event;
pub mod extract;
mod outcome;
mod plan;

pub use catalog::{CatalogError, PlanCatalog};
pub use environment::BillingEnvironment;
pub use event::{EventKind, WebhookEvent};
pub use extract::ExtractedFields;
pub use outcome::{CheckoutError, CheckoutRequest, ReconcileError, ReconcileOutcome};
pub use plan::Plan;
