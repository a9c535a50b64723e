//! PostgreSQL adapters - Database implementations for store ports.
//!
//! - `PostgresAccountStore` - Accounts with atomic entitlement updates

mod account_store;

pub use account_store::PostgresAccountStore;
