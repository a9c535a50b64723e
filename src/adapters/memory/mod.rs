//! In-memory adapters for local runs and tests.

mod account_store;

pub use account_store::InMemoryAccountStore;
