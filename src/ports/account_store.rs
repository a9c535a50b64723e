//! Account store port.
//!
//! Defines the contract for persisting and retrieving accounts. The
//! reconciliation engine relies on exactly one operation being atomic:
//! `conditional_update`.
//!
//! # Design
//!
//! - **Email-keyed updates**: billing notifications only carry an email
//! - **No read-then-write**: the find-and-update happens inside the store
//! - **Unique email**: enforced by the store, surfaced as `AccountExists`

use async_trait::async_trait;

use crate::domain::account::{Account, EntitlementPatch};
use crate::domain::foundation::{AccountId, DomainError};

/// Persistence port for accounts.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Insert a newly registered account.
    ///
    /// # Errors
    ///
    /// - `AccountExists` if the email is already registered
    /// - `DatabaseError` on persistence failure
    async fn insert(&self, account: &Account) -> Result<(), DomainError>;

    /// Find an account by its ID.
    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, DomainError>;

    /// Find an account by exact email.
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError>;

    /// Atomically apply `patch` to the account with this email.
    ///
    /// Returns the updated account, or `None` when no account matches.
    /// Concurrent calls for the same email are serialized by the store;
    /// each one observes the result of the previous.
    async fn conditional_update(
        &self,
        email: &str,
        patch: &EntitlementPatch,
    ) -> Result<Option<Account>, DomainError>;
}
