//! In-memory account store.
//!
//! Used when no database URL is configured and by the HTTP integration tests.
//! The conditional update runs entirely under one write lock, which gives the
//! same per-account serialization the SQL adapter gets from row locking.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::account::{Account, EntitlementPatch};
use crate::domain::foundation::{AccountId, DomainError, ErrorCode};
use crate::ports::AccountStore;

/// Accounts keyed by email.
#[derive(Debug, Default)]
pub struct InMemoryAccountStore {
    accounts: RwLock<HashMap<String, Account>>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    // === Test Helpers ===

    /// Number of stored accounts.
    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn insert(&self, account: &Account) -> Result<(), DomainError> {
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(&account.email) {
            return Err(
                DomainError::new(ErrorCode::AccountExists, "Email already registered")
                    .with_detail("email", account.email.clone()),
            );
        }
        accounts.insert(account.email.clone(), account.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &AccountId) -> Result<Option<Account>, DomainError> {
        Ok(self
            .accounts
            .read()
            .await
            .values()
            .find(|a| a.id == *id)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        Ok(self.accounts.read().await.get(email).cloned())
    }

    async fn conditional_update(
        &self,
        email: &str,
        patch: &EntitlementPatch,
    ) -> Result<Option<Account>, DomainError> {
        let mut accounts = self.accounts.write().await;
        Ok(accounts.get_mut(email).map(|account| {
            account.apply(patch);
            account.clone()
        }))
    }
}
