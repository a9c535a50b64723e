//! GetCurrentAccountHandler - Resolves the caller's live account record.

use std::sync::Arc;

use crate::domain::account::{Account, AccountError};
use crate::domain::foundation::AccountId;
use crate::ports::AccountStore;

#[derive(Debug, Clone)]
pub struct GetCurrentAccountQuery {
    pub account_id: AccountId,
}

/// A token for an account that no longer exists is `Unauthenticated`.
pub struct GetCurrentAccountHandler {
    store: Arc<dyn AccountStore>,
}

impl GetCurrentAccountHandler {
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetCurrentAccountQuery) -> Result<Account, AccountError> {
        self.store
            .find_by_id(&query.account_id)
            .await?
            .ok_or(AccountError::Unauthenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryAccountStore;

    #[tokio::test]
    async fn returns_live_account() {
        let store = Arc::new(InMemoryAccountStore::new());
        let account = Account::register("a@x.com", "Ada", "h").unwrap();
        store.insert(&account).await.unwrap();

        let found = GetCurrentAccountHandler::new(store)
            .handle(GetCurrentAccountQuery {
                account_id: account.id,
            })
            .await
            .unwrap();

        assert_eq!(found, account);
    }

    #[tokio::test]
    async fn vanished_account_is_unauthenticated() {
        let handler = GetCurrentAccountHandler::new(Arc::new(InMemoryAccountStore::new()));

        let err = handler
            .handle(GetCurrentAccountQuery {
                account_id: AccountId::new(),
            })
            .await
            .unwrap_err();

        assert_eq!(err, AccountError::Unauthenticated);
    }
}
