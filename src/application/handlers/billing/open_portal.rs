//! OpenPortalHandler - Builds a customer-portal link for the caller.

use std::sync::Arc;

use crate::domain::account::AccountError;
use crate::domain::foundation::AccountId;
use crate::ports::{AccountStore, CheckoutLinks};

#[derive(Debug, Clone)]
pub struct OpenPortalQuery {
    pub account_id: AccountId,
}

pub struct OpenPortalHandler {
    store: Arc<dyn AccountStore>,
    links: Arc<dyn CheckoutLinks>,
}

impl OpenPortalHandler {
    pub fn new(store: Arc<dyn AccountStore>, links: Arc<dyn CheckoutLinks>) -> Self {
        Self { store, links }
    }

    pub async fn handle(&self, query: OpenPortalQuery) -> Result<String, AccountError> {
        let account = self
            .store
            .find_by_id(&query.account_id)
            .await?
            .ok_or(AccountError::NotFound)?;

        self.links.portal_url(&account.id).map_err(|e| {
            tracing::error!(error = %e, "Cannot build portal link");
            AccountError::configuration(e.to_string())
        })
    }
}
