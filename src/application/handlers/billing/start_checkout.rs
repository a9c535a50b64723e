//! StartCheckoutHandler - Builds a hosted checkout link for the caller.

use std::sync::Arc;

use crate::domain::account::AccountError;
use crate::domain::billing::CheckoutRequest;
use crate::domain::foundation::AccountId;
use crate::ports::{AccountStore, CheckoutLinks};

#[derive(Debug, Clone)]
pub struct StartCheckoutCommand {
    pub account_id: AccountId,
    pub products: Vec<String>,
}

pub struct StartCheckoutHandler {
    store: Arc<dyn AccountStore>,
    links: Arc<dyn CheckoutLinks>,
}

impl StartCheckoutHandler {
    pub fn new(store: Arc<dyn AccountStore>, links: Arc<dyn CheckoutLinks>) -> Self {
        Self { store, links }
    }

    #[tracing::instrument(name = "start_checkout", skip_all, fields(account_id = %cmd.account_id))]
    pub async fn handle(&self, cmd: StartCheckoutCommand) -> Result<String, AccountError> {
        let products: Vec<String> = cmd
            .products
            .into_iter()
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .collect();
        if products.is_empty() {
            return Err(AccountError::validation("products", "At least one product is required"));
        }

        let account = self
            .store
            .find_by_id(&cmd.account_id)
            .await?
            .ok_or(AccountError::NotFound)?;

        let request = CheckoutRequest {
            products,
            customer_email: account.email,
            customer_name: account.full_name,
            customer_external_id: account.id,
        };

        self.links.checkout_url(&request).map_err(|e| {
            tracing::error!(error = %e, "Cannot build checkout link");
            AccountError::configuration(e.to_string())
        })
    }
}
