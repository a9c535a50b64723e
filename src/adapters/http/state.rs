//! Shared application state for HTTP handlers.

use std::sync::Arc;

use crate::application::handlers::{
    GetCurrentAccountHandler, LoginHandler, OpenPortalHandler, ReconcileEntitlementHandler,
    RegisterAccountHandler, StartCheckoutHandler,
};
use crate::domain::billing::{BillingEnvironment, PlanCatalog};
use crate::ports::{
    AccountStore, CheckoutLinks, PasswordHasher, SessionValidator, TokenIssuer, WebhookVerifier,
};

/// Which billing settings are present. Values are never exposed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BillingFlags {
    pub access_token_configured: bool,
    pub webhook_secret_configured: bool,
}

/// Application state shared by all routes.
///
/// Contains port implementations; handlers are built per request.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn AccountStore>,
    pub sessions: Arc<dyn SessionValidator>,
    pub tokens: Arc<dyn TokenIssuer>,
    pub hasher: Arc<dyn PasswordHasher>,
    pub checkout: Arc<dyn CheckoutLinks>,
    pub webhooks: Arc<dyn WebhookVerifier>,
    pub catalog: Arc<PlanCatalog>,
    pub environment: BillingEnvironment,
    pub billing: BillingFlags,
}

impl AppState {
    pub fn register_account_handler(&self) -> RegisterAccountHandler {
        RegisterAccountHandler::new(self.store.clone(), self.hasher.clone())
    }

    pub fn login_handler(&self) -> LoginHandler {
        LoginHandler::new(self.store.clone(), self.hasher.clone(), self.tokens.clone())
    }

    pub fn get_current_account_handler(&self) -> GetCurrentAccountHandler {
        GetCurrentAccountHandler::new(self.store.clone())
    }

    pub fn start_checkout_handler(&self) -> StartCheckoutHandler {
        StartCheckoutHandler::new(self.store.clone(), self.checkout.clone())
    }

    pub fn open_portal_handler(&self) -> OpenPortalHandler {
        OpenPortalHandler::new(self.store.clone(), self.checkout.clone())
    }

    pub fn reconcile_entitlement_handler(&self) -> ReconcileEntitlementHandler {
        ReconcileEntitlementHandler::new(self.store.clone(), self.catalog.clone())
    }
}
