//! ReconcileEntitlementHandler - Applies a verified billing notification to an account.
//!
//! Classifies the event, extracts identity and product from whatever payload
//! shape arrived, resolves the plan through the catalog of the requested
//! environment, and issues a single atomic update against the store.
//!
//! Every outcome except a store failure is an acknowledgement: the provider
//! must not retry notifications this service can never act on.

use std::sync::Arc;

use crate::domain::account::EntitlementPatch;
use crate::domain::billing::{
    BillingEnvironment, EventKind, ExtractedFields, PlanCatalog, ReconcileError,
    ReconcileOutcome, WebhookEvent,
};
use crate::ports::AccountStore;

/// Command to reconcile one webhook delivery.
#[derive(Debug, Clone)]
pub struct ReconcileEntitlementCommand {
    pub event: WebhookEvent,
    pub environment: BillingEnvironment,
}

/// Handler for billing lifecycle notifications.
pub struct ReconcileEntitlementHandler {
    store: Arc<dyn AccountStore>,
    catalog: Arc<PlanCatalog>,
}

impl ReconcileEntitlementHandler {
    pub fn new(store: Arc<dyn AccountStore>, catalog: Arc<PlanCatalog>) -> Self {
        Self { store, catalog }
    }

    #[tracing::instrument(
        name = "reconcile_entitlement",
        skip(self, cmd),
        fields(event_type = %cmd.event.event_type, environment = %cmd.environment)
    )]
    pub async fn handle(
        &self,
        cmd: ReconcileEntitlementCommand,
    ) -> Result<ReconcileOutcome, ReconcileError> {
        let ReconcileEntitlementCommand { event, environment } = cmd;

        if !event.kind.is_actionable() {
            tracing::info!("Ignoring unhandled webhook event type");
            return Ok(ReconcileOutcome::Ignored {
                event_type: event.event_type,
            });
        }

        let fields = ExtractedFields::from_payload(event.kind, &event.payload);
        let Some(email) = fields.customer_email else {
            tracing::warn!("Webhook payload carries no customer email; skipping");
            return Ok(ReconcileOutcome::MissingIdentity);
        };

        let patch = self.patch_for(event.kind, environment, fields.product_id, fields.order_id);

        match self.store.conditional_update(&email, &patch).await? {
            Some(account) => {
                tracing::info!(
                    account_id = %account.id,
                    status = %account.entitlement.status,
                    plan = %account.entitlement.plan,
                    "Entitlement updated"
                );
                Ok(ReconcileOutcome::Applied {
                    account_id: account.id,
                    status: account.entitlement.status,
                    plan: account.entitlement.plan,
                })
            }
            None => {
                tracing::warn!(email = %email, "No account matches webhook customer email");
                Ok(ReconcileOutcome::AccountNotFound { email })
            }
        }
    }

    fn patch_for(
        &self,
        kind: EventKind,
        environment: BillingEnvironment,
        product_id: Option<String>,
        order_id: Option<String>,
    ) -> EntitlementPatch {
        match kind {
            EventKind::OrderPaid | EventKind::SubscriptionActive => {
                let plan = self.catalog.resolve(environment, product_id.as_deref());
                if plan.is_unknown() {
                    tracing::warn!(
                        product_id = product_id.as_deref().unwrap_or("<absent>"),
                        "Product is not in the catalog; recording plan as unknown"
                    );
                }
                if kind == EventKind::OrderPaid {
                    EntitlementPatch::order_paid(order_id, product_id, plan)
                } else {
                    EntitlementPatch::subscription_active(product_id, plan)
                }
            }
            EventKind::SubscriptionCancelled => EntitlementPatch::cancelled(),
            // Other is filtered out before extraction.
            EventKind::SubscriptionRevoked | EventKind::Other => EntitlementPatch::revoked(),
        }
    }
}
