//! Entitlement state and the patches that mutate it.
//!
//! Patches are absolute: each touched field is set to a value carried by the
//! patch, never derived from the stored value. Applying the same patch twice
//! therefore yields the same state as applying it once, which is what makes
//! redelivered notifications harmless.

use serde::{Deserialize, Serialize};

use crate::domain::billing::Plan;

use super::EntitlementStatus;

/// Paid-feature state of an account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entitlement {
    pub status: EntitlementStatus,
    pub plan: Plan,
    pub external_order_id: Option<String>,
    pub external_product_id: Option<String>,
}

/// Whether a patch touches a field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Change<T> {
    #[default]
    Keep,
    Set(T),
}

impl<T: Clone> Change<T> {
    fn apply(&self, target: &mut T) {
        if let Change::Set(value) = self {
            *target = value.clone();
        }
    }
}

/// Field-level update issued by the reconciliation engine.
///
/// Plan and product id always travel together so the stored plan stays
/// derivable from the stored product id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitlementPatch {
    pub status: EntitlementStatus,
    pub plan: Change<Plan>,
    pub external_product_id: Change<Option<String>>,
    pub external_order_id: Change<Option<String>>,
}

impl EntitlementPatch {
    /// A completed purchase.
    pub fn order_paid(order_id: Option<String>, product_id: Option<String>, plan: Plan) -> Self {
        Self {
            status: EntitlementStatus::Active,
            plan: Change::Set(plan),
            external_product_id: Change::Set(product_id),
            external_order_id: Change::Set(order_id),
        }
    }

    /// A subscription became active. The order reference is left untouched.
    pub fn subscription_active(product_id: Option<String>, plan: Plan) -> Self {
        Self {
            status: EntitlementStatus::Active,
            plan: Change::Set(plan),
            external_product_id: Change::Set(product_id),
            external_order_id: Change::Keep,
        }
    }

    pub fn cancelled() -> Self {
        Self::status_only(EntitlementStatus::Cancelled)
    }

    pub fn revoked() -> Self {
        Self::status_only(EntitlementStatus::Expired)
    }

    fn status_only(status: EntitlementStatus) -> Self {
        Self {
            status,
            plan: Change::Keep,
            external_product_id: Change::Keep,
            external_order_id: Change::Keep,
        }
    }

    /// Applies the patch in place.
    pub fn apply_to(&self, entitlement: &mut Entitlement) {
        entitlement.status = self.status;
        self.plan.apply(&mut entitlement.plan);
        self.external_product_id
            .apply(&mut entitlement.external_product_id);
        self.external_order_id.apply(&mut entitlement.external_order_id);
    }
}
