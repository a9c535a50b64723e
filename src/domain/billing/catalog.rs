//! Plan catalog - maps provider product identifiers to internal plan tiers.
//!
//! The catalog keeps one immutable map per [`BillingEnvironment`]. Lookups are
//! exact and case-sensitive on the raw identifier; a miss resolves to
//! [`Plan::Unknown`] because the catalog is allowed to lag the provider's
//! product list.
//!
//! Entries are written in configuration as `tier=product_id` pairs separated
//! by commas:
//!
//! ```text
//! basic=34da0d93-2c29-496e-9162-2432e8c969ba,pro=9e28204e-16fe-48ad-ad17-5f236b345f90
//! ```

use std::collections::HashMap;

use thiserror::Error;

use super::{BillingEnvironment, Plan};

/// Errors raised while building a catalog from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Malformed catalog entry '{0}', expected tier=product_id")]
    MalformedEntry(String),

    #[error("Invalid tier in catalog entry '{entry}': {reason}")]
    InvalidTier { entry: String, reason: String },

    #[error("Product '{product_id}' is mapped twice in the {environment} catalog")]
    DuplicateProduct {
        environment: BillingEnvironment,
        product_id: String,
    },
}

/// Environment-scoped product catalog.
#[derive(Debug, Clone, Default)]
pub struct PlanCatalog {
    sandbox: HashMap<String, Plan>,
    live: HashMap<String, Plan>,
}

impl PlanCatalog {
    /// Creates an empty catalog. Every lookup resolves to `Unknown`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from the `tier=product_id,...` lists of both environments.
    pub fn from_specs(sandbox: &str, live: &str) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for (tier, product_id) in parse_entries(sandbox)? {
            catalog.insert(BillingEnvironment::Sandbox, product_id, tier)?;
        }
        for (tier, product_id) in parse_entries(live)? {
            catalog.insert(BillingEnvironment::Live, product_id, tier)?;
        }
        Ok(catalog)
    }

    /// Adds one mapping, builder style.
    pub fn with_product(
        mut self,
        environment: BillingEnvironment,
        product_id: impl Into<String>,
        tier: impl Into<String>,
    ) -> Result<Self, CatalogError> {
        self.insert(environment, product_id.into(), tier.into())?;
        Ok(self)
    }

    /// Resolves a product identifier in the given environment.
    ///
    /// An absent identifier and an unmapped identifier both yield `Unknown`.
    pub fn resolve(&self, environment: BillingEnvironment, product_id: Option<&str>) -> Plan {
        product_id
            .and_then(|id| self.products(environment).get(id))
            .cloned()
            .unwrap_or(Plan::Unknown)
    }

    /// Number of product identifiers mapped for an environment.
    pub fn len(&self, environment: BillingEnvironment) -> usize {
        self.products(environment).len()
    }

    pub fn is_empty(&self, environment: BillingEnvironment) -> bool {
        self.products(environment).is_empty()
    }

    fn products(&self, environment: BillingEnvironment) -> &HashMap<String, Plan> {
        match environment {
            BillingEnvironment::Sandbox => &self.sandbox,
            BillingEnvironment::Live => &self.live,
        }
    }

    fn insert(
        &mut self,
        environment: BillingEnvironment,
        product_id: String,
        tier: String,
    ) -> Result<(), CatalogError> {
        if product_id.is_empty() {
            return Err(CatalogError::MalformedEntry(format!("{}=", tier)));
        }
        let plan = Plan::tier(tier.clone()).map_err(|e| CatalogError::InvalidTier {
            entry: format!("{}={}", tier, product_id),
            reason: e.to_string(),
        })?;

        let products = match environment {
            BillingEnvironment::Sandbox => &mut self.sandbox,
            BillingEnvironment::Live => &mut self.live,
        };
        if products.contains_key(&product_id) {
            return Err(CatalogError::DuplicateProduct {
                environment,
                product_id,
            });
        }
        products.insert(product_id, plan);
        Ok(())
    }
}

fn parse_entries(entries: &str) -> Result<Vec<(String, String)>, CatalogError> {
    entries
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let (tier, product_id) = entry
                .split_once('=')
                .ok_or_else(|| CatalogError::MalformedEntry(entry.to_string()))?;
            let (tier, product_id) = (tier.trim(), product_id.trim());
            if tier.is_empty() || product_id.is_empty() {
                return Err(CatalogError::MalformedEntry(entry.to_string()));
            }
            Ok((tier.to_string(), product_id.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn catalog() -> PlanCatalog {
        PlanCatalog::from_specs("basic=sb-basic,pro=sb-pro", "basic=live-basic,pro=live-pro")
            .unwrap()
    }

    fn tier(name: &str) -> Plan {
        Plan::Tier(name.to_string())
    }

    #[test]
    fn resolves_known_product_in_its_environment() {
        let catalog = catalog();
        assert_eq!(
            catalog.resolve(BillingEnvironment::Sandbox, Some("sb-pro")),
            tier("pro")
        );
        assert_eq!(
            catalog.resolve(BillingEnvironment::Live, Some("live-basic")),
            tier("basic")
        );
    }

    #[test]
    fn sandbox_product_is_unknown_under_live() {
        let catalog = catalog();
        assert_eq!(
            catalog.resolve(BillingEnvironment::Live, Some("sb-pro")),
            Plan::Unknown
        );
    }

    #[test]
    fn product_in_both_maps_resolves_in_both() {
        let catalog = PlanCatalog::new()
            .with_product(BillingEnvironment::Sandbox, "shared", "pro")
            .unwrap()
            .with_product(BillingEnvironment::Live, "shared", "basic")
            .unwrap();

        assert_eq!(catalog.resolve(BillingEnvironment::Sandbox, Some("shared")), tier("pro"));
        assert_eq!(catalog.resolve(BillingEnvironment::Live, Some("shared")), tier("basic"));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let catalog = catalog();
        assert_eq!(
            catalog.resolve(BillingEnvironment::Sandbox, Some("SB-PRO")),
            Plan::Unknown
        );
    }

    #[test]
    fn absent_product_resolves_unknown() {
        assert_eq!(catalog().resolve(BillingEnvironment::Sandbox, None), Plan::Unknown);
    }

    #[test]
    fn spec_parsing_trims_entries_and_skips_blanks() {
        let catalog = PlanCatalog::from_specs(" basic = a , , pro=b ", "").unwrap();
        assert_eq!(catalog.len(BillingEnvironment::Sandbox), 2);
        assert!(catalog.is_empty(BillingEnvironment::Live));
        assert_eq!(catalog.resolve(BillingEnvironment::Sandbox, Some("a")), tier("basic"));
    }

    #[test]
    fn several_products_may_share_a_tier() {
        let catalog = PlanCatalog::from_specs("pro=monthly,pro=yearly", "").unwrap();
        assert_eq!(catalog.resolve(BillingEnvironment::Sandbox, Some("monthly")), tier("pro"));
        assert_eq!(catalog.resolve(BillingEnvironment::Sandbox, Some("yearly")), tier("pro"));
    }

    #[test]
    fn rejects_malformed_entries() {
        assert!(matches!(
            PlanCatalog::from_specs("basic", ""),
            Err(CatalogError::MalformedEntry(_))
        ));
        assert!(matches!(
            PlanCatalog::from_specs("", "=abc"),
            Err(CatalogError::MalformedEntry(_))
        ));
    }

    #[test]
    fn rejects_reserved_tier_names() {
        assert!(matches!(
            PlanCatalog::from_specs("unknown=abc", ""),
            Err(CatalogError::InvalidTier { .. })
        ));
    }

    #[test]
    fn rejects_duplicate_product_within_environment() {
        assert!(matches!(
            PlanCatalog::from_specs("basic=abc,pro=abc", ""),
            Err(CatalogError::DuplicateProduct { .. })
        ));
    }

    proptest! {
        #[test]
        fn unmapped_identifiers_never_resolve_to_a_tier(id in "[a-zA-Z0-9-]{1,40}") {
            prop_assume!(!["sb-basic", "sb-pro", "live-basic", "live-pro"].contains(&id.as_str()));
            let catalog = catalog();
            prop_assert_eq!(catalog.resolve(BillingEnvironment::Sandbox, Some(&id)), Plan::Unknown);
            prop_assert_eq!(catalog.resolve(BillingEnvironment::Live, Some(&id)), Plan::Unknown);
        }

        #[test]
        fn mapped_identifier_resolves_only_where_mapped(id in "[a-z0-9]{1,24}", tier_name in "[a-z]{1,10}") {
            prop_assume!(tier_name != "none" && tier_name != "unknown");
            let catalog = PlanCatalog::new()
                .with_product(BillingEnvironment::Sandbox, id.clone(), tier_name.clone())
                .unwrap();
            prop_assert_eq!(
                catalog.resolve(BillingEnvironment::Sandbox, Some(&id)),
                Plan::Tier(tier_name)
            );
            prop_assert_eq!(catalog.resolve(BillingEnvironment::Live, Some(&id)), Plan::Unknown);
        }
    }
}
