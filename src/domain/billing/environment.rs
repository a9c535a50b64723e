//! Billing environment selector.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of the provider's environments product identifiers belong to.
///
/// Passed explicitly to the catalog and the reconciliation engine so both
/// catalogs can be exercised in the same process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingEnvironment {
    #[default]
    Sandbox,
    #[serde(alias = "production")]
    Live,
}

impl BillingEnvironment {
    pub fn as_str(&self) -> &'static str {
        match self {
            BillingEnvironment::Sandbox => "sandbox",
            BillingEnvironment::Live => "live",
        }
    }
}

impl fmt::Display for BillingEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_sandbox() {
        assert_eq!(BillingEnvironment::default(), BillingEnvironment::Sandbox);
    }

    #[test]
    fn deserializes_lowercase_and_production_alias() {
        let live: BillingEnvironment = serde_json::from_str("\"live\"").unwrap();
        let prod: BillingEnvironment = serde_json::from_str("\"production\"").unwrap();
        let sandbox: BillingEnvironment = serde_json::from_str("\"sandbox\"").unwrap();

        assert_eq!(live, BillingEnvironment::Live);
        assert_eq!(prod, BillingEnvironment::Live);
        assert_eq!(sandbox, BillingEnvironment::Sandbox);
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&BillingEnvironment::Live).unwrap();
        assert_eq!(json, "\"live\"");
    }
}
