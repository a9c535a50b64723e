//! Plan tier held by an account's entitlement.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

const NONE: &str = "none";
const UNKNOWN: &str = "unknown";

/// Internal plan tier.
///
/// `None` is the zero value for accounts that never purchased anything.
/// `Unknown` is the sentinel written when a product identifier cannot be
/// resolved through the active catalog. Every other tier is catalog-defined.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Plan {
    #[default]
    None,
    Unknown,
    Tier(String),
}

impl Plan {
    /// Creates a catalog-defined tier.
    ///
    /// Rejects empty names and the reserved `none` / `unknown` names.
    pub fn tier(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("tier"));
        }
        if name == NONE || name == UNKNOWN {
            return Err(ValidationError::invalid_format(
                "tier",
                format!("'{}' is reserved", name),
            ));
        }
        Ok(Plan::Tier(name))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Plan::None => NONE,
            Plan::Unknown => UNKNOWN,
            Plan::Tier(name) => name,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Plan::Unknown)
    }
}

impl From<String> for Plan {
    fn from(value: String) -> Self {
        match value.as_str() {
            NONE => Plan::None,
            UNKNOWN => Plan::Unknown,
            _ => Plan::Tier(value),
        }
    }
}

impl From<Plan> for String {
    fn from(plan: Plan) -> Self {
        match plan {
            Plan::Tier(name) => name,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
