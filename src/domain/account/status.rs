//! Entitlement status of an account.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Lifecycle status of an account's paid entitlement.
///
/// Transitions are driven only by billing notifications and are not
/// constrained: notifications arrive unordered, so the latest delivery wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntitlementStatus {
    /// Never purchased.
    #[default]
    None,
    Active,
    /// Cancelled by the customer; the provider may still revoke later.
    Cancelled,
    /// Revoked by the provider. No access.
    Expired,
}

impl EntitlementStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntitlementStatus::None => "none",
            EntitlementStatus::Active => "active",
            EntitlementStatus::Cancelled => "cancelled",
            EntitlementStatus::Expired => "expired",
        }
    }

    /// Returns true if this status grants paid features.
    pub fn is_entitled(&self) -> bool {
        matches!(self, EntitlementStatus::Active)
    }
}

impl fmt::Display for EntitlementStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntitlementStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(EntitlementStatus::None),
            "active" => Ok(EntitlementStatus::Active),
            "cancelled" => Ok(EntitlementStatus::Cancelled),
            "expired" => Ok(EntitlementStatus::Expired),
            other => Err(ValidationError::invalid_format(
                "status",
                format!("unknown entitlement status '{}'", other),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_stored_value() {
        for status in [
            EntitlementStatus::None,
            EntitlementStatus::Active,
            EntitlementStatus::Cancelled,
            EntitlementStatus::Expired,
        ] {
            assert_eq!(status.as_str().parse::<EntitlementStatus>().unwrap(), status);
        }
    }

    #[test]
    fn rejects_unknown_values() {
        assert!("paused".parse::<EntitlementStatus>().is_err());
    }

    #[test]
    fn only_active_is_entitled() {
        assert!(EntitlementStatus::Active.is_entitled());
        assert!(!EntitlementStatus::Cancelled.is_entitled());
        assert!(!EntitlementStatus::None.is_entitled());
    }
}
