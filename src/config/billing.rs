//! Billing provider configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use url::Url;

use crate::domain::billing::{BillingEnvironment, CatalogError, PlanCatalog};

use super::error::ValidationError;

/// Billing configuration.
///
/// Product catalogs are `tier=product_id` lists separated by commas, one per
/// provider environment.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BillingConfig {
    /// Provider environment whose catalog resolves webhook products
    #[serde(default)]
    pub environment: BillingEnvironment,

    #[serde(default)]
    pub sandbox_products: String,

    #[serde(default)]
    pub live_products: String,

    /// Provider access token (checkout / portal)
    pub access_token: Option<SecretString>,

    /// Webhook secret held by the verifying gateway
    pub webhook_secret: Option<SecretString>,

    /// Base URL for hosted checkout and portal links
    pub checkout_base_url: Option<String>,

    /// Redirect after a successful checkout
    pub success_url: Option<String>,
}

impl BillingConfig {
    /// Builds the product catalog for both environments.
    pub fn catalog(&self) -> Result<PlanCatalog, CatalogError> {
        PlanCatalog::from_specs(&self.sandbox_products, &self.live_products)
    }

    /// The access token, unless absent or blank.
    pub fn access_token(&self) -> Option<SecretString> {
        non_blank(&self.access_token)
    }

    pub fn has_access_token(&self) -> bool {
        self.access_token().is_some()
    }

    pub fn has_webhook_secret(&self) -> bool {
        non_blank(&self.webhook_secret).is_some()
    }

    /// Validate billing configuration
    ///
    /// Only the catalog and the shape of the base URL are checked here; a
    /// missing access token or base URL fails the checkout call instead.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.catalog()
            .map_err(|e| ValidationError::InvalidCatalog(e.to_string()))?;
        if let Some(base) = self.checkout_base_url.as_deref().filter(|b| !b.is_empty()) {
            Url::parse(base).map_err(|e| ValidationError::InvalidCheckoutUrl(e.to_string()))?;
        }
        Ok(())
    }
}

fn non_blank(secret: &Option<SecretString>) -> Option<SecretString> {
    secret
        .as_ref()
        .filter(|s| !s.expose_secret().trim().is_empty())
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BillingConfig::default();
        assert_eq!(config.environment, BillingEnvironment::Sandbox);
        assert!(!config.has_access_token());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_catalog_from_specs() {
        let config = BillingConfig {
            sandbox_products: "basic=sb1,pro=sb2".to_string(),
            live_products: "pro=lv1".to_string(),
            ..Default::default()
        };
        let catalog = config.catalog().unwrap();
        assert_eq!(catalog.len(BillingEnvironment::Sandbox), 2);
        assert_eq!(catalog.len(BillingEnvironment::Live), 1);
    }

    #[test]
    fn test_malformed_catalog_fails_validation() {
        let config = BillingConfig {
            live_products: "pro".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ValidationError::InvalidCatalog(_))));
    }

    #[test]
    fn test_invalid_checkout_url_fails_validation() {
        let config = BillingConfig {
            checkout_base_url: Some("::nope".to_string()),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ValidationError::InvalidCheckoutUrl(_))));
    }

    #[test]
    fn test_blank_secrets_are_not_configured() {
        let config = BillingConfig {
            access_token: Some(SecretString::new("   ".to_string())),
            webhook_secret: Some(SecretString::new("whsec".to_string())),
            ..Default::default()
        };
        assert!(!config.has_access_token());
        assert!(config.has_webhook_secret());
    }
}
