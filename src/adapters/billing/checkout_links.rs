//! Hosted checkout and customer-portal links.
//!
//! Builds `<base>/checkout?...` and `<base>/portal?...` URLs for the
//! provider's hosted pages. Both require the provider access token and the
//! base URL to be configured; otherwise the call fails and the caller
//! surfaces a 500.

use secrecy::SecretString;
use url::Url;

use crate::domain::billing::{CheckoutError, CheckoutRequest};
use crate::domain::foundation::AccountId;
use crate::ports::CheckoutLinks;

/// `CheckoutLinks` over a configured base URL.
#[derive(Debug, Clone, Default)]
pub struct HostedCheckoutLinks {
    base_url: Option<String>,
    access_token: Option<SecretString>,
    success_url: Option<String>,
}

impl HostedCheckoutLinks {
    pub fn new(
        base_url: Option<String>,
        access_token: Option<SecretString>,
        success_url: Option<String>,
    ) -> Self {
        Self {
            base_url,
            access_token,
            success_url,
        }
    }

    fn endpoint(&self, segment: &str) -> Result<Url, CheckoutError> {
        if self.access_token.is_none() {
            return Err(CheckoutError::NotConfigured(
                "billing access token is not set".to_string(),
            ));
        }
        let base = self
            .base_url
            .as_deref()
            .filter(|b| !b.trim().is_empty())
            .ok_or_else(|| CheckoutError::NotConfigured("checkout base URL is not set".to_string()))?;

        let mut url = Url::parse(base).map_err(|e| CheckoutError::InvalidBaseUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| CheckoutError::InvalidBaseUrl(format!("'{}' cannot be a base", base)))?
            .pop_if_empty()
            .push(segment);
        Ok(url)
    }
}

impl CheckoutLinks for HostedCheckoutLinks {
    fn checkout_url(&self, request: &CheckoutRequest) -> Result<String, CheckoutError> {
        let mut url = self.endpoint("checkout")?;
        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("products", &request.products.join(","))
                .append_pair("customerEmail", &request.customer_email)
                .append_pair("customerName", &request.customer_name)
                .append_pair("customerExternalId", &request.customer_external_id.to_string());
            if let Some(success_url) = &self.success_url {
                query.append_pair("successUrl", success_url);
            }
        }
        Ok(url.into())
    }

    fn portal_url(&self, customer_external_id: &AccountId) -> Result<String, CheckoutError> {
        let mut url = self.endpoint("portal")?;
        url.query_pairs_mut()
            .append_pair("customerExternalId", &customer_external_id.to_string());
        Ok(url.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links(base: Option<&str>, token: bool) -> HostedCheckoutLinks {
        HostedCheckoutLinks::new(
            base.map(String::from),
            token.then(|| SecretString::new("polar_at_test".to_string())),
            Some("https://app.example.com/success".to_string()),
        )
    }

    fn request(id: AccountId) -> CheckoutRequest {
        CheckoutRequest {
            products: vec!["P1".into(), "P2".into()],
            customer_email: "a+b@x.com".into(),
            customer_name: "Ada Lovelace".into(),
            customer_external_id: id,
        }
    }

    #[test]
    fn checkout_url_carries_customer_and_products() {
        let id = AccountId::new();
        let url = links(Some("https://pay.example.com/api/v1/"), true)
            .checkout_url(&request(id))
            .unwrap();
        let parsed = Url::parse(&url).unwrap();
        let pairs: Vec<(String, String)> = parsed.query_pairs().into_owned().collect();

        assert_eq!(parsed.path(), "/api/v1/checkout");
        assert!(pairs.contains(&("products".into(), "P1,P2".into())));
        assert!(pairs.contains(&("customerEmail".into(), "a+b@x.com".into())));
        assert!(pairs.contains(&("customerName".into(), "Ada Lovelace".into())));
        assert!(pairs.contains(&("customerExternalId".into(), id.to_string())));
        assert!(pairs.iter().any(|(k, _)| k == "successUrl"));
    }

    #[test]
    fn portal_url_carries_external_id() {
        let id = AccountId::new();
        let url = links(Some("https://pay.example.com"), true).portal_url(&id).unwrap();

        assert_eq!(url, format!("https://pay.example.com/portal?customerExternalId={}", id));
    }

    #[test]
    fn missing_access_token_is_not_configured() {
        let err = links(Some("https://pay.example.com"), false)
            .portal_url(&AccountId::new())
            .unwrap_err();
        assert!(matches!(err, CheckoutError::NotConfigured(_)));
    }

    #[test]
    fn missing_or_invalid_base_url_fails() {
        assert!(matches!(
            links(None, true).portal_url(&AccountId::new()),
            Err(CheckoutError::NotConfigured(_))
        ));
        assert!(matches!(
            links(Some("not a url"), true).portal_url(&AccountId::new()),
            Err(CheckoutError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            links(Some("mailto:billing@example.com"), true).portal_url(&AccountId::new()),
            Err(CheckoutError::InvalidBaseUrl(_))
        ));
    }
}
