//! Shape-tolerant field extraction from webhook payloads.
//!
//! Providers nest the same logical field under different paths depending on
//! event type and API version. Each logical field has an ordered list of
//! candidate paths; the first one holding a non-empty string wins. Numbers are
//! accepted and rendered as strings. Anything else is treated as absent.

use serde_json::Value;

use super::EventKind;

/// Ordered candidate paths for one logical field.
#[derive(Debug, Clone, Copy)]
pub struct FieldExtractor {
    pub field: &'static str,
    paths: &'static [&'static [&'static str]],
}

impl FieldExtractor {
    pub const fn new(field: &'static str, paths: &'static [&'static [&'static str]]) -> Self {
        Self { field, paths }
    }

    /// Returns the first non-empty value found along the candidate paths.
    pub fn extract(&self, scope: &Value) -> Option<String> {
        self.paths
            .iter()
            .find_map(|path| lookup(scope, path).and_then(scalar_string))
    }
}

pub const CUSTOMER_EMAIL: FieldExtractor = FieldExtractor::new(
    "customer_email",
    &[&["customer", "email"], &["email"], &["user", "email"]],
);

pub const PRODUCT_ID: FieldExtractor = FieldExtractor::new(
    "product_id",
    &[&["productId"], &["product", "id"], &["product_id"]],
);

pub const ORDER_ID: FieldExtractor =
    FieldExtractor::new("order_id", &[&["id"], &["order_id"], &["orderId"]]);

/// Fields the reconciliation engine needs from a payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedFields {
    pub customer_email: Option<String>,
    pub product_id: Option<String>,
    pub order_id: Option<String>,
}

impl ExtractedFields {
    /// Extracts every field from the normalized scope of `payload`.
    ///
    /// The order id is only meaningful for paid orders; for subscription
    /// events the top-level `id` is the subscription's and is not extracted.
    pub fn from_payload(kind: EventKind, payload: &Value) -> Self {
        let scope = normalize(payload);
        Self {
            customer_email: CUSTOMER_EMAIL.extract(scope),
            product_id: PRODUCT_ID.extract(scope),
            order_id: match kind {
                EventKind::OrderPaid => ORDER_ID.extract(scope),
                _ => None,
            },
        }
    }
}

/// Selects the extraction scope: `data` when it is an object, else the root.
pub fn normalize(payload: &Value) -> &Value {
    match payload.get("data") {
        Some(data) if data.is_object() => data,
        _ => payload,
    }
}

fn lookup<'a>(scope: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(scope, |value, key| value.get(*key))
}

fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normalize_prefers_object_data() {
        let payload = json!({"type": "order.paid", "data": {"email": "a@x.com"}});
        assert_eq!(normalize(&payload), &json!({"email": "a@x.com"}));
    }

    #[test]
    fn normalize_falls_back_to_root_when_data_is_not_an_object() {
        let payload = json!({"type": "order.paid", "data": "oops", "email": "a@x.com"});
        assert_eq!(normalize(&payload), &payload);
    }

    #[test]
    fn email_paths_are_tried_in_order() {
        let nested = json!({"customer": {"email": "c@x.com"}, "email": "e@x.com"});
        let flat = json!({"email": "e@x.com", "user": {"email": "u@x.com"}});
        let user = json!({"user": {"email": "u@x.com"}});

        assert_eq!(CUSTOMER_EMAIL.extract(&nested).as_deref(), Some("c@x.com"));
        assert_eq!(CUSTOMER_EMAIL.extract(&flat).as_deref(), Some("e@x.com"));
        assert_eq!(CUSTOMER_EMAIL.extract(&user).as_deref(), Some("u@x.com"));
    }

    #[test]
    fn empty_and_non_string_values_fall_through() {
        let payload = json!({"customer": {"email": ""}, "email": null, "user": {"email": "u@x.com"}});
        assert_eq!(CUSTOMER_EMAIL.extract(&payload).as_deref(), Some("u@x.com"));

        let objects_only = json!({"customer": {"email": {"value": "a@x.com"}}});
        assert_eq!(CUSTOMER_EMAIL.extract(&objects_only), None);
    }

    #[test]
    fn product_id_paths_are_tried_in_order() {
        assert_eq!(
            PRODUCT_ID.extract(&json!({"product": {"id": "P2"}, "product_id": "P3"})).as_deref(),
            Some("P2")
        );
        assert_eq!(PRODUCT_ID.extract(&json!({"product_id": "P3"})).as_deref(), Some("P3"));
    }

    #[test]
    fn numeric_order_ids_are_stringified() {
        assert_eq!(ORDER_ID.extract(&json!({"order_id": 1234})).as_deref(), Some("1234"));
    }

    #[test]
    fn order_id_only_extracted_for_paid_orders() {
        let payload = json!({"data": {"id": "sub_1", "email": "a@x.com"}});

        let paid = ExtractedFields::from_payload(EventKind::OrderPaid, &payload);
        let active = ExtractedFields::from_payload(EventKind::SubscriptionActive, &payload);

        assert_eq!(paid.order_id.as_deref(), Some("sub_1"));
        assert_eq!(active.order_id, None);
    }

    #[test]
    fn extracts_from_nested_data_scope() {
        let payload = json!({
            "type": "subscription.active",
            "data": {"customer": {"email": "a@x.com"}, "productId": "P1"}
        });
        let fields = ExtractedFields::from_payload(EventKind::SubscriptionActive, &payload);

        assert_eq!(fields.customer_email.as_deref(), Some("a@x.com"));
        assert_eq!(fields.product_id.as_deref(), Some("P1"));
    }

    #[test]
    fn fields_outside_the_scope_are_not_seen() {
        let payload = json!({"email": "root@x.com", "data": {"productId": "P1"}});
        let fields = ExtractedFields::from_payload(EventKind::OrderPaid, &payload);

        assert_eq!(fields.customer_email, None);
    }
}
