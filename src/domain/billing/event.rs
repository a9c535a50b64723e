//! Inbound billing notifications.

use serde::Serialize;
use serde_json::Value;

use crate::domain::foundation::ValidationError;

/// Lifecycle category of a provider notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    OrderPaid,
    SubscriptionActive,
    SubscriptionCancelled,
    SubscriptionRevoked,
    Other,
}

impl EventKind {
    /// Classifies a raw provider type string. Unrecognized types map to `Other`.
    pub fn from_event_type(event_type: &str) -> Self {
        match event_type {
            "order.paid" => EventKind::OrderPaid,
            "subscription.active" => EventKind::SubscriptionActive,
            "subscription.canceled" | "subscription.cancelled" => {
                EventKind::SubscriptionCancelled
            }
            "subscription.revoked" => EventKind::SubscriptionRevoked,
            _ => EventKind::Other,
        }
    }

    pub fn is_actionable(&self) -> bool {
        !matches!(self, EventKind::Other)
    }
}

/// A verified, parsed webhook delivery.
///
/// The payload stays untyped; field extraction probes it later.
#[derive(Debug, Clone, PartialEq)]
pub struct WebhookEvent {
    pub kind: EventKind,
    pub event_type: String,
    pub payload: Value,
}

impl WebhookEvent {
    /// Parses a delivery body. It must be a JSON object with a string `type`.
    pub fn from_json(payload: Value) -> Result<Self, ValidationError> {
        let object = payload
            .as_object()
            .ok_or_else(|| ValidationError::invalid_format("body", "expected a JSON object"))?;

        let event_type = match object.get("type") {
            None | Some(Value::Null) => return Err(ValidationError::empty_field("type")),
            Some(Value::String(s)) if s.trim().is_empty() => {
                return Err(ValidationError::empty_field("type"))
            }
            Some(Value::String(s)) => s.clone(),
            Some(_) => {
                return Err(ValidationError::invalid_format("type", "expected a string"))
            }
        };

        Ok(Self {
            kind: EventKind::from_event_type(&event_type),
            event_type,
            payload,
        })
    }

    /// Parses raw body bytes.
    pub fn from_slice(body: &[u8]) -> Result<Self, ValidationError> {
        let payload: Value = serde_json::from_slice(body)
            .map_err(|e| ValidationError::invalid_format("body", e.to_string()))?;
        Self::from_json(payload)
    }
}
