use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Health check response from `/api/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// A stored item as returned by `/api/items`.
///
/// Serializes with camelCase keys: `{"id", "name", "description", "createdAt"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Request body for creating or updating an item.
///
/// Fields are kept as raw JSON so that a missing, `null` or non-string value
/// reaches validation instead of failing body decoding. Only a JSON object
/// decodes; arrays and scalars are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct ItemPayload {
    pub name: Option<Value>,
    pub description: Option<Value>,
}

impl From<Map<String, Value>> for ItemPayload {
    fn from(mut body: Map<String, Value>) -> Self {
        let mut take = |key: &str| body.remove(key).filter(|v| !v.is_null());
        Self {
            name: take("name"),
            description: take("description"),
        }
    }
}

impl ItemPayload {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: Some(Value::String(name.into())),
            description: Some(Value::String(description.into())),
        }
    }
}

/// `{"message": ...}` body used for errors and delete confirmations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
