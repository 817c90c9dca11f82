use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry of a page's change history, as reported by the audit service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEvent {
    #[serde(rename = "_id")]
    pub id: String,
    pub action: String,
    /// Timestamp as sent by the service (RFC 3339 in practice).
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor: Option<Actor>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub changes: Vec<Change>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    #[serde(default)]
    pub email: Option<String>,
}

/// A single field change; `before`/`after` are arbitrary JSON values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Change {
    #[serde(default)]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<Value>,
}

impl AuditEvent {
    pub fn actor_email(&self) -> Option<&str> {
        self.actor
            .as_ref()
            .and_then(|actor| actor.email.as_deref())
            .filter(|email| !email.is_empty())
    }
}
