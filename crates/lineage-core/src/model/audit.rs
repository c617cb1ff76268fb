//! Audit log entry model
//!
//! An `AuditEntry` is a previously persisted change-log row. It is immutable
//! once created upstream; the change differ only reads it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use super::person::RecordId;

/// Kind of mutation an audit entry records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuditAction {
    #[serde(alias = "CREATE", alias = "create")]
    Create,
    #[serde(alias = "UPDATE", alias = "update")]
    Update,
    #[serde(alias = "DELETE", alias = "delete")]
    Delete,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::Create => "Create",
            AuditAction::Update => "Update",
            AuditAction::Delete => "Delete",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the append-only change log
///
/// Snapshots are stored either as JSON objects or as JSON text inside a
/// string column; both forms are accepted and decoded lazily by the differ.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntry {
    pub entity_type: String,
    #[serde(default)]
    pub entity_id: Option<RecordId>,
    pub action: AuditAction,
    #[serde(default)]
    pub old_snapshot: Option<Value>,
    #[serde(default)]
    pub new_snapshot: Option<Value>,
    #[serde(default)]
    pub actor: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl AuditEntry {
    pub fn new(
        entity_type: impl Into<String>,
        action: AuditAction,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            entity_type: entity_type.into(),
            entity_id: None,
            action,
            old_snapshot: None,
            new_snapshot: None,
            actor: None,
            timestamp,
        }
    }

    pub fn with_entity_id(mut self, id: impl Into<RecordId>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }

    pub fn with_old(mut self, snapshot: Value) -> Self {
        self.old_snapshot = Some(snapshot);
        self
    }

    pub fn with_new(mut self, snapshot: Value) -> Self {
        self.new_snapshot = Some(snapshot);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_action_aliases() {
        let a: AuditAction = serde_json::from_value(json!("CREATE")).unwrap();
        let b: AuditAction = serde_json::from_value(json!("update")).unwrap();
        assert_eq!(a, AuditAction::Create);
        assert_eq!(b, AuditAction::Update);
    }

    #[test]
    fn test_entry_from_log_row() {
        let entry: AuditEntry = serde_json::from_value(json!({
            "entityType": "Achievement",
            "entityId": "12",
            "action": "Create",
            "newSnapshot": "{\"title\":\"MSc\"}",
            "timestamp": "2025-05-16T09:00:00Z"
        }))
        .unwrap();

        assert_eq!(entry.entity_type, "Achievement");
        assert_eq!(entry.entity_id, Some(RecordId::from("12")));
        assert!(entry.old_snapshot.is_none());
        assert!(matches!(entry.new_snapshot, Some(Value::String(_))));
    }

    #[test]
    fn test_numeric_entity_id() {
        let entry: AuditEntry = serde_json::from_value(json!({
            "entityType": "FamilyMember",
            "entityId": 12,
            "action": "Delete",
            "timestamp": "2025-05-16T09:00:00Z"
        }))
        .unwrap();

        assert_eq!(
            entry,
            AuditEntry::new("FamilyMember", AuditAction::Delete, entry.timestamp)
                .with_entity_id(12_i64)
        );
        assert_eq!(entry.entity_id.map(String::from), Some("12".to_string()));
    }
}
