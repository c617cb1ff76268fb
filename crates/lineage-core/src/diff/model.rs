//! Audit description output types.
//!
//! All types implement `Debug, Clone, Serialize, Deserialize, PartialEq`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a change value should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Text,
    Date,
    Boolean,
}

/// Classification of a single field change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeType {
    Added,
    Updated,
    Removed,
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeType::Added => f.write_str("Added"),
            ChangeType::Updated => f.write_str("Updated"),
            ChangeType::Removed => f.write_str("Removed"),
        }
    }
}

/// One field-level difference, with both sides already rendered for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeDetail {
    /// Display label, e.g. "Achievement Date"
    pub field: String,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
    pub kind: ValueKind,
}

impl ChangeDetail {
    pub fn added(field: impl Into<String>, value: String, kind: ValueKind) -> Self {
        Self {
            field: field.into(),
            old_value: None,
            new_value: Some(value),
            kind,
        }
    }

    pub fn removed(field: impl Into<String>, value: String, kind: ValueKind) -> Self {
        Self {
            field: field.into(),
            old_value: Some(value),
            new_value: None,
            kind,
        }
    }

    /// Compare two rendered values; `None` when there is nothing to report.
    pub fn between(
        field: impl Into<String>,
        old_value: Option<String>,
        new_value: Option<String>,
        kind: ValueKind,
    ) -> Option<Self> {
        if old_value == new_value {
            return None;
        }
        Some(Self {
            field: field.into(),
            old_value,
            new_value,
            kind,
        })
    }

    /// Added when only the new side is set, Removed when only the old side
    /// is set, Updated otherwise.
    pub fn change_type(&self) -> ChangeType {
        match (&self.old_value, &self.new_value) {
            (None, Some(_)) => ChangeType::Added,
            (Some(_), None) => ChangeType::Removed,
            _ => ChangeType::Updated,
        }
    }
}

impl fmt::Display for ChangeDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let old = self.old_value.as_deref().unwrap_or("");
        let new = self.new_value.as_deref().unwrap_or("");
        match self.change_type() {
            ChangeType::Added => write!(f, "{} (added): {}", self.field, new),
            ChangeType::Removed => write!(f, "{} (removed): {}", self.field, old),
            ChangeType::Updated => write!(f, "{} (updated): {} -> {}", self.field, old, new),
        }
    }
}

/// What a log viewer shows for one audit entry
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuditDescription {
    /// Field changes in display order
    pub changes: Vec<ChangeDetail>,
    /// Feed sentence; `None` for entity types kept out of the feed
    pub summary: Option<String>,
}

impl AuditDescription {
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}

/// Entity families the differ knows how to read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Person,
    Achievement,
    Relationship,
    Occupation,
    PassingRecord,
    Unrecognized,
}

impl EntityKind {
    /// Map a stored entity type name (case-sensitive) onto a kind.
    pub fn parse(entity_type: &str) -> Self {
        match entity_type {
            "FamilyMember" | "Person" => EntityKind::Person,
            "Achievement" => EntityKind::Achievement,
            "Relationship" | "SpouseRelationship" | "Marriage" => EntityKind::Relationship,
            "Occupation" | "Job" => EntityKind::Occupation,
            "PassingRecord" | "Passing" => EntityKind::PassingRecord,
            _ => EntityKind::Unrecognized,
        }
    }

    /// Whether entries of this kind appear in a change feed
    pub fn is_summarized(self) -> bool {
        matches!(
            self,
            EntityKind::Person
                | EntityKind::Achievement
                | EntityKind::Relationship
                | EntityKind::PassingRecord
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_type_classification() {
        let added = ChangeDetail::added("Title", "MSc".into(), ValueKind::Text);
        let removed = ChangeDetail::removed("Title", "MSc".into(), ValueKind::Text);
        let updated =
            ChangeDetail::between("Title", Some("BSc".into()), Some("MSc".into()), ValueKind::Text)
                .unwrap();
        assert_eq!(added.change_type(), ChangeType::Added);
        assert_eq!(removed.change_type(), ChangeType::Removed);
        assert_eq!(updated.change_type(), ChangeType::Updated);
    }

    #[test]
    fn test_between_equal_values_is_none() {
        assert!(ChangeDetail::between("Name", Some("A".into()), Some("A".into()), ValueKind::Text)
            .is_none());
        assert!(ChangeDetail::between("Name", None, None, ValueKind::Text).is_none());
    }

    #[test]
    fn test_entity_kind_aliases() {
        assert_eq!(EntityKind::parse("FamilyMember"), EntityKind::Person);
        assert_eq!(EntityKind::parse("Marriage"), EntityKind::Relationship);
        assert_eq!(EntityKind::parse("Job"), EntityKind::Occupation);
        assert_eq!(EntityKind::parse("Passing"), EntityKind::PassingRecord);
        assert_eq!(EntityKind::parse("achievement"), EntityKind::Unrecognized);
        assert!(!EntityKind::Occupation.is_summarized());
    }

    #[test]
    fn test_serialized_detail_is_camel_case() {
        let detail = ChangeDetail::added("Birthday", "May 15, 2025".into(), ValueKind::Date);
        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["newValue"], "May 15, 2025");
        assert!(json["oldValue"].is_null());
        assert_eq!(json["kind"], "date");
    }
}
