//! Typed snapshot shapes per entity.
//!
//! Every field is optional: stored snapshots are written by several
//! surfaces and any of them may leave a field out. Scalars are read
//! leniently (a number where text was expected still renders), so only a
//! structurally wrong snapshot fails to decode.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::errors::{LineageError, Result, SnapshotSide};
use crate::model::{AuditAction, AuditEntry, PersonRef};

/// A JSON scalar read as display text
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Flag(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    /// Display text; blank strings count as absent.
    pub fn text(&self) -> Option<String> {
        match self {
            Scalar::Text(s) => {
                let trimmed = s.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
            Scalar::Integer(n) => Some(n.to_string()),
            Scalar::Float(n) => Some(n.to_string()),
            Scalar::Flag(b) => Some(b.to_string()),
        }
    }

    /// Boolean reading for flag columns stored as bools, 0/1 or text.
    pub fn flag(&self) -> Option<bool> {
        match self {
            Scalar::Flag(b) => Some(*b),
            Scalar::Integer(n) => Some(*n != 0),
            Scalar::Float(_) => None,
            Scalar::Text(s) => match s.trim().to_ascii_lowercase().as_str() {
                "true" | "yes" | "1" => Some(true),
                "false" | "no" | "0" => Some(false),
                _ => None,
            },
        }
    }
}

/// Text of an optional scalar field
pub(crate) fn text_of(field: &Option<Scalar>) -> Option<String> {
    field.as_ref().and_then(Scalar::text)
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonSnapshot {
    pub name: Option<Scalar>,
    pub birthday: Option<Scalar>,
    pub gender: Option<Scalar>,
    pub address: Option<Scalar>,
    pub generation: Option<Scalar>,
    pub is_adopted: Option<Scalar>,
    pub profile_picture: Option<Scalar>,
    pub parent_id: Option<Scalar>,
}

impl PersonSnapshot {
    /// A dependent entry (born to someone already in the tree)
    pub fn has_parent(&self) -> bool {
        text_of(&self.parent_id).is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AchievementSnapshot {
    pub family_member_name: Option<Scalar>,
    pub title: Option<Scalar>,
    pub achieve_date: Option<Scalar>,
    pub description: Option<Scalar>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RelationshipSnapshot {
    pub family_member1_id: Option<PersonRef>,
    pub family_member2_id: Option<PersonRef>,
    #[serde(alias = "marriageDate")]
    pub start_date: Option<Scalar>,
    pub divorce_date: Option<Scalar>,
}

impl RelationshipSnapshot {
    pub fn is_divorced(&self) -> bool {
        text_of(&self.divorce_date).is_some()
    }

    /// Partner ids in display order
    pub fn partners(&self) -> impl Iterator<Item = &PersonRef> {
        self.family_member1_id
            .iter()
            .chain(self.family_member2_id.iter())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OccupationSnapshot {
    pub job_title: Option<Scalar>,
    pub start_date: Option<Scalar>,
    pub end_date: Option<Scalar>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PassingSnapshot {
    pub family_member_name: Option<Scalar>,
    pub date_of_passing: Option<Scalar>,
    pub causes: Option<CauseList>,
    pub burial_places: Option<Vec<BurialSnapshot>>,
}

/// Causes stored either as a list or as one comma-separated string
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CauseList {
    Many(Vec<Option<Scalar>>),
    One(Scalar),
}

impl CauseList {
    /// Non-blank causes joined for display
    pub fn joined(&self) -> Option<String> {
        let names: Vec<String> = match self {
            CauseList::Many(items) => items.iter().filter_map(text_of).collect(),
            CauseList::One(item) => item.text().into_iter().collect(),
        };
        (!names.is_empty()).then(|| names.join(", "))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BurialSnapshot {
    pub location: Option<Scalar>,
    pub start_date: Option<Scalar>,
}

/// Snapshot shape for entity types without a dedicated schema
pub type GenericSnapshot = Map<String, Value>;

/// Decode one side of an audit entry.
///
/// Accepts a JSON object, or a string holding JSON object text (the form
/// most log tables store).
///
/// # Errors
///
/// - `SnapshotMissing` when the side is absent or `null`
/// - `SnapshotMalformed` when it is not an object or does not fit `T`
pub fn decode<T: DeserializeOwned>(raw: Option<&Value>, side: SnapshotSide) -> Result<T> {
    let value = match raw {
        None | Some(Value::Null) => return Err(LineageError::SnapshotMissing { side }),
        Some(Value::String(text)) => {
            if text.trim().is_empty() {
                return Err(LineageError::SnapshotMissing { side });
            }
            serde_json::from_str::<Value>(text).map_err(|e| LineageError::SnapshotMalformed {
                side,
                reason: format!("not valid JSON: {}", e),
            })?
        }
        Some(other) => other.clone(),
    };

    if !value.is_object() {
        return Err(LineageError::SnapshotMalformed {
            side,
            reason: "expected a JSON object".to_string(),
        });
    }

    serde_json::from_value(value).map_err(|e| LineageError::SnapshotMalformed {
        side,
        reason: e.to_string(),
    })
}

/// The snapshots an action needs, decoded
#[derive(Debug, Clone, PartialEq)]
pub enum Transition<T> {
    Created(T),
    Updated { old: T, new: T },
    Deleted(T),
}

impl<T: DeserializeOwned> Transition<T> {
    /// Create needs the new snapshot, Delete the old one, Update both.
    ///
    /// # Errors
    ///
    /// Propagates the first [`decode`] failure.
    pub fn decode(entry: &AuditEntry) -> Result<Self> {
        let old = || decode(entry.old_snapshot.as_ref(), SnapshotSide::Old);
        let new = || decode(entry.new_snapshot.as_ref(), SnapshotSide::New);
        Ok(match entry.action {
            AuditAction::Create => Transition::Created(new()?),
            AuditAction::Update => Transition::Updated {
                old: old()?,
                new: new()?,
            },
            AuditAction::Delete => Transition::Deleted(old()?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_accepts_json_text() {
        let raw = json!("{\"title\":\"MSc\",\"achieveDate\":\"2025-05-15\"}");
        let snap: AchievementSnapshot = decode(Some(&raw), SnapshotSide::New).unwrap();
        assert_eq!(text_of(&snap.title).as_deref(), Some("MSc"));
    }

    #[test]
    fn test_decode_missing_and_null() {
        let err = decode::<AchievementSnapshot>(None, SnapshotSide::New).unwrap_err();
        assert_eq!(err, LineageError::SnapshotMissing { side: SnapshotSide::New });
        let err = decode::<AchievementSnapshot>(Some(&Value::Null), SnapshotSide::Old).unwrap_err();
        assert_eq!(err, LineageError::SnapshotMissing { side: SnapshotSide::Old });
    }

    #[test]
    fn test_decode_rejects_non_objects() {
        let err = decode::<GenericSnapshot>(Some(&json!("not json")), SnapshotSide::New).unwrap_err();
        assert!(matches!(err, LineageError::SnapshotMalformed { .. }));
        let err = decode::<GenericSnapshot>(Some(&json!([1, 2])), SnapshotSide::New).unwrap_err();
        assert!(matches!(err, LineageError::SnapshotMalformed { .. }));
    }

    #[test]
    fn test_lenient_scalars() {
        let snap: PersonSnapshot = serde_json::from_value(json!({
            "name": "Ada",
            "generation": 3,
            "isAdopted": "yes",
            "parentId": null
        }))
        .unwrap();
        assert_eq!(text_of(&snap.generation).as_deref(), Some("3"));
        assert_eq!(snap.is_adopted.as_ref().and_then(Scalar::flag), Some(true));
        assert!(!snap.has_parent());
    }

    #[test]
    fn test_relationship_ids_and_marriage_alias() {
        let snap: RelationshipSnapshot = serde_json::from_value(json!({
            "familyMember1Id": 4,
            "familyMember2Id": "9",
            "marriageDate": "2001-06-02"
        }))
        .unwrap();
        let ids: Vec<&str> = snap.partners().map(|id| id.as_str()).collect();
        assert_eq!(ids, vec!["4", "9"]);
        assert_eq!(text_of(&snap.start_date).as_deref(), Some("2001-06-02"));
    }

    #[test]
    fn test_causes_list_or_string() {
        let list: CauseList = serde_json::from_value(json!(["Stroke", " ", null, "Age"])).unwrap();
        assert_eq!(list.joined().as_deref(), Some("Stroke, Age"));
        let one: CauseList = serde_json::from_value(json!("Heart failure")).unwrap();
        assert_eq!(one.joined().as_deref(), Some("Heart failure"));
    }
}
