//! Person draft model
//!
//! A `PersonDraft` is built by a form immediately before validation and
//! discarded afterwards. It carries the biographical timeline the validator
//! checks: birth, residences, occupations and at most one relationship claim.

use super::date::DraftDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a stored record (person or relationship)
///
/// Stores hand these out as integers or strings; both deserialize to the
/// same textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawId", into = "String")]
pub struct RecordId(String);

/// Reference to a person in the tree
pub type PersonRef = RecordId;

/// Identifier of a stored relationship
pub type RelationshipId = RecordId;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Int(i64),
    Text(String),
}

impl From<RawId> for RecordId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Int(n) => RecordId(n.to_string()),
            RawId::Text(s) => RecordId(s),
        }
    }
}

impl From<RecordId> for String {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<i64> for RecordId {
    fn from(n: i64) -> Self {
        Self(n.to_string())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A contiguous period at a location or in a job
///
/// Only the last interval of a sequence may be open-ended.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interval {
    /// Place of residence or job title (blank means the row is unused)
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub start_date: DraftDate,
    #[serde(default)]
    pub end_date: DraftDate,
}

impl Interval {
    pub fn new(location: impl Into<String>, start: impl Into<DraftDate>) -> Self {
        Self {
            location: location.into(),
            start_date: start.into(),
            end_date: DraftDate::Missing,
        }
    }

    /// Close the interval
    pub fn ending(mut self, end: impl Into<DraftDate>) -> Self {
        self.end_date = end.into();
        self
    }

    pub fn has_location(&self) -> bool {
        !self.location.trim().is_empty()
    }
}

/// The two kinds of link a person can be added through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipKind {
    /// The person is added as the child of the counterpart
    Parent,
    /// The person is married to the counterpart
    Spouse,
}

/// A proposed Parent or Spouse link with the date it was established
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipClaim {
    pub kind: RelationshipKind,
    pub counterpart: PersonRef,
    #[serde(default)]
    pub established_date: DraftDate,
    /// Set when an existing relationship is being edited
    #[serde(default)]
    pub relationship_id: Option<RelationshipId>,
}

impl RelationshipClaim {
    pub fn parent(counterpart: impl Into<PersonRef>, established: impl Into<DraftDate>) -> Self {
        Self {
            kind: RelationshipKind::Parent,
            counterpart: counterpart.into(),
            established_date: established.into(),
            relationship_id: None,
        }
    }

    pub fn spouse(counterpart: impl Into<PersonRef>, established: impl Into<DraftDate>) -> Self {
        Self {
            kind: RelationshipKind::Spouse,
            counterpart: counterpart.into(),
            established_date: established.into(),
            relationship_id: None,
        }
    }

    /// Mark the claim as an edit of an already stored relationship
    pub fn editing(mut self, id: impl Into<RelationshipId>) -> Self {
        self.relationship_id = Some(id.into());
        self
    }
}

/// Biographical data for one person as entered on a form
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonDraft {
    #[serde(default)]
    pub birth_date: DraftDate,
    #[serde(default)]
    pub residences: Vec<Interval>,
    #[serde(default)]
    pub occupations: Vec<Interval>,
    #[serde(default)]
    pub relationship: Option<RelationshipClaim>,
}

impl PersonDraft {
    pub fn new(birth_date: impl Into<DraftDate>) -> Self {
        Self {
            birth_date: birth_date.into(),
            ..Self::default()
        }
    }

    pub fn with_residence(mut self, interval: Interval) -> Self {
        self.residences.push(interval);
        self
    }

    pub fn with_occupation(mut self, interval: Interval) -> Self {
        self.occupations.push(interval);
        self
    }

    pub fn with_relationship(mut self, claim: RelationshipClaim) -> Self {
        self.relationship = Some(claim);
        self
    }
}

/// A relationship already stored for the counterpart of a spouse claim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExistingRelationship {
    pub id: RelationshipId,
    pub kind: RelationshipKind,
    #[serde(default)]
    pub divorce_date: DraftDate,
}

impl ExistingRelationship {
    /// A spouse relationship with no recorded divorce
    pub fn is_active_spouse(&self) -> bool {
        self.kind == RelationshipKind::Spouse && self.divorce_date.is_missing()
    }
}

/// Read-only view of the counterpart's relationships, supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpouseExclusivityContext {
    #[serde(default)]
    pub counterpart_relationships: Vec<ExistingRelationship>,
}

impl SpouseExclusivityContext {
    pub fn new(counterpart_relationships: Vec<ExistingRelationship>) -> Self {
        Self {
            counterpart_relationships,
        }
    }

    /// The counterpart's active spouse relationship other than `editing`
    pub fn conflicting_spouse(
        &self,
        editing: Option<&RelationshipId>,
    ) -> Option<&ExistingRelationship> {
        self.counterpart_relationships
            .iter()
            .filter(|r| r.is_active_spouse())
            .find(|r| Some(&r.id) != editing)
    }
}
