//! Validation verdict types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Form field a validation issue is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKey {
    BirthDate,
    Residences,
    Occupations,
    RelationshipDate,
    /// The relationship as a whole (counterpart conflicts)
    Relationship,
    DateOfPassing,
    Causes,
    BurialPlaces,
}

impl FieldKey {
    /// Stable key a form uses to place the message next to its input
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKey::BirthDate => "birthDate",
            FieldKey::Residences => "residences",
            FieldKey::Occupations => "occupations",
            FieldKey::RelationshipDate => "relationshipDate",
            FieldKey::Relationship => "relationship",
            FieldKey::DateOfPassing => "dateOfPassing",
            FieldKey::Causes => "causes",
            FieldKey::BurialPlaces => "burialPlaces",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One user-correctable problem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub field: FieldKey,
    /// Zero-based row within a list field, when the issue is about one row
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(field: FieldKey, message: impl Into<String>) -> Self {
        Self {
            field,
            index: None,
            message: message.into(),
        }
    }

    pub fn at(field: FieldKey, index: usize, message: impl Into<String>) -> Self {
        Self {
            field,
            index: Some(index),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index {
            Some(i) => write!(f, "{}[{}]: {}", self.field, i, self.message),
            None => write!(f, "{}: {}", self.field, self.message),
        }
    }
}

/// Outcome of validating a draft
///
/// `Invalid` always holds at least one issue; build it through
/// [`ValidationResult::from_issues`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "issues", rename_all = "snake_case")]
pub enum ValidationResult {
    Valid,
    Invalid(Vec<ValidationIssue>),
}

impl ValidationResult {
    pub fn from_issues(issues: Vec<ValidationIssue>) -> Self {
        if issues.is_empty() {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(issues)
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    /// All issues in report order (empty when valid)
    pub fn issues(&self) -> &[ValidationIssue] {
        match self {
            ValidationResult::Valid => &[],
            ValidationResult::Invalid(issues) => issues,
        }
    }

    pub fn issues_for(&self, field: FieldKey) -> impl Iterator<Item = &ValidationIssue> {
        self.issues().iter().filter(move |i| i.field == field)
    }

    /// The message a form shows next to `field`, if any
    pub fn message_for(&self, field: FieldKey) -> Option<&str> {
        self.issues_for(field).next().map(|i| i.message.as_str())
    }

    /// Append the issues of another result, keeping order
    pub fn merge(self, other: ValidationResult) -> ValidationResult {
        let mut issues = match self {
            ValidationResult::Valid => Vec::new(),
            ValidationResult::Invalid(issues) => issues,
        };
        issues.extend(other.issues().iter().cloned());
        ValidationResult::from_issues(issues)
    }
}
