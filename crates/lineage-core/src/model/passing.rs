//! Passing and burial draft model

use super::date::DraftDate;
use serde::{Deserialize, Serialize};

/// One place a person was buried or interred, from a given date
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BurialPlace {
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub start_date: DraftDate,
}

impl BurialPlace {
    pub fn new(location: impl Into<String>, start: impl Into<DraftDate>) -> Self {
        Self {
            location: location.into(),
            start_date: start.into(),
        }
    }

    pub fn has_location(&self) -> bool {
        !self.location.trim().is_empty()
    }
}

/// Death record as entered on a form, validated independently of the person
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassingDraft {
    #[serde(default)]
    pub date_of_passing: DraftDate,
    #[serde(default)]
    pub causes: Vec<String>,
    #[serde(default)]
    pub burial_places: Vec<BurialPlace>,
}

impl PassingDraft {
    pub fn new(date_of_passing: impl Into<DraftDate>) -> Self {
        Self {
            date_of_passing: date_of_passing.into(),
            ..Self::default()
        }
    }

    pub fn with_cause(mut self, cause: impl Into<String>) -> Self {
        self.causes.push(cause.into());
        self
    }

    pub fn with_burial(mut self, place: BurialPlace) -> Self {
        self.burial_places.push(place);
        self
    }

    /// Causes with surrounding whitespace removed, blanks dropped
    pub fn named_causes(&self) -> impl Iterator<Item = &str> {
        self.causes
            .iter()
            .map(|c| c.trim())
            .filter(|c| !c.is_empty())
    }
}
