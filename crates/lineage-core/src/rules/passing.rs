//! Passing and burial checks.
//!
//! Burial starts are compared inclusively: a burial on the day of passing is
//! legal, unlike residence and occupation starts which must fall strictly
//! after their boundary.

use super::issue::{FieldKey, ValidationIssue};
use crate::config::BURIAL_START_BOUNDARY;
use crate::model::{DraftDate, PassingDraft};

/// Collect passing-record issues: at most one per field.
pub fn check_passing(passing: &PassingDraft) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    let date_of_passing = match &passing.date_of_passing {
        DraftDate::Valid(date) => Some(*date),
        DraftDate::Missing => {
            issues.push(ValidationIssue::new(
                FieldKey::DateOfPassing,
                "Date of passing is required.",
            ));
            None
        }
        DraftDate::Malformed(_) => {
            issues.push(ValidationIssue::new(
                FieldKey::DateOfPassing,
                "Date of passing is not a valid date.",
            ));
            None
        }
    };

    if passing.named_causes().next().is_none() {
        issues.push(ValidationIssue::new(
            FieldKey::Causes,
            "At least one cause of passing is required.",
        ));
    }

    if let Some(issue) = check_burials(passing, date_of_passing) {
        issues.push(issue);
    }

    issues
}

fn check_burials(
    passing: &PassingDraft,
    date_of_passing: Option<chrono::NaiveDate>,
) -> Option<ValidationIssue> {
    let located = || {
        passing
            .burial_places
            .iter()
            .enumerate()
            .filter(|(_, place)| place.has_location())
    };

    let missing_start = located().find_map(|(i, place)| match &place.start_date {
        DraftDate::Valid(_) => None,
        DraftDate::Missing => Some(ValidationIssue::at(
            FieldKey::BurialPlaces,
            i,
            format!("Burial place {} must have a start date.", i + 1),
        )),
        DraftDate::Malformed(_) => Some(ValidationIssue::at(
            FieldKey::BurialPlaces,
            i,
            format!("Burial place {} start date is not a valid date.", i + 1),
        )),
    });
    if missing_start.is_some() {
        return missing_start;
    }

    let passed = date_of_passing?;
    located().find_map(|(i, place)| {
        let start = place.start_date.as_valid()?;
        if BURIAL_START_BOUNDARY.admits(&passed, &start) {
            None
        } else {
            Some(ValidationIssue::at(
                FieldKey::BurialPlaces,
                i,
                format!(
                    "Date of passing must be on or before the burial start date (burial place {}).",
                    i + 1
                ),
            ))
        }
    })
}
