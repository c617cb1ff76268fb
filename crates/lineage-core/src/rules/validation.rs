use std::time::Instant;

use chrono::NaiveDate;

use super::intervals::{check_intervals, IntervalRole};
use super::issue::{FieldKey, ValidationIssue, ValidationResult};
use super::passing::check_passing;
use super::relationship::{check_relationship_date, check_spouse_exclusivity};
use crate::config::ValidatorConfig;
use crate::model::{DraftDate, PassingDraft, PersonDraft, SpouseExclusivityContext};
use crate::{log_op_end, log_op_start};

/// Chronology rules for a person's timeline
///
/// One instance holds the configuration; every call is independent and
/// side-effect free apart from logging.
#[derive(Debug, Clone, Default)]
pub struct TimelineValidator {
    config: ValidatorConfig,
}

impl TimelineValidator {
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validate a person draft, optionally with a passing record and the
    /// counterpart's relationships
    ///
    /// Issues are reported in form order:
    ///
    /// 1. Birth date (required, well-formed)
    /// 2. Residences, then occupations (first row problem and first
    ///    chronology break per sequence)
    /// 3. Relationship date, then spouse exclusivity (checked independently)
    /// 4. Passing record (one problem per field)
    ///
    /// Never fails: malformed input shows up as issues.
    pub fn validate(
        &self,
        person: &PersonDraft,
        passing: Option<&PassingDraft>,
        exclusivity: Option<&SpouseExclusivityContext>,
    ) -> ValidationResult {
        let start = Instant::now();
        log_op_start!(
            "validate",
            residence_count = person.residences.len(),
            occupation_count = person.occupations.len(),
            has_passing = passing.is_some()
        );

        let mut issues = Vec::new();

        let (birth, birth_issue) = birth_date(&person.birth_date);
        issues.extend(birth_issue);

        issues.extend(check_intervals(
            IntervalRole::Residence,
            &person.residences,
            birth,
        ));
        issues.extend(check_intervals(
            IntervalRole::Occupation,
            &person.occupations,
            birth,
        ));

        if let Some(claim) = &person.relationship {
            issues.extend(check_relationship_date(
                claim,
                birth,
                self.config.min_spouse_age_years,
            ));
            if let Some(ctx) = exclusivity {
                issues.extend(check_spouse_exclusivity(claim, ctx));
            }
        }

        if let Some(passing) = passing {
            issues.extend(check_passing(passing));
        }

        for issue in &issues {
            tracing::debug!(field = %issue.field, index = ?issue.index, message = %issue.message, "validation issue");
        }
        log_op_end!(
            "validate",
            duration_ms = start.elapsed().as_millis() as u64,
            issue_count = issues.len()
        );
        ValidationResult::from_issues(issues)
    }

    /// Validate a passing record on its own
    pub fn validate_passing(&self, passing: &PassingDraft) -> ValidationResult {
        let start = Instant::now();
        log_op_start!("validate_passing", burial_count = passing.burial_places.len());

        let issues = check_passing(passing);

        log_op_end!(
            "validate_passing",
            duration_ms = start.elapsed().as_millis() as u64,
            issue_count = issues.len()
        );
        ValidationResult::from_issues(issues)
    }
}

fn birth_date(draft: &DraftDate) -> (Option<NaiveDate>, Option<ValidationIssue>) {
    match draft {
        DraftDate::Valid(date) => (Some(*date), None),
        DraftDate::Missing => (
            None,
            Some(ValidationIssue::new(
                FieldKey::BirthDate,
                "Birth date is required.",
            )),
        ),
        DraftDate::Malformed(_) => (
            None,
            Some(ValidationIssue::new(
                FieldKey::BirthDate,
                "Birth date is not a valid date.",
            )),
        ),
    }
}

/// Validate with the default configuration
pub fn validate(
    person: &PersonDraft,
    passing: Option<&PassingDraft>,
    exclusivity: Option<&SpouseExclusivityContext>,
) -> ValidationResult {
    TimelineValidator::default().validate(person, passing, exclusivity)
}

/// Validate a passing record with the default configuration
pub fn validate_passing(passing: &PassingDraft) -> ValidationResult {
    TimelineValidator::default().validate_passing(passing)
}
