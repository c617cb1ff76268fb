//! Residence and occupation interval checks.
//!
//! Both sequences follow the same rules; the role only changes the field key
//! and the wording. Row checks (start present, start after birth) report the
//! first failing row, and the chronology walk reports its first break on its
//! own, so a sequence yields at most two issues.

use chrono::NaiveDate;

use super::issue::{FieldKey, ValidationIssue};
use crate::config::INTERVAL_START_BOUNDARY;
use crate::model::{DraftDate, Interval};

/// Which interval sequence is being checked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalRole {
    Residence,
    Occupation,
}

impl IntervalRole {
    pub fn field(self) -> FieldKey {
        match self {
            IntervalRole::Residence => FieldKey::Residences,
            IntervalRole::Occupation => FieldKey::Occupations,
        }
    }

    fn noun(self) -> &'static str {
        match self {
            IntervalRole::Residence => "residence",
            IntervalRole::Occupation => "occupation",
        }
    }

    /// "Residence 2", counting rows from one
    fn row(self, index: usize) -> String {
        let title = match self {
            IntervalRole::Residence => "Residence",
            IntervalRole::Occupation => "Occupation",
        };
        format!("{} {}", title, index + 1)
    }

    fn issue(self, index: usize, message: String) -> ValidationIssue {
        ValidationIssue::at(self.field(), index, message)
    }
}

/// Check one interval sequence against the birth date.
///
/// `birth` is `None` when the birth date itself is unusable; the comparison
/// against it is then skipped (the birth date problem is reported on its own).
pub fn check_intervals(
    role: IntervalRole,
    intervals: &[Interval],
    birth: Option<NaiveDate>,
) -> Vec<ValidationIssue> {
    if !intervals.iter().any(Interval::has_location) {
        return vec![ValidationIssue::new(
            role.field(),
            format!("At least one {} entry is required.", role.noun()),
        )];
    }

    let row_issue = find_missing_start(role, intervals).or_else(|| {
        birth.and_then(|birth| find_start_not_after_birth(role, intervals, birth))
    });

    row_issue
        .into_iter()
        .chain(find_chronology_break(role, intervals))
        .collect()
}

fn find_missing_start(role: IntervalRole, intervals: &[Interval]) -> Option<ValidationIssue> {
    intervals
        .iter()
        .enumerate()
        .filter(|(_, interval)| interval.has_location())
        .find_map(|(i, interval)| match &interval.start_date {
            DraftDate::Valid(_) => None,
            DraftDate::Missing => {
                Some(role.issue(i, format!("{} must have a start date.", role.row(i))))
            }
            DraftDate::Malformed(_) => Some(role.issue(
                i,
                format!("{} start date is not a valid date.", role.row(i)),
            )),
        })
}

fn find_start_not_after_birth(
    role: IntervalRole,
    intervals: &[Interval],
    birth: NaiveDate,
) -> Option<ValidationIssue> {
    intervals
        .iter()
        .enumerate()
        .filter(|(_, interval)| interval.has_location())
        .find_map(|(i, interval)| {
            let start = interval.start_date.as_valid()?;
            if INTERVAL_START_BOUNDARY.admits(&birth, &start) {
                None
            } else {
                Some(role.issue(
                    i,
                    format!("{} start date must be after birth date.", role.row(i)),
                ))
            }
        })
}

/// Walk `(previous, current)` pairs and stop at the first break.
fn find_chronology_break(role: IntervalRole, intervals: &[Interval]) -> Option<ValidationIssue> {
    for (i, pair) in intervals.windows(2).enumerate() {
        let (previous, current) = (&pair[0], &pair[1]);
        let current_index = i + 1;

        if !current.has_location() {
            continue;
        }
        let Some(start) = current.start_date.as_valid() else {
            continue;
        };

        let previous_end = match &previous.end_date {
            DraftDate::Valid(end) => *end,
            DraftDate::Missing => {
                return Some(role.issue(
                    i,
                    format!(
                        "Previous entry must have an end date ({}).",
                        role.row(i).to_lowercase()
                    ),
                ));
            }
            DraftDate::Malformed(_) => {
                return Some(role.issue(
                    i,
                    format!("{} end date is not a valid date.", role.row(i)),
                ));
            }
        };

        if !INTERVAL_START_BOUNDARY.admits(&previous_end, &start) {
            return Some(role.issue(
                current_index,
                format!(
                    "{} start date must be after the end date of the previous entry.",
                    role.row(current_index)
                ),
            ));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_blank_rows_count_as_empty() {
        let rows = vec![Interval::new("  ", ymd(2000, 1, 1))];
        let issues = check_intervals(IntervalRole::Occupation, &rows, Some(ymd(1980, 1, 1)));
        assert_eq!(issues.len(), 1);
        let issue = &issues[0];
        assert_eq!(issue.field, FieldKey::Occupations);
        assert_eq!(issue.index, None);
        assert_eq!(issue.message, "At least one occupation entry is required.");
    }

    #[test]
    fn test_blank_row_without_start_is_ignored() {
        let rows = vec![
            Interval::new("York", ymd(2000, 1, 1)).ending(ymd(2001, 1, 1)),
            Interval::new("", DraftDate::Missing),
        ];
        assert!(check_intervals(IntervalRole::Residence, &rows, Some(ymd(1980, 1, 1))).is_empty());
    }

    #[test]
    fn test_row_numbers_are_one_based() {
        let rows = vec![
            Interval::new("York", ymd(2000, 1, 1)).ending(ymd(2001, 1, 1)),
            Interval::new("Hull", DraftDate::Missing),
        ];
        let issues = check_intervals(IntervalRole::Residence, &rows, None);
        let issue = &issues[0];
        assert_eq!(issue.index, Some(1));
        assert_eq!(issue.message, "Residence 2 must have a start date.");
    }

    #[test]
    fn test_skips_birth_comparison_without_birth() {
        let rows = vec![Interval::new("York", ymd(1900, 1, 1))];
        assert!(check_intervals(IntervalRole::Residence, &rows, None).is_empty());
    }

    #[test]
    fn test_malformed_previous_end_reported_on_previous_row() {
        let rows = vec![
            Interval::new("York", ymd(2000, 1, 1)).ending("soon"),
            Interval::new("Hull", ymd(2002, 1, 1)),
        ];
        let issues = check_intervals(IntervalRole::Residence, &rows, Some(ymd(1980, 1, 1)));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].index, Some(0));
        assert!(issues[0].message.contains("not a valid date"));
    }

    #[test]
    fn test_open_previous_reported_when_next_starts_before_birth() {
        let rows = vec![
            Interval::new("Leeds", ymd(1960, 1, 1)),
            Interval::new("York", ymd(1940, 1, 1)),
        ];
        let issues = check_intervals(IntervalRole::Residence, &rows, Some(ymd(1950, 4, 12)));

        let messages: Vec<&str> = issues.iter().map(|i| i.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Residence 2 start date must be after birth date.",
                "Previous entry must have an end date (residence 1).",
            ]
        );
        assert_eq!(issues[1].index, Some(0));
    }
}
