use chrono::{Months, NaiveDate};

use super::issue::{FieldKey, ValidationIssue};
use crate::config::{PARENT_RELATIONSHIP_BOUNDARY, SPOUSE_RELATIONSHIP_BOUNDARY};
use crate::model::{DraftDate, RelationshipClaim, RelationshipKind, SpouseExclusivityContext};

/// Earliest date a spouse relationship may be established.
///
/// Adds calendar years, so a 29 February birth lands on 28 February of a
/// non-leap target year. `None` only when the result leaves chrono's range.
pub fn min_spouse_date(birth: NaiveDate, years: u32) -> Option<NaiveDate> {
    birth.checked_add_months(Months::new(years.checked_mul(12)?))
}

/// Check the relationship date of a claim against the birth date.
pub fn check_relationship_date(
    claim: &RelationshipClaim,
    birth: Option<NaiveDate>,
    min_spouse_age_years: u32,
) -> Option<ValidationIssue> {
    let established = match &claim.established_date {
        DraftDate::Valid(date) => *date,
        DraftDate::Missing => {
            return Some(ValidationIssue::new(
                FieldKey::RelationshipDate,
                "Relationship date is required.",
            ));
        }
        DraftDate::Malformed(_) => {
            return Some(ValidationIssue::new(
                FieldKey::RelationshipDate,
                "Relationship date is not a valid date.",
            ));
        }
    };
    let birth = birth?;

    match claim.kind {
        RelationshipKind::Parent => {
            if PARENT_RELATIONSHIP_BOUNDARY.admits(&birth, &established) {
                None
            } else {
                Some(ValidationIssue::new(
                    FieldKey::RelationshipDate,
                    "Relationship date must be on or after birth date.",
                ))
            }
        }
        RelationshipKind::Spouse => {
            let admitted = min_spouse_date(birth, min_spouse_age_years)
                .is_some_and(|floor| SPOUSE_RELATIONSHIP_BOUNDARY.admits(&floor, &established));
            if admitted {
                None
            } else {
                Some(ValidationIssue::new(
                    FieldKey::RelationshipDate,
                    format!(
                        "Relationship date must be at least {} years after birth date.",
                        min_spouse_age_years
                    ),
                ))
            }
        }
    }
}

/// A spouse claim must not give the counterpart a second active marriage.
pub fn check_spouse_exclusivity(
    claim: &RelationshipClaim,
    context: &SpouseExclusivityContext,
) -> Option<ValidationIssue> {
    if claim.kind != RelationshipKind::Spouse {
        return None;
    }
    context
        .conflicting_spouse(claim.relationship_id.as_ref())
        .map(|existing| {
            tracing::debug!(
                counterpart = %claim.counterpart,
                existing_relationship = %existing.id,
                "spouse exclusivity conflict"
            );
            ValidationIssue::new(
                FieldKey::Relationship,
                "Counterpart already has an active spouse relationship; record a divorce first.",
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_min_spouse_date_is_calendar_years() {
        assert_eq!(min_spouse_date(ymd(1990, 6, 15), 7), Some(ymd(1997, 6, 15)));
    }

    #[test]
    fn test_min_spouse_date_leap_day_clamps() {
        assert_eq!(min_spouse_date(ymd(2000, 2, 29), 7), Some(ymd(2007, 2, 28)));
        assert_eq!(min_spouse_date(ymd(2000, 2, 29), 8), Some(ymd(2008, 2, 29)));
    }

    #[test]
    fn test_parent_same_day_is_accepted() {
        let claim = RelationshipClaim::parent("p1", ymd(1990, 6, 15));
        assert!(check_relationship_date(&claim, Some(ymd(1990, 6, 15)), 7).is_none());
    }

    #[test]
    fn test_missing_date_reported_even_without_birth() {
        let claim = RelationshipClaim::spouse("p1", DraftDate::Missing);
        let issue = check_relationship_date(&claim, None, 7).unwrap();
        assert_eq!(issue.message, "Relationship date is required.");
    }

    #[test]
    fn test_exclusivity_ignores_parent_claims() {
        use crate::model::{ExistingRelationship, RecordId};
        let ctx = SpouseExclusivityContext::new(vec![ExistingRelationship {
            id: RecordId::from("r1"),
            kind: RelationshipKind::Spouse,
            divorce_date: DraftDate::Missing,
        }]);
        let claim = RelationshipClaim::parent("p1", ymd(2000, 1, 1));
        assert!(check_spouse_exclusivity(&claim, &ctx).is_none());
    }
}
