//! Feed sentences for audit entries.

use super::model::EntityKind;
use crate::model::AuditAction;

/// Summary for an allow-listed entry whose snapshots could not be read
pub const NO_DETAIL_SUMMARY: &str = "No detailed change data available.";

/// Facts read from the snapshots that change the wording
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SummaryFacts {
    /// Person snapshot references a parent already in the tree
    pub has_parent: bool,
    /// Relationship update gained a divorce date
    pub divorce_recorded: bool,
}

/// Feed sentence for an entry, `None` for kinds kept out of the feed.
pub fn summarize(kind: EntityKind, action: AuditAction, facts: SummaryFacts) -> Option<String> {
    let sentence = match (kind, action) {
        (EntityKind::Person, AuditAction::Create) if facts.has_parent => "Birth recorded.",
        (EntityKind::Person, AuditAction::Create) => "New family member added.",
        (EntityKind::Person, AuditAction::Update) => "Family member details updated.",
        (EntityKind::Person, AuditAction::Delete) => "Family member removed.",

        (EntityKind::Achievement, AuditAction::Create) => "Achievement recorded.",
        (EntityKind::Achievement, AuditAction::Update) => "Achievement updated.",
        (EntityKind::Achievement, AuditAction::Delete) => "Achievement removed.",

        (EntityKind::Relationship, AuditAction::Create) => "Marriage recorded.",
        (EntityKind::Relationship, AuditAction::Update) if facts.divorce_recorded => {
            "Divorce recorded."
        }
        (EntityKind::Relationship, AuditAction::Update) => "Relationship updated.",
        (EntityKind::Relationship, AuditAction::Delete) => "Relationship removed.",

        (EntityKind::PassingRecord, AuditAction::Create) => "Passing recorded.",
        (EntityKind::PassingRecord, AuditAction::Update) => "Passing record updated.",
        (EntityKind::PassingRecord, AuditAction::Delete) => "Passing record removed.",

        (EntityKind::Occupation, _) | (EntityKind::Unrecognized, _) => return None,
    };
    Some(sentence.to_string())
}

/// Summary used when the snapshots could not be read
pub fn degraded_summary(kind: EntityKind) -> Option<String> {
    kind.is_summarized().then(|| NO_DETAIL_SUMMARY.to_string())
}
