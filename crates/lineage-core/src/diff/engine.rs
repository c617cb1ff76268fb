//! Audit entry interpretation.
//!
//! The core entry point is [`describe`], which reads the snapshots an
//! [`AuditEntry`] carries and produces an [`AuditDescription`].

use std::time::Instant;

use super::format::{format_date, format_flag, humanize_key, render_value};
use super::human_summary::{degraded_summary, summarize, SummaryFacts};
use super::model::{AuditDescription, ChangeDetail, EntityKind, ValueKind};
use super::resolve::{display_name, NameResolver};
use super::snapshot::{
    decode, text_of, AchievementSnapshot, CauseList, GenericSnapshot, OccupationSnapshot,
    PassingSnapshot, PersonSnapshot, RelationshipSnapshot, Scalar, Transition,
};
use crate::errors::{ExError, Result, SnapshotSide};
use crate::model::{AuditAction, AuditEntry, PersonRef};
use crate::{log_op_degraded, log_op_end, log_op_start};

/// Label, rendered value and kind of one field
type Row = (&'static str, Option<String>, ValueKind);

/// Describe one audit entry.
///
/// Never fails. When the snapshots the action needs are missing or
/// unreadable the description has no changes and, for feed kinds, the
/// summary [`NO_DETAIL_SUMMARY`](super::human_summary::NO_DETAIL_SUMMARY).
pub fn describe<R: NameResolver + ?Sized>(entry: &AuditEntry, resolver: &R) -> AuditDescription {
    let start = Instant::now();
    log_op_start!(
        "describe",
        entity_type = %entry.entity_type,
        action = %entry.action
    );

    let kind = EntityKind::parse(&entry.entity_type);
    let description = match interpret(kind, entry, resolver) {
        Ok(description) => description,
        Err(err) => {
            let ex_err = ExError::from(err)
                .with_op("describe")
                .with_entity_type(entry.entity_type.clone());
            log_op_degraded!("describe", ex_err, entity_type = %entry.entity_type);
            AuditDescription {
                changes: Vec::new(),
                summary: degraded_summary(kind),
            }
        }
    };

    log_op_end!(
        "describe",
        duration_ms = start.elapsed().as_millis() as u64,
        change_count = description.changes.len(),
        has_summary = description.summary.is_some()
    );
    description
}

fn interpret<R: NameResolver + ?Sized>(
    kind: EntityKind,
    entry: &AuditEntry,
    resolver: &R,
) -> Result<AuditDescription> {
    match kind {
        EntityKind::Person => describe_person(entry),
        EntityKind::Achievement => describe_achievement(entry),
        EntityKind::Relationship => describe_relationship(entry, resolver),
        EntityKind::Occupation => describe_occupation(entry),
        EntityKind::PassingRecord => describe_passing(entry),
        EntityKind::Unrecognized => describe_generic(entry),
    }
}

/// People an entry refers to by id only
///
/// Only relationship creations render partner names; anything else, or an
/// unreadable snapshot, needs no lookups.
pub(crate) fn referenced_people(entry: &AuditEntry) -> Vec<PersonRef> {
    if EntityKind::parse(&entry.entity_type) != EntityKind::Relationship
        || entry.action != AuditAction::Create
    {
        return Vec::new();
    }
    let Ok(snapshot) =
        decode::<RelationshipSnapshot>(entry.new_snapshot.as_ref(), SnapshotSide::New)
    else {
        return Vec::new();
    };

    let mut ids: Vec<PersonRef> = Vec::new();
    for id in snapshot.partners() {
        if !ids.contains(id) {
            ids.push(id.clone());
        }
    }
    ids
}

// ---------------------------------------------------------------------------
// Row helpers
// ---------------------------------------------------------------------------

fn text_row(label: &'static str, field: &Option<Scalar>) -> Row {
    (label, text_of(field), ValueKind::Text)
}

fn date_row(label: &'static str, field: &Option<Scalar>) -> Row {
    (
        label,
        text_of(field).map(|raw| format_date(&raw)),
        ValueKind::Date,
    )
}

fn flag_row(label: &'static str, field: &Option<Scalar>) -> Row {
    (
        label,
        field.as_ref().and_then(Scalar::flag).map(format_flag),
        ValueKind::Boolean,
    )
}

fn added(rows: Vec<Row>) -> Vec<ChangeDetail> {
    rows.into_iter()
        .filter_map(|(label, value, kind)| value.map(|v| ChangeDetail::added(label, v, kind)))
        .collect()
}

fn removed(rows: Vec<Row>) -> Vec<ChangeDetail> {
    rows.into_iter()
        .filter_map(|(label, value, kind)| value.map(|v| ChangeDetail::removed(label, v, kind)))
        .collect()
}

fn compared(old: Vec<Row>, new: Vec<Row>) -> Vec<ChangeDetail> {
    old.into_iter()
        .zip(new)
        .filter_map(|((label, before, kind), (_, after, _))| {
            ChangeDetail::between(label, before, after, kind)
        })
        .collect()
}

/// Create lists the populated fields, Delete lists the same fields as
/// removed, Update compares a possibly different field list.
fn mirrored<T>(
    transition: &Transition<T>,
    create_rows: impl Fn(&T) -> Vec<Row>,
    update_rows: impl Fn(&T) -> Vec<Row>,
) -> Vec<ChangeDetail> {
    match transition {
        Transition::Created(snapshot) => added(create_rows(snapshot)),
        Transition::Updated { old, new } => compared(update_rows(old), update_rows(new)),
        Transition::Deleted(snapshot) => removed(create_rows(snapshot)),
    }
}

// ---------------------------------------------------------------------------
// Per-entity interpretation
// ---------------------------------------------------------------------------

fn person_rows(s: &PersonSnapshot) -> Vec<Row> {
    vec![
        text_row("Name", &s.name),
        date_row("Birthday", &s.birthday),
        text_row("Gender", &s.gender),
        text_row("Address", &s.address),
        text_row("Generation", &s.generation),
        flag_row("Adopted", &s.is_adopted),
    ]
}

fn person_update_rows(s: &PersonSnapshot) -> Vec<Row> {
    let mut rows = person_rows(s);
    rows.push(text_row("Profile Picture", &s.profile_picture));
    rows
}

fn describe_person(entry: &AuditEntry) -> Result<AuditDescription> {
    let transition = Transition::<PersonSnapshot>::decode(entry)?;
    let facts = SummaryFacts {
        has_parent: matches!(&transition, Transition::Created(s) if s.has_parent()),
        ..SummaryFacts::default()
    };
    Ok(AuditDescription {
        changes: mirrored(&transition, person_rows, person_update_rows),
        summary: summarize(EntityKind::Person, entry.action, facts),
    })
}

fn achievement_rows(s: &AchievementSnapshot) -> Vec<Row> {
    let mut rows = vec![text_row("Family Member", &s.family_member_name)];
    rows.extend(achievement_update_rows(s));
    rows
}

fn achievement_update_rows(s: &AchievementSnapshot) -> Vec<Row> {
    vec![
        text_row("Title", &s.title),
        date_row("Achievement Date", &s.achieve_date),
        text_row("Description", &s.description),
    ]
}

fn describe_achievement(entry: &AuditEntry) -> Result<AuditDescription> {
    let transition = Transition::<AchievementSnapshot>::decode(entry)?;
    Ok(AuditDescription {
        changes: mirrored(&transition, achievement_rows, achievement_update_rows),
        summary: summarize(EntityKind::Achievement, entry.action, SummaryFacts::default()),
    })
}

fn occupation_rows(s: &OccupationSnapshot) -> Vec<Row> {
    vec![
        text_row("Job Title", &s.job_title),
        date_row("Start Date", &s.start_date),
        date_row("End Date", &s.end_date),
    ]
}

fn describe_occupation(entry: &AuditEntry) -> Result<AuditDescription> {
    let transition = Transition::<OccupationSnapshot>::decode(entry)?;
    Ok(AuditDescription {
        changes: mirrored(&transition, occupation_rows, occupation_rows),
        summary: summarize(EntityKind::Occupation, entry.action, SummaryFacts::default()),
    })
}

/// Relationship records only carry detail on creation.
fn describe_relationship<R: NameResolver + ?Sized>(
    entry: &AuditEntry,
    resolver: &R,
) -> Result<AuditDescription> {
    let transition = Transition::<RelationshipSnapshot>::decode(entry)?;
    let (changes, facts) = match &transition {
        Transition::Created(s) => {
            let rows = vec![
                (
                    "Partner 1",
                    s.family_member1_id
                        .as_ref()
                        .map(|id| display_name(resolver, id)),
                    ValueKind::Text,
                ),
                (
                    "Partner 2",
                    s.family_member2_id
                        .as_ref()
                        .map(|id| display_name(resolver, id)),
                    ValueKind::Text,
                ),
                date_row("Marriage Date", &s.start_date),
            ];
            (added(rows), SummaryFacts::default())
        }
        Transition::Updated { old, new } => (
            Vec::new(),
            SummaryFacts {
                divorce_recorded: !old.is_divorced() && new.is_divorced(),
                ..SummaryFacts::default()
            },
        ),
        Transition::Deleted(_) => (Vec::new(), SummaryFacts::default()),
    };
    Ok(AuditDescription {
        changes,
        summary: summarize(EntityKind::Relationship, entry.action, facts),
    })
}

/// Passing records only carry detail on creation.
fn describe_passing(entry: &AuditEntry) -> Result<AuditDescription> {
    let transition = Transition::<PassingSnapshot>::decode(entry)?;
    let changes = match &transition {
        Transition::Created(s) => passing_created(s),
        Transition::Updated { .. } | Transition::Deleted(_) => Vec::new(),
    };
    Ok(AuditDescription {
        changes,
        summary: summarize(EntityKind::PassingRecord, entry.action, SummaryFacts::default()),
    })
}

fn passing_created(s: &PassingSnapshot) -> Vec<ChangeDetail> {
    let mut changes = added(vec![
        text_row("Family Member", &s.family_member_name),
        date_row("Date of Passing", &s.date_of_passing),
        (
            "Causes",
            s.causes.as_ref().and_then(CauseList::joined),
            ValueKind::Text,
        ),
    ]);

    for (i, place) in s.burial_places.iter().flatten().enumerate() {
        let n = i + 1;
        if let Some(location) = text_of(&place.location) {
            changes.push(ChangeDetail::added(
                format!("Burial Place {} – Location", n),
                location,
                ValueKind::Text,
            ));
        }
        if let Some(start) = text_of(&place.start_date) {
            changes.push(ChangeDetail::added(
                format!("Burial Place {} – Start Date", n),
                format_date(&start),
                ValueKind::Date,
            ));
        }
    }
    changes
}

/// Key-by-key rendering for entity types without a schema.
fn describe_generic(entry: &AuditEntry) -> Result<AuditDescription> {
    let transition = Transition::<GenericSnapshot>::decode(entry)?;
    let changes = match &transition {
        Transition::Created(s) => s
            .iter()
            .filter_map(|(key, value)| {
                render_value(value)
                    .map(|(text, kind)| ChangeDetail::added(humanize_key(key), text, kind))
            })
            .collect(),
        Transition::Deleted(s) => s
            .iter()
            .filter_map(|(key, value)| {
                render_value(value)
                    .map(|(text, kind)| ChangeDetail::removed(humanize_key(key), text, kind))
            })
            .collect(),
        Transition::Updated { old, new } => generic_update(old, new),
    };
    Ok(AuditDescription {
        changes,
        summary: summarize(EntityKind::Unrecognized, entry.action, SummaryFacts::default()),
    })
}

fn generic_update(old: &GenericSnapshot, new: &GenericSnapshot) -> Vec<ChangeDetail> {
    let keys = old
        .keys()
        .chain(new.keys().filter(|key| !old.contains_key(*key)));

    keys.filter_map(|key| {
        let (before, after) = (old.get(key), new.get(key));
        if before == after {
            return None;
        }
        let before = before.and_then(render_value);
        let after = after.and_then(render_value);
        let kind = after
            .as_ref()
            .or(before.as_ref())
            .map_or(ValueKind::Text, |(_, kind)| *kind);
        ChangeDetail::between(
            humanize_key(key),
            before.map(|(text, _)| text),
            after.map(|(text, _)| text),
            kind,
        )
    })
    .collect()
}
