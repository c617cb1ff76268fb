use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use lineage_core::model::{AuditAction, AuditEntry, Interval, PersonDraft};

/// Calendar date shorthand
#[allow(dead_code)]
pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Birth date shared by the timeline fixtures
#[allow(dead_code)]
pub fn birth() -> NaiveDate {
    ymd(1950, 4, 12)
}

/// A person that passes every rule: one residence and one occupation, both
/// starting after birth
#[allow(dead_code)]
pub fn settled_person() -> PersonDraft {
    PersonDraft::new(birth())
        .with_residence(Interval::new("Leeds", ymd(1950, 4, 13)))
        .with_occupation(Interval::new("Clerk", ymd(1972, 9, 1)))
}

/// Same as [`settled_person`] with the residence list replaced
#[allow(dead_code)]
pub fn person_with_residences(residences: Vec<Interval>) -> PersonDraft {
    let mut person = settled_person();
    person.residences = residences;
    person
}

/// Fixed audit timestamp
#[allow(dead_code)]
pub fn logged_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 5, 16, 9, 30, 0).unwrap()
}

/// Audit entry without snapshots
#[allow(dead_code)]
pub fn audit_entry(entity_type: &str, action: AuditAction) -> AuditEntry {
    AuditEntry::new(entity_type, action, logged_at()).with_actor("tester")
}
