#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{audit_entry, settled_person};
use lineage_core::diff::{describe, NameDirectory};
use lineage_core::errors::{LineageError, SnapshotSide};
use lineage_core::logging_facility::test_capture::init_test_capture;
use lineage_core::model::{AuditAction, DraftDate};
use lineage_core::rules::validate;
use lineage_core::{log_op_degraded, log_op_end, log_op_error, log_op_start};
use lineage_core_types::schema::{EVENT_DEGRADED, EVENT_END, EVENT_END_ERROR, EVENT_START};
use serde_json::json;

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name);

    capture.assert_event_exists(op_name, EVENT_START);
}

#[test]
fn test_log_op_end_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let end_events = capture.find(op_name, EVENT_END);
    assert_eq!(end_events.len(), 1, "Should have exactly one end event");
    assert_eq!(end_events[0].field("duration_ms"), Some("42"));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = LineageError::InvalidConfig {
        reason: "min_spouse_age_years must be between 1 and 150, got 0".to_string(),
    };
    log_op_error!(op_name, err, duration_ms = 10);

    let error_events = capture.find(op_name, EVENT_END_ERROR);
    assert_eq!(error_events.len(), 1, "Should have exactly one error event");
    assert_eq!(error_events[0].field("err_code"), Some("ERR_INVALID_CONFIG"));
}

#[test]
fn test_log_op_degraded_carries_reason() {
    let capture = init_test_capture();
    let op_name = "test_log_op_degraded_unique_4";

    log_op_degraded!(
        op_name,
        LineageError::SnapshotMissing {
            side: SnapshotSide::Old
        }
    );

    let events = capture.find(op_name, EVENT_DEGRADED);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].field("err_code"), Some("ERR_MISSING_SNAPSHOT"));
    assert_eq!(events[0].field("reason"), Some("old snapshot is missing"));
}

#[test]
fn test_validate_logs_issue_count() {
    let capture = init_test_capture();
    let mut person = settled_person();
    person.birth_date = DraftDate::Missing;
    person.occupations.clear();

    let result = validate(&person, None, None);
    assert_eq!(result.issues().len(), 2);

    let ends = capture.count_events(|e| {
        e.op.as_deref() == Some("validate")
            && e.event.as_deref() == Some(EVENT_END)
            && e.field("issue_count") == Some("2")
    });
    assert!(ends >= 1);
}

#[test]
fn test_describe_degraded_event() {
    let capture = init_test_capture();
    let entry = audit_entry("test_describe_degraded_event_Achievement", AuditAction::Create);
    // Unrecognized type with no snapshot: degraded, no summary
    let d = describe(&entry, &NameDirectory::new());
    assert_eq!(d.summary, None);

    let degraded = capture.count_events(|e| {
        e.op.as_deref() == Some("describe")
            && e.event.as_deref() == Some(EVENT_DEGRADED)
            && e.field("entity_type") == Some("test_describe_degraded_event_Achievement")
    });
    assert_eq!(degraded, 1);
}

#[test]
fn test_describe_logs_change_count() {
    let capture = init_test_capture();
    let entry = audit_entry("Achievement", AuditAction::Create)
        .with_new(json!({"title": "test_describe_logs_change_count", "achieveDate": "2025-05-15"}));

    let d = describe(&entry, &NameDirectory::new());
    assert_eq!(d.changes.len(), 2);

    capture.assert_event_exists("describe", EVENT_START);
    let ends = capture.count_events(|e| {
        e.op.as_deref() == Some("describe")
            && e.event.as_deref() == Some(EVENT_END)
            && e.field("change_count") == Some("2")
    });
    assert!(ends >= 1);
}
