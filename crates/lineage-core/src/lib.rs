//! Lineage Core - family tree timeline rules and audit descriptions
//!
//! This crate provides the two pure components a family tree application
//! needs around its stored records:
//! - Timeline validation for person drafts (residences, occupations,
//!   relationship dates, passing and burial dates)
//! - Audit change descriptions: field-level before/after details and a
//!   feed sentence for one change-log entry
//!
//! Both are synchronous and side-effect free apart from logging; only
//! [`describe_async`] suspends, while awaiting an injected name lookup.

pub mod config;
pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod rules;

// Used by the logging macros
#[doc(hidden)]
pub use tracing;
pub use lineage_core_types;

// Re-export commonly used types
pub use config::ValidatorConfig;
pub use diff::{
    describe, describe_async, AsyncNameResolver, AuditDescription, ChangeDetail, ChangeType,
    NameDirectory, NameResolver, ValueKind,
};
pub use errors::{ExError, ExErrorKind, LineageError, Result};
pub use model::{AuditAction, AuditEntry, DraftDate, PassingDraft, PersonDraft};
pub use rules::{
    validate, validate_passing, FieldKey, TimelineValidator, ValidationIssue, ValidationResult,
};
