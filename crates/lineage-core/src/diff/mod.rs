//! Audit change differ.
//!
//! Reads the before/after snapshots of a persisted audit entry and produces
//! field-level change details plus a feed sentence.
//!
//! ## Entry point
//!
//! ```
//! use chrono::Utc;
//! use lineage_core::diff::{describe, NameDirectory};
//! use lineage_core::model::{AuditAction, AuditEntry};
//! use serde_json::json;
//!
//! let entry = AuditEntry::new("Achievement", AuditAction::Create, Utc::now())
//!     .with_new(json!({ "familyMemberName": "Ruben Hunter", "title": "MSc" }));
//! let description = describe(&entry, &NameDirectory::new());
//! assert_eq!(description.summary.as_deref(), Some("Achievement recorded."));
//! ```
//!
//! ## Guarantees
//!
//! - **Total**: every entry yields a description; unreadable snapshots degrade
//!   to an empty change list instead of an error.
//! - **Deterministic**: field order is fixed per entity kind; generic
//!   snapshots list the old snapshot's keys first.
//! - **Feed allow-list**: only people, achievements, relationships and
//!   passing records get a summary.

pub mod engine;
pub mod format;
pub mod human_summary;
pub mod model;
pub mod resolve;
pub mod snapshot;

pub use engine::describe;
pub use human_summary::{summarize, NO_DETAIL_SUMMARY};
pub use model::{AuditDescription, ChangeDetail, ChangeType, EntityKind, ValueKind};
pub use resolve::{describe_async, fallback_label, AsyncNameResolver, NameDirectory, NameResolver};
