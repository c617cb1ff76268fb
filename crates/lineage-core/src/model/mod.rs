pub mod audit;
pub mod date;
pub mod passing;
pub mod person;

pub use audit::{AuditAction, AuditEntry};
pub use date::DraftDate;
pub use passing::{BurialPlace, PassingDraft};
pub use person::{
    ExistingRelationship, Interval, PersonDraft, PersonRef, RecordId, RelationshipClaim,
    RelationshipId, RelationshipKind, SpouseExclusivityContext,
};
