//! Timeline chronology rules.
//!
//! Every surface that adds or edits a person builds a draft and runs it
//! through [`TimelineValidator`]; the rules live here and nowhere else.

pub mod intervals;
pub mod issue;
pub mod passing;
pub mod relationship;
pub mod validation;

pub use issue::{FieldKey, ValidationIssue, ValidationResult};
pub use validation::{validate, validate_passing, TimelineValidator};
