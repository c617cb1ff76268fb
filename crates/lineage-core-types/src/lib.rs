//! Core types shared across Lineage crates
//!
//! This crate carries the canonical schema constants used by the logging
//! facility and by anything that emits or inspects structured events:
//!
//! - **Field keys**: component, op, event, durations, entity identifiers
//! - **Event names**: start / end / end_error boundaries

pub mod schema;
