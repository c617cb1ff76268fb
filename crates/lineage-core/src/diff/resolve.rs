//! Person name lookup for records that store bare identifiers.
//!
//! Relationship snapshots only carry the two partner ids, so the differ asks
//! an injected resolver for display names. A lookup that fails or comes back
//! blank renders as a placeholder label; it never fails the description.
//!
//! The synchronous [`NameResolver`] is what [`describe`](super::describe)
//! consults. Callers whose lookup is asynchronous (a remote store, a cache
//! with its own timeout) implement [`AsyncNameResolver`] and go through
//! [`describe_async`], which gathers every name the entry needs up front.

use std::collections::HashMap;

use async_trait::async_trait;
use futures::future::join_all;

use super::engine::{describe, referenced_people};
use super::model::AuditDescription;
use crate::model::{AuditEntry, PersonRef};

/// Synchronous name lookup
pub trait NameResolver {
    fn resolve_name(&self, id: &PersonRef) -> Option<String>;
}

impl<F> NameResolver for F
where
    F: Fn(&PersonRef) -> Option<String>,
{
    fn resolve_name(&self, id: &PersonRef) -> Option<String> {
        self(id)
    }
}

/// Name lookup that may suspend
///
/// Timeouts and cancellation belong to the implementation; returning `None`
/// is always acceptable.
#[async_trait]
pub trait AsyncNameResolver: Send + Sync {
    async fn resolve_name(&self, id: &PersonRef) -> Option<String>;
}

/// Names known ahead of time, keyed by person id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameDirectory {
    names: HashMap<PersonRef, String>,
}

impl NameDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<PersonRef>, name: impl Into<String>) {
        self.names.insert(id.into(), name.into());
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<(PersonRef, String)> for NameDirectory {
    fn from_iter<I: IntoIterator<Item = (PersonRef, String)>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}

impl NameResolver for NameDirectory {
    fn resolve_name(&self, id: &PersonRef) -> Option<String> {
        self.names.get(id).cloned()
    }
}

/// Placeholder shown when a person cannot be named
pub fn fallback_label(id: &PersonRef) -> String {
    format!("Member #{}", id)
}

/// Resolved name, or the placeholder when the lookup is empty
pub fn display_name<R: NameResolver + ?Sized>(resolver: &R, id: &PersonRef) -> String {
    resolver
        .resolve_name(id)
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| fallback_label(id))
}

/// Describe an entry, resolving names through an async lookup.
///
/// All lookups the entry needs run concurrently; the description itself is
/// then built synchronously from the collected names.
pub async fn describe_async<R: AsyncNameResolver + ?Sized>(
    entry: &AuditEntry,
    resolver: &R,
) -> AuditDescription {
    let ids = referenced_people(entry);
    let names = join_all(ids.iter().map(|id| resolver.resolve_name(id))).await;

    let directory: NameDirectory = ids
        .into_iter()
        .zip(names)
        .filter_map(|(id, name)| name.map(|name| (id, name)))
        .collect();
    tracing::debug!(
        resolved = directory.len(),
        "resolved person names for audit entry"
    );

    describe(entry, &directory)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_resolver() {
        let resolver = |id: &PersonRef| (id.as_str() == "4").then(|| "Ruben Hunter".to_string());
        assert_eq!(display_name(&resolver, &PersonRef::from("4")), "Ruben Hunter");
        assert_eq!(display_name(&resolver, &PersonRef::from("5")), "Member #5");
    }

    #[test]
    fn test_blank_name_falls_back() {
        let mut directory = NameDirectory::new();
        directory.insert("7", "   ");
        assert_eq!(display_name(&directory, &PersonRef::from("7")), "Member #7");
    }
}
