//! Glossary term references and the set arithmetic used to reconcile them.
//!
//! # Invariants
//! - Soft-deleted links are never carried into an outgoing term set.
//! - Union keeps the existing order and appends new terms in request order.

use crate::model::asset::{AssetGuid, EntityStatus};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Reference from an asset to a glossary term.
///
/// The server identifies terms by GUID; callers that only know the term's
/// qualified name may still append it, but removal requires the GUID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guid: Option<AssetGuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualified_name: Option<String>,
    #[serde(default)]
    pub relationship_status: EntityStatus,
}

impl TermRef {
    pub fn by_guid(guid: AssetGuid) -> Self {
        Self {
            guid: Some(guid),
            qualified_name: None,
            relationship_status: EntityStatus::Active,
        }
    }

    pub fn by_qualified_name(qualified_name: impl Into<String>) -> Self {
        Self {
            guid: None,
            qualified_name: Some(qualified_name.into()),
            relationship_status: EntityStatus::Active,
        }
    }

    pub fn is_active(&self) -> bool {
        self.relationship_status == EntityStatus::Active
    }

    /// Whether the reference names a term at all.
    pub fn has_identity(&self) -> bool {
        self.guid.is_some() || self.trimmed_qualified_name().is_some()
    }

    /// Two references name the same term when either their GUIDs or their
    /// qualified names are equal.
    pub fn same_term(&self, other: &TermRef) -> bool {
        let same_guid =
            matches!((self.guid, other.guid), (Some(left), Some(right)) if left == right);
        let same_name = matches!(
            (self.trimmed_qualified_name(), other.trimmed_qualified_name()),
            (Some(left), Some(right)) if left == right
        );
        same_guid || same_name
    }

    fn trimmed_qualified_name(&self) -> Option<&str> {
        self.qualified_name
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    fn absorb_identity(&mut self, other: &TermRef) {
        if self.guid.is_none() {
            self.guid = other.guid;
        }
        if self.trimmed_qualified_name().is_none() {
            if let Some(qualified_name) = other.trimmed_qualified_name() {
                self.qualified_name = Some(qualified_name.to_string());
            }
        }
    }
}

/// Returns links whose relationship is not soft-deleted.
pub fn active_terms(terms: &[TermRef]) -> Vec<TermRef> {
    terms.iter().filter(|term| term.is_active()).cloned().collect()
}

/// Union of `existing` and `additions`, de-duplicated with [`TermRef::same_term`].
///
/// A duplicate contributes any GUID or qualified name the kept reference
/// lacks. References without identity are dropped.
pub fn union_terms(existing: &[TermRef], additions: &[TermRef]) -> Vec<TermRef> {
    let mut merged: Vec<TermRef> = Vec::with_capacity(existing.len() + additions.len());
    for term in existing.iter().chain(additions.iter()) {
        if !term.has_identity() {
            continue;
        }
        match merged.iter_mut().find(|kept| kept.same_term(term)) {
            Some(kept) => kept.absorb_identity(term),
            None => merged.push(TermRef {
                relationship_status: EntityStatus::Active,
                ..term.clone()
            }),
        }
    }
    merged
}

/// `existing` minus every term whose GUID is in `removals`.
pub fn subtract_terms(existing: &[TermRef], removals: &BTreeSet<AssetGuid>) -> Vec<TermRef> {
    existing
        .iter()
        .filter(|term| match term.guid {
            Some(guid) => !removals.contains(&guid),
            None => true,
        })
        .cloned()
        .collect()
}
