//! Glossary-term reconciliation.
//!
//! # Responsibility
//! - Append, replace or remove term links without clobbering the links a
//!   caller did not mention.
//!
//! # Invariants
//! - Append and remove read the current asset first, drop soft-deleted
//!   links, then submit the full resulting set.
//! - A resulting empty set is sent as "remove all terms".
//! - Removal targets must carry a GUID; this is checked before any call.

use crate::client::AtlanClient;
use crate::error::{AtlanError, AtlanResult};
use crate::model::asset::{Asset, AssetGuid};
use crate::model::patch::AssetPatch;
use crate::model::term::{subtract_terms, union_terms, TermRef};
use crate::service::lookup::fetch_existing;
use crate::service::update::submit;
use crate::service::{parse_type_name, require_text};
use crate::transport::{AssetTransport, SaveOptions};
use std::collections::BTreeSet;

/// Links `terms` in addition to the asset's current active terms.
pub fn append_terms<T: AssetTransport>(
    client: &AtlanClient<T>,
    type_name: &str,
    qualified_name: &str,
    terms: &[TermRef],
) -> AtlanResult<Option<Asset>> {
    let type_name = parse_type_name(type_name)?;
    require_text(qualified_name, "qualifiedName")?;
    require_term_keys(terms)?;

    let existing = fetch_existing(client, &type_name, qualified_name)?;
    let merged = union_terms(&existing.active_meanings(), terms);
    let patch = existing.trim_to_required()?.with_terms(merged);
    submit(client, &patch, SaveOptions::default(), "append_terms")
}

/// Replaces every term link with `terms`; empty removes all links.
pub fn replace_terms<T: AssetTransport>(
    client: &AtlanClient<T>,
    type_name: &str,
    qualified_name: &str,
    name: &str,
    terms: &[TermRef],
) -> AtlanResult<Option<Asset>> {
    require_term_keys(terms)?;
    let patch = AssetPatch::updater(type_name, qualified_name, name)?
        .with_terms(union_terms(&[], terms));
    submit(client, &patch, SaveOptions::default(), "replace_terms")
}

/// Unlinks `terms`, matched by GUID, keeping every other active link.
pub fn remove_terms<T: AssetTransport>(
    client: &AtlanClient<T>,
    type_name: &str,
    qualified_name: &str,
    terms: &[TermRef],
) -> AtlanResult<Option<Asset>> {
    let type_name = parse_type_name(type_name)?;
    require_text(qualified_name, "qualifiedName")?;
    let removals = removal_guids(terms)?;

    let existing = fetch_existing(client, &type_name, qualified_name)?;
    let remaining = subtract_terms(&existing.active_meanings(), &removals);
    let patch = existing.trim_to_required()?.with_terms(remaining);
    submit(client, &patch, SaveOptions::default(), "remove_terms")
}

fn require_term_keys(terms: &[TermRef]) -> AtlanResult<()> {
    match terms.iter().position(|term| !term.has_identity()) {
        Some(index) => Err(AtlanError::InvalidRequest {
            field: "meanings",
            message: format!("term at index {index} has neither a guid nor a qualifiedName"),
        }),
        None => Ok(()),
    }
}

fn removal_guids(terms: &[TermRef]) -> AtlanResult<BTreeSet<AssetGuid>> {
    terms
        .iter()
        .enumerate()
        .map(|(index, term)| {
            term.guid.ok_or_else(|| AtlanError::InvalidRequest {
                field: "guid",
                message: format!("term at index {index} must be referenced by guid for removal"),
            })
        })
        .collect()
}
