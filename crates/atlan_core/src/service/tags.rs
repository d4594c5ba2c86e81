//! Atlan tag reconciliation.
//!
//! Same fetch-diff-submit shape as term reconciliation, over tag names.
//! Saves always ask the service to replace tags, so the submitted set is
//! the complete result.

use crate::client::AtlanClient;
use crate::error::{AtlanError, AtlanResult};
use crate::model::asset::Asset;
use crate::model::patch::AssetPatch;
use crate::model::tag::{normalize_tag, normalize_tags};
use crate::service::lookup::fetch_existing;
use crate::service::update::submit;
use crate::service::{parse_type_name, require_text};
use crate::transport::{AssetTransport, SaveOptions};
use std::collections::BTreeSet;

const REPLACE_TAGS: SaveOptions = SaveOptions { replace_tags: true };

/// Adds `tags` to the asset's current tags.
pub fn append_atlan_tags<T: AssetTransport>(
    client: &AtlanClient<T>,
    type_name: &str,
    qualified_name: &str,
    tags: &[&str],
) -> AtlanResult<Option<Asset>> {
    let type_name = parse_type_name(type_name)?;
    require_text(qualified_name, "qualifiedName")?;
    let additions = validated_tags(tags)?;

    let existing = fetch_existing(client, &type_name, qualified_name)?;
    let merged: BTreeSet<String> = existing.atlan_tags.union(&additions).cloned().collect();
    let patch = existing.trim_to_required()?.with_atlan_tags(merged);
    submit(client, &patch, REPLACE_TAGS, "append_tags")
}

/// Replaces every tag with `tags`; empty removes all tags.
pub fn replace_atlan_tags<T: AssetTransport>(
    client: &AtlanClient<T>,
    type_name: &str,
    qualified_name: &str,
    name: &str,
    tags: &[&str],
) -> AtlanResult<Option<Asset>> {
    let tags = validated_tags(tags)?;
    let patch = AssetPatch::updater(type_name, qualified_name, name)?.with_atlan_tags(tags);
    submit(client, &patch, REPLACE_TAGS, "replace_tags")
}

/// Removes one tag.
///
/// # Errors
/// - `AtlanError::InvalidRequest` when the tag is not on the asset.
pub fn remove_atlan_tag<T: AssetTransport>(
    client: &AtlanClient<T>,
    type_name: &str,
    qualified_name: &str,
    tag: &str,
) -> AtlanResult<Option<Asset>> {
    let type_name = parse_type_name(type_name)?;
    require_text(qualified_name, "qualifiedName")?;
    let tag = normalize_tag(tag).ok_or_else(blank_tag)?;

    let existing = fetch_existing(client, &type_name, qualified_name)?;
    if !existing.atlan_tags.contains(&tag) {
        return Err(AtlanError::InvalidRequest {
            field: "atlanTags",
            message: format!("tag `{tag}` is not assigned to `{qualified_name}`"),
        });
    }
    let mut remaining = existing.atlan_tags.clone();
    remaining.remove(&tag);
    let patch = existing.trim_to_required()?.with_atlan_tags(remaining);
    submit(client, &patch, REPLACE_TAGS, "remove_tag")
}

fn validated_tags(tags: &[&str]) -> AtlanResult<BTreeSet<String>> {
    if tags.iter().any(|tag| normalize_tag(tag).is_none()) {
        return Err(blank_tag());
    }
    Ok(normalize_tags(tags))
}

fn blank_tag() -> AtlanError {
    AtlanError::InvalidRequest {
        field: "atlanTags",
        message: "tag names must not be blank".to_string(),
    }
}
