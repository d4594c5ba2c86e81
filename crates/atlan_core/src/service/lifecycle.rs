//! Delete, purge and restore.

use crate::client::AtlanClient;
use crate::error::{AtlanError, AtlanResult};
use crate::logging::log_identifier;
use crate::model::asset::{AssetGuid, EntityStatus};
use crate::service::lookup::fetch_existing;
use crate::service::update::submit;
use crate::service::{parse_type_name, require_text};
use crate::transport::{AssetTransport, DeleteKind, MutationResponse, SaveOptions};
use log::info;

/// Soft-deletes one asset, leaving a retrievable tombstone.
///
/// # Errors
/// - `AtlanError::NotFoundByGuid` when nothing active had this GUID.
pub fn delete_by_guid<T: AssetTransport>(
    client: &AtlanClient<T>,
    guid: AssetGuid,
) -> AtlanResult<MutationResponse> {
    delete(client, guid, DeleteKind::Soft)
}

/// Permanently removes one asset.
pub fn purge_by_guid<T: AssetTransport>(
    client: &AtlanClient<T>,
    guid: AssetGuid,
) -> AtlanResult<MutationResponse> {
    delete(client, guid, DeleteKind::Hard)
}

/// Re-activates a soft-deleted asset.
///
/// Returns `false` without saving when the asset is already active.
pub fn restore<T: AssetTransport>(
    client: &AtlanClient<T>,
    type_name: &str,
    qualified_name: &str,
) -> AtlanResult<bool> {
    let type_name = parse_type_name(type_name)?;
    require_text(qualified_name, "qualifiedName")?;

    let existing = fetch_existing(client, &type_name, qualified_name)?;
    if existing.is_active() {
        return Ok(false);
    }
    let patch = existing
        .trim_to_required()?
        .with_status(EntityStatus::Active);
    let restored = submit(client, &patch, SaveOptions::default(), "restore")?;
    Ok(restored.is_some())
}

fn delete<T: AssetTransport>(
    client: &AtlanClient<T>,
    guid: AssetGuid,
    kind: DeleteKind,
) -> AtlanResult<MutationResponse> {
    let response = client.transport().delete(&[guid], kind)?;
    if response.deleted.is_empty() {
        return Err(AtlanError::NotFoundByGuid {
            guid,
            expected_type: None,
        });
    }
    info!(
        "event=asset_delete module=service status=ok guid={} kind={:?} qualified_name={}",
        guid,
        kind,
        log_identifier(&response.deleted[0].qualified_name)
    );
    Ok(response)
}
