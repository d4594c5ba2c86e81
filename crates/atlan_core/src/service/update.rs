//! Partial updates of shared asset attributes.
//!
//! # Responsibility
//! - Build an identity-only patch, layer exactly one mutation on it, save it.
//! - Return the server's updated copy, or `None` when nothing was updated.
//!
//! # Invariants
//! - Certificate message and announcement title/message of one character
//!   or less are dropped from the request (see `model::patch`).

use crate::client::AtlanClient;
use crate::error::AtlanResult;
use crate::logging::log_identifier;
use crate::model::asset::{AnnouncementType, Asset, CertificateStatus};
use crate::model::patch::AssetPatch;
use crate::transport::{AssetTransport, SaveOptions};
use log::{debug, error, info};
use std::collections::BTreeSet;

/// Saves a caller-built patch.
pub fn update_attributes<T: AssetTransport>(
    client: &AtlanClient<T>,
    patch: &AssetPatch,
) -> AtlanResult<Option<Asset>> {
    submit(client, patch, SaveOptions::default(), "attributes")
}

/// Sets certificate status and optional message.
pub fn update_certificate<T: AssetTransport>(
    client: &AtlanClient<T>,
    type_name: &str,
    qualified_name: &str,
    name: &str,
    status: CertificateStatus,
    message: Option<&str>,
) -> AtlanResult<Option<Asset>> {
    let patch =
        AssetPatch::updater(type_name, qualified_name, name)?.with_certificate(status, message);
    submit(client, &patch, SaveOptions::default(), "certificate")
}

pub fn remove_certificate<T: AssetTransport>(
    client: &AtlanClient<T>,
    type_name: &str,
    qualified_name: &str,
    name: &str,
) -> AtlanResult<Option<Asset>> {
    let patch = AssetPatch::updater(type_name, qualified_name, name)?.without_certificate();
    submit(client, &patch, SaveOptions::default(), "remove_certificate")
}

/// Sets announcement type with optional title and message.
pub fn update_announcement<T: AssetTransport>(
    client: &AtlanClient<T>,
    type_name: &str,
    qualified_name: &str,
    name: &str,
    kind: AnnouncementType,
    title: Option<&str>,
    message: Option<&str>,
) -> AtlanResult<Option<Asset>> {
    let patch = AssetPatch::updater(type_name, qualified_name, name)?
        .with_announcement(kind, title, message);
    submit(client, &patch, SaveOptions::default(), "announcement")
}

pub fn remove_announcement<T: AssetTransport>(
    client: &AtlanClient<T>,
    type_name: &str,
    qualified_name: &str,
    name: &str,
) -> AtlanResult<Option<Asset>> {
    let patch = AssetPatch::updater(type_name, qualified_name, name)?.without_announcement();
    submit(client, &patch, SaveOptions::default(), "remove_announcement")
}

pub fn remove_description<T: AssetTransport>(
    client: &AtlanClient<T>,
    type_name: &str,
    qualified_name: &str,
    name: &str,
) -> AtlanResult<Option<Asset>> {
    let patch = AssetPatch::updater(type_name, qualified_name, name)?.without_description();
    submit(client, &patch, SaveOptions::default(), "remove_description")
}

pub fn remove_user_description<T: AssetTransport>(
    client: &AtlanClient<T>,
    type_name: &str,
    qualified_name: &str,
    name: &str,
) -> AtlanResult<Option<Asset>> {
    let patch = AssetPatch::updater(type_name, qualified_name, name)?.without_user_description();
    submit(client, &patch, SaveOptions::default(), "remove_user_description")
}

/// Replaces owner users and owner groups together; blank names are ignored.
///
/// Both sides are written. An empty `users` or `groups` clears that side on
/// the server, so pass the current groups to change only the users.
pub fn update_owners<T: AssetTransport>(
    client: &AtlanClient<T>,
    type_name: &str,
    qualified_name: &str,
    name: &str,
    users: &[&str],
    groups: &[&str],
) -> AtlanResult<Option<Asset>> {
    let patch = AssetPatch::updater(type_name, qualified_name, name)?
        .with_owners(owner_set(users), owner_set(groups));
    submit(client, &patch, SaveOptions::default(), "owners")
}

pub fn remove_owners<T: AssetTransport>(
    client: &AtlanClient<T>,
    type_name: &str,
    qualified_name: &str,
    name: &str,
) -> AtlanResult<Option<Asset>> {
    let patch = AssetPatch::updater(type_name, qualified_name, name)?.without_owners();
    submit(client, &patch, SaveOptions::default(), "remove_owners")
}

fn owner_set(names: &[&str]) -> BTreeSet<String> {
    names
        .iter()
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect()
}

/// Saves one patch and picks the updated asset of the patch's type.
pub(crate) fn submit<T: AssetTransport>(
    client: &AtlanClient<T>,
    patch: &AssetPatch,
    options: SaveOptions,
    mutation: &'static str,
) -> AtlanResult<Option<Asset>> {
    let qualified_name = log_identifier(patch.qualified_name());
    debug!(
        "event=asset_update module=service status=start type_name={} qualified_name={} mutation={}",
        patch.type_name(),
        qualified_name,
        mutation
    );

    let response = match client
        .transport()
        .save(std::slice::from_ref(patch), options)
    {
        Ok(response) => response,
        Err(err) => {
            error!(
                "event=asset_update module=service status=error type_name={} qualified_name={} mutation={} error={}",
                patch.type_name(),
                qualified_name,
                mutation,
                err
            );
            return Err(err.into());
        }
    };

    let updated = response.first_updated(patch.type_name()).cloned();
    info!(
        "event=asset_update module=service status=ok type_name={} qualified_name={} mutation={} updated={}",
        patch.type_name(),
        qualified_name,
        mutation,
        updated.is_some()
    );
    Ok(updated)
}
