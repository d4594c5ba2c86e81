//! Asset lookups by GUID, qualified name and name.

use crate::client::AtlanClient;
use crate::error::{AtlanError, AtlanResult};
use crate::logging::log_identifier;
use crate::model::asset::{Asset, AssetGuid, TypeName};
use crate::search::AssetPager;
use crate::service::{parse_type_name, require_text};
use crate::transport::{AssetTransport, SearchRequest};
use log::debug;

/// Full retrieval by GUID.
///
/// With `expected_type`, an asset of another type is reported as not found.
pub fn retrieve_by_guid<T: AssetTransport>(
    client: &AtlanClient<T>,
    guid: AssetGuid,
    expected_type: Option<&str>,
) -> AtlanResult<Asset> {
    let expected_type = expected_type.map(parse_type_name).transpose()?;
    let asset = client.transport().retrieve_by_guid(guid)?;
    match asset {
        Some(asset) if expected_type.as_ref().map_or(true, |t| &asset.type_name == t) => Ok(asset),
        _ => Err(AtlanError::NotFoundByGuid {
            guid,
            expected_type,
        }),
    }
}

/// Full retrieval by `(type_name, qualified_name)`.
pub fn retrieve_by_qualified_name<T: AssetTransport>(
    client: &AtlanClient<T>,
    type_name: &str,
    qualified_name: &str,
) -> AtlanResult<Asset> {
    let type_name = parse_type_name(type_name)?;
    require_text(qualified_name, "qualifiedName")?;
    fetch_existing(client, &type_name, qualified_name)
}

/// Lazy sequence over every hit of `request`.
pub fn search_assets<T: AssetTransport>(
    client: &AtlanClient<T>,
    request: SearchRequest,
) -> AssetPager<'_, T> {
    AssetPager::new(client.transport(), request)
}

/// All active assets of a type with exactly this name.
///
/// # Errors
/// - `AtlanError::NotFoundByName` when there is no match.
pub fn find_by_name<T: AssetTransport>(
    client: &AtlanClient<T>,
    type_name: &str,
    name: &str,
) -> AtlanResult<Vec<Asset>> {
    let type_name = parse_type_name(type_name)?;
    require_text(name, "name")?;

    let request = SearchRequest::for_type(type_name.clone(), client.config().effective_page_size())
        .with_name(name.trim());
    let assets = search_assets(client, request).collect::<AtlanResult<Vec<_>>>()?;
    debug!(
        "event=find_by_name module=service status=ok type_name={} name={} hits={}",
        type_name,
        log_identifier(name),
        assets.len()
    );

    if assets.is_empty() {
        return Err(AtlanError::NotFoundByName {
            type_name,
            name: name.trim().to_string(),
        });
    }
    Ok(assets)
}

pub(crate) fn fetch_existing<T: AssetTransport>(
    client: &AtlanClient<T>,
    type_name: &TypeName,
    qualified_name: &str,
) -> AtlanResult<Asset> {
    client
        .transport()
        .retrieve_by_qualified_name(type_name, qualified_name)?
        .ok_or_else(|| AtlanError::NotFoundByQualifiedName {
            type_name: type_name.clone(),
            qualified_name: qualified_name.to_string(),
        })
}
