//! In-memory catalog transport.
//!
//! # Responsibility
//! - Apply partial-update semantics locally so SDK flows can run without a
//!   service (tests, dry runs, offline tooling).
//! - Record every call and every submitted save for later inspection.
//!
//! # Invariants
//! - Fields absent from a patch are never touched; `Clear` empties them.
//! - Tags in a patch are applied only with `SaveOptions::replace_tags`.
//! - An asset is reported as updated only when the patch changed it.
//! - A field/value combination it cannot store fails the save with a 400
//!   status and leaves that asset unchanged.

use crate::model::asset::{Asset, AssetGuid, AssetValidationError, TypeName};
use crate::model::patch::{AssetPatch, FieldChange, PatchField, PatchValue};
use crate::transport::{
    AssetTransport, DeleteKind, MutationResponse, SaveOptions, SearchPage, SearchRequest,
    TransportError, TransportResult,
};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// One recorded `save` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedSave {
    pub patches: Vec<AssetPatch>,
    pub options: SaveOptions,
}

#[derive(Default)]
struct State {
    assets: BTreeMap<AssetGuid, Asset>,
    saves: Vec<RecordedSave>,
    calls: Vec<&'static str>,
    pending_failure: Option<TransportError>,
}

/// Mutex-guarded catalog store implementing [`AssetTransport`].
#[derive(Default)]
pub struct InMemoryTransport {
    state: Mutex<State>,
}

impl InMemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds one asset as if it already existed on the service.
    pub fn insert(&self, asset: Asset) -> Result<AssetGuid, AssetValidationError> {
        asset.validate()?;
        let guid = asset.guid;
        self.state().assets.insert(guid, asset);
        Ok(guid)
    }

    /// Current stored copy of an asset.
    pub fn get(&self, guid: AssetGuid) -> Option<Asset> {
        self.state().assets.get(&guid).cloned()
    }

    pub fn len(&self) -> usize {
        self.state().assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state().assets.is_empty()
    }

    /// Every `save` call received so far, oldest first.
    pub fn saves(&self) -> Vec<RecordedSave> {
        self.state().saves.clone()
    }

    /// Endpoint names in call order (`save`, `retrieve_by_guid`, ...).
    pub fn call_log(&self) -> Vec<&'static str> {
        self.state().calls.clone()
    }

    /// Makes the next endpoint call fail with `error`.
    pub fn fail_next(&self, error: TransportError) {
        self.state().pending_failure = Some(error);
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn begin(&self, endpoint: &'static str) -> TransportResult<MutexGuard<'_, State>> {
        let mut state = self.state();
        state.calls.push(endpoint);
        match state.pending_failure.take() {
            Some(error) => Err(error),
            None => Ok(state),
        }
    }
}

impl AssetTransport for InMemoryTransport {
    fn save(
        &self,
        patches: &[AssetPatch],
        options: SaveOptions,
    ) -> TransportResult<MutationResponse> {
        let mut state = self.begin("save")?;
        state.saves.push(RecordedSave {
            patches: patches.to_vec(),
            options,
        });

        let mut response = MutationResponse::default();
        for patch in patches {
            match find_by_identity(&state.assets, patch.type_name(), patch.qualified_name()) {
                Some(guid) => {
                    if let Some(asset) = state.assets.get_mut(&guid) {
                        if apply_patch(asset, patch, options)? {
                            response.updated.push(asset.clone());
                        }
                    }
                }
                None => {
                    let mut asset = Asset::new(
                        patch.type_name().clone(),
                        patch.qualified_name(),
                        patch.name(),
                    );
                    apply_patch(&mut asset, patch, options)?;
                    response.created.push(asset.clone());
                    state.assets.insert(asset.guid, asset);
                }
            }
        }
        Ok(response)
    }

    fn retrieve_by_guid(&self, guid: AssetGuid) -> TransportResult<Option<Asset>> {
        let state = self.begin("retrieve_by_guid")?;
        Ok(state.assets.get(&guid).cloned())
    }

    fn retrieve_by_qualified_name(
        &self,
        type_name: &TypeName,
        qualified_name: &str,
    ) -> TransportResult<Option<Asset>> {
        let state = self.begin("retrieve_by_qualified_name")?;
        Ok(find_by_identity(&state.assets, type_name, qualified_name)
            .and_then(|guid| state.assets.get(&guid).cloned()))
    }

    fn search(&self, request: &SearchRequest) -> TransportResult<SearchPage> {
        let state = self.begin("search")?;
        let mut hits: Vec<&Asset> = state
            .assets
            .values()
            .filter(|asset| asset.type_name == request.type_name)
            .filter(|asset| request.include_deleted || asset.is_active())
            .filter(|asset| match request.name.as_deref() {
                Some(name) => asset.name == name,
                None => true,
            })
            .filter(|asset| match request.qualified_name.as_deref() {
                Some(qualified_name) => asset.qualified_name == qualified_name,
                None => true,
            })
            .collect();
        hits.sort_by(|left, right| {
            left.qualified_name
                .cmp(&right.qualified_name)
                .then(left.guid.cmp(&right.guid))
        });

        Ok(SearchPage {
            approximate_count: hits.len(),
            assets: hits
                .into_iter()
                .skip(request.from)
                .take(request.size)
                .cloned()
                .collect(),
        })
    }

    fn delete(&self, guids: &[AssetGuid], kind: DeleteKind) -> TransportResult<MutationResponse> {
        let mut state = self.begin("delete")?;
        let mut response = MutationResponse::default();
        for guid in guids {
            match kind {
                DeleteKind::Soft => {
                    if let Some(asset) = state.assets.get_mut(guid) {
                        if asset.is_active() {
                            asset.soft_delete();
                            response.deleted.push(asset.clone());
                        }
                    }
                }
                DeleteKind::Hard => {
                    if let Some(asset) = state.assets.remove(guid) {
                        response.deleted.push(asset);
                    }
                }
            }
        }
        Ok(response)
    }
}

fn find_by_identity(
    assets: &BTreeMap<AssetGuid, Asset>,
    type_name: &TypeName,
    qualified_name: &str,
) -> Option<AssetGuid> {
    assets
        .values()
        .find(|asset| &asset.type_name == type_name && asset.qualified_name == qualified_name)
        .map(|asset| asset.guid)
}

/// Applies one patch; returns whether the asset changed.
///
/// A field/value combination the service cannot store rejects the whole
/// patch and leaves the asset untouched.
fn apply_patch(
    asset: &mut Asset,
    patch: &AssetPatch,
    options: SaveOptions,
) -> TransportResult<bool> {
    let mut next = asset.clone();
    next.name = patch.name().to_string();
    for (field, change) in patch.changes() {
        if field == PatchField::AtlanTags && !options.replace_tags {
            continue;
        }
        apply_change(&mut next, field, change)?;
    }
    if next == *asset {
        return Ok(false);
    }
    *asset = next;
    Ok(true)
}

fn apply_change(
    asset: &mut Asset,
    field: PatchField,
    change: &FieldChange,
) -> TransportResult<()> {
    match (field, change) {
        (PatchField::Status, FieldChange::Set(PatchValue::Status(status))) => {
            asset.status = *status;
        }
        (PatchField::CertificateStatus, FieldChange::Set(PatchValue::Certificate(status))) => {
            asset.certificate_status = Some(*status);
        }
        (PatchField::CertificateStatus, FieldChange::Clear) => asset.certificate_status = None,
        (PatchField::AnnouncementType, FieldChange::Set(PatchValue::Announcement(kind))) => {
            asset.announcement_type = Some(*kind);
        }
        (PatchField::AnnouncementType, FieldChange::Clear) => asset.announcement_type = None,
        (PatchField::Meanings, FieldChange::Set(PatchValue::Terms(terms))) => {
            asset.meanings = terms.clone();
        }
        (PatchField::Meanings, FieldChange::Clear) => asset.meanings.clear(),
        (PatchField::CertificateStatusMessage, _) => {
            apply_text(&mut asset.certificate_status_message, field, change)?;
        }
        (PatchField::AnnouncementTitle, _) => {
            apply_text(&mut asset.announcement_title, field, change)?;
        }
        (PatchField::AnnouncementMessage, _) => {
            apply_text(&mut asset.announcement_message, field, change)?;
        }
        (PatchField::Description, _) => apply_text(&mut asset.description, field, change)?,
        (PatchField::UserDescription, _) => {
            apply_text(&mut asset.user_description, field, change)?;
        }
        (PatchField::OwnerUsers, _) => apply_names(&mut asset.owner_users, field, change)?,
        (PatchField::OwnerGroups, _) => apply_names(&mut asset.owner_groups, field, change)?,
        (PatchField::AtlanTags, _) => apply_names(&mut asset.atlan_tags, field, change)?,
        (
            PatchField::Status
            | PatchField::CertificateStatus
            | PatchField::AnnouncementType
            | PatchField::Meanings,
            _,
        ) => return Err(rejected(field, change)),
    }
    Ok(())
}

fn apply_text(
    slot: &mut Option<String>,
    field: PatchField,
    change: &FieldChange,
) -> TransportResult<()> {
    match change {
        FieldChange::Set(PatchValue::Text(text)) => *slot = Some(text.clone()),
        FieldChange::Clear => *slot = None,
        FieldChange::Set(_) => return Err(rejected(field, change)),
    }
    Ok(())
}

fn apply_names(
    slot: &mut BTreeSet<String>,
    field: PatchField,
    change: &FieldChange,
) -> TransportResult<()> {
    match change {
        FieldChange::Set(PatchValue::Names(names)) => *slot = names.clone(),
        FieldChange::Clear => slot.clear(),
        FieldChange::Set(_) => return Err(rejected(field, change)),
    }
    Ok(())
}

fn rejected(field: PatchField, change: &FieldChange) -> TransportError {
    TransportError::Status {
        code: 400,
        message: format!("`{}` cannot take {:?}", field.as_str(), change),
    }
}
