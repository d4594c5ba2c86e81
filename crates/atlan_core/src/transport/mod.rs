//! Transport contracts between the SDK and the catalog service.
//!
//! # Responsibility
//! - Define the endpoint surface the SDK needs: bulk save, full retrieval,
//!   index search and delete.
//! - Keep HTTP and wire-format details behind `AssetTransport`.
//!
//! # Invariants
//! - Every call is one synchronous round trip; implementations do not retry.
//! - Retrieval returns `Ok(None)` for unknown assets; semantic not-found
//!   errors are raised by the service layer, which knows the lookup context.

pub mod memory;

use crate::model::asset::{Asset, AssetGuid, TypeName};
use crate::model::patch::AssetPatch;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub use memory::{InMemoryTransport, RecordedSave};

pub type TransportResult<T> = Result<T, TransportError>;

/// Failure reported by the transport or the remote service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Service answered with a non-success status.
    Status { code: u16, message: String },
    /// Service could not be reached.
    Unavailable(String),
    /// Service answered with a payload the SDK cannot interpret.
    InvalidResponse(String),
}

impl Display for TransportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Status { code, message } => write!(f, "service returned {code}: {message}"),
            Self::Unavailable(message) => write!(f, "service unavailable: {message}"),
            Self::InvalidResponse(message) => write!(f, "invalid service response: {message}"),
        }
    }
}

impl Error for TransportError {}

/// Options of a bulk save call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SaveOptions {
    /// Apply the patch's tag set; tags in a patch are ignored otherwise.
    pub replace_tags: bool,
}

/// Soft delete keeps a tombstone; hard delete purges the entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteKind {
    Soft,
    Hard,
}

/// Entities changed by one mutation, grouped by outcome.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MutationResponse {
    pub created: Vec<Asset>,
    pub updated: Vec<Asset>,
    pub partially_updated: Vec<Asset>,
    pub deleted: Vec<Asset>,
}

impl MutationResponse {
    /// First updated asset of the given type.
    pub fn first_updated(&self, type_name: &TypeName) -> Option<&Asset> {
        self.updated
            .iter()
            .find(|asset| &asset.type_name == type_name)
    }

    pub fn is_empty(&self) -> bool {
        self.created.is_empty()
            && self.updated.is_empty()
            && self.partially_updated.is_empty()
            && self.deleted.is_empty()
    }
}

/// Exact-match index search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub type_name: TypeName,
    pub name: Option<String>,
    pub qualified_name: Option<String>,
    pub include_deleted: bool,
    /// Offset of the first hit to return.
    pub from: usize,
    pub size: usize,
}

impl SearchRequest {
    pub fn for_type(type_name: TypeName, size: usize) -> Self {
        Self {
            type_name,
            name: None,
            qualified_name: None,
            include_deleted: false,
            from: 0,
            size,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_qualified_name(mut self, qualified_name: impl Into<String>) -> Self {
        self.qualified_name = Some(qualified_name.into());
        self
    }
}

/// One page of search hits.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchPage {
    pub assets: Vec<Asset>,
    /// Total hits across all pages, as estimated by the service.
    pub approximate_count: usize,
}

/// Endpoints the SDK calls on the catalog service.
pub trait AssetTransport {
    /// Bulk-saves partial updates, creating assets that do not exist yet.
    fn save(&self, patches: &[AssetPatch], options: SaveOptions)
        -> TransportResult<MutationResponse>;
    /// Full retrieval by GUID, including soft-deleted assets.
    fn retrieve_by_guid(&self, guid: AssetGuid) -> TransportResult<Option<Asset>>;
    /// Full retrieval by unique attributes, including soft-deleted assets.
    fn retrieve_by_qualified_name(
        &self,
        type_name: &TypeName,
        qualified_name: &str,
    ) -> TransportResult<Option<Asset>>;
    /// Runs one page of an index search.
    fn search(&self, request: &SearchRequest) -> TransportResult<SearchPage>;
    fn delete(&self, guids: &[AssetGuid], kind: DeleteKind) -> TransportResult<MutationResponse>;
}

impl<T: AssetTransport + ?Sized> AssetTransport for &T {
    fn save(
        &self,
        patches: &[AssetPatch],
        options: SaveOptions,
    ) -> TransportResult<MutationResponse> {
        (**self).save(patches, options)
    }

    fn retrieve_by_guid(&self, guid: AssetGuid) -> TransportResult<Option<Asset>> {
        (**self).retrieve_by_guid(guid)
    }

    fn retrieve_by_qualified_name(
        &self,
        type_name: &TypeName,
        qualified_name: &str,
    ) -> TransportResult<Option<Asset>> {
        (**self).retrieve_by_qualified_name(type_name, qualified_name)
    }

    fn search(&self, request: &SearchRequest) -> TransportResult<SearchPage> {
        (**self).search(request)
    }

    fn delete(&self, guids: &[AssetGuid], kind: DeleteKind) -> TransportResult<MutationResponse> {
        (**self).delete(guids, kind)
    }
}
