//! Core of the Atlan catalog SDK.
//!
//! Builds minimal partial-update requests over one shared asset model and
//! reconciles term and tag links client-side. All service calls go through
//! an explicitly passed [`AtlanClient`].

pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod search;
pub mod service;
pub mod transport;

pub use client::AtlanClient;
pub use config::{ClientConfig, ConfigError};
pub use error::{AtlanError, AtlanResult};
pub use logging::{default_log_level, init_logging, init_logging_from_config, logging_status};
pub use model::asset::{
    AnnouncementType, Asset, AssetGuid, AssetValidationError, CertificateStatus, EntityStatus,
    TypeName,
};
pub use model::category::{AssetCategory, ConnectionScoped, SqlHierarchy};
pub use model::patch::{AssetPatch, FieldChange, PatchError, PatchField, PatchValue};
pub use model::term::TermRef;
pub use search::AssetPager;
pub use transport::{
    AssetTransport, DeleteKind, InMemoryTransport, MutationResponse, RecordedSave, SaveOptions,
    SearchPage, SearchRequest, TransportError, TransportResult,
};

/// Returns the SDK version.
pub fn sdk_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// User agent sent by HTTP transports built on this crate.
pub fn user_agent() -> String {
    format!("atlan-rust-sdk/{}", sdk_version())
}
