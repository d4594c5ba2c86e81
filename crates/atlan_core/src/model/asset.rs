//! Asset domain model.
//!
//! # Responsibility
//! - Define the canonical record shared by all catalog types.
//! - Provide lifecycle helpers for soft-delete semantics.
//!
//! # Invariants
//! - `guid` is stable and never reused for another asset.
//! - `status` is the source of truth for tombstone state.
//! - `type_name`, `qualified_name` and `name` are never blank on a valid asset.

use crate::model::category::AssetCategory;
use crate::model::patch::{AssetPatch, PatchError};
use crate::model::term::TermRef;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable server-assigned identifier of an asset.
pub type AssetGuid = Uuid;

/// Type tag of an asset, e.g. `Table` or `AuthPolicy`.
///
/// Replaces the per-type class hierarchy: behavior that depends on the type
/// is looked up through [`TypeName::category`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TypeName(String);

impl TypeName {
    /// Creates a type tag, trimming surrounding whitespace.
    ///
    /// # Errors
    /// - Returns `AssetValidationError::EmptyTypeName` for blank input.
    pub fn new(value: impl Into<String>) -> Result<Self, AssetValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(AssetValidationError::EmptyTypeName);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Domain category this type belongs to.
    pub fn category(&self) -> AssetCategory {
        AssetCategory::of(self.as_str())
    }
}

impl Display for TypeName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for TypeName {
    type Error = AssetValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TypeName> for String {
    fn from(value: TypeName) -> Self {
        value.0
    }
}

/// Lifecycle status of an entity or relationship.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityStatus {
    #[default]
    Active,
    /// Soft-deleted; still retrievable, hidden from default listings.
    Deleted,
}

/// Certification level attached to an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CertificateStatus {
    Verified,
    Draft,
    Deprecated,
}

/// Severity of an announcement banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnouncementType {
    Information,
    Warning,
    Issue,
}

/// Structural validation failures for assets and type tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetValidationError {
    NilGuid,
    EmptyTypeName,
    EmptyQualifiedName,
    EmptyName,
}

impl Display for AssetValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilGuid => write!(f, "asset guid must not be nil"),
            Self::EmptyTypeName => write!(f, "asset typeName must not be blank"),
            Self::EmptyQualifiedName => write!(f, "asset qualifiedName must not be blank"),
            Self::EmptyName => write!(f, "asset name must not be blank"),
        }
    }
}

impl Error for AssetValidationError {}

/// Canonical catalog record.
///
/// Attributes shared by every type are typed fields. Type-specific
/// attributes live in `attributes`, keyed by their catalog attribute name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub guid: AssetGuid,
    pub type_name: TypeName,
    pub qualified_name: String,
    pub name: String,
    #[serde(default)]
    pub status: EntityStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_status: Option<CertificateStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_status_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub announcement_type: Option<AnnouncementType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub announcement_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub announcement_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_description: Option<String>,
    #[serde(default)]
    pub owner_users: BTreeSet<String>,
    #[serde(default)]
    pub owner_groups: BTreeSet<String>,
    /// Glossary terms linked to this asset, including soft-deleted links.
    #[serde(default)]
    pub meanings: Vec<TermRef>,
    #[serde(default)]
    pub atlan_tags: BTreeSet<String>,
    #[serde(default)]
    pub attributes: BTreeMap<String, serde_json::Value>,
}

impl Asset {
    /// Creates an active asset with a generated GUID and no optional fields.
    pub fn new(
        type_name: TypeName,
        qualified_name: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self::with_guid(Uuid::new_v4(), type_name, qualified_name, name)
    }

    /// Creates an asset with a caller-provided GUID.
    ///
    /// Used when identity already exists on the server side.
    pub fn with_guid(
        guid: AssetGuid,
        type_name: TypeName,
        qualified_name: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            guid,
            type_name,
            qualified_name: qualified_name.into(),
            name: name.into(),
            status: EntityStatus::Active,
            certificate_status: None,
            certificate_status_message: None,
            announcement_type: None,
            announcement_title: None,
            announcement_message: None,
            description: None,
            user_description: None,
            owner_users: BTreeSet::new(),
            owner_groups: BTreeSet::new(),
            meanings: Vec::new(),
            atlan_tags: BTreeSet::new(),
            attributes: BTreeMap::new(),
        }
    }

    /// Validates identity invariants.
    pub fn validate(&self) -> Result<(), AssetValidationError> {
        if self.guid.is_nil() {
            return Err(AssetValidationError::NilGuid);
        }
        if self.qualified_name.trim().is_empty() {
            return Err(AssetValidationError::EmptyQualifiedName);
        }
        if self.name.trim().is_empty() {
            return Err(AssetValidationError::EmptyName);
        }
        Ok(())
    }

    /// Builds the minimal identity-only patch for this asset.
    ///
    /// # Errors
    /// - Returns `PatchError::MissingRequiredParameters` when `qualified_name`
    ///   or `name` is blank.
    pub fn trim_to_required(&self) -> Result<AssetPatch, PatchError> {
        AssetPatch::updater(self.type_name.as_str(), &self.qualified_name, &self.name)
    }

    pub fn soft_delete(&mut self) {
        self.status = EntityStatus::Deleted;
    }

    pub fn restore(&mut self) {
        self.status = EntityStatus::Active;
    }

    pub fn is_active(&self) -> bool {
        self.status == EntityStatus::Active
    }

    /// Term links that are not soft-deleted.
    pub fn active_meanings(&self) -> Vec<TermRef> {
        crate::model::term::active_terms(&self.meanings)
    }

    /// Type-specific attribute by catalog name.
    pub fn attribute(&self, key: &str) -> Option<&serde_json::Value> {
        self.attributes.get(key)
    }

    /// Sets one type-specific attribute, returning the previous value.
    pub fn set_attribute(
        &mut self,
        key: impl Into<String>,
        value: serde_json::Value,
    ) -> Option<serde_json::Value> {
        self.attributes.insert(key.into(), value)
    }
}
