//! Immutable partial-update requests.
//!
//! # Responsibility
//! - Carry the minimal identity of an asset (`typeName`, `qualifiedName`,
//!   `name`) plus only the fields a caller intends to change.
//! - Distinguish "leave untouched" (field absent) from "remove on the server"
//!   (`FieldChange::Clear`).
//!
//! # Invariants
//! - A patch always has non-blank identity; `updater` is the only entry point.
//! - Every `with_*`/`without_*` call returns a new value; nothing mutates in place.
//! - Optional text (certificate message, announcement title and message) is
//!   applied only when longer than one character.
//! - An empty term or tag set is expressed as `Clear`, never as `Set(empty)`.

use crate::model::asset::{AnnouncementType, CertificateStatus, EntityStatus, TypeName};
use crate::model::term::TermRef;
use std::collections::{BTreeMap, BTreeSet};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Shortest optional text that is forwarded to the server.
pub const MIN_OPTIONAL_TEXT_CHARS: usize = 2;

/// Attribute addressed by a patch, named as the catalog names it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PatchField {
    Status,
    CertificateStatus,
    CertificateStatusMessage,
    AnnouncementType,
    AnnouncementTitle,
    AnnouncementMessage,
    Description,
    UserDescription,
    OwnerUsers,
    OwnerGroups,
    Meanings,
    AtlanTags,
}

impl PatchField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::CertificateStatus => "certificateStatus",
            Self::CertificateStatusMessage => "certificateStatusMessage",
            Self::AnnouncementType => "announcementType",
            Self::AnnouncementTitle => "announcementTitle",
            Self::AnnouncementMessage => "announcementMessage",
            Self::Description => "description",
            Self::UserDescription => "userDescription",
            Self::OwnerUsers => "ownerUsers",
            Self::OwnerGroups => "ownerGroups",
            Self::Meanings => "meanings",
            Self::AtlanTags => "atlanTags",
        }
    }
}

/// Typed value carried by `FieldChange::Set`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchValue {
    Status(EntityStatus),
    Certificate(CertificateStatus),
    Announcement(AnnouncementType),
    Text(String),
    Names(BTreeSet<String>),
    Terms(Vec<TermRef>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldChange {
    Set(PatchValue),
    /// Remove the attribute server-side.
    Clear,
}

/// Patch construction failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchError {
    /// Lists every missing identity field, in declaration order.
    MissingRequiredParameters(Vec<&'static str>),
}

impl Display for PatchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingRequiredParameters(fields) => {
                write!(f, "missing required parameters: {}", fields.join(", "))
            }
        }
    }
}

impl Error for PatchError {}

/// Minimal "what changed" request for one asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPatch {
    type_name: TypeName,
    qualified_name: String,
    name: String,
    changes: BTreeMap<PatchField, FieldChange>,
}

impl AssetPatch {
    /// Builds an identity-only patch.
    ///
    /// # Errors
    /// - `PatchError::MissingRequiredParameters` naming each blank argument
    ///   among `typeName`, `qualifiedName` and `name`.
    pub fn updater(type_name: &str, qualified_name: &str, name: &str) -> Result<Self, PatchError> {
        let mut missing = Vec::new();
        let type_name = match TypeName::new(type_name) {
            Ok(value) => Some(value),
            Err(_) => {
                missing.push("typeName");
                None
            }
        };
        if qualified_name.trim().is_empty() {
            missing.push("qualifiedName");
        }
        if name.trim().is_empty() {
            missing.push("name");
        }

        match type_name {
            Some(type_name) if missing.is_empty() => Ok(Self {
                type_name,
                qualified_name: qualified_name.trim().to_string(),
                name: name.trim().to_string(),
                changes: BTreeMap::new(),
            }),
            _ => Err(PatchError::MissingRequiredParameters(missing)),
        }
    }

    /// Drops every change and keeps identity only.
    pub fn trim_to_required(&self) -> Self {
        Self {
            type_name: self.type_name.clone(),
            qualified_name: self.qualified_name.clone(),
            name: self.name.clone(),
            changes: BTreeMap::new(),
        }
    }

    pub fn type_name(&self) -> &TypeName {
        &self.type_name
    }

    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn change(&self, field: PatchField) -> Option<&FieldChange> {
        self.changes.get(&field)
    }

    pub fn changes(&self) -> impl Iterator<Item = (PatchField, &FieldChange)> {
        self.changes.iter().map(|(field, change)| (*field, change))
    }

    pub fn is_identity_only(&self) -> bool {
        self.changes.is_empty()
    }

    /// Names of fields this patch clears server-side.
    pub fn cleared_fields(&self) -> Vec<&'static str> {
        self.changes
            .iter()
            .filter(|(_, change)| matches!(change, FieldChange::Clear))
            .map(|(field, _)| field.as_str())
            .collect()
    }

    pub fn with_status(self, status: EntityStatus) -> Self {
        self.set(PatchField::Status, PatchValue::Status(status))
    }

    /// Sets certificate status and, when meaningful, its message.
    pub fn with_certificate(self, status: CertificateStatus, message: Option<&str>) -> Self {
        let patch = self.set(
            PatchField::CertificateStatus,
            PatchValue::Certificate(status),
        );
        match meaningful_text(message) {
            Some(text) => patch.set(PatchField::CertificateStatusMessage, PatchValue::Text(text)),
            None => patch,
        }
    }

    pub fn without_certificate(self) -> Self {
        self.clear(PatchField::CertificateStatus)
            .clear(PatchField::CertificateStatusMessage)
    }

    /// Sets announcement type and, when meaningful, its title and message.
    pub fn with_announcement(
        self,
        kind: AnnouncementType,
        title: Option<&str>,
        message: Option<&str>,
    ) -> Self {
        let mut patch = self.set(
            PatchField::AnnouncementType,
            PatchValue::Announcement(kind),
        );
        if let Some(text) = meaningful_text(title) {
            patch = patch.set(PatchField::AnnouncementTitle, PatchValue::Text(text));
        }
        if let Some(text) = meaningful_text(message) {
            patch = patch.set(PatchField::AnnouncementMessage, PatchValue::Text(text));
        }
        patch
    }

    pub fn without_announcement(self) -> Self {
        self.clear(PatchField::AnnouncementType)
            .clear(PatchField::AnnouncementTitle)
            .clear(PatchField::AnnouncementMessage)
    }

    pub fn without_description(self) -> Self {
        self.clear(PatchField::Description)
    }

    pub fn without_user_description(self) -> Self {
        self.clear(PatchField::UserDescription)
    }

    /// Replaces owners; an empty side is cleared.
    pub fn with_owners(self, users: BTreeSet<String>, groups: BTreeSet<String>) -> Self {
        self.names_or_clear(PatchField::OwnerUsers, users)
            .names_or_clear(PatchField::OwnerGroups, groups)
    }

    pub fn without_owners(self) -> Self {
        self.clear(PatchField::OwnerUsers)
            .clear(PatchField::OwnerGroups)
    }

    /// Replaces the term set; an empty set becomes "remove all terms".
    pub fn with_terms(self, terms: Vec<TermRef>) -> Self {
        if terms.is_empty() {
            self.without_terms()
        } else {
            self.set(PatchField::Meanings, PatchValue::Terms(terms))
        }
    }

    pub fn without_terms(self) -> Self {
        self.clear(PatchField::Meanings)
    }

    /// Replaces the tag set; an empty set becomes "remove all tags".
    pub fn with_atlan_tags(self, tags: BTreeSet<String>) -> Self {
        self.names_or_clear(PatchField::AtlanTags, tags)
    }

    pub fn without_atlan_tags(self) -> Self {
        self.clear(PatchField::AtlanTags)
    }

    fn names_or_clear(self, field: PatchField, names: BTreeSet<String>) -> Self {
        if names.is_empty() {
            self.clear(field)
        } else {
            self.set(field, PatchValue::Names(names))
        }
    }

    fn set(mut self, field: PatchField, value: PatchValue) -> Self {
        self.changes.insert(field, FieldChange::Set(value));
        self
    }

    pub(crate) fn clear(mut self, field: PatchField) -> Self {
        self.changes.insert(field, FieldChange::Clear);
        self
    }
}

/// Returns the text when it is longer than one character.
pub fn meaningful_text(value: Option<&str>) -> Option<String> {
    value
        .filter(|text| text.chars().count() >= MIN_OPTIONAL_TEXT_CHARS)
        .map(str::to_string)
}
