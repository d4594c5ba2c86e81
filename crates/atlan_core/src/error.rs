//! SDK-level error kinds.
//!
//! # Invariants
//! - Not-found errors always carry the identifier that was looked up.
//! - Transport failures are wrapped unchanged; nothing is retried.

use crate::model::asset::{AssetGuid, AssetValidationError, TypeName};
use crate::model::patch::PatchError;
use crate::transport::TransportError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type AtlanResult<T> = Result<T, AtlanError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AtlanError {
    /// No asset with this GUID, or none of the expected type.
    NotFoundByGuid {
        guid: AssetGuid,
        expected_type: Option<TypeName>,
    },
    NotFoundByQualifiedName {
        type_name: TypeName,
        qualified_name: String,
    },
    NotFoundByName {
        type_name: TypeName,
        name: String,
    },
    /// Identity fields required for the request were blank.
    MissingRequiredParameters(Vec<&'static str>),
    /// Request is well-formed but cannot be honored as given.
    InvalidRequest {
        field: &'static str,
        message: String,
    },
    Transport(TransportError),
}

impl AtlanError {
    /// Stable code for log correlation and caller-side mapping.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFoundByGuid { .. } => "ATLAN-404-001",
            Self::NotFoundByQualifiedName { .. } => "ATLAN-404-003",
            Self::NotFoundByName { .. } => "ATLAN-404-004",
            Self::MissingRequiredParameters(_) => "ATLAN-400-001",
            Self::InvalidRequest { .. } => "ATLAN-400-002",
            Self::Transport(_) => "ATLAN-500-001",
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NotFoundByGuid { .. }
                | Self::NotFoundByQualifiedName { .. }
                | Self::NotFoundByName { .. }
        )
    }
}

impl Display for AtlanError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFoundByGuid {
                guid,
                expected_type: Some(expected),
            } => write!(f, "no {expected} asset found with guid {guid}"),
            Self::NotFoundByGuid {
                guid,
                expected_type: None,
            } => write!(f, "no asset found with guid {guid}"),
            Self::NotFoundByQualifiedName {
                type_name,
                qualified_name,
            } => write!(
                f,
                "no {type_name} asset found with qualifiedName `{qualified_name}`"
            ),
            Self::NotFoundByName { type_name, name } => {
                write!(f, "no {type_name} asset found with name `{name}`")
            }
            Self::MissingRequiredParameters(fields) => {
                write!(f, "missing required parameters: {}", fields.join(", "))
            }
            Self::InvalidRequest { field, message } => {
                write!(f, "invalid request on `{field}`: {message}")
            }
            Self::Transport(err) => write!(f, "{err}"),
        }
    }
}

impl Error for AtlanError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Transport(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TransportError> for AtlanError {
    fn from(value: TransportError) -> Self {
        Self::Transport(value)
    }
}

impl From<PatchError> for AtlanError {
    fn from(value: PatchError) -> Self {
        match value {
            PatchError::MissingRequiredParameters(fields) => Self::MissingRequiredParameters(fields),
        }
    }
}

impl From<AssetValidationError> for AtlanError {
    fn from(value: AssetValidationError) -> Self {
        let field = match value {
            AssetValidationError::NilGuid => "guid",
            AssetValidationError::EmptyTypeName => "typeName",
            AssetValidationError::EmptyQualifiedName => "qualifiedName",
            AssetValidationError::EmptyName => "name",
        };
        Self::MissingRequiredParameters(vec![field])
    }
}
