//! SDK operations over an explicit client.
//!
//! # Responsibility
//! - Turn caller intent into minimal patches and transport calls.
//! - Map missing results into semantic not-found errors.
//!
//! # Invariants
//! - Every operation is one or two sequential transport calls; there is no
//!   transaction between a fetch and the following save, so a concurrent
//!   change in between is overwritten.
//! - Validation failures are raised before any transport call.

pub mod lifecycle;
pub mod lookup;
pub mod tags;
pub mod terms;
pub mod update;

use crate::error::{AtlanError, AtlanResult};
use crate::model::asset::TypeName;

fn parse_type_name(type_name: &str) -> AtlanResult<TypeName> {
    Ok(TypeName::new(type_name)?)
}

fn require_text(value: &str, field: &'static str) -> AtlanResult<()> {
    if value.trim().is_empty() {
        return Err(AtlanError::MissingRequiredParameters(vec![field]));
    }
    Ok(())
}
