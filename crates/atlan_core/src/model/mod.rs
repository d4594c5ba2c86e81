//! Catalog domain model shared by every asset type.
//!
//! # Responsibility
//! - Define one canonical asset record keyed by a type tag instead of one
//!   struct per catalog type.
//! - Define the immutable partial-update value (`AssetPatch`) and the pure
//!   set arithmetic used to reconcile terms and tags.
//!
//! # Invariants
//! - Every persisted asset is identified by a GUID and by
//!   `(type_name, qualified_name)`.
//! - Deletion is a soft-delete status, not removal from the catalog.

pub mod asset;
pub mod category;
pub mod patch;
pub mod qualified_name;
pub mod tag;
pub mod term;
