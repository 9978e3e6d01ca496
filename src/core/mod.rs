//! Core data structures for capability rules.
//!
//! This module contains the foundational types shared by every rule:
//! - Interned coordinates and module identity
//! - Capability descriptors
//! - Component metadata and its variants

pub mod capability;
pub mod coordinates;
pub mod metadata;
pub mod module_id;

pub use capability::Capability;
pub use coordinates::Coordinates;
pub use metadata::{ComponentMetadata, Variant};
pub use module_id::ModuleId;
