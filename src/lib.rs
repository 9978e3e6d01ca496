//! Capstan - capability metadata rules for JVM dependency resolution.
//!
//! This crate provides component metadata rules for a build-dependency
//! resolver: pluggable units that inspect a resolved artifact's identity
//! and rewrite its published metadata. The built-in rule detects the six
//! coordinate names under which the legacy `javax.ws.rs` (JAX-RS) API has
//! been published and tags pre-Jakarta releases with a shared capability,
//! so the resolver can see that two differently-named artifacts provide
//! the same classes.

pub mod core;
pub mod rules;

pub use crate::core::{
    capability::Capability, coordinates::Coordinates, metadata::ComponentMetadata,
    metadata::Variant, module_id::ModuleId,
};

pub use crate::rules::{CapabilityDecision, JaxRsApiRule, MetadataRule, RuleError, RuleRegistry};
