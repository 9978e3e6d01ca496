//! Component metadata - the mutation surface handed to rules.
//!
//! ComponentMetadata is the host resolver's view of one resolved
//! component: its identity plus one or more variants (alternative metadata
//! views such as `apiElements` and `runtimeElements`), each carrying its
//! own capability set. Rules receive it mutably and may attach
//! capabilities; everything else about the component stays with the host.

use serde::{Deserialize, Serialize};

use crate::core::{Capability, ModuleId};

/// One metadata view of a component.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Variant {
    name: String,
    capabilities: Vec<Capability>,
}

impl Variant {
    /// Create a variant with no capabilities attached.
    pub fn new(name: impl Into<String>) -> Self {
        Variant {
            name: name.into(),
            capabilities: Vec::new(),
        }
    }

    /// Get the variant name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the attached capabilities.
    pub fn capabilities(&self) -> &[Capability] {
        &self.capabilities
    }

    /// Attach a capability.
    ///
    /// Attaching a capability that is already present is a no-op, so
    /// re-running a rule leaves the variant unchanged.
    pub fn add_capability(&mut self, capability: Capability) {
        if !self.capabilities.contains(&capability) {
            self.capabilities.push(capability);
        }
    }

    /// Check whether any attached capability has this group and name.
    pub fn has_capability(&self, group: &str, name: &str) -> bool {
        self.capabilities
            .iter()
            .any(|c| c.group() == group && c.name() == name)
    }
}

/// The host resolver's mutable view of one resolved component.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentMetadata {
    id: ModuleId,
    variants: Vec<Variant>,
}

impl ComponentMetadata {
    /// Create metadata for a component with no variants yet.
    pub fn new(id: ModuleId) -> Self {
        ComponentMetadata {
            id,
            variants: Vec::new(),
        }
    }

    /// Add a variant (builder-style).
    pub fn with_variant(mut self, name: impl Into<String>) -> Self {
        self.variants.push(Variant::new(name));
        self
    }

    /// Get the component's identity.
    pub fn id(&self) -> &ModuleId {
        &self.id
    }

    /// Get the component's variants.
    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    /// Apply `f` to every variant.
    ///
    /// This is the "tag all variants" primitive: a mutation made through
    /// it lands on every metadata view uniformly, never on a subset.
    pub fn all_variants<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut Variant),
    {
        for variant in &mut self.variants {
            f(variant);
        }
    }
}
