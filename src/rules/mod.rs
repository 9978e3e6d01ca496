//! Component metadata rules.
//!
//! A rule inspects one resolved component and may rewrite its published
//! metadata; the registry wires rules to the artifact coordinates they
//! apply to. Rules are stateless and pure with respect to their declared
//! inputs, so the host may invoke them concurrently across a dependency
//! graph and cache their results keyed on module identity.

pub mod errors;
pub mod jaxrs;
pub mod version;

pub use errors::RuleError;
pub use jaxrs::JaxRsApiRule;

use std::collections::HashMap;
use std::sync::Arc;

use crate::core::{ComponentMetadata, Coordinates};

/// Outcome of a rule's tagging decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CapabilityDecision {
    /// Attach the shared capability at this normalized version.
    Tag(String),

    /// Leave the component untouched.
    NoTag,
}

impl CapabilityDecision {
    /// Check if this decision tags the component.
    pub fn is_tag(&self) -> bool {
        matches!(self, CapabilityDecision::Tag(_))
    }
}

/// MetadataRule trait - interface for component metadata rules.
///
/// A rule declares the coordinates it applies to and mutates matching
/// components' metadata when executed. Implementations must be stateless:
/// the same component identity always produces the same mutation.
pub trait MetadataRule: Send + Sync {
    /// Coordinates this rule is registered against.
    fn modules(&self) -> &[Coordinates];

    /// Apply the rule to one component's metadata.
    fn execute(&self, component: &mut ComponentMetadata) -> Result<(), RuleError>;
}

/// Registry of metadata rules, keyed by artifact coordinates.
///
/// The registry always constructs successfully and performs coordinate
/// filtering on behalf of its rules: a rule only ever sees components
/// whose coordinates it declared via `modules()`.
pub struct RuleRegistry {
    rules: HashMap<Coordinates, Vec<Arc<dyn MetadataRule>>>,
}

impl RuleRegistry {
    /// Create a registry with the built-in rules registered.
    pub fn new() -> Self {
        let mut registry = RuleRegistry::empty();

        registry.register(Arc::new(JaxRsApiRule::new()));

        registry
    }

    /// Create a registry with no rules.
    pub fn empty() -> Self {
        RuleRegistry {
            rules: HashMap::new(),
        }
    }

    /// Register a rule against every coordinate it declares.
    pub fn register(&mut self, rule: Arc<dyn MetadataRule>) {
        for &coordinates in rule.modules() {
            self.rules
                .entry(coordinates)
                .or_default()
                .push(Arc::clone(&rule));
        }
    }

    /// Get the rules registered for the given coordinates.
    pub fn rules_for(&self, coordinates: Coordinates) -> &[Arc<dyn MetadataRule>] {
        self.rules
            .get(&coordinates)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Check if any rule is registered for the given coordinates.
    pub fn contains(&self, coordinates: Coordinates) -> bool {
        self.rules.contains_key(&coordinates)
    }

    /// Get the number of coordinates with at least one registered rule.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run every rule registered for the component's coordinates, in
    /// registration order.
    ///
    /// Components with no matching rule pass through untouched. The first
    /// rule error aborts the pass and is propagated to the host.
    pub fn apply(&self, component: &mut ComponentMetadata) -> Result<(), RuleError> {
        for rule in self.rules_for(component.id().coordinates()) {
            rule.execute(component)?;
        }
        Ok(())
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
