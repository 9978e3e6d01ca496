//! Capability descriptors.
//!
//! A capability is a synthetic (group, name, version) tag attached to
//! published variant metadata. Two components carrying a capability with
//! the same group and name provide overlapping functionality, which is how
//! the host resolver detects that differently-coordinated artifacts
//! conflict on one classpath.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A (group, name, version) tag naming provided functionality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capability {
    group: String,
    name: String,
    version: String,
}

impl Capability {
    /// Create a capability descriptor.
    pub fn new(
        group: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Capability {
            group: group.into(),
            name: name.into(),
            version: version.into(),
        }
    }

    /// Get the capability group.
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Get the capability name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the capability version.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Check whether two capabilities name the same functionality,
    /// ignoring their versions.
    pub fn same_capability(&self, other: &Capability) -> bool {
        self.group == other.group && self.name == other.name
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.name, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let cap = Capability::new("javax.ws.rs", "jsr311-api", "2.1.0");
        assert_eq!(cap.to_string(), "javax.ws.rs:jsr311-api:2.1.0");
    }

    #[test]
    fn test_same_capability_ignores_version() {
        let a = Capability::new("javax.ws.rs", "jsr311-api", "1.1.0");
        let b = Capability::new("javax.ws.rs", "jsr311-api", "2.0.1");
        let c = Capability::new("javax.ws.rs", "other-api", "1.1.0");

        assert!(a.same_capability(&b));
        assert!(!a.same_capability(&c));
        assert_ne!(a, b);
    }
}
