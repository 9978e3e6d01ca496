//! Module identity - WHAT artifact (coordinates + version).
//!
//! A ModuleId names one resolved artifact exactly as the host resolver saw
//! it. The version stays a raw string: JVM release versions such as
//! `2.0.1.Final` are not semantic versions, so parsing and ordering are
//! deferred to the rules that need them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::Coordinates;

/// The identity of one resolved artifact.
///
/// Read-only input to rules; the host supplies one per component being
/// processed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleId {
    coordinates: Coordinates,
    version: String,
}

impl ModuleId {
    /// Create a module identity from its three coordinates.
    pub fn new(
        group: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        ModuleId {
            coordinates: Coordinates::new(group, name),
            version: version.into(),
        }
    }

    /// Create a module identity from interned coordinates and a version.
    pub fn from_coordinates(coordinates: Coordinates, version: impl Into<String>) -> Self {
        ModuleId {
            coordinates,
            version: version.into(),
        }
    }

    /// Get the interned group/name pair.
    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    /// Get the group.
    pub fn group(&self) -> &str {
        self.coordinates.group()
    }

    /// Get the artifact name.
    pub fn name(&self) -> &str {
        self.coordinates.name()
    }

    /// Get the raw published version string.
    pub fn version(&self) -> &str {
        &self.version
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.coordinates, self.version)
    }
}

impl Serialize for ModuleId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        // Serialize as a struct for host-side caching
        #[derive(Serialize)]
        struct ModuleIdData<'a> {
            group: &'a str,
            name: &'a str,
            version: &'a str,
        }

        let data = ModuleIdData {
            group: self.group(),
            name: self.name(),
            version: &self.version,
        };

        data.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ModuleId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct ModuleIdData {
            group: String,
            name: String,
            version: String,
        }

        let data = ModuleIdData::deserialize(deserializer)?;
        Ok(ModuleId::new(data.group, data.name, data.version))
    }
}
