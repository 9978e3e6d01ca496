//! Module coordinates - WHICH artifact family (group + name).
//!
//! Coordinates are interned for cheap comparison and cloning. A dependency
//! graph mentions the same handful of group/name pairs thousands of times,
//! so every pair is stored once and equality is a pointer check.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{LazyLock, RwLock};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Global coordinates interner
static COORDINATES_INTERNER: LazyLock<RwLock<HashMap<CoordinatesInner, &'static CoordinatesInner>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/// An interned `group:name` pair identifying a published artifact family.
///
/// Coordinates are cheap to copy and compare (pointer comparison). They
/// deliberately exclude the version: rules are registered against artifact
/// families, not individual releases.
#[derive(Clone, Copy)]
pub struct Coordinates {
    inner: &'static CoordinatesInner,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CoordinatesInner {
    group: String,
    name: String,
}

impl Coordinates {
    /// Create (or look up) the coordinates for a group and artifact name.
    pub fn new(group: impl Into<String>, name: impl Into<String>) -> Self {
        let inner = CoordinatesInner {
            group: group.into(),
            name: name.into(),
        };

        Self::intern(inner)
    }

    fn intern(inner: CoordinatesInner) -> Self {
        // Fast path: check if already interned
        {
            let interner = COORDINATES_INTERNER.read().unwrap();
            if let Some(&interned) = interner.get(&inner) {
                return Coordinates { inner: interned };
            }
        }

        // Slow path: intern under the write lock
        let mut interner = COORDINATES_INTERNER.write().unwrap();

        // Double-check after acquiring write lock
        if let Some(&interned) = interner.get(&inner) {
            return Coordinates { inner: interned };
        }

        let leaked: &'static CoordinatesInner = Box::leak(Box::new(inner.clone()));
        interner.insert(inner, leaked);

        Coordinates { inner: leaked }
    }

    /// Get the group (Maven `groupId`), e.g. `jakarta.ws.rs`.
    pub fn group(&self) -> &'static str {
        &self.inner.group
    }

    /// Get the artifact name (Maven `artifactId`), e.g. `jakarta.ws.rs-api`.
    pub fn name(&self) -> &'static str {
        &self.inner.name
    }
}

impl PartialEq for Coordinates {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.inner, other.inner)
    }
}

impl Eq for Coordinates {}

impl Hash for Coordinates {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(self.inner, state)
    }
}

impl PartialOrd for Coordinates {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coordinates {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner
            .group
            .cmp(&other.inner.group)
            .then_with(|| self.inner.name.cmp(&other.inner.name))
    }
}

impl fmt::Debug for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Coordinates")
            .field("group", &self.inner.group)
            .field("name", &self.inner.name)
            .finish()
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.inner.group, self.inner.name)
    }
}

impl Serialize for Coordinates {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Serialize as the coordinate string
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Coordinates {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let (group, name) = s.split_once(':').ok_or_else(|| {
            serde::de::Error::custom(format!("expected `group:name` coordinates, got `{}`", s))
        })?;
        Ok(Coordinates::new(group, name))
    }
}
