//! The JAX-RS API capability rule.
//!
//! Six differently-coordinated artifacts have historically carried the
//! `javax.ws.rs` API surface: the original javax artifact, the Jakarta
//! relocation, three JBoss spec repackagings, and RESTEasy's fork. Any two
//! of them on one classpath provide the same classes. This rule tags every
//! pre-Jakarta (or vendor-forked) release with the shared
//! `javax.ws.rs:jsr311-api` capability so the host resolver sees the
//! overlap.
//!
//! Version normalization is scheme-dependent. JBoss encodes the spec
//! version in the artifact NAME (`jboss-jaxrs-api_2.1_spec` packages the
//! 2.1 API) while its release version counts packaging revisions, so the
//! name wins and the release version is ignored. Everything else uses the
//! release version with a trailing `.Final` or `.GA` stripped.

use semver::{BuildMetadata, Prerelease, Version};

use crate::core::{Capability, ComponentMetadata, Coordinates, ModuleId};
use crate::rules::version::{parse_lenient, strip_release_suffix};
use crate::rules::{CapabilityDecision, MetadataRule, RuleError};

/// Group of the shared capability.
pub const CAPABILITY_GROUP: &str = "javax.ws.rs";

/// Name of the shared capability.
pub const CAPABILITY_NAME: &str = "jsr311-api";

/// First release published under the `jakarta.ws.rs` namespace. Releases
/// from here on live in the `jakarta.*` packages and no longer conflict
/// with the legacy artifacts.
pub const FIRST_JAKARTA_VERSION: Version = Version {
    major: 3,
    minor: 0,
    patch: 0,
    pre: Prerelease::EMPTY,
    build: BuildMetadata::EMPTY,
};

/// Every published artifact known to carry the JAX-RS API surface.
pub const MODULES: [(&str, &str); 6] = [
    ("org.jboss.spec.javax.ws.rs", "jboss-jaxrs-api_2.1_spec"),
    ("org.jboss.spec.javax.ws.rs", "jboss-jaxrs-api_2.0_spec"),
    ("org.jboss.spec.javax.ws.rs", "jboss-jaxrs-api_1.1_spec"),
    ("org.jboss.resteasy", "jaxrs-api"),
    ("jakarta.ws.rs", "jakarta.ws.rs-api"),
    ("javax.ws.rs", "javax.ws.rs-api"),
];

/// RESTEasy's fork never moved to the Jakarta namespace; it is tagged
/// regardless of version.
const RESTEASY_GROUP: &str = "org.jboss.resteasy";

/// Marker the JBoss spec repackagings carry in their artifact names. The
/// 3 bytes after it are the spec version token (`"2.1"`).
const JBOSS_SPEC_MARKER: &str = "jboss-jaxrs-api_";

/// Tags legacy JAX-RS API artifacts with the shared `jsr311-api`
/// capability.
pub struct JaxRsApiRule {
    modules: Vec<Coordinates>,
}

impl JaxRsApiRule {
    /// Create the rule with its known module set.
    pub fn new() -> Self {
        JaxRsApiRule {
            modules: MODULES
                .iter()
                .map(|&(group, name)| Coordinates::new(group, name))
                .collect(),
        }
    }

    /// Decide whether a module carries the shared capability, and at which
    /// normalized version.
    ///
    /// Pure: the same identity always yields the same decision.
    pub fn decide(id: &ModuleId) -> Result<CapabilityDecision, RuleError> {
        let version = if id.name().contains(JBOSS_SPEC_MARKER) {
            jboss_spec_version(id.name())?
        } else {
            strip_release_suffix(id.version()).to_string()
        };

        // RESTEasy is tagged unconditionally; its version is never parsed.
        if id.group() == RESTEASY_GROUP {
            return Ok(CapabilityDecision::Tag(version));
        }

        let parsed = parse_lenient(&version).ok_or_else(|| RuleError::UnparsableVersion {
            module: id.to_string(),
            version: version.clone(),
        })?;

        if parsed < FIRST_JAKARTA_VERSION {
            Ok(CapabilityDecision::Tag(version))
        } else {
            Ok(CapabilityDecision::NoTag)
        }
    }
}

/// Extract the spec version from a JBoss repackaging name.
///
/// Takes the 3 bytes at the fixed offset after the marker
/// (`jboss-jaxrs-api_2.1_spec` -> `"2.1"`) and pads to `"2.1.0"`. The
/// fixed slice matches the published naming scheme, which uses
/// single-digit major and minor components.
fn jboss_spec_version(name: &str) -> Result<String, RuleError> {
    let start = JBOSS_SPEC_MARKER.len();
    let token = name
        .get(start..start + 3)
        .ok_or_else(|| RuleError::MalformedSpecName {
            name: name.to_string(),
        })?;

    Ok(format!("{}.0", token))
}

impl MetadataRule for JaxRsApiRule {
    fn modules(&self) -> &[Coordinates] {
        &self.modules
    }

    fn execute(&self, component: &mut ComponentMetadata) -> Result<(), RuleError> {
        match Self::decide(component.id())? {
            CapabilityDecision::Tag(version) => {
                let capability = Capability::new(CAPABILITY_GROUP, CAPABILITY_NAME, version);

                tracing::debug!("tagging {} with {}", component.id(), capability);
                component.all_variants(|variant| variant.add_capability(capability.clone()));

                Ok(())
            }
            CapabilityDecision::NoTag => Ok(()),
        }
    }
}

impl Default for JaxRsApiRule {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decide(group: &str, name: &str, version: &str) -> CapabilityDecision {
        JaxRsApiRule::decide(&ModuleId::new(group, name, version)).unwrap()
    }

    fn tag(version: &str) -> CapabilityDecision {
        CapabilityDecision::Tag(version.to_string())
    }

    #[test]
    fn test_jboss_name_encodes_spec_version() {
        assert_eq!(
            decide(
                "org.jboss.spec.javax.ws.rs",
                "jboss-jaxrs-api_2.1_spec",
                "2.0.2.Final"
            ),
            tag("2.1.0")
        );
    }

    #[test]
    fn test_jboss_release_version_is_ignored() {
        // The name wins over a release version that would decide
        // differently on its own.
        for release in ["1.0.1.Final", "3.0.0", "whatever"] {
            assert_eq!(
                decide(
                    "org.jboss.spec.javax.ws.rs",
                    "jboss-jaxrs-api_2.0_spec",
                    release
                ),
                tag("2.0.0")
            );
        }
    }

    #[test]
    fn test_oldest_jboss_spec_tagged() {
        assert_eq!(
            decide(
                "org.jboss.spec.javax.ws.rs",
                "jboss-jaxrs-api_1.1_spec",
                "1.0.2.Final"
            ),
            tag("1.1.0")
        );
    }

    #[test]
    fn test_final_suffix_stripped() {
        assert_eq!(
            decide("javax.ws.rs", "javax.ws.rs-api", "2.0.1.Final"),
            tag("2.0.1")
        );
    }

    #[test]
    fn test_ga_suffix_stripped() {
        assert_eq!(decide("javax.ws.rs", "javax.ws.rs-api", "1.0.GA"), tag("1.0"));
    }

    #[test]
    fn test_pre_jakarta_release_tagged() {
        assert_eq!(
            decide("jakarta.ws.rs", "jakarta.ws.rs-api", "2.1.6"),
            tag("2.1.6")
        );
    }

    #[test]
    fn test_jakarta_cutover_not_tagged() {
        // Boundary: 3.0.0 itself is already Jakarta.
        assert_eq!(
            decide("jakarta.ws.rs", "jakarta.ws.rs-api", "3.0.0"),
            CapabilityDecision::NoTag
        );
    }

    #[test]
    fn test_post_jakarta_release_not_tagged() {
        assert_eq!(
            decide("jakarta.ws.rs", "jakarta.ws.rs-api", "3.1.0"),
            CapabilityDecision::NoTag
        );
    }

    #[test]
    fn test_resteasy_always_tagged() {
        assert_eq!(
            decide("org.jboss.resteasy", "jaxrs-api", "3.0.12.Final"),
            tag("3.0.12")
        );
        assert_eq!(
            decide("org.jboss.resteasy", "jaxrs-api", "4.0.0"),
            tag("4.0.0")
        );
    }

    #[test]
    fn test_resteasy_skips_version_parse() {
        // The group check short-circuits, so even an unparsable version
        // tags instead of erroring.
        assert_eq!(
            decide("org.jboss.resteasy", "jaxrs-api", "nightly-20121130"),
            tag("nightly-20121130")
        );
    }

    #[test]
    fn test_two_segment_version_tagged() {
        assert_eq!(decide("javax.ws.rs", "javax.ws.rs-api", "2.1"), tag("2.1"));
    }

    #[test]
    fn test_unparsable_version_errors() {
        let result = JaxRsApiRule::decide(&ModuleId::new(
            "jakarta.ws.rs",
            "jakarta.ws.rs-api",
            "not.a.version",
        ));

        assert!(matches!(
            result,
            Err(RuleError::UnparsableVersion { .. })
        ));
    }

    #[test]
    fn test_truncated_jboss_name_errors() {
        let result = JaxRsApiRule::decide(&ModuleId::new(
            "org.jboss.spec.javax.ws.rs",
            "jboss-jaxrs-api_2",
            "1.0.0",
        ));

        assert!(matches!(result, Err(RuleError::MalformedSpecName { .. })));
    }

    #[test]
    fn test_decide_is_deterministic() {
        let id = ModuleId::new("javax.ws.rs", "javax.ws.rs-api", "2.0.1.Final");

        assert_eq!(
            JaxRsApiRule::decide(&id).unwrap(),
            JaxRsApiRule::decide(&id).unwrap()
        );
    }

    #[test]
    fn test_execute_tags_all_variants() {
        let rule = JaxRsApiRule::new();
        let mut component = ComponentMetadata::new(ModuleId::new(
            "javax.ws.rs",
            "javax.ws.rs-api",
            "2.1.1",
        ))
        .with_variant("apiElements")
        .with_variant("runtimeElements");

        rule.execute(&mut component).unwrap();

        let expected = Capability::new(CAPABILITY_GROUP, CAPABILITY_NAME, "2.1.1");
        for variant in component.variants() {
            assert_eq!(variant.capabilities(), &[expected.clone()]);
        }
    }

    #[test]
    fn test_execute_leaves_jakarta_untouched() {
        let rule = JaxRsApiRule::new();
        let mut component = ComponentMetadata::new(ModuleId::new(
            "jakarta.ws.rs",
            "jakarta.ws.rs-api",
            "3.0.0",
        ))
        .with_variant("apiElements");

        rule.execute(&mut component).unwrap();

        assert!(component.variants()[0].capabilities().is_empty());
    }

    #[test]
    fn test_modules_cover_known_set() {
        let rule = JaxRsApiRule::new();

        assert_eq!(rule.modules().len(), 6);
        assert!(rule
            .modules()
            .contains(&Coordinates::new("org.jboss.resteasy", "jaxrs-api")));
    }
}
