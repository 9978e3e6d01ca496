//! Version normalization for published JVM artifacts.
//!
//! Release versions in the JVM ecosystem mix plain semantic versions with
//! vendor release suffixes (`2.0.1.Final`, `1.0.GA`) and short two-segment
//! forms (`2.1`). Rules strip the suffixes and parse leniently so every
//! version in the documented domain lands on an ordered `semver::Version`.

use semver::Version;

/// Strip a trailing `.Final` or `.GA` release suffix, if present.
///
/// `.Final` is checked first; a version carrying neither suffix passes
/// through unchanged.
pub fn strip_release_suffix(version: &str) -> &str {
    if let Some(stripped) = version.strip_suffix(".Final") {
        stripped
    } else if let Some(stripped) = version.strip_suffix(".GA") {
        stripped
    } else {
        version
    }
}

/// Parse a version string, tolerating short forms.
///
/// Missing trailing segments are treated as zero, so `"2.1"` compares
/// equal to `"2.1.0"`.
pub fn parse_lenient(s: &str) -> Option<Version> {
    // A full semver string needs no help.
    if let Ok(v) = s.parse() {
        return Some(v);
    }

    // Otherwise accept up to three numeric segments, zero-filled.
    let mut numbers = [0u64; 3];
    let mut segments = s.split('.');
    for slot in &mut numbers {
        match segments.next() {
            Some(segment) => *slot = segment.parse().ok()?,
            None => break,
        }
    }
    if segments.next().is_some() {
        return None;
    }

    let [major, minor, patch] = numbers;
    Some(Version::new(major, minor, patch))
}
