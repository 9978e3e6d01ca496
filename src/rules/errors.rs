//! Rule error types.

use thiserror::Error;

/// Error while evaluating a metadata rule.
///
/// Rules are total over their documented input domain; these errors mark
/// inputs outside it. They are propagated to the host unrecovered - the
/// host owns reporting for rule execution failures.
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("cannot parse version `{version}` of `{module}` as a version number")]
    UnparsableVersion { module: String, version: String },

    #[error("artifact name `{name}` is too short to carry a spec version")]
    MalformedSpecName { name: String },
}
