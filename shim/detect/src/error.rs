//! Detection failures. Each one aborts the build with its message.

use thiserror::Error;

/// Result type used by the detector.
pub type DetectResult<T> = Result<T, DetectError>;

/// Build configuration errors found while selecting a toolchain family.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DetectError {
    #[error("ambiguous toolchain identity: both `{first}` and `{second}` are asserted for this build")]
    AmbiguousToolchain { first: String, second: String },
    #[error("unknown target architecture `{0}` (expected one of: avr8, xmega, uc3)")]
    UnknownArch(String),
    #[error("ambiguous target architecture: both `{first}` and `{second}` are asserted for this build")]
    AmbiguousArch { first: String, second: String },
    #[error("invalid part name `{0}`: part names may only contain ASCII letters, digits and `_`")]
    InvalidPart(String),
    #[error("unknown fallback policy `{0}` (expected `silent` or `deny`)")]
    UnknownPolicy(String),
}
