//! Error type for runtime-checked constructors.

use core::fmt;

/// Result type used by toolshim constructors.
pub type ShimResult<T> = Result<T, ShimError>;

/// Error types for toolshim operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShimError {
    /// Interrupt group outside the interrupt controller's range
    InvalidGroup(u8),
    /// Interrupt level outside `0..=3`
    InvalidLevel(u8),
    /// Part symbol does not fit in a [`crate::part::PartSymbol`]
    PartSymbolTooLong,
}

impl fmt::Display for ShimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShimError::InvalidGroup(group) => write!(f, "Invalid interrupt group {}", group),
            ShimError::InvalidLevel(level) => write!(f, "Invalid interrupt level {}", level),
            ShimError::PartSymbolTooLong => write!(f, "Part symbol too long"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ShimError {}

#[cfg(feature = "defmt")]
impl defmt::Format for ShimError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            ShimError::InvalidGroup(group) => defmt::write!(fmt, "InvalidGroup({})", group),
            ShimError::InvalidLevel(level) => defmt::write!(fmt, "InvalidLevel({})", level),
            ShimError::PartSymbolTooLong => defmt::write!(fmt, "PartSymbolTooLong"),
        }
    }
}
