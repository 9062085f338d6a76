//! Primitive set implementations, one per toolchain family.
//!
//! All three are always compiled; the build only decides which one
//! [`crate::Active`] names.

mod fallback;
mod gcc;
mod iar;

pub use fallback::Fallback;
pub use gcc::Gcc;
pub use iar::Iar;
