#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![cfg_attr(target_arch = "avr", feature(asm_experimental_arch, abi_avr_interrupt))]

//! # toolshim-compiler
//!
//! Compiler-specific primitives for AVR8, XMEGA and UC3 firmware, selected
//! once at build time.
//!
//! Firmware that must be portable across toolchains still needs a handful of
//! operations only the compiler can provide: a memory barrier, a query for
//! whether a value is a compile-time constant, interrupt routine
//! declaration, and direct system register access. This crate gives each of
//! them one name and resolves that name to the active toolchain's
//! implementation before code generation.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  Firmware (USB stack, drivers, application)  │
//! └──────────────────────┬───────────────────────┘
//!                        │ memory_barrier!(), isr! { .. }, ...
//! ┌──────────────────────▼───────────────────────┐
//! │  Facade macros                               │
//! └──────────────────────┬───────────────────────┘
//!                        │ <Active as Toolchain>::..
//! ┌──────────────────────▼───────────────────────┐
//! │  Gcc │ Iar │ Fallback   (one selected by cfg) │
//! └──────────────────────▲───────────────────────┘
//!                        │ cfg(toolshim_family), cfg(toolshim_arch)
//! ┌──────────────────────┴───────────────────────┐
//! │  build.rs → toolshim-detect                  │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! When no toolchain is recognized the [`families::Fallback`] family keeps
//! every name defined with neutral behaviour.
//!
//! Do not depend on this crate directly; depend on `toolshim`, which
//! enables the features this crate expects.

#[cfg(not(any(feature = "__umbrella", test, doc)))]
compile_error!(
    "Do not depend on toolshim-compiler directly. Depend on the toolshim crate instead to gain this functionality."
);

pub mod error;
pub mod families;
pub mod family;
pub mod isr;
pub mod part;
pub mod register;
pub mod toolchain;

mod facade;

pub use error::{ShimError, ShimResult};
pub use family::{Arch, Family, ACTIVE_ARCH};
pub use isr::{IrqGroup, IrqLevel, IsrBinding, IsrConfig, IsrDescriptor, IsrKind, Vector};
pub use part::{PartConvention, PartSymbol};
pub use register::{StatusWord, SysReg, Word, STATUS_REGISTER};
pub use toolchain::Toolchain;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Toolchain family selected for this build.
#[cfg(toolshim_family = "gcc")]
pub type Active = families::Gcc;
/// Toolchain family selected for this build.
#[cfg(toolshim_family = "iar")]
pub type Active = families::Iar;
/// Toolchain family selected for this build.
#[cfg(not(any(toolshim_family = "gcc", toolshim_family = "iar")))]
pub type Active = families::Fallback;

/// Family of [`Active`].
pub const ACTIVE_FAMILY: Family = <Active as Toolchain>::FAMILY;

#[cfg(test)]
mod tests;
