//! Toolchain family and target architecture of the current build.
//!
//! Both are fixed by the build script through `cfg(toolshim_family)` and
//! `cfg(toolshim_arch)`; nothing here is decided at run time.

use core::fmt;

/// Toolchain family implementing the primitive set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    /// GNU toolchains (`avr-gcc`, `avr32-gcc`)
    Gcc,
    /// IAR Embedded Workbench for AVR32
    Iar,
    /// No recognized toolchain; neutral implementations
    Fallback,
}

impl Family {
    /// Short lowercase name, matching the `toolshim_family` cfg value.
    pub const fn name(self) -> &'static str {
        match self {
            Family::Gcc => "gcc",
            Family::Iar => "iar",
            Family::Fallback => "fallback",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Family {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Family::Gcc => defmt::write!(fmt, "Gcc"),
            Family::Iar => defmt::write!(fmt, "Iar"),
            Family::Fallback => defmt::write!(fmt, "Fallback"),
        }
    }
}

/// Target architecture. Selects part-naming prefixes and register layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arch {
    /// Classic 8-bit AVR
    Avr8,
    /// 8-bit AVR XMEGA
    Xmega,
    /// 32-bit AVR32 UC3
    Uc3,
}

impl Arch {
    /// Short lowercase name, matching the `toolshim_arch` cfg value.
    pub const fn name(self) -> &'static str {
        match self {
            Arch::Avr8 => "avr8",
            Arch::Xmega => "xmega",
            Arch::Uc3 => "uc3",
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Arch {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Arch::Avr8 => defmt::write!(fmt, "Avr8"),
            Arch::Xmega => defmt::write!(fmt, "Xmega"),
            Arch::Uc3 => defmt::write!(fmt, "Uc3"),
        }
    }
}

/// Architecture this crate was built for.
#[cfg(toolshim_arch = "xmega")]
pub const ACTIVE_ARCH: Arch = Arch::Xmega;
/// Architecture this crate was built for.
#[cfg(toolshim_arch = "uc3")]
pub const ACTIVE_ARCH: Arch = Arch::Uc3;
/// Architecture this crate was built for.
#[cfg(not(any(toolshim_arch = "xmega", toolshim_arch = "uc3")))]
pub const ACTIVE_ARCH: Arch = Arch::Avr8;
