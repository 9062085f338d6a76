//! Toolchain families, target architectures and their naming conventions as
//! seen from the build script.

use core::fmt;

/// Toolchain family selected for a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// GNU toolchains (`avr-gcc`, `avr32-gcc`).
    Gcc,
    /// IAR Embedded Workbench for AVR32.
    Iar,
    /// Neutral implementation used when no toolchain is recognized.
    Fallback,
}

impl Family {
    /// All families, in `cfg` value order.
    pub const ALL: [Family; 3] = [Family::Gcc, Family::Iar, Family::Fallback];

    /// Value used for `cfg(toolshim_family = "...")`.
    pub const fn cfg_value(self) -> &'static str {
        match self {
            Family::Gcc => "gcc",
            Family::Iar => "iar",
            Family::Fallback => "fallback",
        }
    }

    /// Maps a compiler identity to a family.
    ///
    /// Accepts the Cargo feature names as well as common compiler driver names.
    /// Anything unrecognized returns `None`; the caller degrades to
    /// [`Family::Fallback`].
    pub fn from_identity(identity: &str) -> Option<Family> {
        let identity = identity.trim().to_ascii_lowercase();
        let driver = identity.rsplit(['/', '\\']).next().unwrap_or(&identity);
        let driver = driver.strip_suffix(".exe").unwrap_or(driver);

        match driver {
            "gcc" | "gnu" | "avr-gcc" | "avr32-gcc" => Some(Family::Gcc),
            "iar" | "iccavr32" => Some(Family::Iar),
            _ => None,
        }
    }

    /// Prefix and suffix of the part symbol this family's compiler predefines,
    /// or `None` when the family has no part symbols at all.
    pub const fn part_affixes(self, arch: Arch) -> Option<(&'static str, &'static str)> {
        match (self, arch) {
            (Family::Gcc, Arch::Avr8 | Arch::Xmega) => Some(("__AVR_", "__")),
            (Family::Gcc, Arch::Uc3) => Some(("__AVR32_", "__")),
            (Family::Iar, Arch::Avr8 | Arch::Xmega) => Some(("__AT", "__")),
            (Family::Iar, Arch::Uc3) => Some(("__AT32", "__")),
            (Family::Fallback, _) => None,
        }
    }

    /// Symbol the compiler of this family predefines for `part` on `arch`.
    pub fn part_symbol(self, arch: Arch, part: &str) -> Option<String> {
        self.part_affixes(arch)
            .map(|(prefix, suffix)| format!("{prefix}{part}{suffix}"))
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.cfg_value())
    }
}

/// Target architecture of the build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Arch {
    /// Classic 8-bit AVR.
    #[default]
    Avr8,
    /// 8-bit AVR XMEGA.
    Xmega,
    /// 32-bit AVR32 UC3.
    Uc3,
}

impl Arch {
    /// All architectures, in `cfg` value order.
    pub const ALL: [Arch; 3] = [Arch::Avr8, Arch::Xmega, Arch::Uc3];

    /// Value used for `cfg(toolshim_arch = "...")`.
    pub const fn cfg_value(self) -> &'static str {
        match self {
            Arch::Avr8 => "avr8",
            Arch::Xmega => "xmega",
            Arch::Uc3 => "uc3",
        }
    }

    /// Parses an architecture name. Unlike toolchain identities, unknown
    /// names are a configuration error, so this returns `None` and the
    /// detector reports it.
    pub fn from_name(name: &str) -> Option<Arch> {
        match name.trim().to_ascii_lowercase().as_str() {
            "avr8" | "avr" => Some(Arch::Avr8),
            "xmega" => Some(Arch::Xmega),
            "uc3" | "avr32" => Some(Arch::Uc3),
            _ => None,
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.cfg_value())
    }
}

/// What the facade does with safety-relevant primitives under
/// [`Family::Fallback`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackPolicy {
    /// Barriers and register access silently become no-ops.
    #[default]
    Silent,
    /// Using a barrier or register primitive fails the build.
    Deny,
}

impl FallbackPolicy {
    pub fn from_name(name: &str) -> Option<FallbackPolicy> {
        match name.trim().to_ascii_lowercase().as_str() {
            "silent" => Some(FallbackPolicy::Silent),
            "deny" => Some(FallbackPolicy::Deny),
            _ => None,
        }
    }
}
