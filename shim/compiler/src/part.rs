//! Compile-time part queries.
//!
//! A toolchain predefines one symbol naming the device being built for, such
//! as `__AVR_ATmega32U4__` under avr-gcc. Each family spells that symbol
//! differently, and within a family each architecture has its own prefix.
//! The set of symbols predefined for this build is generated by the build
//! script; queries compare against it in `const` context.

use crate::error::{ShimError, ShimResult};
use crate::family::Arch;
use crate::toolchain::Toolchain;

mod generated {
    include!(concat!(env!("OUT_DIR"), "/toolshim_parts.rs"));
}

/// Capacity of a rendered [`PartSymbol`].
pub const PART_SYMBOL_CAPACITY: usize = 48;

/// A rendered part symbol, e.g. `__AVR32_AT32UC3A0512__`.
pub type PartSymbol = heapless::String<PART_SYMBOL_CAPACITY>;

const SUFFIX: &str = "__";

/// Per-architecture prefixes of a family's part symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartConvention {
    pub avr8: &'static str,
    pub xmega: &'static str,
    pub uc3: &'static str,
}

impl PartConvention {
    pub const fn prefix(&self, arch: Arch) -> &'static str {
        match arch {
            Arch::Avr8 => self.avr8,
            Arch::Xmega => self.xmega,
            Arch::Uc3 => self.uc3,
        }
    }

    /// True if `symbol` is this convention's symbol for `part` on `arch`.
    pub const fn matches(&self, arch: Arch, symbol: &str, part: &str) -> bool {
        let prefix = self.prefix(arch).as_bytes();
        let part = part.as_bytes();
        let suffix = SUFFIX.as_bytes();
        let symbol = symbol.as_bytes();

        symbol.len() == prefix.len() + part.len() + suffix.len()
            && bytes_at(symbol, 0, prefix)
            && bytes_at(symbol, prefix.len(), part)
            && bytes_at(symbol, prefix.len() + part.len(), suffix)
    }

    /// True if any of `predefined` is this convention's symbol for `part`.
    pub const fn is_defined_in(&self, arch: Arch, part: &str, predefined: &[&str]) -> bool {
        let mut i = 0;
        while i < predefined.len() {
            if self.matches(arch, predefined[i], part) {
                return true;
            }
            i += 1;
        }
        false
    }

    /// Renders the symbol for `part` on `arch`.
    pub fn symbol(&self, arch: Arch, part: &str) -> ShimResult<PartSymbol> {
        let mut symbol = PartSymbol::new();
        for piece in [self.prefix(arch), part, SUFFIX] {
            symbol
                .push_str(piece)
                .map_err(|_| ShimError::PartSymbolTooLong)?;
        }
        Ok(symbol)
    }
}

const fn bytes_at(haystack: &[u8], offset: usize, needle: &[u8]) -> bool {
    let mut i = 0;
    while i < needle.len() {
        if haystack[offset + i] != needle[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Part symbols the toolchain predefines for this build.
pub const fn predefined_parts() -> &'static [&'static str] {
    generated::PREDEFINED_PARTS
}

/// Whether `part` is the device this build targets, according to family `T`.
///
/// Always `false` for a family without a part convention.
pub const fn is_part_defined<T: Toolchain>(arch: Arch, part: &str) -> bool {
    match T::PART_CONVENTION {
        Some(convention) => convention.is_defined_in(arch, part, generated::PREDEFINED_PARTS),
        None => false,
    }
}

/// The symbol family `T` would predefine for `part` on `arch`.
pub fn part_symbol<T: Toolchain>(arch: Arch, part: &str) -> ShimResult<Option<PartSymbol>> {
    T::PART_CONVENTION
        .map(|convention| convention.symbol(arch, part))
        .transpose()
}
