//! Family selection and the Cargo directives describing it.

use std::io::{self, Write};

use log::{debug, trace};

use crate::config::{DetectConfig, TRACKED_ENV};
use crate::error::{DetectError, DetectResult};
use crate::family::{Arch, Family, FallbackPolicy};

/// Name of the generated predefined-part table in `OUT_DIR`.
pub const PARTS_FILE: &str = "toolshim_parts.rs";

/// The outcome of detection: one family, one architecture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub family: Family,
    pub arch: Arch,
    pub policy: FallbackPolicy,
    /// Symbols the selected toolchain predefines for the configured parts.
    pub predefined: Vec<String>,
}

impl Selection {
    /// True when safety-relevant facade primitives must fail the build.
    pub fn is_strict(&self) -> bool {
        self.family == Family::Fallback && self.policy == FallbackPolicy::Deny
    }

    /// Writes the Cargo directives for this selection.
    pub fn emit<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for var in TRACKED_ENV {
            writeln!(out, "cargo:rerun-if-env-changed={var}")?;
        }

        writeln!(out, "cargo:rustc-check-cfg=cfg(toolshim_family, values({}))", quoted(Family::ALL.map(Family::cfg_value)))?;
        writeln!(out, "cargo:rustc-check-cfg=cfg(toolshim_arch, values({}))", quoted(Arch::ALL.map(Arch::cfg_value)))?;
        writeln!(out, "cargo:rustc-check-cfg=cfg(toolshim_strict)")?;

        writeln!(out, "cargo:rustc-cfg=toolshim_family=\"{}\"", self.family.cfg_value())?;
        writeln!(out, "cargo:rustc-cfg=toolshim_arch=\"{}\"", self.arch.cfg_value())?;
        if self.is_strict() {
            writeln!(out, "cargo:rustc-cfg=toolshim_strict")?;
        }
        Ok(())
    }

    /// Renders the predefined-part table included by `toolshim-compiler`.
    pub fn parts_source(&self) -> String {
        let mut source = String::from("// @generated by toolshim-detect\n");
        source.push_str("pub(crate) const PREDEFINED_PARTS: &[&str] = &[");
        for symbol in &self.predefined {
            source.push_str(&format!("\n    {symbol:?},"));
        }
        if !self.predefined.is_empty() {
            source.push('\n');
        }
        source.push_str("];\n");
        source
    }
}

fn quoted<const N: usize>(values: [&str; N]) -> String {
    values
        .iter()
        .map(|v| format!("\"{v}\""))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Selects exactly one toolchain family and one architecture.
///
/// Unrecognized toolchain identities are dropped without a diagnostic, so a
/// build with no recognized compiler selects [`Family::Fallback`]. Two
/// different recognized families are an error.
pub fn detect(config: &DetectConfig) -> DetectResult<Selection> {
    let family = select_family(&config.toolchain_signals)?;
    let arch = select_arch(&config.arch_signals)?;

    let policy = match &config.fallback_policy {
        None => FallbackPolicy::default(),
        Some(name) => {
            FallbackPolicy::from_name(name).ok_or_else(|| DetectError::UnknownPolicy(name.clone()))?
        }
    };

    let mut predefined = Vec::new();
    for part in &config.parts {
        if !is_identifier(part) {
            return Err(DetectError::InvalidPart(part.clone()));
        }
        if let Some(symbol) = family.part_symbol(arch, part) {
            if !predefined.contains(&symbol) {
                predefined.push(symbol);
            }
        }
    }

    debug!("selected toolchain family `{family}` for architecture `{arch}` ({policy:?} fallback)");

    Ok(Selection {
        family,
        arch,
        policy,
        predefined,
    })
}

fn select_family(signals: &[String]) -> DetectResult<Family> {
    let mut selected: Option<(Family, &str)> = None;

    for signal in signals {
        let Some(family) = Family::from_identity(signal) else {
            trace!("ignoring unrecognized toolchain identity `{signal}`");
            continue;
        };
        match selected {
            Some((current, first)) if current != family => {
                return Err(DetectError::AmbiguousToolchain {
                    first: first.to_string(),
                    second: signal.clone(),
                });
            }
            Some(_) => {}
            None => selected = Some((family, signal.as_str())),
        }
    }

    Ok(selected.map_or(Family::Fallback, |(family, _)| family))
}

fn select_arch(signals: &[String]) -> DetectResult<Arch> {
    let mut selected: Option<(Arch, &str)> = None;

    for signal in signals {
        let arch = Arch::from_name(signal).ok_or_else(|| DetectError::UnknownArch(signal.clone()))?;
        match selected {
            Some((current, first)) if current != arch => {
                return Err(DetectError::AmbiguousArch {
                    first: first.to_string(),
                    second: signal.clone(),
                });
            }
            Some(_) => {}
            None => selected = Some((arch, signal.as_str())),
        }
    }

    Ok(selected.map_or(Arch::default(), |(arch, _)| arch))
}

fn is_identifier(part: &str) -> bool {
    !part.is_empty() && part.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}
