//! # toolshim-detect
//!
//! Build-time half of toolshim. The build script of `toolshim-compiler` runs
//! [`detect`] exactly once: it reads the compiler identity and the target
//! architecture asserted for the build, selects one toolchain family, and
//! publishes the choice as `cfg` flags plus a generated table of the part
//! symbols that toolchain predefines.
//!
//! ```text
//! Cargo features / TOOLSHIM_* env ──► DetectConfig ──► detect() ──► Selection
//!                                                                     │
//!                        cargo:rustc-cfg=toolshim_family="gcc" ◄──────┤
//!                        $OUT_DIR/toolshim_parts.rs           ◄──────┘
//! ```
//!
//! Detection never warns. An unrecognized compiler selects the fallback
//! family silently; only contradictory or malformed configuration is an error.

pub mod config;
pub mod error;
pub mod family;
pub mod selection;

pub use config::{DetectConfig, DetectConfigBuilder};
pub use error::{DetectError, DetectResult};
pub use family::{Arch, Family, FallbackPolicy};
pub use selection::{detect, Selection, PARTS_FILE};

use std::path::Path;
use std::{fs, io};

/// Detects the family for the running build script and publishes it.
///
/// Writes the Cargo directives to stdout and the part table to
/// `out_dir/`[`PARTS_FILE`].
pub fn run(out_dir: &Path) -> Result<Selection, Box<dyn std::error::Error>> {
    let config = DetectConfig::from_env();
    let selection = detect(&config)?;

    selection.emit(&mut io::stdout().lock())?;
    fs::write(out_dir.join(PARTS_FILE), selection.parts_source())?;

    Ok(selection)
}
