//! Build configuration gathered from Cargo features and environment variables.

use log::trace;

/// Environment variable naming the compiler identity.
pub const ENV_TOOLCHAIN: &str = "TOOLSHIM_TOOLCHAIN";
/// Environment variable naming the target architecture.
pub const ENV_ARCH: &str = "TOOLSHIM_ARCH";
/// Environment variable listing predefined parts, comma separated.
pub const ENV_PART: &str = "TOOLSHIM_PART";
/// Environment variable selecting the fallback policy.
pub const ENV_FALLBACK: &str = "TOOLSHIM_FALLBACK";

/// Environment variables the build script must be rerun for.
pub const TRACKED_ENV: [&str; 4] = [ENV_TOOLCHAIN, ENV_ARCH, ENV_PART, ENV_FALLBACK];

/// Toolchain features and the identity each one asserts.
const TOOLCHAIN_FEATURES: [(&str, &str); 2] = [("CARGO_FEATURE_GCC", "gcc"), ("CARGO_FEATURE_IAR", "iar")];

/// Architecture features and the architecture each one asserts.
const ARCH_FEATURES: [(&str, &str); 3] = [
    ("CARGO_FEATURE_ARCH_AVR8", "avr8"),
    ("CARGO_FEATURE_ARCH_XMEGA", "xmega"),
    ("CARGO_FEATURE_ARCH_UC3", "uc3"),
];

const STRICT_FALLBACK_FEATURE: &str = "CARGO_FEATURE_STRICT_FALLBACK";

/// Raw, unvalidated build facts. [`crate::detect`] turns them into a
/// [`crate::Selection`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetectConfig {
    /// Every asserted compiler identity, recognized or not.
    pub toolchain_signals: Vec<String>,
    /// Every asserted architecture name.
    pub arch_signals: Vec<String>,
    /// Parts the toolchain predefines a symbol for.
    pub parts: Vec<String>,
    /// Explicit fallback policy name, if any.
    pub fallback_policy: Option<String>,
}

impl DetectConfig {
    /// Creates a new configuration builder.
    pub fn builder() -> DetectConfigBuilder {
        DetectConfigBuilder::default()
    }

    /// Reads the configuration of the running build script.
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Reads the configuration through `lookup`, which returns the value of
    /// an environment variable.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();

        for (var, identity) in TOOLCHAIN_FEATURES {
            if lookup(var).is_some() {
                trace!("feature {var} asserts toolchain `{identity}`");
                builder = builder.toolchain(identity);
            }
        }
        if let Some(identity) = lookup(ENV_TOOLCHAIN).filter(|v| !v.trim().is_empty()) {
            trace!("{ENV_TOOLCHAIN} asserts toolchain `{identity}`");
            builder = builder.toolchain(identity);
        }

        for (var, arch) in ARCH_FEATURES {
            if lookup(var).is_some() {
                trace!("feature {var} asserts architecture `{arch}`");
                builder = builder.arch(arch);
            }
        }
        if let Some(arch) = lookup(ENV_ARCH).filter(|v| !v.trim().is_empty()) {
            trace!("{ENV_ARCH} asserts architecture `{arch}`");
            builder = builder.arch(arch);
        }

        if let Some(parts) = lookup(ENV_PART) {
            for part in parts.split(',').map(str::trim).filter(|p| !p.is_empty()) {
                builder = builder.part(part);
            }
        }

        if let Some(policy) = lookup(ENV_FALLBACK).filter(|v| !v.trim().is_empty()) {
            builder = builder.fallback_policy(policy);
        } else if lookup(STRICT_FALLBACK_FEATURE).is_some() {
            builder = builder.fallback_policy("deny");
        }

        builder.build()
    }
}

/// Builder for [`DetectConfig`].
#[derive(Debug, Clone, Default)]
pub struct DetectConfigBuilder {
    config: DetectConfig,
}

impl DetectConfigBuilder {
    /// Asserts a compiler identity.
    pub fn toolchain(mut self, identity: impl Into<String>) -> Self {
        self.config.toolchain_signals.push(identity.into());
        self
    }

    /// Asserts a target architecture name.
    pub fn arch(mut self, arch: impl Into<String>) -> Self {
        self.config.arch_signals.push(arch.into());
        self
    }

    /// Adds a part the toolchain predefines.
    pub fn part(mut self, part: impl Into<String>) -> Self {
        self.config.parts.push(part.into());
        self
    }

    /// Sets the fallback policy by name (`silent` or `deny`).
    pub fn fallback_policy(mut self, policy: impl Into<String>) -> Self {
        self.config.fallback_policy = Some(policy.into());
        self
    }

    pub fn build(self) -> DetectConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn empty_environment_gives_empty_config() {
        let config = DetectConfig::from_vars(vars(&[]));
        assert_eq!(config, DetectConfig::default());
    }

    #[test]
    fn features_and_env_are_collected() {
        let config = DetectConfig::from_vars(vars(&[
            ("CARGO_FEATURE_GCC", "1"),
            ("CARGO_FEATURE_ARCH_UC3", "1"),
            (ENV_PART, "AT32UC3A0512, UC3A0512 ,"),
        ]));

        assert_eq!(config.toolchain_signals, vec!["gcc"]);
        assert_eq!(config.arch_signals, vec!["uc3"]);
        assert_eq!(config.parts, vec!["AT32UC3A0512", "UC3A0512"]);
        assert_eq!(config.fallback_policy, None);
    }

    #[test]
    fn env_toolchain_is_an_additional_signal() {
        let config = DetectConfig::from_vars(vars(&[
            ("CARGO_FEATURE_IAR", "1"),
            (ENV_TOOLCHAIN, "avr-gcc"),
        ]));
        assert_eq!(config.toolchain_signals, vec!["iar", "avr-gcc"]);
    }

    #[test]
    fn blank_env_values_are_ignored() {
        let config = DetectConfig::from_vars(vars(&[(ENV_TOOLCHAIN, "  "), (ENV_ARCH, "")]));
        assert!(config.toolchain_signals.is_empty());
        assert!(config.arch_signals.is_empty());
    }

    #[test]
    fn strict_feature_selects_deny_unless_env_overrides() {
        let strict = DetectConfig::from_vars(vars(&[("CARGO_FEATURE_STRICT_FALLBACK", "1")]));
        assert_eq!(strict.fallback_policy.as_deref(), Some("deny"));

        let overridden = DetectConfig::from_vars(vars(&[
            ("CARGO_FEATURE_STRICT_FALLBACK", "1"),
            (ENV_FALLBACK, "silent"),
        ]));
        assert_eq!(overridden.fallback_policy.as_deref(), Some("silent"));
    }

    #[test]
    fn builder_accumulates() {
        let config = DetectConfig::builder()
            .toolchain("gcc")
            .arch("xmega")
            .part("ATxmega128A1U")
            .fallback_policy("deny")
            .build();

        assert_eq!(config.toolchain_signals, vec!["gcc"]);
        assert_eq!(config.arch_signals, vec!["xmega"]);
        assert_eq!(config.parts, vec!["ATxmega128A1U"]);
        assert_eq!(config.fallback_policy.as_deref(), Some("deny"));
    }
}
