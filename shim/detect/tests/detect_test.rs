//! Toolchain and architecture selection tests.

use toolshim_detect::{detect, Arch, DetectConfig, DetectError, Family, FallbackPolicy};

#[test]
fn no_signal_selects_fallback() {
    let selection = detect(&DetectConfig::default()).unwrap();

    assert_eq!(selection.family, Family::Fallback);
    assert_eq!(selection.arch, Arch::Avr8);
    assert_eq!(selection.policy, FallbackPolicy::Silent);
    assert!(selection.predefined.is_empty());
}

#[test]
fn single_signal_selects_its_family() {
    let gcc = detect(&DetectConfig::builder().toolchain("gcc").build()).unwrap();
    assert_eq!(gcc.family, Family::Gcc);

    let iar = detect(&DetectConfig::builder().toolchain("iccavr32").build()).unwrap();
    assert_eq!(iar.family, Family::Iar);
}

#[test]
fn unrecognized_toolchain_is_silently_fallback() {
    let config = DetectConfig::builder().toolchain("sdcc").toolchain("clang").build();
    let selection = detect(&config).unwrap();
    assert_eq!(selection.family, Family::Fallback);

    let mut out = Vec::new();
    selection.emit(&mut out).unwrap();
    let directives = String::from_utf8(out).unwrap();
    assert!(!directives.contains("cargo:warning"));
    assert!(directives.contains("cargo:rustc-cfg=toolshim_family=\"fallback\""));
}

#[test]
fn unrecognized_signal_does_not_mask_a_recognized_one() {
    let config = DetectConfig::builder().toolchain("clang").toolchain("avr-gcc").build();
    assert_eq!(detect(&config).unwrap().family, Family::Gcc);
}

#[test]
fn repeated_signal_for_the_same_family_is_not_ambiguous() {
    let config = DetectConfig::builder().toolchain("gcc").toolchain("avr32-gcc").build();
    assert_eq!(detect(&config).unwrap().family, Family::Gcc);
}

#[test]
fn two_families_are_ambiguous() {
    let config = DetectConfig::builder().toolchain("gcc").toolchain("iar").build();
    let err = detect(&config).unwrap_err();

    assert_eq!(
        err,
        DetectError::AmbiguousToolchain {
            first: "gcc".into(),
            second: "iar".into(),
        }
    );
    assert!(err.to_string().contains("ambiguous toolchain identity"));
}

#[test]
fn unknown_arch_is_rejected() {
    let config = DetectConfig::builder().toolchain("gcc").arch("cortex-m").build();
    assert_eq!(
        detect(&config).unwrap_err(),
        DetectError::UnknownArch("cortex-m".into())
    );
}

#[test]
fn conflicting_arch_is_rejected() {
    let config = DetectConfig::builder().arch("avr8").arch("uc3").build();
    assert!(matches!(
        detect(&config).unwrap_err(),
        DetectError::AmbiguousArch { .. }
    ));
}

#[test]
fn predefined_parts_use_family_naming() {
    let config = DetectConfig::builder()
        .toolchain("gcc")
        .arch("uc3")
        .part("AT32UC3A0512")
        .part("AT32UC3A0512")
        .build();
    let selection = detect(&config).unwrap();

    assert_eq!(selection.predefined, vec!["__AVR32_AT32UC3A0512__"]);
}

#[test]
fn fallback_predefines_nothing() {
    let config = DetectConfig::builder().part("ATmega32U4").build();
    assert!(detect(&config).unwrap().predefined.is_empty());
}

#[test]
fn malformed_part_is_rejected() {
    let config = DetectConfig::builder().toolchain("gcc").part("ATmega32U4__;").build();
    assert_eq!(
        detect(&config).unwrap_err(),
        DetectError::InvalidPart("ATmega32U4__;".into())
    );
}

#[test]
fn fallback_policy_names() {
    let deny = detect(&DetectConfig::builder().fallback_policy("deny").build()).unwrap();
    assert!(deny.is_strict());

    let deny_with_gcc = detect(
        &DetectConfig::builder()
            .toolchain("gcc")
            .fallback_policy("deny")
            .build(),
    )
    .unwrap();
    assert!(!deny_with_gcc.is_strict());

    assert_eq!(
        detect(&DetectConfig::builder().fallback_policy("loud").build()).unwrap_err(),
        DetectError::UnknownPolicy("loud".into())
    );
}

#[test]
fn directives_declare_and_set_cfgs() {
    let selection = detect(&DetectConfig::builder().toolchain("iar").arch("xmega").build()).unwrap();

    let mut out = Vec::new();
    selection.emit(&mut out).unwrap();
    let directives = String::from_utf8(out).unwrap();

    assert!(directives.contains(
        "cargo:rustc-check-cfg=cfg(toolshim_family, values(\"gcc\", \"iar\", \"fallback\"))"
    ));
    assert!(directives.contains("cargo:rustc-cfg=toolshim_family=\"iar\""));
    assert!(directives.contains("cargo:rustc-cfg=toolshim_arch=\"xmega\""));
    assert!(directives.contains("cargo:rerun-if-env-changed=TOOLSHIM_TOOLCHAIN"));
    assert!(!directives.contains("cargo:rustc-cfg=toolshim_strict"));
}

#[test]
fn strict_directive_only_under_fallback() {
    let selection = detect(&DetectConfig::builder().fallback_policy("deny").build()).unwrap();

    let mut out = Vec::new();
    selection.emit(&mut out).unwrap();
    assert!(String::from_utf8(out)
        .unwrap()
        .lines()
        .any(|line| line == "cargo:rustc-cfg=toolshim_strict"));
}

#[test]
fn parts_source_is_a_const_table() {
    let empty = detect(&DetectConfig::builder().toolchain("gcc").build()).unwrap();
    assert!(empty
        .parts_source()
        .contains("pub(crate) const PREDEFINED_PARTS: &[&str] = &[];"));

    let one = detect(&DetectConfig::builder().toolchain("gcc").part("ATmega32U4").build()).unwrap();
    assert!(one.parts_source().contains("\n    \"__AVR_ATmega32U4__\",\n];"));
}
