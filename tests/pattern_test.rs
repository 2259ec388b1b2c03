// tests/pattern_test.rs
use ebump::domain::{TagKind, VersionInfo};
use ebump::pattern::{Dialect, Pattern};

#[test]
fn test_dialect_detection_is_per_pattern() {
    assert_eq!(
        Pattern::compile("MAJOR.MINOR.PATCH").unwrap().dialect(),
        Dialect::Modern
    );
    assert_eq!(
        Pattern::compile("{major}.{minor}.{patch}").unwrap().dialect(),
        Dialect::Legacy
    );
    // A single legacy placeholder makes the whole pattern legacy
    assert_eq!(
        Pattern::compile("{major}.MINOR.PATCH").unwrap().dialect(),
        Dialect::Legacy
    );
}

#[test]
fn test_dialects_parse_the_same_versions() {
    let modern = Pattern::compile("MAJOR.MINOR.PATCH[-TAGNUM]").unwrap();
    let legacy = Pattern::compile("{major}.{minor}.{patch}[-{tag}{tag_num}]").unwrap();

    for version in ["1.0.0", "1.2.3-beta0", "10.20.30-rc4", "0.0.1-dev0"] {
        assert_eq!(
            modern.parse(version).unwrap(),
            legacy.parse(version).unwrap(),
            "dialects disagree on '{}'",
            version
        );
    }
}

#[test]
fn test_prefixed_pattern() {
    let pattern = Pattern::compile("vMAJOR.MINOR.PATCH").unwrap();
    let v = pattern.parse("v1.2.3").unwrap();
    assert_eq!(v, VersionInfo::new(1, 2, 3));
    assert_eq!(pattern.format(&v), "v1.2.3");
    assert!(pattern.parse("1.2.3").is_err());
}

#[test]
fn test_missing_component_is_parse_error() {
    let pattern = Pattern::compile("MAJOR.MINOR.PATCH").unwrap();
    assert!(pattern.parse("1.2").is_err());
    assert!(pattern.parse("1").is_err());
    assert!(pattern.parse("").is_err());
}

#[test]
fn test_non_numeric_component_is_parse_error() {
    let pattern = Pattern::compile("MAJOR.MINOR.PATCH").unwrap();
    assert!(pattern.parse("1.two.3").is_err());
}

#[test]
fn test_unrecognized_tag_keyword_is_parse_error() {
    let pattern = Pattern::compile("MAJOR.MINOR.PATCH[-TAGNUM]").unwrap();
    assert!(pattern.parse("1.2.3-nightly1").is_err());
}

#[test]
fn test_unknown_placeholder_is_configuration_error() {
    let err = Pattern::compile("{major}.{minor}.{build}").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("Invalid version pattern"));
    assert!(msg.contains("build"));
}

#[test]
fn test_tag_ordering_for_display() {
    // dev < alpha < beta < rc < (final) < post
    let mut kinds = vec![
        TagKind::Post,
        TagKind::Beta,
        TagKind::Dev,
        TagKind::Rc,
        TagKind::Alpha,
    ];
    kinds.sort();
    assert_eq!(
        kinds,
        vec![
            TagKind::Dev,
            TagKind::Alpha,
            TagKind::Beta,
            TagKind::Rc,
            TagKind::Post
        ]
    );
}

#[test]
fn test_separator_variants() {
    let pattern = Pattern::compile("MAJOR.MINOR.PATCH[.TAGNUM]").unwrap();
    let v = pattern.parse("1.2.3.rc1").unwrap();
    assert_eq!(v, VersionInfo::with_tag(1, 2, 3, TagKind::Rc, 1));
    assert_eq!(pattern.format(&v), "1.2.3.rc1");
    assert_eq!(pattern.format(&VersionInfo::new(1, 2, 3)), "1.2.3");
}
