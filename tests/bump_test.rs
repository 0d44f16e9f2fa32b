// tests/bump_test.rs
use release_bump::error::ReleaseBumpError;
use release_bump::version::{BumpRequest, Version};

#[test]
fn test_parse_serialize_round_trip() {
    let cases = [
        "0.0.0",
        "1.2.3",
        "1.2.3-alpha",
        "1.2.3-alpha2",
        "2.3.4-beta3",
        "10.0.1-rc10",
    ];

    for case in cases {
        let version = Version::parse(case).expect("Should parse");
        assert_eq!(version.to_string(), case);
        assert_eq!(Version::parse(&version.to_string()).unwrap(), version);
    }
}

#[test]
fn test_major_bump_zeroes_minor_patch_and_label() {
    for current in ["1.2.3", "1.2.3-alpha", "1.9.9-rc4"] {
        let version = Version::parse(current).unwrap();
        let bumped = version.bump(&BumpRequest::Major).unwrap();
        assert_eq!(bumped.major, version.major + 1);
        assert_eq!(bumped.minor, 0);
        assert_eq!(bumped.patch, 0);
        assert_eq!(bumped.label, None);
    }
}

#[test]
fn test_minor_bump_zeroes_patch_and_label() {
    let version = Version::parse("1.2.3-beta").unwrap();
    let bumped = version.bump(&BumpRequest::Minor).unwrap();
    assert_eq!(bumped.to_string(), "1.3.0");
}

#[test]
fn test_patch_bump_preserves_major_minor_clears_label() {
    let version = Version::parse("1.2.3-beta2").unwrap();
    let bumped = version.bump(&BumpRequest::Patch).unwrap();
    assert_eq!(bumped.to_string(), "1.2.4");
}

#[test]
fn test_label_bump_increments_counter_by_one() {
    let cases = [
        ("1.2.3-alpha", "1.2.3-alpha2"),
        ("1.2.3-alpha2", "1.2.3-alpha3"),
        ("1.2.3-rc9", "1.2.3-rc10"),
        ("0.1.0-beta", "0.1.0-beta2"),
    ];

    for (current, expected) in cases {
        let bumped = Version::parse(current)
            .unwrap()
            .bump(&BumpRequest::Label)
            .unwrap();
        assert_eq!(bumped.to_string(), expected);
    }
}

#[test]
fn test_label_bump_without_label_fails() {
    let version = Version::parse("1.2.3").unwrap();
    let err = version.bump(&BumpRequest::Label).unwrap_err();
    assert!(matches!(err, ReleaseBumpError::InvalidState(_)));
    assert!(err.to_string().contains("no pre-release label"));
}

#[test]
fn test_set_version_yields_exactly_the_target() {
    let target = Version::parse("2.3.4-beta3").unwrap();
    for current in ["0.0.1", "9.9.9", "2.3.4-beta3", "1.0.0-rc1"] {
        let result = Version::parse(current)
            .unwrap()
            .bump(&BumpRequest::Set(target))
            .unwrap();
        assert_eq!(result.to_string(), "2.3.4-beta3");
    }
}

#[test]
fn test_explicit_version_grammar_is_enforced() {
    for invalid in ["1.2", "1.2.3.4", "v1.2.3", "1.2.3-nightly", "1.-2.3"] {
        assert!(
            Version::parse(invalid).is_err(),
            "'{}' should be rejected",
            invalid
        );
    }
}
