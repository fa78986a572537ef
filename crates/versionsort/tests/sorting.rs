use std::cmp::Ordering;

use versionsort::{compare_versions, newest, sort_versions, sorted_versions};

const MIXED: [&str; 9] = [
    "1.0.0",
    "1.0.0a",
    "1.0.0-SNAPSHOT",
    "1.0.0-alpha",
    "1.0.0-beta",
    "1.0.1",
    "2.0.0",
    "1.0.0-rc1",
    "1.0.0-alpha.1",
];

#[test]
fn test_sort_mixed_versions() {
    let mut versions = MIXED.to_vec();
    versions.sort_by(|a, b| compare_versions(a, b));

    insta::assert_debug_snapshot!(versions, @r#"
    [
        "1.0.0-SNAPSHOT",
        "1.0.0-alpha",
        "1.0.0-alpha.1",
        "1.0.0-beta",
        "1.0.0-rc1",
        "1.0.0",
        "1.0.0a",
        "1.0.1",
        "2.0.0",
    ]
    "#);
}

#[test]
fn test_sort_helpers_agree() {
    let mut by_helper = MIXED.to_vec();
    sort_versions(&mut by_helper);

    let mut by_comparator = MIXED.to_vec();
    by_comparator.sort_by(|a, b| compare_versions(a, b));

    let parsed: Vec<String> = sorted_versions(MIXED).iter().map(ToString::to_string).collect();

    assert_eq!(by_helper, by_comparator);
    assert_eq!(parsed, by_comparator);
}

#[test]
fn test_newest_of_mixed_versions() {
    assert_eq!(newest(MIXED), Some("2.0.0"));
    assert_eq!(newest(MIXED.iter().filter(|v| v.starts_with("1.0.0"))), Some(&"1.0.0a"));
}

#[test]
fn test_documented_orderings() {
    assert_eq!(compare_versions("1.0", "1.0.0"), Ordering::Equal);
    assert_eq!(compare_versions("1.10", "1.6"), Ordering::Greater);
    assert_eq!(compare_versions("1.0.0-alpha", "1.0.0"), Ordering::Less);
    assert_eq!(compare_versions("1.0.0a", "1.0.0"), Ordering::Greater);
    assert_eq!(compare_versions("1.0.0-rc1", "1.0.0-alpha"), Ordering::Greater);
    assert_eq!(compare_versions("1.0.0-alpha", "1.0.0-alpha.1"), Ordering::Less);
}

#[test]
fn test_malformed_input_sorts_below_release() {
    for input in ["", "-", ".", "..", "-.-", "a-", "...-...", "💥", "1.0.0-💥.2", "\n"] {
        assert_eq!(compare_versions(input, input), Ordering::Equal);
        assert_eq!(compare_versions(input, "1.0.0"), Ordering::Less, "{input:?}");
        assert_eq!(compare_versions("1.0.0", input), Ordering::Greater, "{input:?}");
    }
}
