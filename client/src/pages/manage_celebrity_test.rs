use super::*;

#[test]
fn accepts_numeric_and_object_ids() {
    assert!(is_valid_celebrity_id("42"));
    assert!(is_valid_celebrity_id("65f1c2ab9d3e4f0012345678"));
    assert!(is_valid_celebrity_id("slug_with-dash"));
}

#[test]
fn rejects_empty_and_path_breaking_ids() {
    assert!(!is_valid_celebrity_id(""));
    assert!(!is_valid_celebrity_id("1/../2"));
    assert!(!is_valid_celebrity_id("a b"));
    assert!(!is_valid_celebrity_id("x?y=1"));
}

#[test]
fn rejects_overlong_ids() {
    assert!(!is_valid_celebrity_id(&"a".repeat(65)));
    assert!(is_valid_celebrity_id(&"a".repeat(64)));
}
