use super::*;

#[test]
fn fragment_href_yields_target_id() {
    assert_eq!(anchor_target("#opening-times"), Some("opening-times"));
    assert_eq!(anchor_target("#menu"), Some("menu"));
}

#[test]
fn bare_hash_yields_empty_id() {
    // No element has an empty id, so the lookup later misses.
    assert_eq!(anchor_target("#"), Some(""));
}

#[test]
fn page_hrefs_are_not_in_page_targets() {
    assert_eq!(anchor_target("menu.html"), None);
    assert_eq!(anchor_target("https://example.com/#x"), None);
    assert_eq!(anchor_target(""), None);
}
