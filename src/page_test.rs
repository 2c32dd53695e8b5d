use super::*;

#[test]
fn parsing_document_defers_boot() {
    assert!(waits_for_dom("loading"));
}

#[test]
fn parsed_document_boots_immediately() {
    assert!(!waits_for_dom("interactive"));
    assert!(!waits_for_dom("complete"));
}
