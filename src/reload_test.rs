use super::*;

#[test]
fn reload_url_appends_epoch_millis() {
    assert_eq!(reload_url(1_700_000_000_123.0), "/?_=1700000000123");
}

#[test]
fn reload_url_drops_fractional_millis() {
    assert_eq!(reload_url(42.9), "/?_=42");
}

#[test]
fn reload_url_clamps_negative_clock() {
    assert_eq!(reload_url(-5.0), "/?_=0");
}
