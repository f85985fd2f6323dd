use super::*;

#[test]
fn scrolled_is_strictly_past_threshold() {
    assert!(!is_scrolled(0.0, HEADER_SCROLLED_PX));
    assert!(!is_scrolled(40.0, HEADER_SCROLLED_PX));
    assert!(is_scrolled(40.5, HEADER_SCROLLED_PX));
    assert!(!is_scrolled(80.0, TOGGLE_SCROLLED_PX));
}

#[test]
fn mobile_width_boundary() {
    assert!(is_mobile_width(375.0));
    assert!(is_mobile_width(1023.0));
    assert!(!is_mobile_width(1024.0));
}

#[test]
fn reveal_threshold_uses_viewport_fraction() {
    assert!(crosses_reveal_threshold(700.0, 800.0, REVEAL_THRESHOLD));
    assert!(!crosses_reveal_threshold(720.0, 800.0, REVEAL_THRESHOLD));
    assert!(crosses_reveal_threshold(-50.0, 800.0, REVEAL_THRESHOLD));
}
