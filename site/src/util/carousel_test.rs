use super::*;

// =============================================================
// Carousel
// =============================================================

#[test]
fn next_wraps_past_last_to_first() {
    let mut carousel = Carousel::new(3);
    carousel.next();
    carousel.next();
    assert_eq!(carousel.index(), 2);
    carousel.next();
    assert_eq!(carousel.index(), 0);
}

#[test]
fn prev_wraps_before_first_to_last() {
    let mut carousel = Carousel::new(4);
    carousel.prev();
    assert_eq!(carousel.index(), 3);
    carousel.prev();
    assert_eq!(carousel.index(), 2);
}

#[test]
fn single_item_stays_put() {
    let mut carousel = Carousel::new(1);
    carousel.next();
    assert_eq!(carousel.index(), 0);
    carousel.prev();
    assert_eq!(carousel.index(), 0);
}

#[test]
fn empty_carousel_ignores_navigation() {
    let mut carousel = Carousel::new(0);
    carousel.next();
    carousel.prev();
    carousel.go_to(5);
    assert_eq!(carousel.index(), 0);
    assert!(carousel.is_empty());
}

#[test]
fn go_to_sets_explicit_index_and_clamps() {
    let mut carousel = Carousel::new(5);
    carousel.go_to(3);
    assert_eq!(carousel.index(), 3);
    carousel.go_to(99);
    assert_eq!(carousel.index(), 4);
    carousel.next();
    assert_eq!(carousel.index(), 0);
}

// =============================================================
// AutoAdvance
// =============================================================

#[test]
fn hover_pauses_review_policy() {
    let policy = AutoAdvance { paused_on_hover: true };
    assert!(policy.should_tick(false, 4));
    assert!(!policy.should_tick(true, 4));
}

#[test]
fn spotlight_policy_ignores_hover() {
    let policy = AutoAdvance { paused_on_hover: false };
    assert!(policy.should_tick(true, 4));
    assert!(policy.should_tick(false, 4));
}

#[test]
fn short_lists_never_tick() {
    let policy = AutoAdvance { paused_on_hover: false };
    assert!(!policy.should_tick(false, 0));
    assert!(!policy.should_tick(false, 1));
}

// =============================================================
// Lightbox
// =============================================================

#[test]
fn lightbox_starts_closed() {
    let lightbox = Lightbox::new(6);
    assert_eq!(lightbox.current(), None);
    assert_eq!(lightbox.caption(), None);
}

#[test]
fn lightbox_navigation_wraps_while_open() {
    let mut lightbox = Lightbox::new(3);
    lightbox.open(0);
    lightbox.prev();
    assert_eq!(lightbox.current(), Some(2));
    lightbox.next();
    assert_eq!(lightbox.current(), Some(0));
    assert_eq!(lightbox.caption().as_deref(), Some("1 / 3"));
}

#[test]
fn closed_lightbox_ignores_navigation() {
    let mut lightbox = Lightbox::new(3);
    lightbox.next();
    lightbox.prev();
    assert_eq!(lightbox.current(), None);
}

#[test]
fn lightbox_close_is_idempotent() {
    let mut lightbox = Lightbox::new(3);
    lightbox.open(1);
    lightbox.close();
    lightbox.close();
    assert_eq!(lightbox.current(), None);
}

#[test]
fn empty_gallery_never_opens() {
    let mut lightbox = Lightbox::new(0);
    lightbox.open(0);
    assert_eq!(lightbox.current(), None);
}
