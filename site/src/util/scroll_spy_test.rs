use super::*;

fn section(id: &str, top: f64, height: f64) -> SectionBox {
    SectionBox { id: id.to_owned(), top, height }
}

fn page() -> Vec<SectionBox> {
    vec![
        section("services", 800.0, 600.0),
        section("news", 1400.0, 600.0),
        section("gallery", 2000.0, 800.0),
        section("access", 2800.0, 700.0),
    ]
}

#[test]
fn no_sections_yields_none() {
    assert_eq!(active_section(&[], 5_000.0, NAV_OFFSET), None);
}

#[test]
fn above_first_threshold_yields_none() {
    // services activates at 800 - 300 = 500.
    assert_eq!(active_section(&page(), 399.0, NAV_OFFSET), None);
}

#[test]
fn threshold_is_inclusive() {
    assert_eq!(active_section(&page(), 400.0, NAV_OFFSET).as_deref(), Some("services"));
}

#[test]
fn picks_last_qualifying_section() {
    // news activates at 1400 - 300 = 1100, gallery at 2000 - 400 = 1600.
    assert_eq!(active_section(&page(), 1_000.0, NAV_OFFSET).as_deref(), Some("news"));
    assert_eq!(active_section(&page(), 1_500.0, NAV_OFFSET).as_deref(), Some("gallery"));
}

#[test]
fn bottom_of_page_selects_last_section() {
    assert_eq!(active_section(&page(), 10_000.0, 0.0).as_deref(), Some("access"));
}

#[test]
fn offset_shifts_the_reading_line() {
    assert_eq!(active_section(&page(), 450.0, 0.0), None);
    assert_eq!(active_section(&page(), 450.0, 50.0).as_deref(), Some("services"));
}

#[test]
fn missing_sections_are_simply_absent() {
    let sections = vec![section("services", 800.0, 600.0), section("access", 2800.0, 700.0)];
    assert_eq!(active_section(&sections, 2_000.0, NAV_OFFSET).as_deref(), Some("services"));
}

#[test]
fn nav_sections_follow_page_order() {
    assert_eq!(NAV_SECTIONS, &["services", "news", "gallery", "access"]);
}
