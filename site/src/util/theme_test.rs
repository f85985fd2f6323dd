use super::*;

#[test]
fn default_theme_is_dark() {
    assert_eq!(Theme::default(), Theme::Dark);
}

#[test]
fn parse_restores_valid_values() {
    assert_eq!(Theme::parse(Some("light")), Theme::Light);
    assert_eq!(Theme::parse(Some("dark")), Theme::Dark);
}

#[test]
fn parse_falls_back_to_dark() {
    assert_eq!(Theme::parse(None), Theme::Dark);
    assert_eq!(Theme::parse(Some("")), Theme::Dark);
    assert_eq!(Theme::parse(Some("Light")), Theme::Dark);
    assert_eq!(Theme::parse(Some("true")), Theme::Dark);
    assert_eq!(Theme::parse(Some("system")), Theme::Dark);
}

#[test]
fn stored_string_survives_reload() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::parse(Some(theme.as_str())), theme);
    }
}

#[test]
fn toggled_flips_both_ways() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

#[test]
fn labels_are_french() {
    assert_eq!(Theme::Light.label(), "Clair");
    assert_eq!(Theme::Dark.label(), "Sombre");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn read_preference_is_dark_without_browser() {
    assert_eq!(read_preference(), Theme::Dark);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn toggle_returns_flipped_theme_without_browser() {
    assert_eq!(toggle(Theme::Dark), Theme::Light);
    assert_eq!(toggle(Theme::Light), Theme::Dark);
    apply(Theme::Light);
    persist(Theme::Dark);
}
