use super::*;
use crate::content;

#[test]
fn page_meta_uses_document_url() {
    let content = content::load().unwrap();
    let meta = page_meta(&content);
    assert_eq!(meta.canonical, "https://lesallumettes-vert.fr");
    assert_eq!(meta.og_image, "https://lesallumettes-vert.fr/assets/images/og-image.jpg");
    assert_eq!(meta.title, content.seo.title);
}

#[test]
fn page_meta_defaults_canonical_and_site_name() {
    let mut content = content::load().unwrap();
    content.seo.url = None;
    content.seo.site_name = None;
    let meta = page_meta(&content);
    assert_eq!(meta.canonical, DEFAULT_CANONICAL);
    assert_eq!(meta.site_name, content.brand.name);
}

#[test]
fn page_meta_keeps_absolute_image() {
    let mut content = content::load().unwrap();
    content.seo.url = Some("https://example.test/".to_owned());
    content.seo.og_image = "https://cdn.example.test/og.jpg".to_owned();
    let meta = page_meta(&content);
    assert_eq!(meta.canonical, "https://example.test");
    assert_eq!(meta.og_image, "https://cdn.example.test/og.jpg");
}

#[test]
fn json_ld_describes_local_business() {
    let content = content::load().unwrap();
    let ld = local_business_json_ld(&content, "https://example.test");
    assert_eq!(ld["@type"], "LocalBusiness");
    assert_eq!(ld["name"], content.brand.name.as_str());
    assert_eq!(ld["address"]["postalCode"], "91710");
    assert_eq!(ld["geo"]["latitude"], content.access.map.lat);
    assert_eq!(ld["geo"]["longitude"], content.access.map.lng);
    assert_eq!(ld["url"], "https://example.test");
    assert_eq!(ld["sameAs"][0], content.access.links.gmb.as_str());
}

#[test]
fn json_ld_lists_opening_hours_per_day() {
    let content = content::load().unwrap();
    let ld = local_business_json_ld(&content, DEFAULT_CANONICAL);
    let hours = ld["openingHours"].as_array().unwrap();
    assert_eq!(hours.len(), content.access.hours.len());
    assert_eq!(hours[0], format!("{} {}", content.access.hours[0].day, content.access.hours[0].hours));
}

#[test]
fn json_ld_script_keeps_raw_ampersands() {
    let mut content = content::load().unwrap();
    content.brand.name = "Tabac & Presse".to_owned();
    let script = json_ld_script(&content, DEFAULT_CANONICAL);
    assert!(script.contains("\"name\":\"Tabac & Presse\""));
    assert!(!script.contains("&amp;"));
    let parsed: Value = serde_json::from_str(&script).unwrap();
    assert_eq!(parsed["name"], "Tabac & Presse");
}

#[test]
fn json_ld_script_cannot_close_the_element() {
    let mut content = content::load().unwrap();
    content.seo.description = "fin</script><p>".to_owned();
    let script = json_ld_script(&content, DEFAULT_CANONICAL);
    assert!(!script.contains("</script>"));
    let parsed: Value = serde_json::from_str(&script).unwrap();
    assert_eq!(parsed["description"], "fin</script><p>");
}

#[cfg(feature = "ssr")]
#[test]
fn script_children_render_unescaped() {
    let mut content = content::load().unwrap();
    content.brand.name = "Tabac & Presse".to_owned();
    let payload = json_ld_script(&content, DEFAULT_CANONICAL);
    let html = view! { <script type="application/ld+json">{payload}</script> }.to_html();
    assert!(html.contains("Tabac & Presse"));
    assert!(!html.contains("&amp;"));
}
