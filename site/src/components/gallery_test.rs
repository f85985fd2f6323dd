use leptos::reactive::owner::Owner;

use super::*;
use crate::content;

#[test]
fn grid_buttons_name_each_photo() {
    let content = content::load().unwrap();
    let first = content.gallery[0].alt.clone();
    let count = content.gallery.len();
    let html = Owner::new().with(|| {
        view! { <Gallery items=content.gallery labels=content.sections.gallery/> }.to_html()
    });
    assert!(html.contains(&format!("aria-label=\"Agrandir: {first}\"")));
    assert!(html.contains(&format!("alt=\"{first}\"")));
    assert!(html.contains(&format!("aria-label=\"Photo {count}\"")));
}

#[test]
fn empty_gallery_renders_heading_only() {
    let content = content::load().unwrap();
    let html = Owner::new().with(|| {
        view! { <Gallery items=Vec::new() labels=content.sections.gallery/> }.to_html()
    });
    assert!(html.contains("id=\"gallery\""));
    assert!(!html.contains("gallery-spotlight__frame"));
    assert!(!html.contains("gallery-grid__item"));
}
