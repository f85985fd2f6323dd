use leptos::reactive::owner::Owner;

use super::*;
use crate::content;

fn render(access: Access) -> String {
    let content = content::load().unwrap();
    let labels = content.sections.access;
    Owner::new().with(|| {
        view! { <AccessMap access=access labels=labels brand_name=content.brand.name/> }.to_html()
    })
}

#[test]
fn call_link_serves_both_cards() {
    let access = content::load().unwrap().access;
    let call = access.links.call.clone();
    let html = render(access);
    assert_eq!(html.matches(&format!("href=\"{call}\"")).count(), 2);
}

#[test]
fn contact_card_uses_document_labels() {
    let html = render(content::load().unwrap().access);
    assert!(html.contains("<dt>Email</dt>"));
    assert!(html.contains("mailto:contact@lesallumettes-vert.fr"));
}

#[test]
fn server_render_leaves_today_to_the_client() {
    let html = render(content::load().unwrap().access);
    assert!(!html.contains("info-card__today"));
    assert!(!html.contains("hours__row--today"));
}

#[test]
fn flagged_row_is_highlighted_before_hydration() {
    let mut access = content::load().unwrap().access;
    access.hours[3].today = true;
    let html = render(access);
    assert_eq!(html.matches("hours__row--today").count(), 1);
}
