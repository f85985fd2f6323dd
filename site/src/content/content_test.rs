use super::*;

#[test]
fn bundled_document_loads() {
    let content = load().expect("bundled content should parse");
    assert!(!content.brand.name.is_empty());
    assert_eq!(content.access.hours.len(), 7);
    assert_eq!(content.access.hours[0].day, "Lundi");
    assert!(!content.reviews.is_empty());
}

#[test]
fn bundled_ctas_mix_anchor_and_primary() {
    let content = load().unwrap();
    assert!(content.hero.ctas.iter().any(|cta| cta.primary));
    assert!(content.hero.ctas.iter().all(|cta| !cta.label.is_empty()));
}

#[test]
fn parse_rejects_blank_document() {
    assert!(matches!(parse(""), Err(ContentError::Empty)));
    assert!(matches!(parse("  \n\t"), Err(ContentError::Empty)));
}

#[test]
fn parse_rejects_malformed_document() {
    assert!(matches!(parse("{"), Err(ContentError::Malformed(_))));
    assert!(matches!(parse(r#"{"brand": {}}"#), Err(ContentError::Malformed(_))));
}

#[test]
fn malformed_error_message_names_the_cause() {
    let err = parse("[]").unwrap_err();
    assert!(err.to_string().starts_with("content document is malformed"));
}

#[test]
fn review_optional_fields_default() {
    let raw = r#"{"name":"A.","rating":3,"comment":"ok","date":"2024-01-01"}"#;
    let review: Review = serde_json::from_str(raw).unwrap();
    assert!(!review.is_local_guide);
    assert_eq!(review.review_count, None);
    assert_eq!(review.photo_count, None);
}

#[test]
fn review_reads_camel_case_keys() {
    let raw = r#"{"name":"B.","rating":5,"comment":"top","date":"2024-01-01","isLocalGuide":true,"reviewCount":9,"photoCount":2}"#;
    let review: Review = serde_json::from_str(raw).unwrap();
    assert!(review.is_local_guide);
    assert_eq!(review.review_count, Some(9));
    assert_eq!(review.photo_count, Some(2));
}

#[test]
fn serialized_content_keeps_document_shape() {
    let content = load().unwrap();
    let value = serde_json::to_value(&content).unwrap();
    assert!(value["brand"]["logoLight"].is_string());
    assert!(value["access"]["map"]["lat"].is_f64());
    assert!(value["sections"]["reviews"]["viewAllReviews"].is_string());
}

#[test]
fn bundled_control_labels_are_french() {
    let content = load().unwrap();
    let sections = &content.sections;
    assert_eq!(sections.access.show_map, "Afficher la carte");
    assert_eq!(sections.access.hide_map, "Masquer la carte");
    assert_eq!(sections.gallery.close, "Fermer");
    assert_eq!(sections.gallery.previous, "Précédent");
    assert_eq!(sections.reviews.next, "Avis suivant");
    assert_eq!(sections.reviews.out_of_five, "sur 5");
    assert_eq!(content.navigation.menu, "Menu");
    assert_eq!(content.modals.legal.close, "Fermer");
}
