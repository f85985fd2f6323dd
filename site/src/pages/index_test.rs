use super::*;
use crate::pages::error::{ERROR_MESSAGE, ERROR_TITLE};

#[test]
fn bundled_document_is_ready() {
    assert!(PageState::from(content::load()).is_ready());
}

#[test]
fn malformed_document_fails() {
    let state = PageState::from(content::parse("{"));
    assert!(matches!(state, PageState::Failed(ContentError::Malformed(_))));
}

#[test]
fn blank_document_fails() {
    let state = PageState::from(content::parse("  "));
    assert!(matches!(state, PageState::Failed(ContentError::Empty)));
}

#[cfg(feature = "ssr")]
#[test]
fn malformed_document_renders_error_page() {
    let html = PageState::from(content::parse("{")).render().to_html();
    assert!(html.contains("error-page"));
    assert!(html.contains(ERROR_TITLE));
    assert!(html.contains(ERROR_MESSAGE));
    assert!(!html.contains("id=\"top\""));
}

#[test]
fn error_message_is_french() {
    assert_eq!(ERROR_TITLE, "Erreur");
    assert_eq!(ERROR_MESSAGE, "Erreur lors du chargement du contenu");
}
