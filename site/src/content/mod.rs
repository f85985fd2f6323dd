//! Typed content document for the shop page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every piece of page text and media reference comes from one JSON document
//! embedded at compile time. It is parsed once when the page is built and the
//! resulting records are handed to sections as immutable props. There is no
//! write path.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use serde::{Deserialize, Serialize};

/// The document bundled into the binary and the WASM module.
pub const BUNDLED: &str = include_str!("../../content/content.json");

/// The single recognised failure of the site: the content document is
/// unusable.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("content document is empty")]
    Empty,
    #[error("content document is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Parse the bundled content document.
///
/// # Errors
///
/// Returns [`ContentError`] when the embedded document is blank or does not
/// match the content schema.
pub fn load() -> Result<Content, ContentError> {
    parse(BUNDLED)
}

/// Parse a content document from raw JSON text.
///
/// # Errors
///
/// Returns [`ContentError::Empty`] for blank input and
/// [`ContentError::Malformed`] when deserialization fails.
pub fn parse(raw: &str) -> Result<Content, ContentError> {
    if raw.trim().is_empty() {
        return Err(ContentError::Empty);
    }
    Ok(serde_json::from_str(raw)?)
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    pub brand: Brand,
    pub hero: Hero,
    pub highlights: Vec<Highlight>,
    pub services: Vec<Service>,
    pub news: Vec<NewsItem>,
    pub gallery: Vec<GalleryItem>,
    pub reviews: Vec<Review>,
    pub access: Access,
    pub footer: Footer,
    pub sections: Sections,
    pub navigation: Navigation,
    pub modals: Modals,
    pub seo: Seo,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub name: String,
    pub slogan: String,
    pub logo_light: String,
    pub logo_dark: String,
}

/// Call-to-action button in the hero banner.
///
/// `href` values starting with `#` target an in-page section; anything else
/// is an external URL.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cta {
    pub label: String,
    pub href: String,
    pub primary: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub title: String,
    pub subtitle: String,
    pub image: String,
    pub ctas: Vec<Cta>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Highlight {
    pub icon: String,
    pub title: String,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub title: String,
    pub desc: String,
    pub image: String,
    pub features: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub title: String,
    /// ISO date, rendered through [`crate::util::format::format_date_fr`].
    pub date: String,
    /// Short summary shown on the card.
    pub text: String,
    /// Long form body shown in the detail dialog.
    pub description: String,
    pub image: String,
    pub category: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    pub src: String,
    pub alt: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub name: String,
    pub rating: u8,
    pub comment: String,
    pub date: String,
    #[serde(default)]
    pub is_local_guide: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_count: Option<u32>,
}

/// Opening hours for one weekday. The document lists Monday first.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoursItem {
    pub day: String,
    pub hours: String,
    #[serde(default)]
    pub today: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapInfo {
    pub lat: f64,
    pub lng: f64,
    pub zoom: u8,
    pub provider: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Links {
    pub directions: String,
    pub call: String,
    pub gmb: String,
    pub instagram: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Access {
    pub address: String,
    pub phone: String,
    pub email: String,
    pub hours: Vec<HoursItem>,
    pub map: MapInfo,
    pub links: Links,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Footer {
    pub legal: String,
    pub brand_name: String,
    pub slogan: String,
    pub description: String,
    pub cookie_notice: String,
    pub contact: String,
    pub phone: String,
    pub address: String,
    pub useful_links: String,
    pub google_business: String,
    pub directions: String,
    pub follow_instagram: String,
    pub back_to_top: String,
    pub map_credits: String,
    pub developed_by: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seo {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub og_image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sections {
    pub highlights: SectionHeading,
    pub services: ServicesLabels,
    pub reviews: ReviewsLabels,
    pub news: NewsLabels,
    pub access: AccessLabels,
    pub gallery: GalleryLabels,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionHeading {
    pub title: String,
    pub subtitle: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicesLabels {
    pub title: String,
    pub subtitle: String,
    pub service_badge: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewsLabels {
    pub title: String,
    pub subtitle: String,
    pub local_guide: String,
    pub reviews_count: String,
    pub photos_count: String,
    pub view_all_reviews: String,
    pub previous: String,
    pub next: String,
    pub review: String,
    pub out_of_five: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsLabels {
    pub title: String,
    pub subtitle: String,
    pub read_more: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessLabels {
    pub title: String,
    pub subtitle: String,
    pub location: String,
    pub directions: String,
    pub call: String,
    pub contact: String,
    pub phone: String,
    pub address: String,
    pub opening_hours: String,
    pub today: String,
    pub email: String,
    pub show_map: String,
    pub hide_map: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryLabels {
    pub title: String,
    pub subtitle: String,
    pub enlarge: String,
    pub photo: String,
    pub close: String,
    pub previous: String,
    pub next: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Navigation {
    pub services: String,
    pub news: String,
    pub gallery: String,
    pub access: String,
    pub directions: String,
    pub call: String,
    pub view_directions: String,
    pub call_now: String,
    pub theme: String,
    pub menu: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Modals {
    pub news: NewsModalLabels,
    pub legal: LegalLabels,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsModalLabels {
    pub close: String,
    pub details: String,
    pub interested: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalLabels {
    pub mentions: String,
    pub privacy: String,
    pub cookies: String,
    pub close: String,
}
