//! Document head metadata: title, description, social cards, and the
//! schema.org `LocalBusiness` record.

#[cfg(test)]
#[path = "seo_test.rs"]
mod seo_test;

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Script, Title};
use serde_json::{Value, json};

use crate::content::Content;

pub const DEFAULT_CANONICAL: &str = "https://lesallumettes-vert.fr";
pub const LOCALE: &str = "fr_FR";

#[derive(Clone, Debug, PartialEq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub canonical: String,
    pub og_image: String,
    pub site_name: String,
}

pub fn page_meta(content: &Content) -> PageMeta {
    let canonical = content
        .seo
        .url
        .clone()
        .unwrap_or_else(|| DEFAULT_CANONICAL.to_owned())
        .trim_end_matches('/')
        .to_owned();
    PageMeta {
        title: content.seo.title.clone(),
        description: content.seo.description.clone(),
        keywords: content.seo.keywords.clone(),
        og_image: absolute_url(&canonical, &content.seo.og_image),
        site_name: content.seo.site_name.clone().unwrap_or_else(|| content.brand.name.clone()),
        canonical,
    }
}

fn absolute_url(origin: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_owned();
    }
    if path.starts_with('/') { format!("{origin}{path}") } else { format!("{origin}/{path}") }
}

/// schema.org `LocalBusiness` structured data for search engines.
pub fn local_business_json_ld(content: &Content, origin: &str) -> Value {
    let access = &content.access;
    json!({
        "@context": "https://schema.org",
        "@type": "LocalBusiness",
        "name": content.brand.name,
        "description": content.seo.description,
        "address": {
            "@type": "PostalAddress",
            "streetAddress": access.address,
            "addressLocality": "Vert-le-Petit",
            "addressRegion": "Essonne",
            "postalCode": "91710",
            "addressCountry": "FR",
        },
        "geo": {
            "@type": "GeoCoordinates",
            "latitude": access.map.lat,
            "longitude": access.map.lng,
        },
        "telephone": access.phone,
        "url": origin,
        "sameAs": [access.links.gmb],
        "openingHours": access
            .hours
            .iter()
            .map(|h| format!("{} {}", h.day, h.hours))
            .collect::<Vec<_>>(),
        "priceRange": "€",
        "paymentAccepted": "Cash, Card",
        "image": content.seo.og_image,
    })
}

/// Script body for the structured data. Script children are written
/// unescaped, so a closing tag inside a string value is broken up to keep it
/// from ending the element.
pub fn json_ld_script(content: &Content, origin: &str) -> String {
    local_business_json_ld(content, origin).to_string().replace("</", "<\\/")
}

/// Head tags for the shop page.
#[component]
pub fn SeoHead(content: Content) -> impl IntoView {
    let meta = page_meta(&content);
    let json_ld = json_ld_script(&content, &meta.canonical);

    view! {
        <Title text=meta.title.clone()/>
        <Meta name="description" content=meta.description.clone()/>
        <Meta name="keywords" content=meta.keywords.clone()/>
        <Meta name="robots" content="index, follow"/>
        <Link rel="canonical" href=meta.canonical.clone()/>

        <Meta property="og:title" content=meta.title.clone()/>
        <Meta property="og:description" content=meta.description.clone()/>
        <Meta property="og:image" content=meta.og_image.clone()/>
        <Meta property="og:url" content=meta.canonical.clone()/>
        <Meta property="og:type" content="website"/>
        <Meta property="og:locale" content=LOCALE/>
        <Meta property="og:site_name" content=meta.site_name.clone()/>

        <Meta name="twitter:card" content="summary_large_image"/>
        <Meta name="twitter:title" content=meta.title.clone()/>
        <Meta name="twitter:description" content=meta.description.clone()/>
        <Meta name="twitter:image" content=meta.og_image.clone()/>

        <Script type_="application/ld+json">{json_ld}</Script>

        <Link rel="preconnect" href="https://tile.openstreetmap.org"/>
        <Link rel="dns-prefetch" href="//g.page"/>
    }
}
