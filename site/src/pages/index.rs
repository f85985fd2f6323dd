//! Single-page shop site.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only real route. The embedded content document is parsed here; on
//! success each section receives its slice by value, on failure the whole
//! page is replaced by the error state.

use leptos::prelude::*;

use crate::components::access_map::AccessMap;
use crate::components::footer::Footer;
use crate::components::gallery::Gallery;
use crate::components::header::Header;
use crate::components::hero::Hero;
use crate::components::highlights::Highlights;
use crate::components::news::News;
use crate::components::news_modal::NewsModal;
use crate::components::reviews::Reviews;
use crate::components::services::Services;
use crate::content::{self, Content, ContentError, NewsItem};
use crate::pages::error::ErrorPage;
use crate::seo::SeoHead;
use crate::state::dialog::Dialog;

/// What the index route renders for a given load result.
#[derive(Debug)]
pub enum PageState {
    Ready(Box<Content>),
    Failed(ContentError),
}

impl From<Result<Content, ContentError>> for PageState {
    fn from(result: Result<Content, ContentError>) -> Self {
        match result {
            Ok(content) => Self::Ready(Box::new(content)),
            Err(err) => Self::Failed(err),
        }
    }
}

impl PageState {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    pub fn render(self) -> AnyView {
        match self {
            Self::Ready(content) => view! { <SitePage content=*content/> }.into_any(),
            Self::Failed(err) => {
                log::error!("content load failed: {err}");
                view! { <ErrorPage/> }.into_any()
            }
        }
    }
}

#[component]
pub fn IndexPage() -> impl IntoView {
    PageState::from(content::load()).render()
}

#[component]
fn SitePage(content: Content) -> impl IntoView {
    let news_dialog = RwSignal::new(Dialog::<NewsItem>::default());
    let Content {
        brand,
        hero,
        highlights,
        services,
        news,
        gallery,
        reviews,
        access,
        footer,
        sections,
        navigation,
        modals,
        seo: _,
    } = content.clone();

    view! {
        <SeoHead content=content/>
        <div id="top" class="page">
            <Header brand=brand.clone() links=access.links.clone() navigation=navigation/>
            <main>
                <Hero hero=hero/>
                <Highlights items=highlights heading=sections.highlights/>
                <Services items=services labels=sections.services/>
                <News items=news labels=sections.news dialog=news_dialog/>
                <Gallery items=gallery labels=sections.gallery/>
                <Reviews items=reviews labels=sections.reviews gmb_link=access.links.gmb.clone()/>
                <AccessMap access=access.clone() labels=sections.access brand_name=brand.name/>
            </main>
            <Footer footer=footer access=access legal=modals.legal/>
            <NewsModal dialog=news_dialog labels=modals.news/>
        </div>
    }
}

#[cfg(test)]
#[path = "index_test.rs"]
mod index_test;
