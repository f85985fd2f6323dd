//! Full-height hero banner with a parallax background.

use leptos::prelude::*;

use crate::content::Hero as HeroContent;
use crate::util::parallax::{ParallaxOptions, use_parallax};
use crate::util::smooth_scroll::{CtaAction, scroll_to_anchor};

#[component]
pub fn Hero(hero: HeroContent) -> impl IntoView {
    let background = NodeRef::<leptos::html::Div>::new();
    use_parallax(background, ParallaxOptions::default());

    let ctas = hero
        .ctas
        .into_iter()
        .map(|cta| {
            let class = if cta.primary { "btn btn--primary btn--lg" } else { "btn btn--glass btn--lg" };
            let icon = cta.primary.then_some(view! { <span class="btn__icon" aria-hidden="true">"📍"</span> });
            match CtaAction::from_href(&cta.href) {
                CtaAction::Scroll(_) => {
                    let href = cta.href.clone();
                    view! {
                        <a
                            class=class
                            href=cta.href
                            on:click=move |ev| {
                                if scroll_to_anchor(&href) {
                                    ev.prevent_default();
                                }
                            }
                        >
                            {icon}
                            {cta.label}
                        </a>
                    }
                    .into_any()
                }
                CtaAction::External(url) => view! {
                    <a class=class href=url target="_blank" rel="noopener noreferrer">
                        {icon}
                        {cta.label}
                    </a>
                }
                .into_any(),
            }
        })
        .collect_view();

    view! {
        <section class="hero" aria-label="Présentation de la boutique">
            <div
                class="hero__background"
                node_ref=background
                style=format!("background-image: url({})", hero.image)
                aria-hidden="true"
            ></div>
            <div class="hero__overlay" aria-hidden="true"></div>
            <div class="hero__content">
                <h1 class="hero__title">{hero.title}</h1>
                <p class="hero__subtitle">{hero.subtitle}</p>
                <div class="hero__ctas">{ctas}</div>
            </div>
            <div class="hero__scroll-indicator" aria-hidden="true">
                <span class="hero__scroll-dot"></span>
            </div>
        </section>
    }
}
