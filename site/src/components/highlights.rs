use leptos::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::{Highlight, SectionHeading};

/// Staggered delay between highlight cards.
const STAGGER_MS: u32 = 100;

#[component]
pub fn Highlights(items: Vec<Highlight>, heading: SectionHeading) -> impl IntoView {
    view! {
        <section class="section section--muted" id="highlights">
            <div class="container">
                <Reveal class="section__heading">
                    <h2 class="section__title">{heading.title}</h2>
                    <p class="section__subtitle">{heading.subtitle}</p>
                </Reveal>
                <div class="highlights">
                    {items
                        .into_iter()
                        .zip(0u32..)
                        .map(|(item, position)| {
                            view! {
                                <Reveal delay_ms=position * STAGGER_MS class="highlight-card">
                                    <div class="highlight-card__icon" aria-hidden="true">{item.icon}</div>
                                    <h3 class="highlight-card__title">{item.title}</h3>
                                    <p class="highlight-card__text">{item.text}</p>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
