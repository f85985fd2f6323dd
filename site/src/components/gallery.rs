//! Photo gallery: a rotating spotlight, a thumbnail grid, and a lightbox.
//!
//! SYSTEM CONTEXT
//! ==============
//! The spotlight rotates on a fixed interval regardless of hover. The
//! lightbox owns its own position and listens for Escape and arrow keys
//! only while open.

use leptos::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::{GalleryItem, GalleryLabels};
use crate::util::carousel::{Carousel, Lightbox};

#[component]
pub fn Gallery(items: Vec<GalleryItem>, labels: GalleryLabels) -> impl IntoView {
    let count = items.len();
    let spotlight = RwSignal::new(Carousel::new(count));
    let lightbox = RwSignal::new(Lightbox::new(count));
    let items = StoredValue::new(items);

    #[cfg(feature = "hydrate")]
    {
        use crate::util::carousel::SPOTLIGHT_ROTATE_MS;

        if count > 1 {
            let interval = gloo_timers::callback::Interval::new(SPOTLIGHT_ROTATE_MS, move || {
                spotlight.update(Carousel::next);
            });
            let interval = StoredValue::new_local(Some(interval));
            on_cleanup(move || {
                interval.update_value(|slot| {
                    slot.take();
                });
            });
        }

        let on_key = window_event_listener(leptos::ev::keydown, move |ev| {
            if lightbox.with_untracked(|lb| lb.current().is_none()) {
                return;
            }
            match ev.key().as_str() {
                "Escape" => lightbox.update(Lightbox::close),
                "ArrowRight" => lightbox.update(Lightbox::next),
                "ArrowLeft" => lightbox.update(Lightbox::prev),
                _ => {}
            }
        });
        on_cleanup(move || on_key.remove());
    }

    let enlarge = labels.enlarge.clone();
    let photo = labels.photo.clone();
    let controls = StoredValue::new((labels.close, labels.previous, labels.next));

    view! {
        <section class="section" id="gallery">
            <div class="container">
                <Reveal class="section__heading">
                    <h2 class="section__title">{labels.title}</h2>
                    <p class="section__subtitle">{labels.subtitle}</p>
                </Reveal>

                <Show when=move || { count > 0 }>
                    <div class="gallery-spotlight">
                        {move || {
                            let index = spotlight.get().index();
                            items
                                .with_value(|all| all.get(index).cloned())
                                .map(|item| {
                                    view! {
                                        <button
                                            class="gallery-spotlight__frame"
                                            on:click=move |_| lightbox.update(|lb| lb.open(index))
                                        >
                                            <img src=item.src alt=item.alt.clone()/>
                                            <span class="gallery-spotlight__caption">{item.alt}</span>
                                        </button>
                                    }
                                })
                        }}
                        <div class="gallery-spotlight__dots">
                            {(0..count)
                                .map(|index| {
                                    view! {
                                        <button
                                            class="dot"
                                            class:dot--active=move || spotlight.get().index() == index
                                            aria-label=format!("{photo} {}", index + 1)
                                            on:click=move |_| spotlight.update(|c| c.go_to(index))
                                        ></button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </Show>

                <div class="gallery-grid">
                    {items
                        .get_value()
                        .into_iter()
                        .enumerate()
                        .map(|(index, item)| {
                            let label = format!("{enlarge}: {}", item.alt);
                            view! {
                                <button
                                    class="gallery-grid__item"
                                    aria-label=label
                                    on:click=move |_| lightbox.update(|lb| lb.open(index))
                                >
                                    <img src=item.src alt=item.alt loading="lazy"/>
                                    <span class="gallery-grid__hint" aria-hidden="true">"🔍"</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            {move || {
                let lb = lightbox.get();
                let index = lb.current()?;
                let item = items.with_value(|all| all.get(index).cloned())?;
                let caption = lb.caption().unwrap_or_default();
                Some(view! {
                    <div class="lightbox" role="dialog" aria-modal="true">
                        <div class="lightbox__backdrop" on:click=move |_| lightbox.update(Lightbox::close)></div>
                        <button class="lightbox__close" aria-label=controls.with_value(|c| c.0.clone()) on:click=move |_| lightbox.update(Lightbox::close)>
                            "✕"
                        </button>
                        <button class="lightbox__nav lightbox__nav--prev" aria-label=controls.with_value(|c| c.1.clone()) on:click=move |_| lightbox.update(Lightbox::prev)>
                            "‹"
                        </button>
                        <figure class="lightbox__figure">
                            <img src=item.src alt=item.alt.clone()/>
                            <figcaption class="lightbox__caption">
                                <span>{item.alt}</span>
                                <span class="lightbox__position">{caption}</span>
                            </figcaption>
                        </figure>
                        <button class="lightbox__nav lightbox__nav--next" aria-label=controls.with_value(|c| c.2.clone()) on:click=move |_| lightbox.update(Lightbox::next)>
                            "›"
                        </button>
                    </div>
                })
            }}
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
#[path = "gallery_test.rs"]
mod gallery_test;
