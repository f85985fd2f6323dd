//! Customer reviews carousel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Auto-advances every few seconds while the pointer is outside the card.
//! The timer is one-shot and re-armed whenever the index or hover flag
//! changes, so manual navigation restarts the countdown.

use leptos::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::{Review, ReviewsLabels};
use crate::util::carousel::{AutoAdvance, Carousel};
use crate::util::format::{format_date_fr, format_rating};

const POLICY: AutoAdvance = AutoAdvance { paused_on_hover: true };

#[component]
pub fn Reviews(items: Vec<Review>, labels: ReviewsLabels, gmb_link: String) -> impl IntoView {
    let count = items.len();
    let carousel = RwSignal::new(Carousel::new(count));
    let hovered = RwSignal::new(false);
    let items = StoredValue::new(items);
    let labels = StoredValue::new(labels);

    #[cfg(feature = "hydrate")]
    {
        use crate::util::carousel::REVIEW_ADVANCE_MS;

        let timer = StoredValue::new_local(None::<gloo_timers::callback::Timeout>);
        Effect::new(move || {
            let _index = carousel.get().index();
            let armed = POLICY.should_tick(hovered.get(), count);
            timer.update_value(|slot| {
                *slot = armed.then(|| {
                    gloo_timers::callback::Timeout::new(REVIEW_ADVANCE_MS, move || {
                        carousel.update(Carousel::next);
                    })
                });
            });
        });
        on_cleanup(move || {
            timer.update_value(|slot| {
                slot.take();
            });
        });
    }

    let show_controls = POLICY.should_tick(false, count);

    view! {
        <section class="section section--muted" id="reviews">
            <div class="container">
                <Reveal class="section__heading">
                    <h2 class="section__title">{labels.with_value(|l| l.title.clone())}</h2>
                    <p class="section__subtitle">{labels.with_value(|l| l.subtitle.clone())}</p>
                </Reveal>

                <div
                    class="reviews"
                    on:mouseenter=move |_| hovered.set(true)
                    on:mouseleave=move |_| hovered.set(false)
                >
                    {move || {
                        let index = carousel.get().index();
                        items
                            .with_value(|all| all.get(index).cloned())
                            .map(|review| labels.with_value(|l| review_card(review, l)))
                    }}

                    <Show when=move || show_controls>
                        <div class="reviews__controls">
                            <button
                                class="reviews__arrow"
                                aria-label=labels.with_value(|l| l.previous.clone())
                                on:click=move |_| carousel.update(Carousel::prev)
                            >
                                "‹"
                            </button>
                            <div class="reviews__dots">
                                {(0..count)
                                    .map(|index| {
                                        view! {
                                            <button
                                                class="dot"
                                                class:dot--active=move || carousel.get().index() == index
                                                aria-label=labels.with_value(|l| format!("{} {}", l.review, index + 1))
                                                on:click=move |_| carousel.update(|c| c.go_to(index))
                                            ></button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                            <button
                                class="reviews__arrow"
                                aria-label=labels.with_value(|l| l.next.clone())
                                on:click=move |_| carousel.update(Carousel::next)
                            >
                                "›"
                            </button>
                        </div>
                    </Show>
                </div>

                <div class="reviews__all">
                    <a class="btn btn--outline" href=gmb_link target="_blank" rel="noopener noreferrer">
                        {labels.with_value(|l| l.view_all_reviews.clone())}
                    </a>
                </div>
            </div>
        </section>
    }
}

fn review_card(review: Review, labels: &ReviewsLabels) -> impl IntoView + use<> {
    let initial = review.name.chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default();
    let guide = review.is_local_guide.then(|| {
        let mut counts = Vec::new();
        if let Some(n) = review.review_count {
            counts.push(format!("{n} {}", labels.reviews_count));
        }
        if let Some(n) = review.photo_count {
            counts.push(format!("{n} {}", labels.photos_count));
        }
        view! {
            <span class="review-card__guide">
                <span class="badge badge--primary">{labels.local_guide.clone()}</span>
                <span class="review-card__counts">{counts.join(" · ")}</span>
            </span>
        }
    });

    view! {
        <article class="review-card">
            <div class="review-card__stars" aria-label=format!("{} {}", review.rating.min(5), labels.out_of_five)>
                {format_rating(review.rating)}
            </div>
            <blockquote class="review-card__comment">"« " {review.comment} " »"</blockquote>
            <footer class="review-card__author">
                <span class="review-card__avatar" aria-hidden="true">{initial}</span>
                <span class="review-card__who">
                    <span class="review-card__name">{review.name}</span>
                    {guide}
                    <time class="review-card__date" datetime=review.date.clone()>{format_date_fr(&review.date)}</time>
                </span>
            </footer>
        </article>
    }
}

#[cfg(all(test, feature = "ssr"))]
#[path = "reviews_test.rs"]
mod reviews_test;
