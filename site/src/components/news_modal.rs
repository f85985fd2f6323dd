//! Detail dialog for one news item.
//!
//! Closes on the backdrop, the close button, the footer button, or Escape.

use leptos::prelude::*;

use crate::content::{NewsItem, NewsModalLabels};
use crate::state::dialog::Dialog;
use crate::util::format::{category_tone_class, format_date_fr};

#[component]
pub fn NewsModal(dialog: RwSignal<Dialog<NewsItem>>, labels: NewsModalLabels) -> impl IntoView {
    let close = move || dialog.update(Dialog::close);

    #[cfg(feature = "hydrate")]
    {
        let on_key = window_event_listener(leptos::ev::keydown, move |ev| {
            if ev.key() == "Escape" && dialog.with_untracked(Dialog::is_open) {
                close();
            }
        });
        on_cleanup(move || on_key.remove());
    }

    view! {
        {move || {
            dialog
                .with(|d| d.selected().cloned())
                .map(|item| {
                    let labels = labels.clone();
                    view! {
                        <div class="modal" role="dialog" aria-modal="true" aria-labelledby="news-modal-title">
                            <div class="modal__backdrop" on:click=move |_| close()></div>
                            <div class="modal__panel">
                                <button class="modal__close" aria-label=labels.close.clone() on:click=move |_| close()>
                                    "✕"
                                </button>
                                <div class="modal__media">
                                    <img src=item.image.clone() alt=item.title.clone()/>
                                </div>
                                <div class="modal__body">
                                    <div class="modal__meta">
                                        <span class=format!("tone {}", category_tone_class(&item.category))>
                                            {item.category.clone()}
                                        </span>
                                        <time datetime=item.date.clone()>{format_date_fr(&item.date)}</time>
                                    </div>
                                    <h2 class="modal__title" id="news-modal-title">{item.title.clone()}</h2>
                                    <h3 class="modal__subtitle">{labels.details.clone()}</h3>
                                    <p class="modal__description">{item.description.clone()}</p>
                                </div>
                                <div class="modal__footer">
                                    <button class="btn btn--primary" on:click=move |_| close()>
                                        {labels.interested.clone()}
                                    </button>
                                </div>
                            </div>
                        </div>
                    }
                })
        }}
    }
}
