//! News cards. Selecting a card opens the shared news dialog.

use leptos::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::{NewsItem, NewsLabels};
use crate::state::dialog::Dialog;
use crate::util::format::{category_badge_class, format_date_fr};

#[component]
pub fn News(items: Vec<NewsItem>, labels: NewsLabels, dialog: RwSignal<Dialog<NewsItem>>) -> impl IntoView {
    let read_more = labels.read_more;
    view! {
        <section class="section section--muted" id="news">
            <div class="container">
                <Reveal class="section__heading">
                    <h2 class="section__title">{labels.title}</h2>
                    <p class="section__subtitle">{labels.subtitle}</p>
                </Reveal>
                <div class="news">
                    {items
                        .into_iter()
                        .zip(0u32..)
                        .map(|(item, position)| {
                            let selected = item.clone();
                            let read_more = read_more.clone();
                            let open = move |_| dialog.update(|d| d.open(selected.clone()));
                            view! {
                                <Reveal delay_ms=position * 150 class="news-card">
                                    <button class="news-card__button" on:click=open>
                                        <div class="news-card__media">
                                            <img src=item.image alt=item.title.clone() loading="lazy"/>
                                            <span class=format!("badge {}", category_badge_class(&item.category))>
                                                {item.category.clone()}
                                            </span>
                                        </div>
                                        <div class="news-card__body">
                                            <time class="news-card__date" datetime=item.date.clone()>
                                                {format_date_fr(&item.date)}
                                            </time>
                                            <h3 class="news-card__title">{item.title}</h3>
                                            <p class="news-card__text">{item.text}</p>
                                            <span class="news-card__more">{read_more} " →"</span>
                                        </div>
                                    </button>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
#[path = "news_test.rs"]
mod news_test;
