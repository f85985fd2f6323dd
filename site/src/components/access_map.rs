//! Location panel: map, contact actions, and opening hours.
//!
//! SYSTEM CONTEXT
//! ==============
//! Below the desktop breakpoint the map starts collapsed behind a button so
//! the hours table stays above the fold. Today's row and panel come from the
//! visitor's clock, so they only appear once the client has hydrated; the
//! server render carries no highlight beyond rows flagged in the document.

use leptos::prelude::*;

use crate::components::leaflet_map::LeafletMap;
use crate::components::reveal::Reveal;
use crate::content::{Access, AccessLabels};
use crate::util::format::{current_weekday, is_today_row, link_target, monday_first_index, today_row};
use crate::util::map::{MapView, popup_html};
use crate::util::viewport::use_is_mobile;

#[component]
pub fn AccessMap(access: Access, labels: AccessLabels, brand_name: String) -> impl IntoView {
    let is_mobile = use_is_mobile();
    let map_expanded = RwSignal::new(false);
    let show_map = Signal::derive(move || !is_mobile.get() || map_expanded.get());

    let map_view = MapView::from(&access.map);
    let popup = popup_html(&brand_name, &access.address, map_view, &labels.directions);

    let weekday = RwSignal::new(None::<u8>);
    Effect::new(move |_| weekday.set(Some(current_weekday())));

    let table = access.hours.clone();
    let today = Memo::new(move |_| weekday.get().and_then(|day| today_row(&table, monday_first_index(day))));

    let rows = access
        .hours
        .iter()
        .cloned()
        .enumerate()
        .map(|(index, item)| {
            let day = item.day.clone();
            let hours = item.hours.clone();
            view! {
                <tr class="hours__row" class:hours__row--today=move || is_today_row(&item, index, today.get())>
                    <th scope="row">{day}</th>
                    <td>{hours}</td>
                </tr>
            }
        })
        .collect_view();

    let panel_hours = access.hours.clone();
    let today_label = labels.today.clone();
    let today_panel = move || {
        today.get().and_then(|row| panel_hours.get(row).cloned()).map(|entry| {
            view! {
                <p class="info-card__today">
                    <span class="badge badge--green">{today_label.clone()}</span>
                    " " {entry.day} " : " {entry.hours}
                </p>
            }
        })
    };

    let call = access.links.call.clone();
    let contact_call = access.links.call.clone();
    let directions = access.links.directions.clone();
    let (show_label, hide_label) = (labels.show_map.clone(), labels.hide_map.clone());
    let toggle_label =
        Signal::derive(move || if map_expanded.get() { hide_label.clone() } else { show_label.clone() });

    view! {
        <section class="section" id="access">
            <div class="container">
                <Reveal class="section__heading">
                    <h2 class="section__title">{labels.title.clone()}</h2>
                    <p class="section__subtitle">{labels.subtitle.clone()}</p>
                </Reveal>

                <div class="access">
                    <Reveal class="access__map-panel">
                        <div class="access__map-header">
                            <h3>{labels.location.clone()}</h3>
                            <Show when=move || is_mobile.get()>
                                <button
                                    class="btn btn--outline btn--sm"
                                    aria-expanded=move || map_expanded.get().to_string()
                                    on:click=move |_| map_expanded.update(|open| *open = !*open)
                                >
                                    {move || toggle_label.get()}
                                </button>
                            </Show>
                        </div>
                        <div class="access__map" class:access__map--collapsed=move || !show_map.get()>
                            <LeafletMap view=map_view popup_html=popup expanded=show_map/>
                        </div>
                        <div class="access__actions">
                            <a class="btn btn--primary" href=directions.clone() target=link_target(&directions) rel="noopener noreferrer">
                                {labels.directions.clone()}
                            </a>
                            <a class="btn btn--outline" href=call.clone() target=link_target(&call)>
                                {labels.call.clone()}
                            </a>
                        </div>
                    </Reveal>

                    <Reveal delay_ms=150 class="access__info">
                        <div class="info-card">
                            <h3 class="info-card__title">{labels.contact.clone()}</h3>
                            <dl class="info-card__list">
                                <dt>{labels.address.clone()}</dt>
                                <dd>{access.address.clone()}</dd>
                                <dt>{labels.phone.clone()}</dt>
                                <dd><a href=contact_call>{access.phone.clone()}</a></dd>
                                <dt>{labels.email.clone()}</dt>
                                <dd><a href=format!("mailto:{}", access.email)>{access.email.clone()}</a></dd>
                            </dl>
                        </div>
                        <div class="info-card">
                            <h3 class="info-card__title">{labels.opening_hours.clone()}</h3>
                            {today_panel}
                            <table class="hours">
                                <tbody>{rows}</tbody>
                            </table>
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
#[path = "access_map_test.rs"]
mod access_map_test;
