//! Fixed site header: brand, scroll-spy navigation, theme switch, and CTAs.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sits above every section. The active nav entry follows the scroll-spy
//! signal; below the desktop breakpoint the nav collapses into a slide-in
//! menu whose open flag is local to this component.

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::content::{Brand, Links, Navigation};
use crate::util::format::short_brand_name;
use crate::util::scroll_spy::{NAV_OFFSET, NAV_SECTIONS, use_scroll_spy};
use crate::util::smooth_scroll::scroll_to_anchor;
use crate::util::viewport::{HEADER_SCROLLED_PX, use_scrolled_past};

#[derive(Clone)]
struct NavItem {
    id: &'static str,
    label: String,
}

fn nav_items(navigation: &Navigation) -> Vec<NavItem> {
    let labels = [&navigation.services, &navigation.news, &navigation.gallery, &navigation.access];
    NAV_SECTIONS
        .iter()
        .zip(labels)
        .map(|(id, label)| NavItem { id: *id, label: label.clone() })
        .collect()
}

#[component]
pub fn Header(brand: Brand, links: Links, navigation: Navigation) -> impl IntoView {
    let active = use_scroll_spy(NAV_SECTIONS, NAV_OFFSET);
    let scrolled = use_scrolled_past(HEADER_SCROLLED_PX);
    let menu_open = RwSignal::new(false);

    let on_nav = move |ev: leptos::ev::MouseEvent, id: &'static str| {
        if scroll_to_anchor(&format!("#{id}")) {
            ev.prevent_default();
        }
        menu_open.set(false);
    };

    let items = nav_items(&navigation);
    let desktop_items = items.clone();
    let short_name = short_brand_name(&brand.name);
    let directions = links.directions.clone();
    let call = links.call.clone();

    view! {
        <header class="site-header" class:site-header--scrolled=move || scrolled.get()>
            <div class="site-header__inner">
                <a class="site-header__brand" href="#top">
                    <span class="site-header__logo" aria-hidden="true">"🔥"</span>
                    <span>
                        <span class="site-header__name">{short_name}</span>
                        <span class="site-header__slogan">{brand.slogan.clone()}</span>
                    </span>
                </a>

                <nav class="site-header__nav" aria-label="Navigation principale">
                    {desktop_items
                        .into_iter()
                        .map(|item| {
                            let id = item.id;
                            view! {
                                <a
                                    class="site-header__link"
                                    class:site-header__link--active=move || active.get().as_deref() == Some(id)
                                    href=format!("#{id}")
                                    on:click=move |ev| on_nav(ev, id)
                                >
                                    {item.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>

                <div class="site-header__actions">
                    <ThemeToggle/>
                    <a class="btn btn--outline btn--sm" href=directions.clone() target="_blank" rel="noopener noreferrer">
                        {navigation.directions.clone()}
                    </a>
                    <a class="btn btn--primary btn--sm" href=call.clone()>
                        {navigation.call.clone()}
                    </a>
                </div>

                <button
                    class="site-header__menu-button"
                    aria-label=navigation.menu.clone()
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    "☰"
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <div class="mobile-menu__backdrop" on:click=move |_| menu_open.set(false)></div>
            </Show>
            <aside class="mobile-menu" class:mobile-menu--open=move || menu_open.get()>
                <nav class="mobile-menu__nav">
                    {items
                        .into_iter()
                        .map(|item| {
                            let id = item.id;
                            view! {
                                <a class="mobile-menu__link" href=format!("#{id}") on:click=move |ev| on_nav(ev, id)>
                                    {item.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
                <div class="mobile-menu__actions">
                    <div class="mobile-menu__theme">
                        <span>{navigation.theme.clone()}</span>
                        <ThemeToggle/>
                    </div>
                    <a
                        class="btn btn--outline btn--block"
                        href=directions
                        target="_blank"
                        rel="noopener noreferrer"
                        on:click=move |_| menu_open.set(false)
                    >
                        {navigation.view_directions.clone()}
                    </a>
                    <a class="btn btn--primary btn--block" href=call on:click=move |_| menu_open.set(false)>
                        {navigation.call_now.clone()}
                    </a>
                </div>
            </aside>
        </header>
    }
}
