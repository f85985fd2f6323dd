//! Sun/moon button switching between light and dark themes.

use leptos::prelude::*;

use crate::util::theme::{self, Theme};
use crate::util::viewport::{TOGGLE_SCROLLED_PX, use_scrolled_past};

/// Theme switch. Reads and writes the `RwSignal<Theme>` context.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let current = expect_context::<RwSignal<Theme>>();
    let scrolled = use_scrolled_past(TOGGLE_SCROLLED_PX);

    let on_click = move |_| current.set(theme::toggle(current.get_untracked()));

    view! {
        <button
            class="theme-toggle"
            class:theme-toggle--solid=move || scrolled.get()
            on:click=on_click
            aria-label=move || format!("Thème actuel: {}. Cliquer pour changer", current.get().as_str())
            title=move || format!("Thème: {}", current.get().label())
        >
            <span class="theme-toggle__icon" aria-hidden="true">
                {move || match current.get() {
                    Theme::Light => "☀",
                    Theme::Dark => "☾",
                }}
            </span>
        </button>
    }
}
