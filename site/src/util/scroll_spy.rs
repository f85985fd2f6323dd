//! Scroll-spy: which navigation section is currently in view.
//!
//! The pure half picks the active section from measured section boxes; the
//! hook half measures the DOM on mount and on every window scroll/resize.

#[cfg(test)]
#[path = "scroll_spy_test.rs"]
mod scroll_spy_test;

use leptos::prelude::*;

/// Sections the header navigation tracks, in page order.
pub const NAV_SECTIONS: &[&str] = &["services", "news", "gallery", "access"];
/// Header height compensation applied to the scroll position.
pub const NAV_OFFSET: f64 = 100.0;

/// Layout of one tracked section, in document coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBox {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// Return the last section (in page order) whose top, minus half its
/// height, is at or above `scroll_y + offset`.
pub fn active_section(sections: &[SectionBox], scroll_y: f64, offset: f64) -> Option<String> {
    let position = scroll_y + offset;
    sections
        .iter()
        .rev()
        .find(|section| position >= section.top - section.height / 2.0)
        .map(|section| section.id.clone())
}

/// Track the active section among `ids`.
///
/// The signal keeps its previous value when no tracked element exists or
/// none qualifies, and starts as `None`.
pub fn use_scroll_spy(ids: &'static [&'static str], offset: f64) -> ReadSignal<Option<String>> {
    let (active, set_active) = signal(None::<String>);

    #[cfg(feature = "hydrate")]
    {
        let recompute = move || {
            let Some(window) = web_sys::window() else {
                return;
            };
            let boxes = measure_sections(&window, ids);
            let scroll_y = window.scroll_y().unwrap_or(0.0);
            let Some(next) = active_section(&boxes, scroll_y, offset) else {
                return;
            };
            if active.get_untracked().as_deref() != Some(next.as_str()) {
                set_active.set(Some(next));
            }
        };

        Effect::new(move || recompute());
        let on_scroll = window_event_listener(leptos::ev::scroll, move |_| recompute());
        let on_resize = window_event_listener(leptos::ev::resize, move |_| recompute());
        on_cleanup(move || {
            on_scroll.remove();
            on_resize.remove();
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ids, offset, set_active);
    }

    active
}

#[cfg(feature = "hydrate")]
fn measure_sections(window: &web_sys::Window, ids: &[&str]) -> Vec<SectionBox> {
    use wasm_bindgen::JsCast;

    let Some(document) = window.document() else {
        return Vec::new();
    };
    ids.iter()
        .filter_map(|id| {
            let element = document
                .get_element_by_id(id)?
                .dyn_into::<web_sys::HtmlElement>()
                .ok()?;
            Some(SectionBox {
                id: (*id).to_owned(),
                top: f64::from(element.offset_top()),
                height: f64::from(element.offset_height()),
            })
        })
        .collect()
}
