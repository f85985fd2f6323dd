//! Window scroll and width readings shared by header chrome, reveal animations,
//! and the map panel.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use leptos::prelude::*;

/// Header switches to its solid style past this scroll distance.
pub const HEADER_SCROLLED_PX: f64 = 40.0;
/// Theme toggle switches to its solid style past this scroll distance.
pub const TOGGLE_SCROLLED_PX: f64 = 100.0;
/// Viewports narrower than this collapse the map panel.
pub const MOBILE_MAX_WIDTH_PX: f64 = 1024.0;
/// Fraction of the viewport an element must enter before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

pub fn is_mobile_width(width: f64) -> bool {
    width < MOBILE_MAX_WIDTH_PX
}

/// Whether an element whose top edge sits at `top` (viewport coordinates)
/// has entered far enough to be revealed.
pub fn crosses_reveal_threshold(top: f64, viewport_height: f64, threshold: f64) -> bool {
    top < viewport_height * (1.0 - threshold)
}

/// `true` while the window is scrolled past `threshold` pixels.
pub fn use_scrolled_past(threshold: f64) -> ReadSignal<bool> {
    let (scrolled, set_scrolled) = signal(false);

    #[cfg(feature = "hydrate")]
    {
        let measure = move || {
            let scroll_y = web_sys::window()
                .and_then(|w| w.scroll_y().ok())
                .unwrap_or(0.0);
            let next = is_scrolled(scroll_y, threshold);
            if scrolled.get_untracked() != next {
                set_scrolled.set(next);
            }
        };
        Effect::new(move || measure());
        let on_scroll = window_event_listener(leptos::ev::scroll, move |_| measure());
        on_cleanup(move || on_scroll.remove());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (threshold, set_scrolled);
    }

    scrolled
}

/// `true` while the window is narrower than [`MOBILE_MAX_WIDTH_PX`].
pub fn use_is_mobile() -> ReadSignal<bool> {
    let (mobile, set_mobile) = signal(false);

    #[cfg(feature = "hydrate")]
    {
        let measure = move || {
            let width = web_sys::window()
                .and_then(|w| w.inner_width().ok())
                .and_then(|v| v.as_f64())
                .unwrap_or(MOBILE_MAX_WIDTH_PX);
            let next = is_mobile_width(width);
            if mobile.get_untracked() != next {
                set_mobile.set(next);
            }
        };
        Effect::new(move || measure());
        let on_resize = window_event_listener(leptos::ev::resize, move |_| measure());
        on_cleanup(move || on_resize.remove());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = set_mobile;
    }

    mobile
}
