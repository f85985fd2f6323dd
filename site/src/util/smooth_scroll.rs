//! Animated in-page anchor scrolling.
//!
//! Anchors keep their `href="#id"` so the page still jumps without WASM;
//! once hydrated, click handlers call [`scroll_to_anchor`] and cancel the
//! native jump when it returns `true`.

#[cfg(test)]
#[path = "smooth_scroll_test.rs"]
mod smooth_scroll_test;

/// Fixed header height subtracted from the target position.
pub const HEADER_OFFSET: f64 = 80.0;
/// Scroll animation length.
pub const DURATION_MS: f64 = 800.0;

pub fn ease_out_quad(t: f64) -> f64 {
    t * (2.0 - t)
}

/// Fraction of the animation elapsed, clamped to `[0, 1]`.
pub fn progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    (elapsed_ms / duration_ms).clamp(0.0, 1.0)
}

pub fn interpolate(start: f64, distance: f64, eased: f64) -> f64 {
    start + distance * eased
}

/// Element id targeted by an in-page anchor, or `None` for bare `#` and
/// external hrefs.
pub fn anchor_target(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() { None } else { Some(id) }
}

/// What a call-to-action does when clicked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CtaAction {
    /// Scroll to the section with this id.
    Scroll(String),
    /// Open this URL in a new browser context.
    External(String),
}

impl CtaAction {
    pub fn from_href(href: &str) -> Self {
        match anchor_target(href) {
            Some(id) => Self::Scroll(id.to_owned()),
            None => Self::External(href.to_owned()),
        }
    }
}

/// Smoothly scroll to the element targeted by `href`.
///
/// Returns `true` when an element was found and the animation started, so
/// callers can cancel the default anchor jump.
pub fn scroll_to_anchor(href: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(id) = anchor_target(href) else {
            return false;
        };
        let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(id))
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            return false;
        };
        smooth_scroll_to(f64::from(element.offset_top()) - HEADER_OFFSET);
        true
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = href;
        false
    }
}

/// Smoothly scroll back to the top of the page.
pub fn scroll_to_top() {
    #[cfg(feature = "hydrate")]
    smooth_scroll_to(0.0);
}

#[cfg(feature = "hydrate")]
fn smooth_scroll_to(target_y: f64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let start_y = window.scroll_y().unwrap_or(0.0);
    step(start_y, target_y - start_y, js_sys::Date::now());
}

#[cfg(feature = "hydrate")]
fn step(start_y: f64, distance: f64, started_ms: f64) {
    leptos::prelude::request_animation_frame(move || {
        let t = progress(js_sys::Date::now() - started_ms, DURATION_MS);
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, interpolate(start_y, distance, ease_out_quad(t)));
        }
        if t < 1.0 {
            step(start_y, distance, started_ms);
        }
    });
}
