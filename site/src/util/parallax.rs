//! Scroll-driven parallax transform for the hero background.

#[cfg(test)]
#[path = "parallax_test.rs"]
mod parallax_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ParallaxDirection {
    #[default]
    Up,
    Down,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxOptions {
    pub speed: f64,
    pub direction: ParallaxDirection,
    pub disabled: bool,
}

impl Default for ParallaxOptions {
    fn default() -> Self {
        Self { speed: 0.5, direction: ParallaxDirection::Up, disabled: false }
    }
}

/// Vertical offset in pixels for the given scroll distance.
pub fn parallax_offset(scroll_y: f64, options: ParallaxOptions) -> f64 {
    let rate = scroll_y * -options.speed;
    match options.direction {
        ParallaxDirection::Up => rate,
        ParallaxDirection::Down => -rate,
    }
}

/// CSS transform value for a vertical offset.
pub fn transform_for(offset: f64) -> String {
    format!("translate3d(0, {offset}px, 0)")
}

/// Attach the parallax effect to `node`.
///
/// Applies once on mount, then at most once per animation frame while the
/// window scrolls. Cleanup removes the listener and clears the transform.
pub fn use_parallax(node: NodeRef<leptos::html::Div>, options: ParallaxOptions) {
    #[cfg(feature = "hydrate")]
    {
        if options.disabled {
            return;
        }

        let ticking = StoredValue::new(false);
        let update = move || {
            ticking.set_value(false);
            let Some(element) = node.get_untracked() else {
                return;
            };
            let scroll_y = web_sys::window()
                .and_then(|w| w.scroll_y().ok())
                .unwrap_or(0.0);
            let _ = element
                .style()
                .set_property("transform", &transform_for(parallax_offset(scroll_y, options)));
        };

        Effect::new(move || {
            if node.get().is_some() {
                update();
            }
        });

        let on_scroll = window_event_listener(leptos::ev::scroll, move |_| {
            if ticking.get_value() {
                return;
            }
            ticking.set_value(true);
            request_animation_frame(update);
        });

        on_cleanup(move || {
            on_scroll.remove();
            if let Some(Some(element)) = node.try_get_untracked() {
                let _ = element.style().set_property("transform", "");
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (node, options);
    }
}
