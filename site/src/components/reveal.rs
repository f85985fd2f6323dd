//! Wrapper that fades its children in once they scroll into view.

use leptos::prelude::*;

/// Reveal-on-scroll container. Reveals once and stays revealed.
#[component]
pub fn Reveal(
    children: Children,
    #[prop(optional)] delay_ms: u32,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let node = NodeRef::<leptos::html::Div>::new();
    let revealed = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        use crate::util::viewport::{REVEAL_THRESHOLD, crosses_reveal_threshold};

        let check = move || {
            if revealed.get_untracked() {
                return;
            }
            let Some(element) = node.get_untracked() else {
                return;
            };
            let viewport_height = web_sys::window()
                .and_then(|w| w.inner_height().ok())
                .and_then(|v| v.as_f64())
                .unwrap_or(0.0);
            let top = element.get_bounding_client_rect().top();
            if crosses_reveal_threshold(top, viewport_height, REVEAL_THRESHOLD) {
                revealed.set(true);
            }
        };
        Effect::new(move || {
            if node.get().is_some() {
                check();
            }
        });
        let on_scroll = window_event_listener(leptos::ev::scroll, move |_| check());
        on_cleanup(move || on_scroll.remove());
    }

    view! {
        <div
            class=format!("reveal {class}")
            class:reveal--visible=move || revealed.get()
            style=format!("transition-delay: {delay_ms}ms")
            node_ref=node
        >
            {children()}
        </div>
    }
}
