//! Root application component with routing and the theme context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{error::ErrorPage, index::IndexPage};
use crate::util::map::{LEAFLET_CSS, LEAFLET_JS};
use crate::util::theme::{self, Theme};

/// HTML shell rendered on the server for SSR + hydration.
///
/// The document starts in the dark theme; the stored preference is applied
/// once the client hydrates.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="fr" class="dark" data-theme="dark">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="icon" href="/assets/favicon.svg" type="image/svg+xml"/>
                <link rel="stylesheet" href=LEAFLET_CSS crossorigin=""/>
                <script src=LEAFLET_JS crossorigin=""></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let current = RwSignal::new(Theme::default());
    provide_context(current);

    // Restore the stored theme after hydration.
    Effect::new(move || {
        let stored = theme::read_preference();
        theme::apply(stored);
        current.set(stored);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/allumettes.css"/>

        <Router>
            <Routes fallback=|| view! { <ErrorPage/> }>
                <Route path=StaticSegment("") view=IndexPage/>
            </Routes>
        </Router>
    }
}
