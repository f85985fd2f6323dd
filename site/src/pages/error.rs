use leptos::prelude::*;

pub const ERROR_TITLE: &str = "Erreur";
pub const ERROR_MESSAGE: &str = "Erreur lors du chargement du contenu";

/// Full-page error state shown when the content document cannot be used.
#[component]
pub fn ErrorPage() -> impl IntoView {
    view! {
        <main class="error-page">
            <div class="error-page__card">
                <h1 class="error-page__title">{ERROR_TITLE}</h1>
                <p class="error-page__message">{ERROR_MESSAGE}</p>
            </div>
        </main>
    }
}
