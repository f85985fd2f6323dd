use leptos::prelude::*;

use crate::components::legal_modals::LegalModals;
use crate::content::{Access, Footer as FooterContent, LegalLabels};
use crate::util::map::OSM_COPYRIGHT_URL;
use crate::util::smooth_scroll::scroll_to_top;

const DEVELOPER_URL: &str = "https://anthonyip.fr";

#[component]
pub fn Footer(footer: FooterContent, access: Access, legal: LegalLabels) -> impl IntoView {
    let links = access.links.clone();

    view! {
        <a
            class="back-to-top"
            href="#top"
            aria-label=footer.back_to_top.clone()
            on:click=move |ev| {
                ev.prevent_default();
                scroll_to_top();
            }
        >
            "↑"
        </a>

        <footer class="site-footer">
            <div class="container site-footer__grid">
                <div class="site-footer__brand">
                    <div class="site-footer__brand-row">
                        <span class="site-footer__logo" aria-hidden="true">"🔥"</span>
                        <div>
                            <h3>{footer.brand_name.clone()}</h3>
                            <p class="muted">{footer.slogan}</p>
                        </div>
                    </div>
                    <p class="site-footer__description">{footer.description}</p>
                    <p class="site-footer__notice">"🛡 " {footer.cookie_notice}</p>
                </div>

                <div class="site-footer__column">
                    <h4>{footer.contact}</h4>
                    <p class="muted">{footer.phone}</p>
                    <a class="site-footer__phone" href=links.call>{access.phone.clone()}</a>
                    <p class="muted">{footer.address}</p>
                    <p>{access.address.clone()}</p>
                </div>

                <div class="site-footer__column">
                    <h4>{footer.useful_links}</h4>
                    <a class="site-footer__link" href=links.gmb target="_blank" rel="noopener noreferrer">
                        {footer.google_business}
                    </a>
                    <a class="site-footer__link" href=links.directions target="_blank" rel="noopener noreferrer">
                        {footer.directions}
                    </a>
                    <a class="site-footer__link" href=links.instagram target="_blank" rel="noopener noreferrer">
                        {footer.follow_instagram}
                    </a>
                </div>
            </div>

            <div class="container site-footer__bottom">
                <div>
                    <p class="muted">{footer.legal}</p>
                    <p class="site-footer__credits">
                        <a href=OSM_COPYRIGHT_URL target="_blank" rel="noopener noreferrer">{footer.map_credits}</a>
                    </p>
                    <p class="site-footer__credits">
                        <a href=DEVELOPER_URL target="_blank" rel="noopener noreferrer">{footer.developed_by}</a>
                    </p>
                </div>
                <LegalModals access=access brand_name=footer.brand_name labels=legal/>
            </div>
        </footer>
    }
}
