//! Legal notice and privacy policy dialogs opened from the footer.
//!
//! DESIGN
//! ======
//! Both texts are built from the access block so the publisher address,
//! phone, and email shown here never drift from the rest of the page.

#[cfg(test)]
#[path = "legal_modals_test.rs"]
mod legal_modals_test;

use leptos::prelude::*;

use crate::content::{Access, LegalLabels};
use crate::state::dialog::{Dialog, LegalNotice};
use crate::util::map::OSM_COPYRIGHT_URL;

/// One numbered heading and its paragraphs.
#[derive(Clone, Debug, PartialEq)]
pub struct NoticeSection {
    pub heading: String,
    pub paragraphs: Vec<String>,
}

fn section(heading: &str, paragraphs: &[&str]) -> NoticeSection {
    NoticeSection {
        heading: heading.to_owned(),
        paragraphs: paragraphs.iter().map(|p| (*p).to_owned()).collect(),
    }
}

pub fn notice_title(notice: LegalNotice) -> &'static str {
    match notice {
        LegalNotice::Mentions => "Mentions Légales",
        LegalNotice::Privacy => "Politique de Confidentialité",
    }
}

/// Body of a legal notice, filled in with the shop's contact details.
pub fn notice_sections(notice: LegalNotice, access: &Access, brand_name: &str) -> Vec<NoticeSection> {
    let contact = [
        format!("Adresse : {}", access.address),
        format!("Téléphone : {}", access.phone),
        format!("Email : {}", access.email),
    ];
    match notice {
        LegalNotice::Mentions => vec![
            NoticeSection {
                heading: "1. Éditeur du site".to_owned(),
                paragraphs: [
                    vec![format!("Raison sociale : {brand_name}")],
                    contact.to_vec(),
                    vec![
                        "Code APE : 47.25Z - Commerce de détail de produits à base de tabac en magasin spécialisé"
                            .to_owned(),
                    ],
                ]
                .concat(),
            },
            section(
                "2. Directeur de publication",
                &["Le directeur de la publication est le responsable de l'établissement."],
            ),
            section(
                "3. Propriété intellectuelle",
                &[
                    "L'ensemble de ce site relève de la législation française et internationale sur le droit d'auteur et la propriété intellectuelle.",
                    "La reproduction de tout ou partie de ce site est interdite sauf autorisation expresse du directeur de la publication.",
                ],
            ),
            NoticeSection {
                heading: "4. Responsabilité".to_owned(),
                paragraphs: vec![
                    "Les informations de ce site sont aussi précises que possible mais peuvent contenir des inexactitudes ou des omissions.".to_owned(),
                    format!("Pour signaler une erreur, écrivez à {}.", access.email),
                ],
            },
            section(
                "5. Liens hypertextes",
                &["Les liens présents sur le site mènent vers des pages dont le contenu n'engage pas l'établissement."],
            ),
            section(
                "6. Droit applicable",
                &["Tout litige relatif à l'utilisation du site est soumis au droit français."],
            ),
        ],
        LegalNotice::Privacy => vec![
            section(
                "1. Collecte des données",
                &["Ce site ne collecte aucune donnée personnelle de ses visiteurs et n'effectue aucune analyse de comportement."],
            ),
            section(
                "2. Cookies",
                &["Ce site ne dépose aucun cookie. Seule votre préférence de thème est conservée dans le stockage local de votre navigateur."],
            ),
            NoticeSection {
                heading: "3. Services tiers".to_owned(),
                paragraphs: vec![
                    "Les avis affichés proviennent de Google et les noms des clients ont été abrégés.".to_owned(),
                    "La carte interactive charge ses tuiles depuis les serveurs OpenStreetMap, qui peuvent journaliser temporairement votre adresse IP.".to_owned(),
                    format!("Attribution : © OpenStreetMap contributors ({OSM_COPYRIGHT_URL})"),
                ],
            },
            section(
                "4. Données de contact",
                &["Si vous nous contactez par téléphone ou email, vos coordonnées ne sont conservées que le temps de répondre à votre demande, 3 ans maximum."],
            ),
            section(
                "5. Vos droits RGPD",
                &["Vous disposez d'un droit d'accès, de rectification, d'effacement, d'opposition et de portabilité."],
            ),
            NoticeSection { heading: "6. Contact".to_owned(), paragraphs: contact.to_vec() },
        ],
    }
}

#[component]
pub fn LegalModals(access: Access, brand_name: String, labels: LegalLabels) -> impl IntoView {
    let dialog = RwSignal::new(Dialog::<LegalNotice>::default());
    let close = move || dialog.update(Dialog::close);

    #[cfg(feature = "hydrate")]
    {
        let on_key = window_event_listener(leptos::ev::keydown, move |ev| {
            if ev.key() == "Escape" && dialog.with_untracked(Dialog::is_open) {
                close();
            }
        });
        on_cleanup(move || on_key.remove());
    }

    let close_label = labels.close.clone();
    let body = move || {
        let notice = dialog.with(|d| d.selected().copied())?;
        let sections = notice_sections(notice, &access, &brand_name);
        Some(view! {
            <div class="modal" role="dialog" aria-modal="true" aria-labelledby="legal-modal-title">
                <div class="modal__backdrop" on:click=move |_| close()></div>
                <div class="modal__panel modal__panel--scroll">
                    <button class="modal__close" aria-label=close_label.clone() on:click=move |_| close()>"✕"</button>
                    <h2 class="modal__title" id="legal-modal-title">{notice_title(notice)}</h2>
                    <div class="legal">
                        {sections
                            .into_iter()
                            .map(|s| view! {
                                <section class="legal__section">
                                    <h3>{s.heading}</h3>
                                    {s.paragraphs.into_iter().map(|p| view! { <p>{p}</p> }).collect_view()}
                                </section>
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        })
    };

    view! {
        <div class="legal-links">
            <button class="link-button" on:click=move |_| dialog.update(|d| d.open(LegalNotice::Mentions))>
                {labels.mentions}
            </button>
            <button class="link-button" on:click=move |_| dialog.update(|d| d.open(LegalNotice::Privacy))>
                {labels.privacy}
            </button>
            <span class="legal-links__note">{labels.cookies}</span>
        </div>
        {body}
    }
}
