use leptos::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::{Service, ServicesLabels};

#[component]
pub fn Services(items: Vec<Service>, labels: ServicesLabels) -> impl IntoView {
    let badge = labels.service_badge;
    view! {
        <section class="section" id="services">
            <div class="container">
                <Reveal class="section__heading">
                    <h2 class="section__title">{labels.title}</h2>
                    <p class="section__subtitle">{labels.subtitle}</p>
                </Reveal>
                <div class="services">
                    {items
                        .into_iter()
                        .zip(0u32..)
                        .map(|(service, position)| {
                            let badge = badge.clone();
                            view! {
                                <Reveal delay_ms=position * 150 class="service-card">
                                    <div class="service-card__media">
                                        <img src=service.image alt=service.title.clone() loading="lazy"/>
                                        <span class="badge badge--primary service-card__badge">{badge}</span>
                                    </div>
                                    <div class="service-card__body">
                                        <h3 class="service-card__title">{service.title}</h3>
                                        <p class="service-card__desc">{service.desc}</p>
                                        <ul class="service-card__features">
                                            {service
                                                .features
                                                .into_iter()
                                                .map(|feature| view! { <li>{feature}</li> })
                                                .collect_view()}
                                        </ul>
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
#[path = "services_test.rs"]
mod services_test;
