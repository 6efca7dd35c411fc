//! Offer and full-stop sections - recap plus checkout

use leptos::prelude::*;

use super::{CheckoutButtons, ICON_CHECK_CIRCLE, ICON_GLOBE, Icon};
use crate::sections::OfferCopy;

/// Offer summary card
#[component]
pub fn OfferSection(copy: OfferCopy) -> impl IntoView {
    let OfferCopy {
        headline,
        bullets,
        friction_remover,
        action,
    } = copy;

    view! {
        <section id="offer_section" class="page-section offer">
            <div class="container narrow">
                <div class="offer-card">
                    <div class="offer-backdrop"><Icon path=ICON_GLOBE size="192" /></div>
                    <h2 class="section-title">{headline}</h2>
                    {bullets.map(|bullets| view! {
                        <ul class="offer-list">
                            {bullets.into_iter().enumerate().map(|(idx, bullet)| view! {
                                <li class="offer-item" data-index=idx.to_string()>
                                    <Icon path=ICON_CHECK_CIRCLE size="24" />
                                    {bullet}
                                </li>
                            }).collect::<Vec<_>>()}
                        </ul>
                    })}
                    <div class="offer-actions">
                        {friction_remover.map(|text| view! { <p class="friction-remover">{text}</p> })}
                        <CheckoutButtons action=action />
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Final recap before the footer
#[component]
pub fn FullStopSection(copy: OfferCopy) -> impl IntoView {
    let OfferCopy {
        headline,
        bullets,
        friction_remover,
        action,
    } = copy;

    view! {
        <section id="full_stop" class="page-section full-stop accent">
            <div class="container narrow">
                <h2 class="section-title">{headline}</h2>
                {bullets.map(|bullets| view! {
                    <div class="pill-row">
                        {bullets.into_iter().enumerate().map(|(idx, bullet)| view! {
                            <span class="pill" data-index=idx.to_string()>{bullet}</span>
                        }).collect::<Vec<_>>()}
                    </div>
                })}
                {friction_remover.map(|text| view! { <p class="friction-remover">{text}</p> })}
                <CheckoutButtons action=action />
            </div>
        </section>
    }
}
