//! Call-to-action controls shared by the hero, offer and full-stop sections

use leptos::prelude::*;

use crate::sections::CallToAction;

/// One control per configured checkout rail, or a single plain button when
/// no rail is configured.
#[component]
pub fn CheckoutButtons(action: CallToAction) -> impl IntoView {
    let CallToAction { label, checkout } = action;
    let links = checkout.links();

    if links.is_empty() {
        return view! {
            <div class="checkout">
                <button type="button" class="checkout-btn checkout-generic">
                    {label}
                </button>
            </div>
        }
        .into_any();
    }

    view! {
        <div class="checkout">
            {links.into_iter().map(|(rail, url)| {
                let label = label.clone();
                view! {
                    <a
                        href=url
                        target="_blank"
                        rel="noopener noreferrer"
                        class=rail.class()
                    >
                        {label.map(|text| view! { <span class="checkout-label">{text}</span> })}
                        <span class="checkout-rail">{rail.label()}</span>
                    </a>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
    .into_any()
}
