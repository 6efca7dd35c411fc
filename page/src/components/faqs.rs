//! FAQ list

use leptos::prelude::*;

use super::{ICON_CHATS, Icon};
use crate::sections::FaqsCopy;

#[component]
pub fn FaqsSection(copy: FaqsCopy) -> impl IntoView {
    view! {
        <section id="faqs" class="page-section faqs">
            <div class="container narrow">
                <h2 class="section-title with-icon">
                    <Icon path=ICON_CHATS size="32" class="icon-accent" />
                    {copy.headline}
                </h2>
                {copy.faqs.map(|faqs| view! {
                    <div class="faq-list">
                        {faqs.into_iter().enumerate().map(|(idx, faq)| view! {
                            <div class="faq" data-index=idx.to_string()>
                                <h4 class="faq-q">{faq.q}</h4>
                                <p class="faq-a">{faq.a}</p>
                            </div>
                        }).collect::<Vec<_>>()}
                    </div>
                })}
            </div>
        </section>
    }
}
