//! Benefits section - the dream outcome as cards

use leptos::prelude::*;

use super::{ICON_CHECK_CIRCLE, Icon};
use crate::sections::BulletsCopy;

#[component]
pub fn BenefitsSection(copy: BulletsCopy) -> impl IntoView {
    view! {
        <section id="benefits_section" class="page-section benefits dark">
            <div class="container">
                <h2 class="section-title">{copy.headline}</h2>
                {copy.bullets.map(|bullets| view! {
                    <div class="benefit-grid">
                        {bullets.into_iter().enumerate().map(|(idx, bullet)| view! {
                            <div class="benefit" data-index=idx.to_string()>
                                <div class="benefit-icon"><Icon path=ICON_CHECK_CIRCLE /></div>
                                <p>{bullet}</p>
                            </div>
                        }).collect::<Vec<_>>()}
                    </div>
                })}
            </div>
        </section>
    }
}
