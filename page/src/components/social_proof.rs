//! Social proof with intent - "this is for you if..." archetypes

use leptos::prelude::*;

use super::{ICON_USERS_THREE, Icon};
use crate::sections::ArchetypesCopy;

#[component]
pub fn SocialProofIntentSection(copy: ArchetypesCopy) -> impl IntoView {
    view! {
        <section id="social_proof_intent" class="page-section social-proof-intent">
            <div class="container">
                <h2 class="section-title">{copy.headline}</h2>
                {copy.archetypes.map(|archetypes| view! {
                    <div class="archetype-grid">
                        {archetypes.into_iter().enumerate().map(|(idx, archetype)| view! {
                            <div class="archetype" data-index=idx.to_string()>
                                <div class="archetype-head">
                                    <div class="archetype-icon"><Icon path=ICON_USERS_THREE size="24" /></div>
                                    <h3>{archetype.title}</h3>
                                </div>
                                <p class="archetype-quote">"“" {archetype.quote} "”"</p>
                            </div>
                        }).collect::<Vec<_>>()}
                    </div>
                })}
            </div>
        </section>
    }
}
