//! Proof section - customer reviews

use leptos::prelude::*;

use super::{ICON_STAR, Icon};
use crate::sections::ProofCopy;

#[component]
pub fn ProofSection(copy: ProofCopy) -> impl IntoView {
    let ProofCopy {
        headline,
        social_proof,
        reviews,
    } = copy;

    view! {
        <section id="proof_section" class="page-section proof">
            <div class="container">
                <div class="section-heading">
                    <h2>{headline}</h2>
                    {social_proof.map(|text| view! { <p class="social-proof">{text}</p> })}
                </div>
                {reviews.map(|reviews| view! {
                    <div class="review-grid">
                        {reviews.into_iter().enumerate().map(|(idx, review)| view! {
                            <div class="review" data-index=idx.to_string()>
                                <div class="stars">
                                    {(0..5).map(|_| view! { <Icon path=ICON_STAR size="16" /> }).collect::<Vec<_>>()}
                                </div>
                                <p class="review-text">"“" {review.text} "”"</p>
                                <p class="review-author">"— " {review.author}</p>
                            </div>
                        }).collect::<Vec<_>>()}
                    </div>
                })}
            </div>
        </section>
    }
}
