//! Slot dispatch - picks the template for a section view
//!
//! The page is a fixed list of named slots. Each slot looks its section up by
//! id; a slot with no matching section renders nothing.

use leptos::prelude::*;

use super::{
    AboutTeamSection, AboveTheFold, BenefitsSection, DifferentiatorsSection, FaqsSection,
    FullStopSection, HowItWorksSection, LeadSection, OfferSection, ProofSection,
    SocialProofIntentSection,
};
use crate::sections::{SectionKind, SectionView};
use crate::types::LandingPageData;

/// Render one section through its template
#[component]
pub fn SectionSlot(section: SectionView) -> impl IntoView {
    match section {
        SectionView::AboveTheFold(copy) => view! { <AboveTheFold copy=copy /> }.into_any(),
        SectionView::Lead(copy) => view! { <LeadSection copy=copy /> }.into_any(),
        SectionView::Proof(copy) => view! { <ProofSection copy=copy /> }.into_any(),
        SectionView::Benefits(copy) => view! { <BenefitsSection copy=copy /> }.into_any(),
        SectionView::Differentiators(copy) => {
            view! { <DifferentiatorsSection copy=copy /> }.into_any()
        }
        SectionView::HowItWorks(copy) => view! { <HowItWorksSection copy=copy /> }.into_any(),
        SectionView::Offer(copy) => view! { <OfferSection copy=copy /> }.into_any(),
        SectionView::AboutTeam(copy) => view! { <AboutTeamSection copy=copy /> }.into_any(),
        SectionView::SocialProofIntent(copy) => {
            view! { <SocialProofIntentSection copy=copy /> }.into_any()
        }
        SectionView::Faqs(copy) => view! { <FaqsSection copy=copy /> }.into_any(),
        SectionView::FullStop(copy) => view! { <FullStopSection copy=copy /> }.into_any(),
    }
}

/// All populated slots in display order
#[component]
pub fn PageSections(data: LandingPageData) -> impl IntoView {
    SectionKind::ALL
        .into_iter()
        .filter_map(|kind| {
            data.section(kind.id())
                .map(|section| SectionView::project(kind, &section.content))
        })
        .map(|section| view! { <SectionSlot section=section /> })
        .collect::<Vec<_>>()
}
