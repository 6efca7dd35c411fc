//! Leptos UI components for rendering the landing page.
//!
//! Each component is a Leptos `#[component]` function; they compose into the
//! full document rendered by [`crate::render_page`].
//!
//! # Component Hierarchy
//!
//! ```text
//! PageDocument
//! ├── EditorSidebar (optional)
//! │   └── EditorPanel (per section)
//! ├── PageSections
//! │   └── SectionSlot (per populated slot)
//! │       ├── AboveTheFold ── CheckoutButtons
//! │       ├── LeadSection
//! │       ├── ProofSection
//! │       ├── BenefitsSection
//! │       ├── DifferentiatorsSection
//! │       ├── HowItWorksSection
//! │       ├── OfferSection ── CheckoutButtons
//! │       ├── AboutTeamSection
//! │       ├── SocialProofIntentSection
//! │       ├── FaqsSection
//! │       └── FullStopSection ── CheckoutButtons
//! └── Footer
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use page_leptos::components::SectionSlot;
//! use page_leptos::sections::SectionView;
//!
//! let section = SectionView::from_copy(&copy).unwrap();
//! view! { <SectionSlot section=section /> }
//! ```

mod benefits;
mod checkout;
mod differentiators;
mod document;
mod faqs;
mod footer;
mod hero;
mod how_it_works;
mod icons;
mod lead;
mod offer;
mod proof;
mod section;
mod sidebar;
mod social_proof;
mod team;

pub use benefits::BenefitsSection;
pub use checkout::CheckoutButtons;
pub use differentiators::DifferentiatorsSection;
pub use document::PageDocument;
pub use faqs::FaqsSection;
pub use footer::Footer;
pub use hero::AboveTheFold;
pub use how_it_works::HowItWorksSection;
pub use icons::*;
pub use lead::LeadSection;
pub use offer::{FullStopSection, OfferSection};
pub use proof::ProofSection;
pub use section::{PageSections, SectionSlot};
pub use sidebar::EditorSidebar;
pub use social_proof::SocialProofIntentSection;
pub use team::AboutTeamSection;
