//! # page-leptos
//!
//! Leptos SSR renderer for single-page sales landing pages.
//!
//! A page is a fixed sequence of named slots (hero, lead, proof, benefits,
//! ...). Each slot looks its copy up by section id in a [`types::LandingPageData`]
//! document and renders it through a dedicated template; a slot whose section
//! is missing renders nothing.
//!
//! ## Features
//!
//! - **Zero JavaScript Runtime** - Pure SSR, no hydration needed
//! - **Content-Driven** - Every visible string comes from the data document
//! - **Checkout Rails** - Mercado Pago and PayPal links, or a generic button
//! - **Editor View** - Optional sidebar with one collapsible panel per section
//!
//! ## Quick Start
//!
//! ```rust
//! use page_leptos::{render_page, RenderOptions, types::{LandingPageData, SectionContent, SectionCopy}};
//!
//! let data = LandingPageData {
//!     business_name: "Pablo y German".into(),
//!     offer_name: "Workshop".into(),
//!     sections: vec![SectionCopy {
//!         id: "above_the_fold".into(),
//!         name: "1. Above the Fold".into(),
//!         purpose: "Capture attention.".into(),
//!         content: SectionContent {
//!             headline: "Aprende en 4 horas".into(),
//!             ..Default::default()
//!         },
//!     }],
//! };
//!
//! let html = render_page(&data, &RenderOptions::default());
//! assert!(html.contains("Aprende en 4 horas"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Content model (serde, camelCase on the wire)
//! - [`sections`] - Slot kinds and per-template projections of the content
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants

#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod sections;
pub mod styles;
pub mod types;

use components::{EditorSidebar, PageDocument, SectionSlot};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use sections::SectionView;
use types::{EditorSnapshot, LandingPageData, SectionCopy};

/// Year printed in the footer when none is configured
pub const DEFAULT_FOOTER_YEAR: u16 = 2025;

/// Knobs for [`render_page`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Copyright year in the footer
    pub footer_year: u16,
    /// Editor state; when set, the sidebar is rendered next to the page
    pub editor: Option<EditorSnapshot>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            footer_year: DEFAULT_FOOTER_YEAR,
            editor: None,
        }
    }
}

/// Render the complete HTML document for a landing page.
///
/// Slots render in their fixed order regardless of how sections are stored.
/// The output includes `<!DOCTYPE html>`.
///
/// # Example
///
/// ```rust
/// use page_leptos::{render_page, RenderOptions, types::LandingPageData};
///
/// let html = render_page(&LandingPageData::default(), &RenderOptions::default());
/// assert!(html.starts_with("<!DOCTYPE html>"));
/// ```
pub fn render_page(data: &LandingPageData, options: &RenderOptions) -> String {
    let doc = view! {
        <PageDocument
            data=data.clone()
            editor=options.editor.clone()
            footer_year=options.footer_year
        />
    };

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", doc.to_html())
}

/// Render a single section as an HTML fragment.
///
/// Returns `None` when the section id matches no template.
pub fn render_section(section: &SectionCopy) -> Option<String> {
    let projected = SectionView::from_copy(section)?;
    Some(view! { <SectionSlot section=projected /> }.to_html())
}

/// Render only the editor sidebar as an HTML fragment.
pub fn render_editor(data: &LandingPageData, editor: &EditorSnapshot) -> String {
    view! { <EditorSidebar data=data.clone() editor=editor.clone() /> }.to_html()
}
