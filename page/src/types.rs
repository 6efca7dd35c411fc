//! Landing page data types.
//!
//! These types define the content model the page is rendered from. They're
//! designed to be:
//!
//! - **Serializable** - the JSON shape matches the copy documents the editor
//!   and the refinement service exchange (camelCase keys)
//! - **Clone-friendly** - components take owned data, no borrowing through `view!`
//! - **Default-able** - build partial sections with `..Default::default()`
//!
//! # Example
//!
//! ```rust
//! use page_leptos::types::{Faq, LandingPageData, SectionContent, SectionCopy};
//!
//! let data = LandingPageData {
//!     business_name: "Pablo y German".into(),
//!     offer_name: "Workshop".into(),
//!     sections: vec![SectionCopy {
//!         id: "faqs".into(),
//!         name: "10. FAQs".into(),
//!         purpose: "Remove final objections.".into(),
//!         content: SectionContent {
//!             headline: "Tus dudas resueltas".into(),
//!             faqs: Some(vec![Faq { q: "X".into(), a: "Y".into() }]),
//!             ..Default::default()
//!         },
//!     }],
//! };
//!
//! assert!(data.section("faqs").is_some());
//! assert!(data.section("FAQS").is_none());
//! ```

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Root aggregate: the whole page.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingPageData {
    /// Business shown in the footer
    pub business_name: String,
    /// Offer name, used as the document title
    pub offer_name: String,
    /// Sections in storage order; ids are unique
    #[serde(default)]
    pub sections: Vec<SectionCopy>,
}

/// One page section.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionCopy {
    /// Stable key used for lookup and template selection
    pub id: String,
    /// Human readable label (editor only)
    pub name: String,
    /// What the section is for (editor only)
    #[serde(default)]
    pub purpose: String,
    /// Copy payload
    pub content: SectionContent,
}

/// Copy payload of a section.
///
/// Every key except `headline` is optional. Templates read only the keys they
/// know about and omit the matching element when a key is absent. Keys this
/// struct does not recognize are kept in `extra` so a payload survives a round
/// trip through the editor unchanged.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eyebrow: Option<String>,
    pub headline: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subheadline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bullets: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friction_remover: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_proof: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pain_point: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solution_teaser: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<Vec<Review>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<Step>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<Vec<TeamMember>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faqs: Option<Vec<Faq>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archetypes: Option<Vec<Archetype>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mercado_pago_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paypal_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_quote: Option<String>,
    /// Unrecognized keys, never read by a template
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Customer review (`reviews[]`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub author: String,
    pub text: String,
}

/// Process step (`steps[]`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub title: String,
    pub desc: String,
}

/// Team member card (`team[]`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub desc: String,
}

/// Question and answer pair (`faqs[]`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub q: String,
    pub a: String,
}

/// Audience archetype (`archetypes[]`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Archetype {
    pub title: String,
    pub quote: String,
}

/// Dataset problems caught by [`LandingPageData::validate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DataError {
    #[error("section id '{0}' appears more than once")]
    DuplicateId(String),
    #[error("section at position {0} has an empty id")]
    EmptyId(usize),
}

impl LandingPageData {
    /// First section whose id matches exactly (case-sensitive).
    ///
    /// `None` is not an error: the slot simply renders nothing.
    pub fn section(&self, id: &str) -> Option<&SectionCopy> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Replace one section's content, leaving every other section and the
    /// order untouched. Returns `false` when no section has this id.
    pub fn replace_content(&mut self, id: &str, content: SectionContent) -> bool {
        match self.sections.iter_mut().find(|s| s.id == id) {
            Some(section) => {
                section.content = content;
                true
            }
            None => false,
        }
    }

    /// Check that ids are non-empty and unique.
    pub fn validate(&self) -> Result<(), DataError> {
        let mut seen = HashSet::new();
        for (idx, section) in self.sections.iter().enumerate() {
            if section.id.is_empty() {
                return Err(DataError::EmptyId(idx));
            }
            if !seen.insert(section.id.as_str()) {
                return Err(DataError::DuplicateId(section.id.clone()));
            }
        }
        Ok(())
    }
}

/// Single-valued text keys of [`SectionContent`] that the editor can bind to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContentField {
    Eyebrow,
    Headline,
    Subheadline,
    Cta,
    FrictionRemover,
    SocialProof,
    Usp,
    PainPoint,
    SolutionTeaser,
    VideoUrl,
    MercadoPagoUrl,
    PaypalUrl,
    ImageUrl,
    AuthorName,
    AuthorTitle,
    AuthorQuote,
}

impl ContentField {
    pub const ALL: [ContentField; 16] = [
        ContentField::Eyebrow,
        ContentField::Headline,
        ContentField::Subheadline,
        ContentField::Cta,
        ContentField::FrictionRemover,
        ContentField::SocialProof,
        ContentField::Usp,
        ContentField::PainPoint,
        ContentField::SolutionTeaser,
        ContentField::VideoUrl,
        ContentField::MercadoPagoUrl,
        ContentField::PaypalUrl,
        ContentField::ImageUrl,
        ContentField::AuthorName,
        ContentField::AuthorTitle,
        ContentField::AuthorQuote,
    ];

    /// JSON key of the field
    pub fn key(self) -> &'static str {
        match self {
            ContentField::Eyebrow => "eyebrow",
            ContentField::Headline => "headline",
            ContentField::Subheadline => "subheadline",
            ContentField::Cta => "cta",
            ContentField::FrictionRemover => "frictionRemover",
            ContentField::SocialProof => "socialProof",
            ContentField::Usp => "usp",
            ContentField::PainPoint => "painPoint",
            ContentField::SolutionTeaser => "solutionTeaser",
            ContentField::VideoUrl => "videoUrl",
            ContentField::MercadoPagoUrl => "mercadoPagoUrl",
            ContentField::PaypalUrl => "paypalUrl",
            ContentField::ImageUrl => "imageUrl",
            ContentField::AuthorName => "authorName",
            ContentField::AuthorTitle => "authorTitle",
            ContentField::AuthorQuote => "authorQuote",
        }
    }

    /// Label shown above the input in the editor sidebar
    pub fn label(self) -> &'static str {
        match self {
            ContentField::Eyebrow => "Eyebrow",
            ContentField::Headline => "Headline",
            ContentField::Subheadline => "Subheadline",
            ContentField::Cta => "Button Text",
            ContentField::FrictionRemover => "Friction Remover",
            ContentField::SocialProof => "Social Proof",
            ContentField::Usp => "USP",
            ContentField::PainPoint => "Pain Point",
            ContentField::SolutionTeaser => "Solution Teaser",
            ContentField::VideoUrl => "Video URL",
            ContentField::MercadoPagoUrl => "Mercado Pago URL",
            ContentField::PaypalUrl => "PayPal URL",
            ContentField::ImageUrl => "Image URL",
            ContentField::AuthorName => "Author Name",
            ContentField::AuthorTitle => "Author Title",
            ContentField::AuthorQuote => "Author Quote",
        }
    }
}

impl fmt::Display for ContentField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ContentField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContentField::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = ContentField::ALL.iter().map(|f| f.key()).collect();
                format!("unknown field '{}' (expected one of: {})", s, known.join(", "))
            })
    }
}

impl SectionContent {
    /// Current value of a text field.
    pub fn field(&self, field: ContentField) -> Option<&str> {
        let value = match field {
            ContentField::Headline => return Some(self.headline.as_str()),
            ContentField::Eyebrow => &self.eyebrow,
            ContentField::Subheadline => &self.subheadline,
            ContentField::Cta => &self.cta,
            ContentField::FrictionRemover => &self.friction_remover,
            ContentField::SocialProof => &self.social_proof,
            ContentField::Usp => &self.usp,
            ContentField::PainPoint => &self.pain_point,
            ContentField::SolutionTeaser => &self.solution_teaser,
            ContentField::VideoUrl => &self.video_url,
            ContentField::MercadoPagoUrl => &self.mercado_pago_url,
            ContentField::PaypalUrl => &self.paypal_url,
            ContentField::ImageUrl => &self.image_url,
            ContentField::AuthorName => &self.author_name,
            ContentField::AuthorTitle => &self.author_title,
            ContentField::AuthorQuote => &self.author_quote,
        };
        value.as_deref()
    }

    /// New content object with one text field replaced. `self` is untouched.
    pub fn with_field(&self, field: ContentField, value: impl Into<String>) -> SectionContent {
        let mut next = self.clone();
        let value = value.into();
        let slot = match field {
            ContentField::Headline => {
                next.headline = value;
                return next;
            }
            ContentField::Eyebrow => &mut next.eyebrow,
            ContentField::Subheadline => &mut next.subheadline,
            ContentField::Cta => &mut next.cta,
            ContentField::FrictionRemover => &mut next.friction_remover,
            ContentField::SocialProof => &mut next.social_proof,
            ContentField::Usp => &mut next.usp,
            ContentField::PainPoint => &mut next.pain_point,
            ContentField::SolutionTeaser => &mut next.solution_teaser,
            ContentField::VideoUrl => &mut next.video_url,
            ContentField::MercadoPagoUrl => &mut next.mercado_pago_url,
            ContentField::PaypalUrl => &mut next.paypal_url,
            ContentField::ImageUrl => &mut next.image_url,
            ContentField::AuthorName => &mut next.author_name,
            ContentField::AuthorTitle => &mut next.author_title,
            ContentField::AuthorQuote => &mut next.author_quote,
        };
        *slot = Some(value);
        next
    }

    /// New content object with `bullets[index]` replaced.
    ///
    /// Returns `None` when the content has no bullets at all.
    ///
    /// # Panics
    ///
    /// Panics when `index` is out of range. The editor only offers indices of
    /// bullets it rendered, so this is a caller bug.
    pub fn with_bullet(&self, index: usize, value: impl Into<String>) -> Option<SectionContent> {
        let bullets = self.bullets.as_ref()?;
        assert!(
            index < bullets.len(),
            "bullet index {} out of range ({} bullets)",
            index,
            bullets.len()
        );
        let mut next = self.clone();
        if let Some(bullets) = next.bullets.as_mut() {
            bullets[index] = value.into();
        }
        Some(next)
    }
}

/// Editor state the sidebar is rendered from.
///
/// Owned by the editor controller; this is a read-only copy handed to the
/// renderer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditorSnapshot {
    /// Section whose panel is expanded
    pub open_section: Option<String>,
    /// Section with a refinement in flight
    pub refining: Option<String>,
    /// Pending feedback text per section id
    pub feedback: HashMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(id: &str, headline: &str) -> SectionCopy {
        SectionCopy {
            id: id.into(),
            name: id.into(),
            purpose: String::new(),
            content: SectionContent {
                headline: headline.into(),
                ..Default::default()
            },
        }
    }

    fn page() -> LandingPageData {
        LandingPageData {
            business_name: "Biz".into(),
            offer_name: "Offer".into(),
            sections: vec![section("a", "A"), section("b", "B"), section("c", "C")],
        }
    }

    #[test]
    fn lookup_is_exact_and_case_sensitive() {
        let data = page();
        assert_eq!(data.section("b").map(|s| s.content.headline.as_str()), Some("B"));
        assert!(data.section("B").is_none());
        assert!(data.section("missing").is_none());
    }

    #[test]
    fn lookup_returns_first_match() {
        let mut data = page();
        data.sections.push(section("a", "second a"));
        assert_eq!(data.section("a").map(|s| s.content.headline.as_str()), Some("A"));
    }

    #[test]
    fn replace_content_touches_one_section() {
        let mut data = page();
        let before = data.clone();
        let replaced = data.replace_content(
            "b",
            SectionContent {
                headline: "New B".into(),
                ..Default::default()
            },
        );
        assert!(replaced);
        assert_eq!(data.sections[0], before.sections[0]);
        assert_eq!(data.sections[2], before.sections[2]);
        assert_eq!(data.sections[1].content.headline, "New B");
        let ids: Vec<_> = data.sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn replace_content_unknown_id() {
        let mut data = page();
        let before = data.clone();
        assert!(!data.replace_content("nope", SectionContent::default()));
        assert_eq!(data, before);
    }

    #[test]
    fn validate_rejects_duplicate_and_empty_ids() {
        assert_eq!(page().validate(), Ok(()));

        let mut dup = page();
        dup.sections.push(section("b", "again"));
        assert_eq!(dup.validate(), Err(DataError::DuplicateId("b".into())));

        let mut empty = page();
        empty.sections.insert(1, section("", "blank"));
        assert_eq!(empty.validate(), Err(DataError::EmptyId(1)));
    }

    #[test]
    fn content_uses_camel_case_keys_and_keeps_unknown_ones() {
        let json = r#"{
            "headline": "H",
            "frictionRemover": "27 USD",
            "mercadoPagoUrl": "https://mp.example",
            "faqs": [{"q": "X", "a": "Y"}],
            "confetti": true
        }"#;
        let content: SectionContent = serde_json::from_str(json).expect("parse");
        assert_eq!(content.friction_remover.as_deref(), Some("27 USD"));
        assert_eq!(content.mercado_pago_url.as_deref(), Some("https://mp.example"));
        assert_eq!(content.faqs.as_ref().map(Vec::len), Some(1));
        assert_eq!(content.extra.get("confetti"), Some(&Value::Bool(true)));

        let back = serde_json::to_value(&content).expect("serialize");
        assert_eq!(back["confetti"], Value::Bool(true));
        assert!(back.get("paypalUrl").is_none());
    }

    #[test]
    fn content_requires_headline() {
        let err = serde_json::from_str::<SectionContent>(r#"{"eyebrow": "e"}"#);
        assert!(err.is_err());
    }

    #[test]
    fn with_field_leaves_original_untouched() {
        let original = SectionContent {
            headline: "H".into(),
            cta: Some("Go".into()),
            ..Default::default()
        };
        let next = original.with_field(ContentField::Cta, "Buy");
        assert_eq!(original.cta.as_deref(), Some("Go"));
        assert_eq!(next.cta.as_deref(), Some("Buy"));
        assert_eq!(next.headline, "H");

        let retitled = original.with_field(ContentField::Headline, "H2");
        assert_eq!(retitled.field(ContentField::Headline), Some("H2"));
    }

    #[test]
    fn with_bullet_replaces_one_position() {
        let content = SectionContent {
            headline: "H".into(),
            bullets: Some(vec!["one".into(), "two".into(), "three".into()]),
            ..Default::default()
        };
        let next = content.with_bullet(1, "TWO").expect("has bullets");
        assert_eq!(
            next.bullets,
            Some(vec!["one".into(), "TWO".into(), "three".into()])
        );
        assert_eq!(content.bullets.as_ref().map(|b| b[1].as_str()), Some("two"));
    }

    #[test]
    fn with_bullet_without_bullets_is_none() {
        let content = SectionContent {
            headline: "H".into(),
            ..Default::default()
        };
        assert!(content.with_bullet(0, "x").is_none());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn with_bullet_out_of_range_panics() {
        let content = SectionContent {
            headline: "H".into(),
            bullets: Some(vec!["only".into()]),
            ..Default::default()
        };
        let _ = content.with_bullet(3, "x");
    }

    #[test]
    fn content_field_parses_json_keys() {
        for field in ContentField::ALL {
            assert_eq!(field.key().parse::<ContentField>(), Ok(field));
        }
        assert!("bullets".parse::<ContentField>().is_err());
        assert!("PainPoint".parse::<ContentField>().is_err());
    }
}
