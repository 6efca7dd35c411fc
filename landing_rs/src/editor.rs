//! Editor controller - the only mutation path for the page copy.
//!
//! State is a handful of explicit fields:
//!
//! - `open_section`: the expanded panel (at most one)
//! - `refining`: the section with a refinement in flight (at most one, for
//!   the whole page)
//! - `feedback`: per-section feedback drafts
//!
//! ```text
//! Idle ──toggle──▶ Editing ──begin_refine──▶ Refining
//!   ▲                 │  ▲                      │
//!   └────toggle───────┘  └───complete_refine────┘
//! ```
//!
//! Every edit builds a new [`SectionContent`] and swaps it in through
//! [`LandingPageData::replace_content`]; other sections and the order never
//! change.

use std::collections::HashMap;

use page_leptos::types::{ContentField, EditorSnapshot, LandingPageData, SectionContent};
use page_leptos::{RenderOptions, render_page};
use tracing::{debug, error, info, warn};

use crate::refine::{DEFAULT_FEEDBACK, RefineError, RefineRequest, Refiner};

/// Derived state of the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorPhase {
    /// No panel open, nothing in flight
    Idle,
    /// One panel open
    Editing,
    /// A refinement is in flight
    Refining,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditorError {
    #[error("refinement already in flight for section '{0}'")]
    RefinementInFlight(String),
    #[error("unknown section '{0}'")]
    UnknownSection(String),
}

/// Owns the page data and the editor UI state.
#[derive(Debug, Clone)]
pub struct Editor {
    data: LandingPageData,
    open_section: Option<String>,
    refining: Option<String>,
    feedback: HashMap<String, String>,
}

impl Editor {
    pub fn new(data: LandingPageData) -> Self {
        Self {
            data,
            open_section: None,
            refining: None,
            feedback: HashMap::new(),
        }
    }

    pub fn data(&self) -> &LandingPageData {
        &self.data
    }

    pub fn into_data(self) -> LandingPageData {
        self.data
    }

    pub fn open_section(&self) -> Option<&str> {
        self.open_section.as_deref()
    }

    pub fn refining(&self) -> Option<&str> {
        self.refining.as_deref()
    }

    /// Feedback draft for a section (empty when none was typed)
    pub fn feedback(&self, id: &str) -> &str {
        self.feedback.get(id).map(String::as_str).unwrap_or("")
    }

    pub fn phase(&self) -> EditorPhase {
        if self.refining.is_some() {
            EditorPhase::Refining
        } else if self.open_section.is_some() {
            EditorPhase::Editing
        } else {
            EditorPhase::Idle
        }
    }

    /// Open a panel, closing any other; toggling the open panel closes it.
    /// Unknown ids are ignored.
    pub fn toggle_section(&mut self, id: &str) {
        if self.data.section(id).is_none() {
            debug!("toggle ignored, no section '{}'", id);
            return;
        }
        if self.open_section.as_deref() == Some(id) {
            self.open_section = None;
        } else {
            self.open_section = Some(id.to_string());
        }
    }

    /// Replace one text field. Returns `false` for an unknown section.
    pub fn set_field(&mut self, id: &str, field: ContentField, value: impl Into<String>) -> bool {
        let Some(section) = self.data.section(id) else {
            debug!("edit ignored, no section '{}'", id);
            return false;
        };
        let next = section.content.with_field(field, value);
        debug!("section '{}': set {}", id, field);
        self.data.replace_content(id, next)
    }

    /// Replace one bullet. Returns `false` for an unknown section or one
    /// without bullets.
    ///
    /// # Panics
    ///
    /// Panics when `index` is past the end of the section's bullets.
    pub fn set_bullet(&mut self, id: &str, index: usize, value: impl Into<String>) -> bool {
        let Some(section) = self.data.section(id) else {
            debug!("edit ignored, no section '{}'", id);
            return false;
        };
        let Some(next) = section.content.with_bullet(index, value) else {
            debug!("section '{}' has no bullets", id);
            return false;
        };
        debug!("section '{}': set bullet {}", id, index);
        self.data.replace_content(id, next)
    }

    pub fn set_feedback(&mut self, id: &str, text: impl Into<String>) {
        self.feedback.insert(id.to_string(), text.into());
    }

    /// Mark `id` as refining and build the request for the collaborator.
    ///
    /// Rejected while any refinement is in flight.
    pub fn begin_refine(&mut self, id: &str) -> Result<RefineRequest, EditorError> {
        if let Some(current) = &self.refining {
            return Err(EditorError::RefinementInFlight(current.clone()));
        }
        let section = self
            .data
            .section(id)
            .ok_or_else(|| EditorError::UnknownSection(id.to_string()))?;

        let feedback = match self.feedback.get(id).map(|text| text.trim()) {
            Some(text) if !text.is_empty() => text.to_string(),
            _ => DEFAULT_FEEDBACK.to_string(),
        };
        let request = RefineRequest {
            section_id: id.to_string(),
            content: section.content.clone(),
            feedback,
        };

        info!("Refining section '{}'", id);
        self.refining = Some(id.to_string());
        Ok(request)
    }

    /// Apply the collaborator's answer and clear the in-flight marker.
    ///
    /// On success the section content is replaced wholesale and its feedback
    /// draft cleared. A failure is logged and dropped; content stays as it
    /// was. Returns whether the content was replaced.
    pub fn complete_refine(
        &mut self,
        id: &str,
        result: Result<SectionContent, RefineError>,
    ) -> bool {
        if self.refining.as_deref() != Some(id) {
            warn!("Ignoring refinement result for '{}', not in flight", id);
            return false;
        }
        self.refining = None;

        match result {
            Ok(content) => {
                let replaced = self.data.replace_content(id, content);
                if replaced {
                    self.feedback.remove(id);
                    info!("Section '{}' refined", id);
                }
                replaced
            }
            Err(err) => {
                error!("Refinement failed for '{}': {}", id, err);
                false
            }
        }
    }

    /// Run one refinement end to end: begin, await the collaborator, complete.
    pub async fn refine<R: Refiner>(&mut self, refiner: &R, id: &str) -> Result<bool, EditorError> {
        let request = self.begin_refine(id)?;
        let result = refiner.refine(&request).await;
        Ok(self.complete_refine(id, result))
    }

    /// Read-only copy of the UI state for the renderer
    pub fn snapshot(&self) -> EditorSnapshot {
        EditorSnapshot {
            open_section: self.open_section.clone(),
            refining: self.refining.clone(),
            feedback: self.feedback.clone(),
        }
    }

    /// Render the page with the editor sidebar
    pub fn render(&self, footer_year: u16) -> String {
        render_page(
            &self.data,
            &RenderOptions {
                footer_year,
                editor: Some(self.snapshot()),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::default_landing_page;
    use page_leptos::types::{Faq, SectionCopy};
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    /// Returns the current copy unchanged
    struct EchoRefiner;

    impl Refiner for EchoRefiner {
        async fn refine(&self, request: &RefineRequest) -> Result<SectionContent, RefineError> {
            Ok(request.content.clone())
        }
    }

    /// Always fails
    struct FailingRefiner;

    impl Refiner for FailingRefiner {
        async fn refine(&self, _request: &RefineRequest) -> Result<SectionContent, RefineError> {
            Err(RefineError::EmptyResponse)
        }
    }

    /// Replaces the headline and records the requests it saw
    struct RewritingRefiner {
        headline: &'static str,
        seen: RefCell<Vec<RefineRequest>>,
    }

    impl RewritingRefiner {
        fn new(headline: &'static str) -> Self {
            Self {
                headline,
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl Refiner for RewritingRefiner {
        async fn refine(&self, request: &RefineRequest) -> Result<SectionContent, RefineError> {
            self.seen.borrow_mut().push(request.clone());
            Ok(SectionContent {
                headline: self.headline.into(),
                ..Default::default()
            })
        }
    }

    fn editor() -> Editor {
        Editor::new(default_landing_page())
    }

    fn ids(data: &LandingPageData) -> Vec<String> {
        data.sections.iter().map(|s| s.id.clone()).collect()
    }

    #[test]
    fn starts_idle() {
        let editor = editor();
        assert_eq!(editor.phase(), EditorPhase::Idle);
        assert_eq!(editor.snapshot(), EditorSnapshot::default());
    }

    #[test]
    fn toggle_opens_one_panel_at_a_time() {
        let mut editor = editor();

        editor.toggle_section("faqs");
        assert_eq!(editor.open_section(), Some("faqs"));
        assert_eq!(editor.phase(), EditorPhase::Editing);

        editor.toggle_section("lead_section");
        assert_eq!(editor.open_section(), Some("lead_section"));

        editor.toggle_section("lead_section");
        assert_eq!(editor.open_section(), None);
        assert_eq!(editor.phase(), EditorPhase::Idle);
    }

    #[test]
    fn toggle_ignores_unknown_section() {
        let mut editor = editor();
        editor.toggle_section("faqs");
        editor.toggle_section("pricing");
        assert_eq!(editor.open_section(), Some("faqs"));
    }

    #[test]
    fn set_field_touches_only_that_section() {
        let mut editor = editor();
        let before = editor.data().clone();

        assert!(editor.set_field("above_the_fold", ContentField::Headline, "Nuevo"));

        let after = editor.data();
        assert_eq!(ids(after), ids(&before));
        assert_eq!(after.section("above_the_fold").unwrap().content.headline, "Nuevo");
        for (old, new) in before.sections.iter().zip(&after.sections) {
            if old.id != "above_the_fold" {
                assert_eq!(old, new);
            }
        }
        let hero_before = &before.section("above_the_fold").unwrap().content;
        let hero_after = &after.section("above_the_fold").unwrap().content;
        assert_eq!(hero_after.bullets, hero_before.bullets);
        assert_eq!(hero_after.cta, hero_before.cta);
    }

    #[test]
    fn set_field_can_add_a_missing_field() {
        let mut editor = editor();
        assert!(editor.set_field("faqs", ContentField::Eyebrow, "FAQ"));
        assert_eq!(
            editor.data().section("faqs").unwrap().content.eyebrow.as_deref(),
            Some("FAQ")
        );
    }

    #[test]
    fn set_field_on_unknown_section_changes_nothing() {
        let mut editor = editor();
        let before = editor.data().clone();
        assert!(!editor.set_field("pricing", ContentField::Headline, "x"));
        assert_eq!(editor.data(), &before);
    }

    #[test]
    fn set_bullet_replaces_one_entry() {
        let mut editor = editor();
        assert!(editor.set_bullet("benefits_section", 1, "Otra cosa"));

        let bullets = editor
            .data()
            .section("benefits_section")
            .unwrap()
            .content
            .bullets
            .clone()
            .unwrap();
        assert_eq!(bullets.len(), 4);
        assert_eq!(bullets[0], "Sostener el estado deseado sin ansiedad");
        assert_eq!(bullets[1], "Otra cosa");
    }

    #[test]
    fn set_bullet_without_bullets_is_ignored() {
        let mut editor = editor();
        let before = editor.data().clone();
        assert!(!editor.set_bullet("faqs", 0, "x"));
        assert_eq!(editor.data(), &before);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn set_bullet_out_of_range_panics() {
        let mut editor = editor();
        editor.set_bullet("full_stop", 3, "x");
    }

    #[test]
    fn begin_refine_uses_default_feedback() {
        let mut editor = editor();
        let request = editor.begin_refine("faqs").unwrap();

        assert_eq!(request.section_id, "faqs");
        assert_eq!(request.feedback, DEFAULT_FEEDBACK);
        assert_eq!(request.content, editor.data().section("faqs").unwrap().content);
        assert_eq!(editor.phase(), EditorPhase::Refining);
        assert_eq!(editor.refining(), Some("faqs"));
    }

    #[test]
    fn begin_refine_uses_typed_feedback() {
        let mut editor = editor();
        editor.set_feedback("faqs", "  Más corto  ");
        let request = editor.begin_refine("faqs").unwrap();
        assert_eq!(request.feedback, "Más corto");
    }

    #[test]
    fn second_refine_is_rejected_while_in_flight() {
        let mut editor = editor();
        editor.begin_refine("above_the_fold").unwrap();

        assert_eq!(
            editor.begin_refine("above_the_fold"),
            Err(EditorError::RefinementInFlight("above_the_fold".into()))
        );
        assert_eq!(
            editor.begin_refine("faqs"),
            Err(EditorError::RefinementInFlight("above_the_fold".into()))
        );
    }

    #[test]
    fn begin_refine_unknown_section() {
        let mut editor = editor();
        assert_eq!(
            editor.begin_refine("pricing"),
            Err(EditorError::UnknownSection("pricing".into()))
        );
        assert_eq!(editor.phase(), EditorPhase::Idle);
    }

    #[test]
    fn failed_refine_keeps_content_and_clears_marker() {
        let mut editor = editor();
        editor.set_feedback("faqs", "shorter");
        let before = editor.data().clone();

        editor.begin_refine("faqs").unwrap();
        assert!(!editor.complete_refine("faqs", Err(RefineError::EmptyResponse)));

        assert_eq!(editor.data(), &before);
        assert_eq!(editor.refining(), None);
        assert_eq!(editor.feedback("faqs"), "shorter");
    }

    #[test]
    fn stale_completion_is_ignored() {
        let mut editor = editor();
        editor.begin_refine("faqs").unwrap();

        let replacement = SectionContent {
            headline: "x".into(),
            ..Default::default()
        };
        assert!(!editor.complete_refine("lead_section", Ok(replacement)));
        assert_eq!(editor.refining(), Some("faqs"));
    }

    #[tokio::test]
    async fn echo_refinement_leaves_content_identical() {
        let mut editor = editor();
        let before = editor.data().clone();

        let replaced = editor.refine(&EchoRefiner, "above_the_fold").await.unwrap();

        assert!(replaced);
        assert_eq!(editor.data(), &before);
        assert_eq!(editor.phase(), EditorPhase::Idle);
    }

    #[tokio::test]
    async fn failing_refinement_is_swallowed() {
        let mut editor = editor();
        let before = editor.data().clone();

        let replaced = editor.refine(&FailingRefiner, "faqs").await.unwrap();

        assert!(!replaced);
        assert_eq!(editor.data(), &before);
        assert_eq!(editor.refining(), None);
    }

    #[tokio::test]
    async fn rewriting_refinement_replaces_whole_content() {
        let mut editor = editor();
        editor.toggle_section("offer_section");
        editor.set_feedback("offer_section", "Más urgencia");

        let refiner = RewritingRefiner::new("Última oportunidad");
        let replaced = editor.refine(&refiner, "offer_section").await.unwrap();

        assert!(replaced);
        let content = &editor.data().section("offer_section").unwrap().content;
        assert_eq!(content.headline, "Última oportunidad");
        assert_eq!(content.bullets, None);
        assert_eq!(editor.feedback("offer_section"), "");
        assert_eq!(editor.open_section(), Some("offer_section"));
        assert_eq!(editor.phase(), EditorPhase::Editing);

        let seen = refiner.seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].feedback, "Más urgencia");
    }

    #[tokio::test]
    async fn refine_unknown_section_does_not_call_refiner() {
        let mut editor = editor();
        let refiner = RewritingRefiner::new("x");

        let err = editor.refine(&refiner, "pricing").await.unwrap_err();

        assert_eq!(err, EditorError::UnknownSection("pricing".into()));
        assert!(refiner.seen.borrow().is_empty());
    }

    #[test]
    fn render_shows_sidebar_state() {
        let mut data = LandingPageData::default();
        data.sections.push(SectionCopy {
            id: "faqs".into(),
            name: "10. FAQs".into(),
            purpose: "Remove final objections.".into(),
            content: SectionContent {
                headline: "Tus dudas".into(),
                faqs: Some(vec![Faq {
                    q: "X".into(),
                    a: "Y".into(),
                }]),
                ..Default::default()
            },
        });
        let mut editor = Editor::new(data);
        editor.toggle_section("faqs");
        editor.begin_refine("faqs").unwrap();

        let html = editor.render(2025);
        assert!(html.contains("editor-panel open"));
        assert!(html.contains("Refining..."));
        assert!(html.contains(r#"<h4 class="faq-q">X</h4>"#));
    }
}
