//! Section refinement through a generative text service.
//!
//! The editor hands a [`RefineRequest`] (section id, current copy, operator
//! feedback) to a [`Refiner`] and gets back a complete replacement
//! [`SectionContent`]. The service reply is validated against the content
//! model before it can reach the page.

mod gemini;

pub use gemini::GeminiRefiner;

use page_leptos::types::SectionContent;

/// Feedback sent when the operator leaves the box empty
pub const DEFAULT_FEEDBACK: &str = "Make it more persuasive and clear.";

/// What the refinement service is asked to rewrite.
#[derive(Debug, Clone, PartialEq)]
pub struct RefineRequest {
    pub section_id: String,
    pub content: SectionContent,
    pub feedback: String,
}

#[derive(Debug, thiserror::Error)]
pub enum RefineError {
    #[error("no API key configured (set GEMINI_API_KEY or [gemini].api_key)")]
    MissingApiKey,
    #[error("refinement request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("refinement service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("refinement service returned no text")]
    EmptyResponse,
    #[error("could not encode current copy for the prompt: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("refined copy is not valid section content: {0}")]
    InvalidContent(#[from] serde_json::Error),
}

/// Rewrites one section's copy.
///
/// A single outstanding request per editor; implementations need not be
/// `Send`.
#[allow(async_fn_in_trait)]
pub trait Refiner {
    async fn refine(&self, request: &RefineRequest) -> Result<SectionContent, RefineError>;
}

/// Prompt text for one request.
///
/// Current copy goes in as camelCase JSON, the same shape the reply must use.
pub fn build_prompt(request: &RefineRequest) -> Result<String, RefineError> {
    let current = serde_json::to_string(&request.content).map_err(RefineError::Encode)?;
    Ok(format!(
        "Refine the following landing page section copy based on the feedback.\n\
         Section Type: {}\n\
         Current Copy: {}\n\
         Feedback: {}\n\
         \n\
         Maintain the high-converting framework principles:\n\
         - Benefit-driven\n\
         - Emphasize 'being' over 'wanting'\n\
         - Remove friction (anxiety, doubt)\n\
         - Tone: Empathetic, practical, urgent.\n\
         \n\
         Return the refined JSON object only.",
        request.section_id, current, request.feedback
    ))
}

/// Parse a service reply into section content.
///
/// The reply must be a JSON object with at least a `headline`; known keys
/// must have their expected types. Unknown keys are kept.
pub fn parse_refined(text: &str) -> Result<SectionContent, RefineError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(RefineError::EmptyResponse);
    }
    Ok(serde_json::from_str(trimmed)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use page_leptos::types::Faq;
    use pretty_assertions::assert_eq;

    fn request() -> RefineRequest {
        RefineRequest {
            section_id: "faqs".into(),
            content: SectionContent {
                headline: "Tus dudas".into(),
                faqs: Some(vec![Faq {
                    q: "X".into(),
                    a: "Y".into(),
                }]),
                ..Default::default()
            },
            feedback: DEFAULT_FEEDBACK.into(),
        }
    }

    #[test]
    fn prompt_carries_section_copy_and_feedback() {
        let prompt = build_prompt(&request()).unwrap();

        assert!(prompt.contains("Section Type: faqs"));
        assert!(prompt.contains(r#"Current Copy: {"headline":"Tus dudas","faqs":[{"q":"X","a":"Y"}]}"#));
        assert!(prompt.contains("Feedback: Make it more persuasive and clear."));
        assert!(prompt.contains("Emphasize 'being' over 'wanting'"));
        assert!(prompt.ends_with("Return the refined JSON object only."));
    }

    #[test]
    fn prompt_keeps_unknown_keys_of_current_copy() {
        let mut request = request();
        request
            .content
            .extra
            .insert("badge".into(), serde_json::json!("nuevo"));

        let prompt = build_prompt(&request).unwrap();
        assert!(prompt.contains(r#""badge":"nuevo""#));
    }

    #[test]
    fn encode_failure_is_not_reported_as_bad_reply() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = RefineError::Encode(source);

        assert!(err.to_string().starts_with("could not encode current copy"));
        assert!(!matches!(err, RefineError::InvalidContent(_)));
    }

    #[test]
    fn parses_valid_reply() {
        let content = parse_refined(r#" {"headline":"Nuevo","cta":"Ya"} "#).unwrap();

        assert_eq!(content.headline, "Nuevo");
        assert_eq!(content.cta.as_deref(), Some("Ya"));
    }

    #[test]
    fn keeps_unknown_keys_from_reply() {
        let content = parse_refined(r#"{"headline":"H","badge":"nuevo"}"#).unwrap();
        assert_eq!(content.extra.get("badge"), Some(&serde_json::json!("nuevo")));
    }

    #[test]
    fn rejects_reply_without_headline() {
        let err = parse_refined(r#"{"cta":"Ya"}"#).unwrap_err();
        assert!(matches!(err, RefineError::InvalidContent(_)));
    }

    #[test]
    fn rejects_mistyped_known_key() {
        let err = parse_refined(r#"{"headline":"H","bullets":"not a list"}"#).unwrap_err();
        assert!(matches!(err, RefineError::InvalidContent(_)));
    }

    #[test]
    fn rejects_non_json_reply() {
        let err = parse_refined("Sure! Here is your copy").unwrap_err();
        assert!(matches!(err, RefineError::InvalidContent(_)));
    }

    #[test]
    fn empty_reply_is_empty_response() {
        assert!(matches!(parse_refined("  \n"), Err(RefineError::EmptyResponse)));
    }
}
