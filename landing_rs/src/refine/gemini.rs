//! Gemini `generateContent` client.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{RefineError, RefineRequest, Refiner, build_prompt, parse_refined};
use crate::config::GeminiConfig;
use page_leptos::types::SectionContent;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateRequest {
    fn for_prompt(prompt: String) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
            },
        }
    }
}

impl GenerateResponse {
    /// Text of the first part of the first candidate
    fn into_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text
    }
}

/// [`Refiner`] backed by the Gemini REST API.
pub struct GeminiRefiner {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl GeminiRefiner {
    pub fn new(config: &GeminiConfig) -> Result<Self, RefineError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or(RefineError::MissingApiKey)?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            endpoint: format!(
                "{}/v1beta/models/{}:generateContent",
                config.base_url.trim_end_matches('/'),
                config.model
            ),
            api_key,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Refiner for GeminiRefiner {
    async fn refine(&self, request: &RefineRequest) -> Result<SectionContent, RefineError> {
        let body = GenerateRequest::for_prompt(build_prompt(request)?);

        tracing::debug!("POST {} for section {}", self.endpoint, request.section_id);
        let response = self
            .client
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RefineError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let payload: GenerateResponse = response.json().await?;
        let text = payload.into_text().ok_or(RefineError::EmptyResponse)?;
        parse_refined(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const GENERATE_PATH: &str = "/v1beta/models/m:generateContent";

    fn config_with_key(key: Option<&str>) -> GeminiConfig {
        GeminiConfig {
            api_key: key.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn request_body_matches_wire_format() {
        let body = GenerateRequest::for_prompt("hello".into());
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "contents": [{ "parts": [{ "text": "hello" }] }],
                "generationConfig": { "responseMimeType": "application/json" }
            })
        );
    }

    #[test]
    fn extracts_first_candidate_text() {
        let payload: GenerateResponse = serde_json::from_value(serde_json::json!({
            "candidates": [
                { "content": { "parts": [{ "text": "{\"headline\":\"A\"}" }, { "text": "ignored" }] } },
                { "content": { "parts": [{ "text": "second" }] } }
            ]
        }))
        .unwrap();

        assert_eq!(payload.into_text().as_deref(), Some("{\"headline\":\"A\"}"));
    }

    #[test]
    fn no_candidates_means_no_text() {
        let payload: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(payload.into_text(), None);

        let blocked: GenerateResponse =
            serde_json::from_str(r#"{"candidates":[{"finishReason":"SAFETY"}]}"#).unwrap();
        assert_eq!(blocked.into_text(), None);
    }

    #[test]
    fn endpoint_uses_model_and_base_url() {
        let mut config = config_with_key(Some("k"));
        config.base_url = "http://localhost:9999/".into();
        config.model = "test-model".into();

        let refiner = GeminiRefiner::new(&config).unwrap();
        assert_eq!(
            refiner.endpoint(),
            "http://localhost:9999/v1beta/models/test-model:generateContent"
        );
    }

    #[test]
    fn requires_api_key() {
        assert!(matches!(
            GeminiRefiner::new(&config_with_key(None)),
            Err(RefineError::MissingApiKey)
        ));
        assert!(matches!(
            GeminiRefiner::new(&config_with_key(Some(""))),
            Err(RefineError::MissingApiKey)
        ));
    }

    fn refiner_for(server: &MockServer) -> GeminiRefiner {
        GeminiRefiner::new(&GeminiConfig {
            model: "m".into(),
            base_url: server.uri(),
            api_key: Some("test-key".into()),
            timeout_secs: 5,
        })
        .unwrap()
    }

    fn request() -> RefineRequest {
        RefineRequest {
            section_id: "faqs".into(),
            content: SectionContent {
                headline: "OLD".into(),
                ..Default::default()
            },
            feedback: "shorter".into(),
        }
    }

    fn reply_with_text(text: &str) -> serde_json::Value {
        json!({ "candidates": [{ "content": { "parts": [{ "text": text }] } }] })
    }

    #[tokio::test]
    async fn posts_prompt_with_key_header_and_parses_reply() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .and(header("x-goog-api-key", "test-key"))
            .and(body_partial_json(json!({
                "generationConfig": { "responseMimeType": "application/json" }
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(reply_with_text(r#"{"headline":"NEW","cta":"go"}"#)),
            )
            .expect(1)
            .mount(&server)
            .await;

        let content = refiner_for(&server).refine(&request()).await.unwrap();
        assert_eq!(content.headline, "NEW");
        assert_eq!(content.cta.as_deref(), Some("go"));
    }

    #[tokio::test]
    async fn prompt_carries_section_and_feedback() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(reply_with_text(r#"{"headline":"NEW"}"#)),
            )
            .mount(&server)
            .await;

        refiner_for(&server).refine(&request()).await.unwrap();

        let received = server.received_requests().await.unwrap();
        assert_eq!(received.len(), 1);
        let body: serde_json::Value = serde_json::from_slice(&received[0].body).unwrap();
        let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
        assert!(prompt.contains("Section Type: faqs"));
        assert!(prompt.contains(r#"Current Copy: {"headline":"OLD"}"#));
        assert!(prompt.contains("Feedback: shorter"));
    }

    #[tokio::test]
    async fn error_status_keeps_code_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(429).set_body_string(r#"{"error":"quota"}"#))
            .mount(&server)
            .await;

        let err = refiner_for(&server).refine(&request()).await.unwrap_err();
        match &err {
            RefineError::Status { status, body } => {
                assert_eq!(*status, 429);
                assert_eq!(body, r#"{"error":"quota"}"#);
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(err.to_string().contains("HTTP 429"));
    }

    #[tokio::test]
    async fn success_without_candidates_is_empty_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
            .mount(&server)
            .await;

        let err = refiner_for(&server).refine(&request()).await.unwrap_err();
        assert!(matches!(err, RefineError::EmptyResponse));
    }

    #[tokio::test]
    async fn reply_that_is_not_section_content_is_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(reply_with_text(r#"{"cta":"no headline"}"#)),
            )
            .mount(&server)
            .await;

        let err = refiner_for(&server).refine(&request()).await.unwrap_err();
        assert!(matches!(err, RefineError::InvalidContent(_)));
    }
}
