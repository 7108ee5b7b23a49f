//! Gemini adapter (Generative Language API `generateContent`)

use super::ProviderAdapter;
use crate::config::FileGeminiConfig;
use crate::config::file_config::resolve_api_key;
use arena_application::ports::provider_gateway::GatewayError;
use arena_domain::Provider;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<RequestContent>,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}

impl GenerateContentRequest {
    fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: prompt.to_string(),
                }],
            }],
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentReply {
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
    parts: Vec<ReplyPart>,
}

#[derive(Debug, Deserialize)]
struct ReplyPart {
    text: Option<String>,
}

/// Extraction path: `candidates[0].content.parts[0].text`.
fn extract_text(reply: GenerateContentReply) -> Option<String> {
    reply
        .candidates
        .into_iter()
        .next()?
        .content?
        .parts
        .into_iter()
        .find_map(|p| p.text)
        .filter(|t| !t.is_empty())
}

/// Adapter for Google's Gemini models
pub struct GeminiAdapter {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
}

impl GeminiAdapter {
    pub fn from_config(config: &FileGeminiConfig, client: reqwest::Client) -> Self {
        Self {
            client,
            api_key: resolve_api_key(config.api_key.as_deref(), &config.api_key_env),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        }
    }
}

#[async_trait]
impl ProviderAdapter for GeminiAdapter {
    fn provider(&self) -> Provider {
        Provider::Gemini
    }

    async fn send(&self, prompt: &str) -> Result<String, GatewayError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(GatewayError::MissingApiKey(Provider::Gemini))?;

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::UpstreamStatus {
                provider: Provider::Gemini,
                status: format!(
                    "{} {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("Unknown")
                ),
            });
        }

        let reply: GenerateContentReply = response
            .json()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        extract_text(reply).ok_or(GatewayError::EmptyReply(Provider::Gemini))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_first_candidate_text() {
        let reply: GenerateContentReply = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"Hi there"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(extract_text(reply).as_deref(), Some("Hi there"));
    }

    #[test]
    fn missing_candidates_is_no_response() {
        let reply: GenerateContentReply = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert!(extract_text(reply).is_none());

        let reply: GenerateContentReply = serde_json::from_str(r#"{}"#).unwrap();
        assert!(extract_text(reply).is_none());
    }

    #[test]
    fn candidate_without_parts_is_no_response() {
        let reply: GenerateContentReply =
            serde_json::from_str(r#"{"candidates":[{"content":{"parts":[]}}]}"#).unwrap();
        assert!(extract_text(reply).is_none());
    }

    #[test]
    fn request_body_shape() {
        let body = serde_json::to_value(GenerateContentRequest::from_prompt("Hello")).unwrap();
        assert_eq!(body["contents"][0]["parts"][0]["text"], "Hello");
    }

    #[tokio::test]
    async fn missing_key_fails_fast_without_network() {
        let config = FileGeminiConfig {
            api_key: None,
            api_key_env: "ARENA_TEST_GEMINI_UNSET".to_string(),
            // Unroutable base: reaching the network would hang or error
            // differently, so the error kind proves the fail-fast.
            base_url: "http://127.0.0.1:1".to_string(),
            ..FileGeminiConfig::default()
        };
        let adapter = GeminiAdapter::from_config(&config, reqwest::Client::new());

        let err = adapter.send("Hello").await.unwrap_err();
        assert!(matches!(err, GatewayError::MissingApiKey(Provider::Gemini)));
        assert!(err.to_string().contains("API key is missing"));
    }
}
