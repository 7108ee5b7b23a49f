//! OpenAI adapter (chat completions)
//!
//! The wire types are shared with the Blackbox adapter, which speaks the
//! same chat-completions shape against its own endpoint.

use super::ProviderAdapter;
use crate::config::FileOpenAiConfig;
use crate::config::file_config::resolve_api_key;
use arena_application::ports::provider_gateway::GatewayError;
use arena_domain::Provider;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Serialize)]
pub(crate) struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

impl ChatCompletionRequest {
    pub(crate) fn from_prompt(model: &str, prompt: &str) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![ChatMessage {
                role: "user",
                content: prompt.to_string(),
            }],
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatCompletionReply {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Choice {
    pub message: Option<ReplyMessage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReplyMessage {
    pub content: Option<String>,
}

/// Extraction path: `choices[0].message.content`.
pub(crate) fn extract_text(reply: ChatCompletionReply) -> Option<String> {
    reply
        .choices
        .into_iter()
        .next()?
        .message?
        .content
        .filter(|t| !t.is_empty())
}

/// Send one chat-completions request and extract the reply text.
///
/// Shared by the OpenAI and Blackbox adapters; `provider` determines which
/// panel the errors name.
pub(crate) async fn send_chat_completion(
    client: &reqwest::Client,
    provider: Provider,
    url: &str,
    api_key: &str,
    body: &ChatCompletionRequest,
) -> Result<String, GatewayError> {
    debug!("POST {}", url);

    let response = client
        .post(url)
        .bearer_auth(api_key)
        .json(body)
        .send()
        .await
        .map_err(|e| GatewayError::Transport(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(GatewayError::UpstreamStatus {
            provider,
            status: format!(
                "{} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            ),
        });
    }

    let reply: ChatCompletionReply = response
        .json()
        .await
        .map_err(|e| GatewayError::Transport(e.to_string()))?;

    extract_text(reply).ok_or(GatewayError::EmptyReply(provider))
}

/// Adapter for OpenAI's chat models (the "ChatGPT" panel)
pub struct OpenAiAdapter {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
}

impl OpenAiAdapter {
    pub fn from_config(config: &FileOpenAiConfig, client: reqwest::Client) -> Self {
        Self {
            client,
            api_key: resolve_api_key(config.api_key.as_deref(), &config.api_key_env),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        }
    }
}

#[async_trait]
impl ProviderAdapter for OpenAiAdapter {
    fn provider(&self) -> Provider {
        Provider::OpenAi
    }

    async fn send(&self, prompt: &str) -> Result<String, GatewayError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(GatewayError::MissingApiKey(Provider::OpenAi))?;

        let url = format!("{}/v1/chat/completions", self.base_url);
        let body = ChatCompletionRequest::from_prompt(&self.model, prompt);
        send_chat_completion(&self.client, Provider::OpenAi, &url, api_key, &body).await
    }
}
