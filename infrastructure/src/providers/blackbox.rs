//! Blackbox adapter
//!
//! Blackbox exposes an OpenAI-compatible chat-completions endpoint, so the
//! wire types live in the `openai` module; only the base URL, model id,
//! and credential differ.

use super::ProviderAdapter;
use super::openai::{ChatCompletionRequest, send_chat_completion};
use crate::config::FileBlackboxConfig;
use crate::config::file_config::resolve_api_key;
use arena_application::ports::provider_gateway::GatewayError;
use arena_domain::Provider;
use async_trait::async_trait;

/// Adapter for the Blackbox AI API
pub struct BlackboxAdapter {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
}

impl BlackboxAdapter {
    pub fn from_config(config: &FileBlackboxConfig, client: reqwest::Client) -> Self {
        Self {
            client,
            api_key: resolve_api_key(config.api_key.as_deref(), &config.api_key_env),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        }
    }
}

#[async_trait]
impl ProviderAdapter for BlackboxAdapter {
    fn provider(&self) -> Provider {
        Provider::Blackbox
    }

    async fn send(&self, prompt: &str) -> Result<String, GatewayError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(GatewayError::MissingApiKey(Provider::Blackbox))?;

        let url = format!("{}/chat/completions", self.base_url);
        let body = ChatCompletionRequest::from_prompt(&self.model, prompt);
        send_chat_completion(&self.client, Provider::Blackbox, &url, api_key, &body).await
    }
}
