//! Vendor provider adapters
//!
//! One module per vendor. Each adapter knows its endpoint, auth header,
//! request body shape, and response-field extraction path, and exposes the
//! single `send(prompt) -> text` capability the dispatcher needs. Adding a
//! provider means adding an adapter module and registering it here; the
//! dispatcher is untouched.

pub mod blackbox;
pub mod gemini;
pub mod grok;
pub mod openai;

use crate::config::FileConfig;
use arena_application::ports::provider_gateway::{GatewayError, ProviderGateway};
use arena_domain::Provider;
use async_trait::async_trait;
use std::sync::Arc;

pub use blackbox::BlackboxAdapter;
pub use gemini::GeminiAdapter;
pub use grok::GrokAdapter;
pub use openai::OpenAiAdapter;

/// One vendor's API adapter
#[async_trait]
pub trait ProviderAdapter: Send + Sync {
    /// The provider this adapter serves
    fn provider(&self) -> Provider;

    /// Send a prompt and return the extracted reply text
    async fn send(&self, prompt: &str) -> Result<String, GatewayError>;
}

/// Gateway over a set of registered adapters
///
/// Resolves a dispatch target by provider identity. Unlike a model-routing
/// gateway there is no inference or fallback: a provider either has its
/// adapter registered or the call fails with `NotConfigured`.
pub struct AdapterRegistry {
    adapters: Vec<Arc<dyn ProviderAdapter>>,
}

impl AdapterRegistry {
    pub fn new(adapters: Vec<Arc<dyn ProviderAdapter>>) -> Self {
        Self { adapters }
    }

    /// Build the full default registry from configuration.
    ///
    /// All adapters share one HTTP client. Adapters for providers with
    /// missing credentials are still registered: the credential check
    /// happens per call, so the failure lands in that provider's panel.
    pub fn from_config(config: &FileConfig) -> Self {
        let client = reqwest::Client::new();
        Self::new(vec![
            Arc::new(GeminiAdapter::from_config(
                &config.providers.gemini,
                client.clone(),
            )),
            Arc::new(OpenAiAdapter::from_config(
                &config.providers.openai,
                client.clone(),
            )),
            Arc::new(GrokAdapter::new()),
            Arc::new(BlackboxAdapter::from_config(
                &config.providers.blackbox,
                client,
            )),
        ])
    }

    fn resolve(&self, provider: &Provider) -> Option<&dyn ProviderAdapter> {
        self.adapters
            .iter()
            .find(|a| a.provider() == *provider)
            .map(|a| a.as_ref())
    }
}

#[async_trait]
impl ProviderGateway for AdapterRegistry {
    async fn send(&self, provider: &Provider, prompt: &str) -> Result<String, GatewayError> {
        match self.resolve(provider) {
            Some(adapter) => adapter.send(prompt).await,
            None => Err(GatewayError::NotConfigured(*provider)),
        }
    }

    fn configured_providers(&self) -> Vec<Provider> {
        self.adapters.iter().map(|a| a.provider()).collect()
    }
}
