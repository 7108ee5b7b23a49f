//! Grok adapter
//!
//! Grok has no public API adapter. The adapter exists so the registry is
//! uniform over all four panels; every call fails deterministically.

use super::ProviderAdapter;
use arena_application::ports::provider_gateway::GatewayError;
use arena_domain::Provider;
use async_trait::async_trait;

/// Placeholder adapter for Grok
pub struct GrokAdapter;

impl GrokAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GrokAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProviderAdapter for GrokAdapter {
    fn provider(&self) -> Provider {
        Provider::Grok
    }

    async fn send(&self, _prompt: &str) -> Result<String, GatewayError> {
        Err(GatewayError::NotAvailable(Provider::Grok))
    }
}
