//! Provider gateway port
//!
//! Defines the interface for sending one prompt to one AI provider.

use arena_domain::Provider;
use async_trait::async_trait;
use thiserror::Error;

/// Errors a single provider call can fail with
///
/// Each variant maps to one per-provider failure condition; the dispatcher
/// converts any of them into that provider's panel content, never into an
/// abort of the batch.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Credential absent: detected before any network call is attempted.
    #[error("{} API key is missing.", .0.display_name())]
    MissingApiKey(Provider),

    /// Upstream responded with a non-success HTTP status.
    #[error("{} request failed: {}", provider.display_name(), status)]
    UpstreamStatus { provider: Provider, status: String },

    /// Upstream succeeded but returned no extractable text.
    #[error("No response from {}", .0.display_name())]
    EmptyReply(Provider),

    /// The provider has no public API adapter.
    #[error("{} is not available yet", .0.display_name())]
    NotAvailable(Provider),

    /// No adapter is registered for this provider identifier.
    #[error("No adapter configured for provider: {0}")]
    NotConfigured(Provider),

    /// Network or client-side failure.
    #[error("Request error: {0}")]
    Transport(String),
}

/// Gateway for provider communication
///
/// This port defines how the application layer reaches AI providers.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait ProviderGateway: Send + Sync {
    /// Send a prompt to one provider and return its reply text
    async fn send(&self, provider: &Provider, prompt: &str) -> Result<String, GatewayError>;

    /// Providers this gateway has adapters for
    fn configured_providers(&self) -> Vec<Provider>;
}
