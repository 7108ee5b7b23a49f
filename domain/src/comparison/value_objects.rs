//! Comparison value objects - immutable result types for one dispatch.
//!
//! - [`ProviderReply`] - One provider's answer (or error) for a prompt
//! - [`ComparisonResult`] - The full response map of a settled dispatch

use crate::core::provider::Provider;
use serde::{Deserialize, Serialize};

/// Reply from a single provider for one dispatched prompt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderReply {
    /// The provider that produced this reply
    pub provider: Provider,
    /// The reply text (empty on failure)
    pub content: String,
    /// Whether the provider answered successfully
    pub success: bool,
    /// Error message if failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProviderReply {
    /// Creates a successful reply.
    pub fn success(provider: Provider, content: impl Into<String>) -> Self {
        Self {
            provider,
            content: content.into(),
            success: true,
            error: None,
        }
    }

    /// Creates a failed reply carrying the error text shown in the
    /// provider's panel.
    pub fn failure(provider: Provider, error: impl Into<String>) -> Self {
        Self {
            provider,
            content: String::new(),
            success: false,
            error: Some(error.into()),
        }
    }

    /// Returns `true` if this reply was produced successfully.
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// The text to render in the panel: the content for a success, the
    /// error message for a failure.
    pub fn panel_text(&self) -> &str {
        if self.success {
            &self.content
        } else {
            self.error.as_deref().unwrap_or("Unknown error")
        }
    }
}

/// Complete result of one dispatch: the response map
///
/// Invariant: `replies` holds exactly one entry per entry of `providers`,
/// in the same order, regardless of how many providers failed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// The dispatched prompt
    pub prompt: String,
    /// Providers the prompt was dispatched to, in configured order
    pub providers: Vec<Provider>,
    /// One reply per provider, success or failure
    pub replies: Vec<ProviderReply>,
}

impl ComparisonResult {
    /// Creates a result from a settled dispatch.
    pub fn new(
        prompt: impl Into<String>,
        providers: Vec<Provider>,
        replies: Vec<ProviderReply>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            providers,
            replies,
        }
    }

    /// Look up the reply for a provider.
    pub fn reply_for(&self, provider: Provider) -> Option<&ProviderReply> {
        self.replies.iter().find(|r| r.provider == provider)
    }

    /// Number of providers that answered successfully.
    pub fn success_count(&self) -> usize {
        self.replies.iter().filter(|r| r.success).count()
    }

    /// Number of providers that failed.
    pub fn failure_count(&self) -> usize {
        self.replies.len() - self.success_count()
    }
}
