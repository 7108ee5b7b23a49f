//! Run Compare use case
//!
//! The prompt dispatcher: fans one prompt out to every configured provider
//! concurrently and commits the response map only once every call has
//! settled.

use crate::ports::comparison_logger::{ComparisonEvent, ComparisonLogger, NoopComparisonLogger};
use crate::ports::progress::{DispatchNotifier, NoProgress};
use crate::ports::provider_gateway::{GatewayError, ProviderGateway};
use arena_domain::{ComparisonResult, Prompt, Provider, ProviderReply};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinSet;
use tracing::{info, warn};

/// Errors that can occur during a dispatch
///
/// Per-provider failures are not errors at this level: they become failure
/// replies in the result. Only a dispatch that cannot start at all fails.
#[derive(Error, Debug)]
pub enum RunCompareError {
    #[error("No providers configured")]
    NoProviders,
}

/// Input for the RunCompare use case
#[derive(Debug, Clone)]
pub struct RunCompareInput {
    /// The validated prompt to dispatch
    pub prompt: Prompt,
    /// Providers to dispatch to, in panel order
    pub providers: Vec<Provider>,
}

impl RunCompareInput {
    /// Dispatch to the full default provider set
    pub fn new(prompt: impl Into<Prompt>) -> Self {
        Self {
            prompt: prompt.into(),
            providers: Provider::default_providers(),
        }
    }

    /// Restrict the dispatch to a chosen provider list
    pub fn with_providers(mut self, providers: Vec<Provider>) -> Self {
        self.providers = providers;
        self
    }
}

/// Use case for dispatching one prompt to all providers
///
/// `G` may be unsized (`dyn ProviderGateway`) so callers holding a trait
/// object can use it directly.
pub struct RunCompareUseCase<G: ProviderGateway + ?Sized + 'static> {
    gateway: Arc<G>,
    logger: Arc<dyn ComparisonLogger>,
}

impl<G: ProviderGateway + ?Sized + 'static> RunCompareUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            logger: Arc::new(NoopComparisonLogger),
        }
    }

    /// Attach a transcript logger
    pub fn with_logger(mut self, logger: Arc<dyn ComparisonLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: RunCompareInput) -> Result<ComparisonResult, RunCompareError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    ///
    /// All provider calls are spawned before any join. The join waits for
    /// every call to settle (all-settled, not first-completion): one slow
    /// or failing provider never blocks or suppresses another's reply.
    /// The returned result carries exactly one reply per provider, in the
    /// input's order, regardless of completion order.
    pub async fn execute_with_progress(
        &self,
        input: RunCompareInput,
        progress: &dyn DispatchNotifier,
    ) -> Result<ComparisonResult, RunCompareError> {
        // Duplicate selections would leave the response map ambiguous;
        // keep the first occurrence of each provider.
        let mut providers = input.providers;
        let mut seen = Vec::new();
        providers.retain(|p| {
            if seen.contains(p) {
                false
            } else {
                seen.push(*p);
                true
            }
        });

        if providers.is_empty() {
            return Err(RunCompareError::NoProviders);
        }

        info!("Dispatching prompt to {} providers", providers.len());
        progress.on_dispatch_start(providers.len());
        self.logger.log(ComparisonEvent::new(
            "prompt_dispatched",
            serde_json::json!({
                "prompt": input.prompt.content(),
                "providers": providers,
            }),
        ));

        let mut join_set = JoinSet::new();

        for provider in &providers {
            let gateway = Arc::clone(&self.gateway);
            let provider = *provider;
            let prompt = input.prompt.content().to_string();

            join_set.spawn(async move {
                let result = gateway.send(&provider, &prompt).await;
                (provider, result)
            });
        }

        let mut settled: HashMap<Provider, Result<String, GatewayError>> = HashMap::new();

        while let Some(result) = join_set.join_next().await {
            match result {
                Ok((provider, outcome)) => {
                    match &outcome {
                        Ok(_) => info!("Provider {} replied successfully", provider),
                        Err(e) => warn!("Provider {} failed: {}", provider, e),
                    }
                    progress.on_provider_complete(&provider, outcome.is_ok());
                    settled.insert(provider, outcome);
                }
                Err(e) => {
                    // The task itself died; the provider it carried is
                    // recovered below when the map is filled in order.
                    warn!("Provider task join error: {}", e);
                }
            }
        }

        let replies: Vec<ProviderReply> = providers
            .iter()
            .map(|provider| match settled.remove(provider) {
                Some(Ok(content)) => ProviderReply::success(*provider, content),
                Some(Err(e)) => ProviderReply::failure(*provider, e.to_string()),
                None => {
                    progress.on_provider_complete(provider, false);
                    ProviderReply::failure(*provider, "Provider task failed unexpectedly")
                }
            })
            .collect();

        for reply in &replies {
            self.logger.log(ComparisonEvent::new(
                "provider_reply",
                serde_json::json!({
                    "provider": reply.provider,
                    "success": reply.success,
                    "content": reply.content,
                    "error": reply.error,
                }),
            ));
        }

        progress.on_dispatch_complete();

        Ok(ComparisonResult::new(
            input.prompt.into_content(),
            providers,
            replies,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::time::Duration;

    /// Gateway whose behavior is scripted per provider.
    struct ScriptedGateway {
        calls: Mutex<Vec<Provider>>,
    }

    impl ScriptedGateway {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                calls: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> Vec<Provider> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ProviderGateway for ScriptedGateway {
        async fn send(&self, provider: &Provider, prompt: &str) -> Result<String, GatewayError> {
            self.calls.lock().unwrap().push(*provider);
            match provider {
                // Slowest provider answers last; its reply must still land
                // first in the result (configured order, not completion order).
                Provider::Gemini => {
                    tokio::time::sleep(Duration::from_millis(50)).await;
                    Ok(format!("gemini says: {prompt}"))
                }
                Provider::OpenAi => Err(GatewayError::MissingApiKey(Provider::OpenAi)),
                Provider::Grok => Err(GatewayError::NotAvailable(Provider::Grok)),
                Provider::Blackbox => Ok("blackbox reply".to_string()),
            }
        }

        fn configured_providers(&self) -> Vec<Provider> {
            Provider::default_providers()
        }
    }

    /// Gateway that panics for one provider to exercise join-error recovery.
    struct PanickingGateway;

    #[async_trait]
    impl ProviderGateway for PanickingGateway {
        async fn send(&self, provider: &Provider, _prompt: &str) -> Result<String, GatewayError> {
            match provider {
                Provider::Grok => panic!("adapter bug"),
                _ => Ok("ok".to_string()),
            }
        }

        fn configured_providers(&self) -> Vec<Provider> {
            Provider::default_providers()
        }
    }

    #[tokio::test]
    async fn every_provider_gets_exactly_one_reply() {
        let gateway = ScriptedGateway::new();
        let use_case = RunCompareUseCase::new(Arc::clone(&gateway));

        let result = use_case
            .execute(RunCompareInput::new("Hello"))
            .await
            .unwrap();

        assert_eq!(result.replies.len(), 4);
        assert_eq!(result.providers, Provider::default_providers());
        for provider in Provider::default_providers() {
            assert!(result.reply_for(provider).is_some());
        }
    }

    #[tokio::test]
    async fn failures_are_isolated_from_successes() {
        let gateway = ScriptedGateway::new();
        let use_case = RunCompareUseCase::new(Arc::clone(&gateway));

        let result = use_case
            .execute(RunCompareInput::new("Hello"))
            .await
            .unwrap();

        let gemini = result.reply_for(Provider::Gemini).unwrap();
        assert!(gemini.is_success());
        assert_eq!(gemini.content, "gemini says: Hello");

        let openai = result.reply_for(Provider::OpenAi).unwrap();
        assert!(!openai.is_success());
        assert!(openai.panel_text().contains("API key is missing"));

        let grok = result.reply_for(Provider::Grok).unwrap();
        assert!(grok.panel_text().contains("not available"));

        assert!(result.reply_for(Provider::Blackbox).unwrap().is_success());
    }

    #[tokio::test]
    async fn replies_follow_configured_order_not_completion_order() {
        let gateway = ScriptedGateway::new();
        let use_case = RunCompareUseCase::new(Arc::clone(&gateway));

        let result = use_case
            .execute(RunCompareInput::new("Hello"))
            .await
            .unwrap();

        // Gemini is the slowest call but comes first in the configured set.
        let order: Vec<Provider> = result.replies.iter().map(|r| r.provider).collect();
        assert_eq!(order, Provider::default_providers());
    }

    #[tokio::test]
    async fn empty_provider_list_is_rejected_without_calls() {
        let gateway = ScriptedGateway::new();
        let use_case = RunCompareUseCase::new(Arc::clone(&gateway));

        let input = RunCompareInput::new("Hello").with_providers(vec![]);
        let err = use_case.execute(input).await.unwrap_err();

        assert!(matches!(err, RunCompareError::NoProviders));
        assert!(gateway.calls().is_empty());
    }

    #[tokio::test]
    async fn duplicate_providers_are_dispatched_once() {
        let gateway = ScriptedGateway::new();
        let use_case = RunCompareUseCase::new(Arc::clone(&gateway));

        let input = RunCompareInput::new("Hello")
            .with_providers(vec![Provider::Blackbox, Provider::Blackbox]);
        let result = use_case.execute(input).await.unwrap();

        assert_eq!(result.replies.len(), 1);
        assert_eq!(gateway.calls().len(), 1);
    }

    #[tokio::test]
    async fn panicked_provider_task_still_yields_a_failure_entry() {
        let use_case = RunCompareUseCase::new(Arc::new(PanickingGateway));

        let result = use_case
            .execute(RunCompareInput::new("Hello"))
            .await
            .unwrap();

        assert_eq!(result.replies.len(), 4);
        let grok = result.reply_for(Provider::Grok).unwrap();
        assert!(!grok.is_success());
        // The other three are unaffected by the panic.
        assert_eq!(result.success_count(), 3);
    }

    #[tokio::test]
    async fn progress_callbacks_fire_per_provider() {
        struct CountingProgress {
            started: Mutex<Option<usize>>,
            completions: Mutex<Vec<(Provider, bool)>>,
            done: Mutex<bool>,
        }

        impl DispatchNotifier for CountingProgress {
            fn on_dispatch_start(&self, total: usize) {
                *self.started.lock().unwrap() = Some(total);
            }
            fn on_provider_complete(&self, provider: &Provider, success: bool) {
                self.completions.lock().unwrap().push((*provider, success));
            }
            fn on_dispatch_complete(&self) {
                *self.done.lock().unwrap() = true;
            }
        }

        let progress = CountingProgress {
            started: Mutex::new(None),
            completions: Mutex::new(Vec::new()),
            done: Mutex::new(false),
        };

        let gateway = ScriptedGateway::new();
        let use_case = RunCompareUseCase::new(gateway);
        use_case
            .execute_with_progress(RunCompareInput::new("Hello"), &progress)
            .await
            .unwrap();

        assert_eq!(*progress.started.lock().unwrap(), Some(4));
        assert_eq!(progress.completions.lock().unwrap().len(), 4);
        assert!(*progress.done.lock().unwrap());
    }
}
