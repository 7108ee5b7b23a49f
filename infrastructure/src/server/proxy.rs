//! Proxy HTTP server — Axum routes in front of the provider gateway
//!
//! The proxy exists so a browser front end can compare providers without
//! any vendor credential reaching the client. Keys stay on this process;
//! responses carry only the extracted text and a success flag.
//!
//! Routes:
//! - `GET  /api/ai/gemini` — calls Gemini with the configured sample prompt
//! - `POST /api/ai/gemini` — calls Gemini with the posted prompt
//! - `POST /api/compare`   — full fan-out, returns the comparison result
//! - `GET  /api/status`    — liveness and configured provider list

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use arena_application::{ProviderGateway, RunCompareInput, RunCompareUseCase};
use arena_domain::{Prompt, Provider};
use axum::Router;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tracing::info;

/// Shared state for all routes
#[derive(Clone)]
pub struct ProxyState {
    pub gateway: Arc<dyn ProviderGateway>,
    pub sample_prompt: String,
    pub start_time: Instant,
}

/// Reply shape of the single-provider passthrough routes.
#[derive(Debug, Serialize, Deserialize)]
pub struct PassthroughReply {
    pub success: bool,
    pub message: String,
    pub res: String,
}

#[derive(Debug, Deserialize)]
struct PromptBody {
    #[serde(default)]
    prompt: String,
}

#[derive(Debug, Deserialize)]
struct CompareBody {
    #[serde(default)]
    prompt: String,
    /// Provider identifiers; absent means the full default set.
    providers: Option<Vec<String>>,
}

/// The proxy server
pub struct ProxyServer {
    state: ProxyState,
    bind: SocketAddr,
}

impl ProxyServer {
    pub fn new(bind: SocketAddr, gateway: Arc<dyn ProviderGateway>, sample_prompt: String) -> Self {
        Self {
            state: ProxyState {
                gateway,
                sample_prompt,
                start_time: Instant::now(),
            },
            bind,
        }
    }

    /// Build the Axum router
    pub fn router(&self) -> Router {
        Router::new()
            .route(
                "/api/ai/gemini",
                get(gemini_get_handler).post(gemini_post_handler),
            )
            .route("/api/compare", post(compare_handler))
            .route("/api/status", get(status_handler))
            .layer(CorsLayer::permissive())
            .with_state(self.state.clone())
    }

    /// Start the server (blocks until shutdown)
    pub async fn run(self) -> anyhow::Result<()> {
        let router = self.router();
        let listener = tokio::net::TcpListener::bind(self.bind).await?;
        info!("Proxy listening on {}", self.bind);

        axum::serve(listener, router).await?;
        Ok(())
    }
}

// ── Handlers ──

async fn gemini_get_handler(State(state): State<ProxyState>) -> impl IntoResponse {
    let prompt = state.sample_prompt.clone();
    axum::Json(call_gemini(&state, &prompt).await)
}

async fn gemini_post_handler(
    State(state): State<ProxyState>,
    axum::Json(body): axum::Json<PromptBody>,
) -> impl IntoResponse {
    let Some(prompt) = Prompt::try_new(body.prompt) else {
        return axum::Json(PassthroughReply {
            success: false,
            message: "Prompt cannot be empty".to_string(),
            res: String::new(),
        });
    };
    axum::Json(call_gemini(&state, prompt.content()).await)
}

/// Failures return `success: false` with HTTP 200: the flag is the
/// protocol, and upstream trouble is a normal outcome for this surface.
async fn call_gemini(state: &ProxyState, prompt: &str) -> PassthroughReply {
    match state.gateway.send(&Provider::Gemini, prompt).await {
        Ok(text) => PassthroughReply {
            success: true,
            message: "Gemini response sent".to_string(),
            res: text,
        },
        Err(e) => PassthroughReply {
            success: false,
            message: e.to_string(),
            res: String::new(),
        },
    }
}

async fn compare_handler(
    State(state): State<ProxyState>,
    axum::Json(body): axum::Json<CompareBody>,
) -> impl IntoResponse {
    let Some(prompt) = Prompt::try_new(body.prompt) else {
        return axum::Json(serde_json::json!({
            "success": false,
            "message": "Prompt cannot be empty",
        }));
    };

    let providers = match body.providers {
        None => Provider::default_providers(),
        Some(names) => {
            let mut providers = Vec::with_capacity(names.len());
            for name in &names {
                match name.parse::<Provider>() {
                    Ok(p) => providers.push(p),
                    Err(e) => {
                        return axum::Json(serde_json::json!({
                            "success": false,
                            "message": e.to_string(),
                        }));
                    }
                }
            }
            providers
        }
    };

    let use_case = RunCompareUseCase::new(Arc::clone(&state.gateway));
    let input = RunCompareInput {
        prompt,
        providers,
    };

    match use_case.execute(input).await {
        Ok(result) => axum::Json(serde_json::json!({
            "success": true,
            "result": result,
        })),
        Err(e) => axum::Json(serde_json::json!({
            "success": false,
            "message": e.to_string(),
        })),
    }
}

async fn status_handler(State(state): State<ProxyState>) -> impl IntoResponse {
    let providers: Vec<&'static str> = state
        .gateway
        .configured_providers()
        .iter()
        .map(|p| p.as_str())
        .collect();
    let uptime = state.start_time.elapsed().as_secs();

    axum::Json(serde_json::json!({
        "status": "ok",
        "providers": providers,
        "uptime_secs": uptime,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_application::GatewayError;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use std::sync::Mutex;
    use tower::ServiceExt;

    /// Gateway that answers for Gemini, fails for OpenAI, and records
    /// every call it receives.
    struct FakeGateway {
        calls: Mutex<Vec<(Provider, String)>>,
    }

    impl FakeGateway {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                calls: Mutex::new(Vec::new()),
            })
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl ProviderGateway for FakeGateway {
        async fn send(&self, provider: &Provider, prompt: &str) -> Result<String, GatewayError> {
            self.calls
                .lock()
                .unwrap()
                .push((*provider, prompt.to_string()));
            match provider {
                Provider::Gemini => Ok(format!("echo: {prompt}")),
                Provider::OpenAi => Err(GatewayError::MissingApiKey(Provider::OpenAi)),
                Provider::Grok => Err(GatewayError::NotAvailable(Provider::Grok)),
                Provider::Blackbox => Ok("blackbox".to_string()),
            }
        }

        fn configured_providers(&self) -> Vec<Provider> {
            Provider::default_providers()
        }
    }

    fn router_with(gateway: Arc<FakeGateway>) -> Router {
        let server = ProxyServer::new(
            "127.0.0.1:0".parse().unwrap(),
            gateway,
            "How to make a cupcake".to_string(),
        );
        server.router()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn get_passthrough_uses_sample_prompt() {
        let gateway = FakeGateway::new();
        let router = router_with(Arc::clone(&gateway));

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/ai/gemini")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["res"], "echo: How to make a cupcake");

        let calls = gateway.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, Provider::Gemini);
    }

    #[tokio::test]
    async fn post_passthrough_uses_body_prompt() {
        let gateway = FakeGateway::new();
        let router = router_with(gateway);

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/ai/gemini")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"prompt":"Hello"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        let json = body_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["res"], "echo: Hello");
    }

    #[tokio::test]
    async fn post_empty_prompt_makes_no_upstream_call() {
        let gateway = FakeGateway::new();
        let router = router_with(Arc::clone(&gateway));

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/ai/gemini")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"prompt":"   "}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(gateway.call_count(), 0);
    }

    #[tokio::test]
    async fn compare_returns_one_reply_per_provider() {
        let gateway = FakeGateway::new();
        let router = router_with(gateway);

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/compare")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"prompt":"Hello"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        let json = body_json(response).await;
        assert_eq!(json["success"], true);
        let replies = json["result"]["replies"].as_array().unwrap();
        assert_eq!(replies.len(), 4);

        // Gemini succeeded; OpenAI's missing key is isolated to its entry.
        assert_eq!(replies[0]["provider"], "gemini");
        assert_eq!(replies[0]["success"], true);
        assert_eq!(replies[1]["provider"], "openai");
        assert_eq!(replies[1]["success"], false);
    }

    #[tokio::test]
    async fn compare_rejects_unknown_provider_name() {
        let gateway = FakeGateway::new();
        let router = router_with(Arc::clone(&gateway));

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/compare")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"prompt":"Hello","providers":["mistral"]}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(gateway.call_count(), 0);
    }

    #[tokio::test]
    async fn status_lists_providers() {
        let gateway = FakeGateway::new();
        let router = router_with(gateway);

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/api/status")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["providers"].as_array().unwrap().len(), 4);
    }
}
