//! Configuration file format (TOML)
//!
//! Credentials are resolved per vendor: an inline `api_key` wins, otherwise
//! the environment variable named by `api_key_env` is read. A missing key
//! is not a load error — it surfaces as that provider's panel error at
//! dispatch time.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Gemini provider configuration (`[providers.gemini]`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    /// Environment variable name for the API key.
    pub api_key_env: String,
    /// Direct API key (not recommended — use the env var instead).
    pub api_key: Option<String>,
    /// Base URL for the Generative Language API.
    pub base_url: String,
    /// Model id used for `generateContent`.
    pub model: String,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        Self {
            api_key_env: "GEMINI_API_KEY".to_string(),
            api_key: None,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model: "gemini-2.0-flash".to_string(),
        }
    }
}

/// OpenAI provider configuration (`[providers.openai]`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOpenAiConfig {
    /// Environment variable name for the API key.
    pub api_key_env: String,
    /// Direct API key (not recommended — use the env var instead).
    pub api_key: Option<String>,
    /// Base URL for the OpenAI API.
    pub base_url: String,
    /// Model id used for chat completions.
    pub model: String,
}

impl Default for FileOpenAiConfig {
    fn default() -> Self {
        Self {
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.openai.com".to_string(),
            model: "gpt-4o-mini".to_string(),
        }
    }
}

/// Blackbox provider configuration (`[providers.blackbox]`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBlackboxConfig {
    /// Environment variable name for the API key.
    pub api_key_env: String,
    /// Direct API key (not recommended — use the env var instead).
    pub api_key: Option<String>,
    /// Base URL for the Blackbox API.
    pub base_url: String,
    /// Model id used for chat completions.
    pub model: String,
}

impl Default for FileBlackboxConfig {
    fn default() -> Self {
        Self {
            api_key_env: "BLACKBOX_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.blackbox.ai".to_string(),
            model: "blackboxai/openai/gpt-4".to_string(),
        }
    }
}

/// Per-vendor settings (`[providers]` section).
///
/// Grok has no section: it has no public API adapter and therefore no
/// endpoint or credential to configure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvidersConfig {
    pub gemini: FileGeminiConfig,
    pub openai: FileOpenAiConfig,
    pub blackbox: FileBlackboxConfig,
}

/// Proxy server settings (`[server]` section).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Bind address for `--serve`.
    pub bind: String,
    /// Prompt used by the GET passthrough route, which takes no body.
    pub sample_prompt: String,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:8316".to_string(),
            sample_prompt: "How to make a cupcake".to_string(),
        }
    }
}

/// Output settings (`[output]` section).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Directory for JSONL comparison transcripts. `None` disables them.
    pub log_dir: Option<PathBuf>,
}

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub providers: FileProvidersConfig,
    pub server: FileServerConfig,
    pub output: FileOutputConfig,
}

/// Resolve a vendor credential: inline key first, then the environment.
/// Blank values count as absent.
pub fn resolve_api_key(api_key: Option<&str>, api_key_env: &str) -> Option<String> {
    api_key
        .map(str::to_string)
        .or_else(|| std::env::var(api_key_env).ok())
        .filter(|k| !k.trim().is_empty())
}
