//! Provider value object representing an AI text-generation service

use crate::core::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Supported AI providers (Value Object)
///
/// This is a domain concept representing the external services a prompt
/// can be dispatched to. The set is closed: the comparator renders one
/// panel per variant, and an unknown name is a parse error rather than a
/// catch-all custom provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    Gemini,
    OpenAi,
    Grok,
    Blackbox,
}

impl Provider {
    /// Get the stable string identifier for this provider
    ///
    /// These identifiers are the keys of the response map and appear in
    /// config sections, JSON output, and the proxy API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Gemini => "gemini",
            Provider::OpenAi => "openai",
            Provider::Grok => "grok",
            Provider::Blackbox => "blackbox",
        }
    }

    /// Human-facing name shown on the provider's panel
    pub fn display_name(&self) -> &'static str {
        match self {
            Provider::Gemini => "Gemini",
            Provider::OpenAi => "ChatGPT",
            Provider::Grok => "Grok",
            Provider::Blackbox => "Blackbox",
        }
    }

    /// The full provider set, in display order
    pub fn default_providers() -> Vec<Provider> {
        vec![
            Provider::Gemini,
            Provider::OpenAi,
            Provider::Grok,
            Provider::Blackbox,
        ]
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Provider {
    type Err = DomainError;

    /// Parse an identifier or display name, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "gemini" => Ok(Provider::Gemini),
            "openai" | "chatgpt" => Ok(Provider::OpenAi),
            "grok" => Ok(Provider::Grok),
            "blackbox" => Ok(Provider::Blackbox),
            other => Err(DomainError::InvalidProvider(other.to_string())),
        }
    }
}

impl Serialize for Provider {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Provider {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
