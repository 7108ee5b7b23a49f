//! Domain layer for prompt-arena
//!
//! This crate contains the core value objects and result types for the
//! multi-provider prompt comparator. It has no dependencies on
//! infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Provider**: one external AI text-generation service (Gemini,
//!   ChatGPT/OpenAI, Grok, Blackbox)
//! - **Prompt**: a validated, non-empty user prompt
//! - **ComparisonResult**: one reply per configured provider, success or
//!   failure, produced by a single dispatch

pub mod comparison;
pub mod core;

// Re-export commonly used types
pub use comparison::value_objects::{ComparisonResult, ProviderReply};
pub use core::{error::DomainError, prompt::Prompt, provider::Provider};
