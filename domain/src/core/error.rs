//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Prompt cannot be empty")]
    EmptyPrompt,

    #[error("Unknown provider: {0}")]
    InvalidProvider(String),

    #[error("No providers configured")]
    NoProviders,
}
