//! Application layer for prompt-arena
//!
//! This crate contains the dispatch use case and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    comparison_logger::{ComparisonEvent, ComparisonLogger, NoopComparisonLogger},
    progress::{DispatchNotifier, NoProgress},
    provider_gateway::{GatewayError, ProviderGateway},
};
pub use use_cases::run_compare::{RunCompareError, RunCompareInput, RunCompareUseCase};
