//! Port definitions (interfaces to the outside world)

pub mod comparison_logger;
pub mod progress;
pub mod provider_gateway;
