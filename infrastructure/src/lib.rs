//! Infrastructure layer for prompt-arena
//!
//! Vendor HTTP adapters, configuration loading, the JSONL comparison
//! transcript logger, and the proxy HTTP server.

pub mod config;
pub mod logging;
pub mod providers;
pub mod server;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig};
pub use logging::jsonl_logger::JsonlComparisonLogger;
pub use providers::AdapterRegistry;
pub use server::proxy::ProxyServer;
