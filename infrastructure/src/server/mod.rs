//! Inbound HTTP surface

pub mod proxy;

pub use proxy::ProxyServer;
