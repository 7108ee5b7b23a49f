//! Progress notification port
//!
//! Defines the interface for reporting progress while a dispatch is in
//! flight.

use arena_domain::Provider;

/// Callback for progress updates during a dispatch
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (console, web UI, etc.)
pub trait DispatchNotifier: Send + Sync {
    /// Called once, before any provider call is issued
    fn on_dispatch_start(&self, total: usize);

    /// Called as each provider call settles, success or failure
    fn on_provider_complete(&self, provider: &Provider, success: bool);

    /// Called once the whole batch has settled
    fn on_dispatch_complete(&self);
}

/// No-op notifier for when progress reporting is not needed
pub struct NoProgress;

impl DispatchNotifier for NoProgress {
    fn on_dispatch_start(&self, _total: usize) {}
    fn on_provider_complete(&self, _provider: &Provider, _success: bool) {}
    fn on_dispatch_complete(&self) {}
}
