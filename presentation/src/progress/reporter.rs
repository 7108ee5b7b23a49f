//! Progress reporting for an in-flight dispatch

use arena_application::DispatchNotifier;
use arena_domain::Provider;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;
use std::sync::Mutex;

/// Reports dispatch progress with a progress bar
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("=>-")
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl DispatchNotifier for ProgressReporter {
    fn on_dispatch_start(&self, total: usize) {
        let pb = ProgressBar::new(total as u64);
        pb.set_style(Self::bar_style());
        pb.set_prefix("Dispatching");
        pb.set_message("Waiting for providers...");

        *self.bar.lock().unwrap() = Some(pb);
    }

    fn on_provider_complete(&self, provider: &Provider, success: bool) {
        if let Some(pb) = self.bar.lock().unwrap().as_ref() {
            let status = if success {
                format!("{} {}", "v".green(), provider.display_name())
            } else {
                format!("{} {}", "x".red(), provider.display_name())
            };
            pb.set_message(status);
            pb.inc(1);
        }
    }

    fn on_dispatch_complete(&self) {
        if let Some(pb) = self.bar.lock().unwrap().take() {
            pb.finish_with_message(format!("{}", "All providers settled".green()));
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl DispatchNotifier for SimpleProgress {
    fn on_dispatch_start(&self, total: usize) {
        println!("Dispatching to {} providers...", total);
    }

    fn on_provider_complete(&self, provider: &Provider, success: bool) {
        if success {
            println!("  [ok]   {}", provider.display_name());
        } else {
            println!("  [fail] {}", provider.display_name());
        }
    }

    fn on_dispatch_complete(&self) {
        println!("Done.");
    }
}

/// Notifier for the current stdout: the bar on a terminal, plain text
/// when output is piped or redirected.
pub fn stdout_reporter() -> Box<dyn DispatchNotifier> {
    if std::io::stdout().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    }
}
