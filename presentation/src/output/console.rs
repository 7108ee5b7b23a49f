//! Console output formatter for comparison results

use arena_domain::{ComparisonResult, Provider, ProviderReply};
use colored::{Color, Colorize};

/// Formats comparison results for console display
///
/// Each provider gets its own panel section, in configured order, with the
/// provider's accent color on the header. Failed providers render their
/// error text in red where the reply would be.
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Accent color for a provider's panel header
    fn panel_color(provider: Provider) -> Color {
        match provider {
            Provider::Gemini => Color::Blue,
            Provider::OpenAi => Color::Green,
            Provider::Grok => Color::Magenta,
            Provider::Blackbox => Color::Yellow,
        }
    }

    /// Format the complete comparison result
    pub fn format(result: &ComparisonResult) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Prompt Arena"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n\n",
            "Prompt:".cyan().bold(),
            result.prompt
        ));

        for reply in &result.replies {
            output.push_str(&Self::panel(reply));
        }

        output.push_str(&format!(
            "\n{} {} succeeded, {} failed\n",
            "Summary:".cyan().bold(),
            result.success_count(),
            result.failure_count()
        ));

        output
    }

    /// Format as JSON
    pub fn format_json(result: &ComparisonResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    fn panel(reply: &ProviderReply) -> String {
        let title = format!("── {} ──", reply.provider.display_name());
        if reply.is_success() {
            format!(
                "\n{}\n{}\n",
                title.color(Self::panel_color(reply.provider)).bold(),
                reply.content
            )
        } else {
            format!(
                "\n{}\n{}\n",
                title.red().bold(),
                reply.panel_text().red()
            )
        }
    }

    fn header(title: &str) -> String {
        format!(
            "{}\n{}\n{}\n",
            "=".repeat(60).cyan(),
            format!("  {}", title).cyan().bold(),
            "=".repeat(60).cyan()
        )
    }
}
