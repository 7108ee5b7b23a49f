//! REPL (Read-Eval-Print Loop) for interactive comparison
//!
//! The loop dispatches one batch at a time: while a batch is in flight the
//! readline prompt is not shown again, so a new submission cannot be
//! accepted until every panel has settled.

use crate::ConsoleFormatter;
use crate::cli::commands::OutputFormat;
use crate::progress::reporter::stdout_reporter;
use arena_application::{ProviderGateway, RunCompareInput, RunCompareUseCase};
use arena_domain::{Prompt, Provider};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::sync::Arc;

/// Interactive comparison REPL
pub struct ChatRepl<G: ProviderGateway + 'static> {
    use_case: RunCompareUseCase<G>,
    providers: Vec<Provider>,
    show_progress: bool,
    output: OutputFormat,
}

impl<G: ProviderGateway + 'static> ChatRepl<G> {
    /// Create a new ChatRepl
    pub fn new(gateway: Arc<G>, providers: Vec<Provider>) -> Self {
        Self {
            use_case: RunCompareUseCase::new(gateway),
            providers,
            show_progress: true,
            output: OutputFormat::Full,
        }
    }

    /// Set whether to show progress
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Set the output format
    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        // Try to load history
        let history_path = dirs::data_dir().map(|p| p.join("prompt-arena").join("history.txt"));

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            let readline = rl.readline(">>> ");

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    // Handle commands
                    if line.starts_with('/') {
                        if self.handle_command(line) {
                            break;
                        }
                        continue;
                    }

                    // Empty and whitespace-only input never dispatches
                    let Some(prompt) = Prompt::try_new(line) else {
                        continue;
                    };

                    let _ = rl.add_history_entry(prompt.content());

                    self.process_prompt(prompt).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        // Save history
        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│          Prompt Arena - Chat Mode           │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!(
            "Providers: {}",
            self.providers
                .iter()
                .map(|p| p.display_name())
                .collect::<Vec<_>>()
                .join(", ")
        );
        println!();
        println!("Commands:");
        println!("  /help      - Show this help");
        println!("  /providers - Show current providers");
        println!("  /quit      - Exit chat");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    fn handle_command(&self, cmd: &str) -> bool {
        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                true
            }
            "/help" | "/h" | "/?" => {
                println!();
                println!("Commands:");
                println!("  /help, /h, /?    - Show this help");
                println!("  /providers       - Show current providers");
                println!("  /quit, /exit, /q - Exit chat");
                println!();
                false
            }
            "/providers" => {
                println!();
                println!("Current providers:");
                for provider in &self.providers {
                    println!("  - {} ({})", provider.display_name(), provider);
                }
                println!();
                false
            }
            _ => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                false
            }
        }
    }

    async fn process_prompt(&self, prompt: Prompt) {
        println!();

        let input = RunCompareInput {
            prompt,
            providers: self.providers.clone(),
        };

        let result = if self.show_progress {
            let progress = stdout_reporter();
            self.use_case
                .execute_with_progress(input, progress.as_ref())
                .await
        } else {
            self.use_case.execute(input).await
        };

        match result {
            Ok(result) => {
                let output = match self.output {
                    OutputFormat::Full => ConsoleFormatter::format(&result),
                    OutputFormat::Json => ConsoleFormatter::format_json(&result),
                };
                println!("{}", output);
            }
            Err(e) => {
                eprintln!("Error: {}", e);
            }
        }
        println!();
    }
}
