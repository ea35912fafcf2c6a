//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::{ConsoleFormatter, ProgressReporter};
use assistant_application::{AskQuestionUseCase, CheckEndpointUseCase};
use assistant_domain::{OutputFormat, capabilities, example_questions};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::PathBuf;

/// Slash command typed at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Quit,
    Help,
    Examples,
    Capabilities,
    ToggleSparql,
    Status,
    Unknown(String),
}

impl ReplCommand {
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "/quit" | "/exit" | "/q" => Self::Quit,
            "/help" | "/h" | "/?" => Self::Help,
            "/examples" | "/exemples" => Self::Examples,
            "/capabilities" => Self::Capabilities,
            "/sparql" => Self::ToggleSparql,
            "/status" => Self::Status,
            other => Self::Unknown(other.to_string()),
        }
    }
}

/// Interactive chat REPL
pub struct ChatRepl {
    use_case: AskQuestionUseCase,
    status: CheckEndpointUseCase,
    output: OutputFormat,
    show_progress: bool,
    history_file: Option<PathBuf>,
}

impl ChatRepl {
    pub fn new(use_case: AskQuestionUseCase, status: CheckEndpointUseCase) -> Self {
        Self {
            use_case,
            status,
            output: OutputFormat::Answer,
            show_progress: true,
            history_file: None,
        }
    }

    /// Set whether to show progress
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }

    /// Use a custom history file instead of the data directory default
    pub fn with_history_file(mut self, path: Option<PathBuf>) -> Self {
        self.history_file = path;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = self.history_file.clone().or_else(|| {
            dirs::data_dir().map(|p| p.join("smarthealth-assistant").join("history.txt"))
        });

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            match rl.readline("santé> ") {
                Ok(line) => {
                    let line = line.trim();

                    if line.is_empty() {
                        continue;
                    }

                    if line.starts_with('/') {
                        if self.handle_command(ReplCommand::parse(line)).await {
                            break;
                        }
                        continue;
                    }

                    let _ = rl.add_history_entry(line);
                    self.process_question(line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Au revoir !");
                    break;
                }
                Err(err) => {
                    eprintln!("{}", readline_error_message(&err));
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│      SmartHealth Assistant - Chat Mode      │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Posez une question en français, par exemple :");
        println!("  Combien coûte une consultation en cardiologie ?");
        println!();
        Self::print_help();
    }

    fn print_help() {
        println!("Commands:");
        println!("  /help, /h, /?    - Show this help");
        println!("  /examples        - Example questions");
        println!("  /capabilities    - What the assistant can answer");
        println!("  /sparql          - Toggle display of the generated SPARQL");
        println!("  /status          - Check the SPARQL endpoint");
        println!("  /quit, /exit, /q - Exit chat");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    async fn handle_command(&mut self, command: ReplCommand) -> bool {
        match command {
            ReplCommand::Quit => {
                println!("Au revoir !");
                return true;
            }
            ReplCommand::Help => {
                println!();
                Self::print_help();
            }
            ReplCommand::Examples => {
                println!();
                println!("{}", ConsoleFormatter::format_examples(example_questions()));
            }
            ReplCommand::Capabilities => {
                println!();
                println!("{}", ConsoleFormatter::format_capabilities(&capabilities()));
            }
            ReplCommand::ToggleSparql => {
                let expose = !self.use_case.behavior().expose_sparql;
                self.use_case.set_expose_sparql(expose);
                // The answer-only format never prints SPARQL
                if expose && self.output == OutputFormat::Answer {
                    self.output = OutputFormat::Full;
                }
                println!("SPARQL display: {}", if expose { "on" } else { "off" });
            }
            ReplCommand::Status => {
                let status = self.status.execute().await;
                println!("{}", ConsoleFormatter::format_status(&status));
            }
            ReplCommand::Unknown(cmd) => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
            }
        }
        false
    }

    async fn process_question(&self, question: &str) {
        println!();

        let result = if self.show_progress {
            let progress = ProgressReporter::new();
            self.use_case.execute_with_progress(question, &progress).await
        } else {
            self.use_case.execute(question).await
        };

        match result {
            Ok(answer) => println!("{}", ConsoleFormatter::render(&answer, self.output)),
            Err(e) => eprintln!("{}", ConsoleFormatter::format_error(&e)),
        }
        println!();
    }
}

fn readline_error_message(err: &ReadlineError) -> String {
    format!("Error: {}", err)
}
