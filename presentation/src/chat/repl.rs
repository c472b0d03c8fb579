//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::ConsoleFormatter;
use crate::ProgressReporter;
use crate::config::ReplConfig;
use desk_application::{ConversationOrchestrator, NoProgress, TurnProgressNotifier};
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use tracing::warn;

const HISTORY_CAPACITY: usize = 1000;

/// Slash commands understood by the REPL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    History,
    Document,
    Quit,
    Unknown(String),
}

impl ReplCommand {
    /// Parse a line starting with `/`; other lines are questions
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if !line.starts_with('/') {
            return None;
        }
        let command = match line {
            "/help" | "/h" | "/?" => ReplCommand::Help,
            "/history" => ReplCommand::History,
            "/document" | "/doc" => ReplCommand::Document,
            "/quit" | "/exit" | "/q" => ReplCommand::Quit,
            other => ReplCommand::Unknown(other.to_string()),
        };
        Some(command)
    }
}

/// Interactive chat REPL
pub struct ChatRepl {
    orchestrator: ConversationOrchestrator,
    config: ReplConfig,
}

impl ChatRepl {
    pub fn new(orchestrator: ConversationOrchestrator) -> Self {
        Self {
            orchestrator,
            config: ReplConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the interactive REPL until `/quit` or end of input
    pub async fn run(&mut self) -> std::io::Result<()> {
        let mut line_editor = self.line_editor();
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("policy-desk".to_string()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome();

        loop {
            match line_editor.read_line(&prompt)? {
                Signal::Success(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }

                    if let Some(command) = ReplCommand::parse(&line) {
                        if self.handle_command(command) {
                            break;
                        }
                        continue;
                    }

                    self.process_question(&line).await;
                }
                Signal::CtrlC => {
                    println!("^C");
                    continue;
                }
                Signal::CtrlD => {
                    println!("Bye!");
                    break;
                }
            }
        }

        Ok(())
    }

    fn line_editor(&self) -> Reedline {
        let editor = Reedline::create();
        let Some(path) = &self.config.history_file else {
            return editor;
        };

        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        match FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
            Ok(history) => editor.with_history(Box::new(history)),
            Err(e) => {
                warn!("History file {} unavailable: {}", path.display(), e);
                editor
            }
        }
    }

    fn print_welcome(&self) {
        let document = self.orchestrator.document();
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│         policy-desk - HR policy chat        │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!(
            "Document: {} ({} pages)",
            document.path().display(),
            document.page_count()
        );
        println!("Model:    {}", self.orchestrator.client().params().model);
        println!();
        Self::print_commands();
    }

    fn print_commands() {
        println!("Commands:");
        println!("  /help, /h, /?     - Show this help");
        println!("  /history          - Replay this conversation");
        println!("  /document, /doc   - Show the loaded document");
        println!("  /quit, /exit, /q  - Exit chat");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    fn handle_command(&self, command: ReplCommand) -> bool {
        match command {
            ReplCommand::Quit => {
                println!("Bye!");
                true
            }
            ReplCommand::Help => {
                println!();
                Self::print_commands();
                false
            }
            ReplCommand::History => {
                println!();
                print!(
                    "{}",
                    ConsoleFormatter::format_transcript(self.orchestrator.transcript())
                );
                false
            }
            ReplCommand::Document => {
                println!();
                print!(
                    "{}",
                    ConsoleFormatter::format_document(
                        self.orchestrator.document(),
                        self.orchestrator.client().params().excerpt_chars,
                    )
                );
                println!();
                false
            }
            ReplCommand::Unknown(cmd) => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                false
            }
        }
    }

    async fn process_question(&mut self, question: &str) {
        println!();

        let progress: Box<dyn TurnProgressNotifier> = if self.config.show_progress {
            Box::new(ProgressReporter::new())
        } else {
            Box::new(NoProgress)
        };

        match self.orchestrator.submit(question, progress.as_ref()).await {
            Ok(report) => print!("{}", ConsoleFormatter::format_report(&report)),
            Err(e) => eprintln!("{}", e),
        }
        println!();
    }
}
