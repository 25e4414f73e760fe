//! REPL (Read-Eval-Print Loop) for the copilot

use crate::ConsoleFormatter;
use askads_application::{CopilotPipeline, LoadSummaryUseCase};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

/// What the loop should do after a slash command
#[derive(Debug, PartialEq, Eq)]
enum CommandResult {
    Continue,
    Exit,
}

/// Interactive copilot REPL
pub struct ChatRepl {
    pipeline: CopilotPipeline,
    summary: Option<LoadSummaryUseCase>,
}

impl ChatRepl {
    pub fn new(pipeline: CopilotPipeline) -> Self {
        Self {
            pipeline,
            summary: None,
        }
    }

    /// Enable `/summary` (refreshes the KPI table the LLM tier reads).
    pub fn with_summary(mut self, summary: LoadSummaryUseCase) -> Self {
        self.summary = Some(summary);
        self
    }

    /// Run the interactive REPL on stdin
    pub async fn run(&self) -> std::io::Result<()> {
        self.print_welcome();
        self.run_with(BufReader::new(tokio::io::stdin())).await
    }

    /// Run the loop over any line source. Ends on EOF or `/quit`.
    pub async fn run_with<R: AsyncBufRead + Unpin>(&self, reader: R) -> std::io::Result<()> {
        let mut lines = reader.lines();
        loop {
            print_prompt();
            let Some(line) = lines.next_line().await? else {
                println!("Bye!");
                break;
            };
            let line = line.trim();

            if line.is_empty() {
                continue;
            }

            if line.starts_with('/') {
                if self.handle_command(line).await == CommandResult::Exit {
                    break;
                }
                continue;
            }

            self.process_question(line).await;
        }
        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│        Ask Your Ads - Copilot Session       │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!(
            "Fallback order: {}",
            self.pipeline
                .tier_order()
                .iter()
                .map(|t| t.as_str())
                .collect::<Vec<_>>()
                .join(" -> ")
        );
        println!();
        Self::print_help();
    }

    fn print_help() {
        println!("Commands:");
        println!("  /help, /h, /?     - Show this help");
        println!("  /summary          - Refresh and show the KPI table");
        println!("  /history          - Show the transcript");
        println!("  /quit, /exit, /q  - Exit chat");
        println!();
    }

    async fn handle_command(&self, cmd: &str) -> CommandResult {
        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                CommandResult::Exit
            }
            "/help" | "/h" | "/?" => {
                println!();
                Self::print_help();
                CommandResult::Continue
            }
            "/summary" => {
                if let Some(summary) = &self.summary {
                    summary.execute().await;
                }
                let state = self.pipeline.state().lock().await;
                if state.summary.error.is_empty() {
                    println!("{}", ConsoleFormatter::format_kpi_table(&state.kpi_rows));
                } else {
                    eprintln!("{}", ConsoleFormatter::format_error(&state.summary.error));
                }
                CommandResult::Continue
            }
            "/history" => {
                let state = self.pipeline.state().lock().await;
                println!("{}", ConsoleFormatter::format_transcript(&state.transcript));
                CommandResult::Continue
            }
            _ => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                CommandResult::Continue
            }
        }
    }

    async fn process_question(&self, question: &str) {
        println!();
        if self.pipeline.handle_turn(question).await.is_none() {
            return;
        }

        let state = self.pipeline.state().lock().await;
        if let Some(reply) = state.transcript.last_assistant() {
            println!("{}", ConsoleFormatter::format_message(reply));
        }
        if state.chat.has_error() {
            eprintln!("{}", ConsoleFormatter::format_error(&state.chat.last_error));
        }
        println!();
    }
}

fn print_prompt() {
    use std::io::Write;
    print!(">>> ");
    let _ = std::io::stdout().flush();
}
