//! REPL (Read-Eval-Print Loop) for evaluating numbers interactively

use crate::config::{OutputConfig, ReplConfig};
use crate::output::console::ConsoleFormatter;
use crate::output::formatter::OutputFormatter;
use mathbook_application::{EvaluateNumberUseCase, LookupDefinitionUseCase};
use reedline::{DefaultPrompt, DefaultPromptSegment, Reedline, Signal};
use tracing::debug;

/// What the loop should do after one line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplAction {
    /// Nothing to print
    Skip,
    /// Print this text and read the next line
    Print(String),
    /// Leave the loop
    Exit,
}

/// Interactive number REPL
pub struct NumberRepl {
    evaluate: EvaluateNumberUseCase,
    lookup: LookupDefinitionUseCase,
    output: OutputConfig,
    config: ReplConfig,
}

impl NumberRepl {
    /// Create a new NumberRepl
    pub fn new(evaluate: EvaluateNumberUseCase, lookup: LookupDefinitionUseCase) -> Self {
        Self {
            evaluate,
            lookup,
            output: OutputConfig::default(),
            config: ReplConfig::default(),
        }
    }

    /// Set the output configuration
    pub fn with_output(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }

    /// Set the REPL configuration
    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the interactive REPL
    pub fn run(&self) -> std::io::Result<()> {
        let mut line_editor = Reedline::create();
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic(self.config.prompt.clone()),
            DefaultPromptSegment::Empty,
        );

        if self.config.show_banner {
            self.print_welcome();
        }

        loop {
            match line_editor.read_line(&prompt)? {
                Signal::Success(buffer) => match self.handle_line(&buffer) {
                    ReplAction::Skip => {}
                    ReplAction::Print(text) => println!("{}", text),
                    ReplAction::Exit => {
                        println!("Bye!");
                        break;
                    }
                },
                Signal::CtrlD => {
                    println!("Bye!");
                    break;
                }
                // Ctrl-C: reedline has already cleared the line
                _ => continue,
            }
        }

        Ok(())
    }

    /// Process one line of input
    pub fn handle_line(&self, line: &str) -> ReplAction {
        let line = line.trim();

        // Skip empty lines
        if line.is_empty() {
            return ReplAction::Skip;
        }

        if line.starts_with('/') {
            return self.handle_command(line);
        }

        debug!("REPL input {:?}", line);
        let text = match self.evaluate.evaluate(line) {
            Ok(evaluation) => ConsoleFormatter.render(&evaluation, self.output.format),
            Err(e) => ConsoleFormatter::format_error(&e, self.output.format),
        };
        ReplAction::Print(text)
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│                 mathbook                    │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Type a whole number to see its properties.");
        println!();
        println!("{}", Self::help_text());
    }

    fn help_text() -> String {
        [
            "Commands:",
            "  /help, /h, /?      - Show this help",
            "  /define <term>     - Show a glossary definition",
            "  /terms             - List glossary terms",
            "  /quit, /exit, /q   - Exit",
        ]
        .join("\n")
    }

    /// Handle slash commands
    fn handle_command(&self, cmd: &str) -> ReplAction {
        let (name, arg) = match cmd.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (cmd, ""),
        };

        match name {
            "/quit" | "/exit" | "/q" => ReplAction::Exit,
            "/help" | "/h" | "/?" => ReplAction::Print(Self::help_text()),
            "/terms" => ReplAction::Print(ConsoleFormatter::format_terms(self.lookup.entries())),
            "/define" if arg.is_empty() => ReplAction::Print("Usage: /define <term>".to_string()),
            "/define" => ReplAction::Print(ConsoleFormatter::format_definition(
                arg,
                &self.lookup.execute(arg),
            )),
            _ => ReplAction::Print(format!(
                "Unknown command: {}\nType /help for available commands",
                cmd
            )),
        }
    }
}
