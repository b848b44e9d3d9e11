//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Coloured header and bulleted statements
    Full,
    /// One statement per line
    Plain,
    /// Statements and profile as JSON
    Json,
}

impl From<OutputFormat> for mathbook_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => Self::Full,
            OutputFormat::Plain => Self::Plain,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// CLI arguments for mathbook
#[derive(Parser, Debug)]
#[command(name = "mathbook")]
#[command(author, version, about = "Look up the mathematical properties of any integer")]
#[command(long_about = r#"
mathbook tells you what is interesting about a number: parity, multiples,
divisors, square root, factorial and which of fourteen named properties
(prime, perfect, Fibonacci, Armstrong, ...) it has.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./mathbook.toml     Project-level config (or ./.mathbook.toml)
3. ~/.config/mathbook/config.toml   Global config

Example:
  mathbook 28
  mathbook -o plain 12 -- -7
  mathbook --define armstrong
  mathbook            (starts the interactive prompt)
"#)]
pub struct Cli {
    /// Numbers to evaluate, in order
    #[arg(value_name = "NUMBER", allow_negative_numbers = true)]
    pub numbers: Vec<String>,

    /// Start the interactive prompt
    #[arg(short, long)]
    pub interactive: bool,

    /// Print the glossary definition of a term before any numbers
    #[arg(long, value_name = "TERM")]
    pub define: Option<String>,

    /// List every glossary term before any numbers
    #[arg(long)]
    pub list_terms: bool,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// How many multiples to list (overrides the config file)
    #[arg(long, value_name = "N")]
    pub multiples: Option<usize>,

    /// Largest number whose factorial is printed (overrides the config file)
    #[arg(long, value_name = "N")]
    pub factorial_cutoff: Option<u64>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// `true` when the interactive prompt should run
    ///
    /// Either asked for explicitly, or nothing else was requested.
    pub fn wants_repl(&self) -> bool {
        self.interactive
            || (self.numbers.is_empty() && self.define.is_none() && !self.list_terms)
    }
}
