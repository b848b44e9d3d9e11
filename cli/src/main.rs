//! CLI entrypoint for mathbook
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use mathbook_application::{EvaluateNumberUseCase, EvaluationParams, LookupDefinitionUseCase};
use mathbook_domain::OutputFormat;
use mathbook_infrastructure::{ConfigLoader, FileConfig};
use mathbook_presentation::{
    Cli, ConsoleFormatter, NumberRepl, OutputConfig, OutputFormatter, ReplConfig,
};
use std::fs::OpenOptions;
use std::path::Path;
use std::process::ExitCode;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // The guard flushes buffered log lines when main returns
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    info!("Starting mathbook");

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(ExitCode::SUCCESS);
    }

    // === Configuration ===
    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("failed to load configuration")?
    };

    // Every issue has a fallback, so validation only warns
    for issue in file_config.validate() {
        warn!("{}", issue);
    }

    let params = evaluation_params(&cli, &file_config);
    let output = OutputConfig {
        format: cli
            .output
            .map(OutputFormat::from)
            .unwrap_or(file_config.output.format),
        color: file_config.output.color,
    };
    if !output.use_color() {
        colored::control::set_override(false);
    }
    info!(
        "Output {}, {} multiples, factorial cutoff {}",
        output.format, params.multiples_count, params.factorial_cutoff
    );

    // === Dependency Injection ===
    let evaluate = EvaluateNumberUseCase::new(params);
    let lookup = LookupDefinitionUseCase::new();

    if cli.list_terms {
        print!("{}", ConsoleFormatter::format_terms(lookup.entries()));
    }

    if let Some(term) = &cli.define {
        println!(
            "{}",
            ConsoleFormatter::format_definition(term, &lookup.execute(term))
        );
    }

    // One-shot numbers from the command line
    let mut rejected = 0usize;
    for (i, raw) in cli.numbers.iter().enumerate() {
        if i > 0 && output.format == OutputFormat::Full {
            println!();
        }
        match evaluate.evaluate(raw) {
            Ok(evaluation) => println!("{}", ConsoleFormatter.render(&evaluation, output.format)),
            Err(e) => {
                rejected += 1;
                eprintln!("{}", ConsoleFormatter::format_error(&e, output.format));
            }
        }
    }

    // Interactive mode
    if cli.wants_repl() {
        let repl_config = ReplConfig {
            prompt: file_config.repl.effective_prompt().to_string(),
            show_banner: file_config.repl.show_banner,
        };
        NumberRepl::new(evaluate, lookup)
            .with_output(output)
            .with_config(repl_config)
            .run()
            .context("interactive prompt failed")?;
    }

    if rejected > 0 {
        info!("{} input(s) were not integers", rejected);
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            builder.with_writer(writer).with_ansi(false).init();
            Ok(Some(guard))
        }
        None => {
            // Keep stdout clean for reports and JSON
            builder.with_writer(std::io::stderr).init();
            Ok(None)
        }
    }
}

/// File values first, then CLI flags on top
fn evaluation_params(cli: &Cli, file_config: &FileConfig) -> EvaluationParams {
    let (mut params, _) = file_config.evaluation.to_params();

    if let Some(count) = cli.multiples {
        params = params.with_multiples_count(count);
        if params.multiples_count != count {
            warn!(
                "--multiples {} is out of range, using {}",
                count, params.multiples_count
            );
        }
    }

    if let Some(cutoff) = cli.factorial_cutoff {
        params = params.with_factorial_cutoff(cutoff);
        if params.factorial_cutoff != cutoff {
            warn!(
                "--factorial-cutoff {} is out of range, using {}",
                cutoff, params.factorial_cutoff
            );
        }
    }

    params
}
