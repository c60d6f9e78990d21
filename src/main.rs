//! Dagwalk CLI - topological sort and walk weights over graph cases

use std::fs::File;
use std::io::{self, BufRead, BufReader};

use clap::{Parser, Subcommand};
use colored::Colorize;

use dagwalk::config::DagwalkConfig;
use dagwalk::error::{FixSuggestion, Result};
use dagwalk::runner::{OutputFormat, RunOptions, Runner};

#[derive(Parser)]
#[command(name = "dagwalk")]
#[command(about = "Dagwalk - topological sorting and walk weights for directed graphs")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process graph cases and report walk weights
    Run {
        /// Input file; omit or pass '-' to read stdin
        file: Option<String>,

        /// Print the full topological order for each case
        #[arg(long)]
        show_order: bool,

        /// Output format (text, json)
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Check case structure and acyclicity without computing weights
    Validate {
        /// Input file; omit or pass '-' to read stdin
        file: Option<String>,
    },
}

fn main() {
    // Contract output owns stdout; logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            file,
            show_order,
            format,
        } => run_cases(file.as_deref(), show_order, format),
        Commands::Validate { file } => validate_cases(file.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        if let Some(suggestion) = e.fix_suggestion() {
            eprintln!("  {} {}", "Fix:".yellow(), suggestion);
        }
        std::process::exit(1);
    }
}

fn run_cases(file: Option<&str>, show_order: bool, format: Option<String>) -> Result<()> {
    let config = DagwalkConfig::load()?.with_env();

    let format_name = format.unwrap_or_else(|| config.format_name().to_string());
    let opts = RunOptions {
        show_order: show_order || config.show_order(),
        format: OutputFormat::parse(&format_name)?,
    };

    let stdout = io::stdout();
    let mut runner = Runner::new(stdout.lock(), opts);
    let summary = with_input(file, |input| runner.process(input))?;

    tracing::debug!(
        cases = summary.cases,
        failed = summary.failed,
        "run finished"
    );
    Ok(())
}

fn validate_cases(file: Option<&str>) -> Result<()> {
    let stdout = io::stdout();
    let mut runner = Runner::new(stdout.lock(), RunOptions::default());
    let summary = with_input(file, |input| runner.validate(input))?;
    drop(runner);

    if summary.failed > 0 {
        eprintln!(
            "{} {} of {} case(s) invalid",
            "✗".red(),
            summary.failed,
            summary.cases
        );
        std::process::exit(1);
    }

    println!("{} {} case(s) valid", "✓".green(), summary.cases);
    Ok(())
}

/// Run `f` over the chosen input source: a file path, '-', or stdin
fn with_input<T>(file: Option<&str>, f: impl FnOnce(&mut dyn BufRead) -> Result<T>) -> Result<T> {
    match file {
        Some(path) if path != "-" => {
            let mut reader = BufReader::new(File::open(path)?);
            f(&mut reader)
        }
        _ => {
            let stdin = io::stdin();
            let mut lock = stdin.lock();
            f(&mut lock)
        }
    }
}
