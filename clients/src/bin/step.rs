//! `semflow-step`: runs one workflow step over a Turtle graph.
//!
//! Reads the input graph from `--input` (or stdin), writes the updated graph
//! to `--output` (or stdout). Logs go to stderr; set `RUST_LOG` to change the
//! level.
//!
//! **Exit status:**
//! - `0`: the step produced a result
//! - `1`: I/O or configuration failure
//! - `2`: the output graph carries an error annotation
//!
//! **Usage:**
//! ```
//! semflow-step <sum|average|csvw-column> [--input <file>] [--output <file>]
//!     [--activity <iri>] [--agent <iri>] [--plan <iri>]
//!     [--config <file>] [--base <iri>]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use semflow_steps::average::Average;
use semflow_steps::csvw::CsvwColumn;
use semflow_steps::sum::Sum;
use semflow_steps::{execute, Execution, StepConfig, StepContext};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// The step to run.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum StepKind {
    /// Sum of the activity's quantity value inputs.
    Sum,
    /// Mean of the activity's input collection.
    Average,
    /// Load one column of a CSVW-described table.
    CsvwColumn,
}

/// Run a single semantic workflow step.
#[derive(Parser)]
#[command(name = "semflow-step", about = "Run a semantic workflow step over a Turtle graph")]
struct Args {
    /// Which step to run.
    step: StepKind,

    /// Input Turtle file (default: stdin).
    #[arg(long)]
    input: Option<PathBuf>,

    /// Output Turtle file (default: stdout).
    #[arg(long)]
    output: Option<PathBuf>,

    /// IRI of the activity to execute (default: first prov:Activity).
    #[arg(long)]
    activity: Option<String>,

    /// IRI of the agent running the activity.
    #[arg(long)]
    agent: Option<String>,

    /// IRI of the plan the activity follows.
    #[arg(long)]
    plan: Option<String>,

    /// TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Base IRI, overriding the configured one.
    #[arg(long)]
    base: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => StepConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => StepConfig::default(),
    };
    if let Some(base) = &args.base {
        config = config
            .with_base_iri(base.as_str())
            .context("Invalid --base")?;
    }

    let context = StepContext {
        activity: args.activity.clone(),
        agent: args.agent.clone(),
        plan: args.plan.clone(),
    };

    let input = read_input(args.input.as_ref())?;
    let execution = run(args.step, &input, &context, &config);
    write_output(args.output.as_ref(), &execution.turtle)?;

    if let Err(err) = &execution.outcome {
        tracing::error!(code = %err.code(), "{err}");
        process::exit(2);
    }
    Ok(())
}

fn run(kind: StepKind, input: &str, context: &StepContext, config: &StepConfig) -> Execution {
    match kind {
        StepKind::Sum => execute(&Sum, input, context, config),
        StepKind::Average => execute(&Average, input, context, config),
        StepKind::CsvwColumn => execute(&CsvwColumn::new(), input, context, config),
    }
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&PathBuf>, turtle: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, turtle).with_context(|| format!("Failed to write {}", path.display()))
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(turtle.as_bytes())
                .and_then(|()| stdout.flush())
                .context("Failed to write stdout")
        }
    }
}
