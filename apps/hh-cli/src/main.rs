mod error;
mod fixtures;

use clap::{Parser, Subcommand};
use std::fmt::Display;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;

use hh_core::RawDegree;
use hh_seq::{NegativeInputPolicy, ReductionTrace, Validator, ValidatorConfig, Verdict};
use tracing::Level;

use crate::error::{CliError, CliResult};

/// Degree sequence of a 25-zone urban road network, sum 90.
const URBAN_DATASET: [RawDegree; 25] = [
    5, 5, 5, 4, 4, 4, 4, 4, 4, 4, 4, 4, 3, 3, 3, 3, 3, 3, 3, 2, 2, 2, 2, 2, 2,
];

#[derive(Parser)]
#[command(name = "hh-cli")]
#[command(about = "Havel-Hakimi CLI - check whether degree sequences are graphical", long_about = None)]
struct Cli {
    /// Log reduction details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Report negative degrees as INVALID instead of failing
    #[arg(long, global = true)]
    fold_negative: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a degree sequence
    Check {
        /// Degrees, one per vertex
        #[arg(allow_negative_numbers = true)]
        degrees: Vec<RawDegree>,
    },
    /// Show every Havel-Hakimi reduction step
    Trace {
        /// Degrees, one per vertex
        #[arg(allow_negative_numbers = true)]
        degrees: Vec<RawDegree>,
        /// Print the trace as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate every case in a YAML fixture file
    Fixtures {
        /// Path to the fixture file
        path: PathBuf,
    },
    /// Run the built-in 25-zone regression dataset
    Dataset,
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", error::report(&err));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let level = if cli.verbose { Level::TRACE } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let mut config = ValidatorConfig::default();
    if cli.fold_negative {
        config.negative_input = NegativeInputPolicy::NonGraphical;
    }
    let validator = Validator::new(config);

    match cli.command {
        Commands::Check { degrees } => cmd_check(&validator, &degrees),
        Commands::Trace { degrees, json } => cmd_trace(&validator, &degrees, json),
        Commands::Fixtures { path } => cmd_fixtures(&path, cli.fold_negative),
        Commands::Dataset => cmd_dataset(&validator),
    }
}

fn cmd_check(validator: &Validator, degrees: &[RawDegree]) -> CliResult<()> {
    println!("Sequence: {}", fmt_seq(degrees));
    print_verdict(validator.check(degrees)?);
    Ok(())
}

fn cmd_trace(validator: &Validator, degrees: &[RawDegree], json: bool) -> CliResult<()> {
    let trace = validator.trace(degrees)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&trace)?);
    } else {
        print_trace(&trace);
    }
    Ok(())
}

fn cmd_fixtures(path: &Path, fold_negative: bool) -> CliResult<()> {
    println!("Loading fixtures: {}", path.display());
    let mut file = fixtures::load(path)?;
    if fold_negative {
        file.config.negative_input = NegativeInputPolicy::NonGraphical;
    }

    let outcomes = fixtures::run(&file)?;
    let validator = Validator::new(file.config);
    let mut failed = 0;

    for outcome in &outcomes {
        let mark = if outcome.matches_expectation() { "✓" } else { "✗" };
        let verdict = match &outcome.result {
            Ok(true) => "graphical".to_string(),
            Ok(false) => "not graphical".to_string(),
            Err(err) => format!("error: {err}"),
        };
        println!(
            "  {} {} {} -> {}",
            mark,
            outcome.name,
            fmt_seq(&outcome.sequence),
            verdict
        );
        if !outcome.matches_expectation() {
            failed += 1;
        }

        if file.config.record_trace && outcome.result.is_ok() {
            print_trace(&validator.trace(&outcome.sequence)?);
        }
    }

    if failed > 0 {
        return Err(CliError::Mismatch {
            failed,
            total: outcomes.len(),
        });
    }
    println!("✓ All {} cases passed", outcomes.len());
    Ok(())
}

fn cmd_dataset(validator: &Validator) -> CliResult<()> {
    println!("Processing dataset of {} zones...", URBAN_DATASET.len());
    print_verdict(validator.check(&URBAN_DATASET)?);
    Ok(())
}

fn print_verdict(graphical: bool) {
    if graphical {
        println!("VALID: the sequence is graphical");
    } else {
        println!("INVALID: no simple graph has this degree sequence");
    }
}

fn print_trace(trace: &ReductionTrace) {
    println!("Sequence: {}", fmt_seq(&trace.initial));
    for (i, step) in trace.steps.iter().enumerate() {
        println!(
            "  Step {}: removed {} -> {}",
            i + 1,
            step.removed,
            fmt_seq(&step.remaining)
        );
    }
    match trace.verdict {
        Verdict::Graphical => print_verdict(true),
        Verdict::NotGraphical { reason } => {
            print_verdict(false);
            println!("  Reason: {}", reason);
        }
    }
}

fn fmt_seq<T: Display>(values: &[T]) -> String {
    let parts: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", parts.join(", "))
}
