use clap::Parser;
use tracing_subscriber::EnvFilter;

use outcome::Outcome;

mod cli;
use cli::stages::{add, fail_with, multiply, IntOutcome, DIVISION_BY_ZERO};
use cli::{build_pipeline, render, Cli, Commands, StageSpec};

/// Env var holding the log filter, e.g. `OUTCOME_LOG=outcome=trace`.
const LOG_ENV: &str = "OUTCOME_LOG";

fn main() {
    init_env_logger(LOG_ENV);
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            start,
            stages,
            json,
        } => {
            if !run(start, &stages, json) {
                std::process::exit(1);
            }
        }
        Commands::Demo => demo(),
    }
}

/// Send pipeline events to stderr, filtered by `env`. Warnings only when unset.
fn init_env_logger(env: &str) {
    let filter = EnvFilter::try_from_env(env).unwrap_or_else(|_| EnvFilter::new("warn"));
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
    if let Err(error) = installed {
        eprintln!("❌ failed to install logger: {}", error);
    }
}

/// Run `start` through `stages`. Returns false if the result is an error.
fn run(start: i64, stages: &[StageSpec], json: bool) -> bool {
    let pipeline = build_pipeline(stages);
    let report = pipeline.run_traced(Outcome::from_value(start));

    match render(&report.output, json) {
        Ok(rendered) => println!("{}", rendered),
        Err(error) => {
            eprintln!("❌ failed to serialize outcome: {}", error);
            return false;
        }
    }
    if let Some(failure) = &report.failed_at {
        eprintln!(
            "❌ failed at {} after {} of {} stages",
            failure,
            report.invoked,
            pipeline.len()
        );
    }
    report.output.has_value()
}

fn demo() {
    let my_outcome: IntOutcome = Outcome::from_value(1);
    println!("{}", my_outcome.clone() >> add(1) >> multiply(3) >> multiply(3));

    let mut chained = my_outcome;
    chained >>= add(1);
    chained >>= fail_with(DIVISION_BY_ZERO);
    chained >>= multiply(3);
    println!("{}", chained);

    let default_outcome = IntOutcome::default();
    println!("{}", default_outcome.has_value());

    // Same value and error type: the implicit path is always the value.
    let same_type: Outcome<i64, i64> = 1i64.into();
    println!("{}", same_type.has_value());
}
