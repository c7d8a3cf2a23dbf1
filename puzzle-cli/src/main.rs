//! Puzzle CLI - Command-line interface for running registered puzzle solvers

mod cli;
mod config;
mod error;
mod executor;
mod input;
mod output;

// Import puzzle-solutions to link the solver plugins
use puzzle_solutions as _;

use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use executor::Executor;
use output::OutputFormatter;
use puzzle_solver::{RegistryBuilder, SolverRegistry};

fn main() {
    let config = Config::from_args(Args::parse());

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .parse_default_env()
        .init();

    if let Err(e) = run(&config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<(), CliError> {
    let registry = build_registry(&config.tags)?;
    let executor = Executor::new(registry, config);

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        return Err(CliError::NoSolvers);
    }
    log::info!("running {} solver(s)", work_items.len());

    let input = input::read_input(&config.input)?;

    let formatter = OutputFormatter::new(config.verbose);
    let mut results = Vec::new();
    executor.execute(&input, |result| {
        formatter.print_result(&result);
        results.push(result);
    });
    formatter.print_summary(&results);

    let failed = results.iter().filter(|r| r.answer.is_err()).count();
    if failed > 0 {
        return Err(CliError::PartsFailed {
            failed,
            total: results.len(),
        });
    }
    Ok(())
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<SolverRegistry, CliError> {
    let builder = RegistryBuilder::new().register_plugins(|plugin| {
        tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
    })?;
    Ok(builder.build())
}
