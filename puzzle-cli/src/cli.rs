//! CLI argument parsing using clap

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

/// Verbosity of the diagnostics written to stderr
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Puzzle solver runner
#[derive(Parser, Debug)]
#[command(name = "puzzle", about = "Run registered puzzle solvers on an input", version)]
pub struct Args {
    /// Year to run (runs all years if omitted)
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Day to run (runs all days if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Tags to filter solvers (comma-separated, all must match)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Puzzle input file, `-` for stdin
    #[arg(short, long, default_value = "-")]
    pub input: PathBuf,

    /// Print timings and a summary along with each answer
    #[arg(short, long)]
    pub verbose: bool,

    /// Log level for diagnostics on stderr (RUST_LOG takes precedence)
    #[arg(long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}
