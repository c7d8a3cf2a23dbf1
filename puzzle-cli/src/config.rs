//! Configuration resolution from CLI args

use crate::cli::Args;
use log::LevelFilter;
use std::path::{Path, PathBuf};

/// Where the puzzle input comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// Year filter (None = all years)
    pub year_filter: Option<u16>,
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Tags to filter solvers
    pub tags: Vec<String>,
    pub input: InputSource,
    /// Print timings and a summary
    pub verbose: bool,
    /// Default log level when RUST_LOG is unset
    pub log_level: LevelFilter,
}

impl Config {
    pub fn from_args(args: Args) -> Self {
        let input = if args.input.as_os_str() == "-" {
            InputSource::Stdin
        } else {
            InputSource::File(expand_tilde(&args.input))
        };

        Config {
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part,
            tags: args.tags,
            input,
            verbose: args.verbose,
            log_level: args.log_level.into(),
        }
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && let Some(rest) = path_str
            .strip_prefix("~/")
            .or_else(|| (path_str == "~").then_some(""))
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}
