//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Input could not be read
    #[error("Failed to read input from {path}: {source}")]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] puzzle_solver::RegistrationError),

    /// Nothing in the registry matched the filters
    #[error("No solvers found matching the specified filters")]
    NoSolvers,

    /// At least one part did not produce an answer
    #[error("{failed} of {total} part(s) failed")]
    PartsFailed { failed: usize, total: usize },
}
