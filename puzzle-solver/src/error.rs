use std::error::Error;
use std::sync::Arc;
use thiserror::Error;

/// Input text a solver cannot work with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid input: {0}")]
    InvalidFormat(String),
    #[error("input is missing {0}")]
    MissingData(String),
}

/// Failure of one part on already parsed input.
///
/// Cloneable so a runner can report the same failure for several parts.
#[derive(Debug, Clone, Error)]
pub enum SolveError {
    #[error("part {part} does not exist, this puzzle has parts 1..={parts}")]
    PartOutOfRange { part: u8, parts: u8 },
    #[error(transparent)]
    Failed(Arc<dyn Error + Send + Sync>),
}

impl SolveError {
    /// Wrap any solver-specific error.
    pub fn failed<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        SolveError::Failed(Arc::new(error))
    }
}

/// What can go wrong between picking a puzzle and reading an answer.
#[derive(Debug, Clone, Error)]
pub enum SolverError {
    #[error("no solver registered for {year} day {day}")]
    NotFound { year: u16, day: u8 },
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Solve(#[from] SolveError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("{year} day {day} is registered twice")]
    Duplicate { year: u16, day: u8 },
    #[error("{year} day {day} is not a puzzle date")]
    OutOfRange { year: u16, day: u8 },
}
