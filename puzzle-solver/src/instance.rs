//! Parsed puzzles behind an object-safe interface.

use crate::error::{ParseError, SolveError};
use crate::solver::Solver;
use chrono::{TimeDelta, Utc};
use std::marker::PhantomData;

/// One answered part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveResult {
    pub answer: String,
    pub elapsed: TimeDelta,
}

/// A puzzle whose input has been parsed, ready to answer its parts.
pub trait DynSolver {
    fn parts(&self) -> u8;

    /// Wall time spent parsing the input.
    fn parse_time(&self) -> TimeDelta;

    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;
}

fn timed<T>(run: impl FnOnce() -> T) -> (T, TimeDelta) {
    let start = Utc::now();
    let value = run();
    (value, Utc::now() - start)
}

pub(crate) struct Parsed<S: Solver> {
    shared: S::Shared,
    parse_time: TimeDelta,
    solver: PhantomData<fn() -> S>,
}

impl<S: Solver + 'static> Parsed<S> {
    pub(crate) fn boxed(input: &str) -> Result<Box<dyn DynSolver>, ParseError> {
        let (shared, parse_time) = timed(|| S::parse(input));
        Ok(Box::new(Parsed::<S> {
            shared: shared?,
            parse_time,
            solver: PhantomData,
        }))
    }
}

impl<S: Solver> DynSolver for Parsed<S> {
    fn parts(&self) -> u8 {
        S::PARTS
    }

    fn parse_time(&self) -> TimeDelta {
        self.parse_time
    }

    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        if part == 0 || part > S::PARTS {
            return Err(SolveError::PartOutOfRange {
                part,
                parts: S::PARTS,
            });
        }
        let (answer, elapsed) = timed(|| S::solve_part(&mut self.shared, part));
        Ok(SolveResult {
            answer: answer?,
            elapsed,
        })
    }
}
