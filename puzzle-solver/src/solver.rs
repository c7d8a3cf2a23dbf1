//! The traits a puzzle implements.

use crate::error::{ParseError, SolveError};

/// Turns puzzle text into the data every part works on.
///
/// The parsed value is owned by the runner and lent mutably to each part in
/// turn, so a part may leave results behind for the next one.
pub trait PuzzleParser {
    type Shared: 'static;

    fn parse(input: &str) -> Result<Self::Shared, ParseError>;
}

/// Answer for part `N`.
pub trait PartSolver<const N: u8>: PuzzleParser {
    fn solve(shared: &mut Self::Shared) -> Result<String, SolveError>;
}

/// Runtime dispatch from a part number to its [`PartSolver`].
///
/// Normally generated by `#[derive(PuzzleSolver)]`. Callers only pass parts
/// in `1..=PARTS`; anything else is rejected before `solve_part` runs.
///
/// ```
/// use puzzle_solver::{ParseError, PuzzleParser, SolveError, Solver};
///
/// struct Letters;
///
/// impl PuzzleParser for Letters {
///     type Shared = String;
///
///     fn parse(input: &str) -> Result<String, ParseError> {
///         Ok(input.trim().to_string())
///     }
/// }
///
/// impl Solver for Letters {
///     const PARTS: u8 = 1;
///
///     fn solve_part(shared: &mut String, _part: u8) -> Result<String, SolveError> {
///         Ok(shared.len().to_string())
///     }
/// }
///
/// let mut word = Letters::parse(" tile ").unwrap();
/// assert_eq!(Letters::solve_part(&mut word, 1).unwrap(), "4");
/// ```
pub trait Solver: PuzzleParser {
    const PARTS: u8;

    fn solve_part(shared: &mut Self::Shared, part: u8) -> Result<String, SolveError>;
}
