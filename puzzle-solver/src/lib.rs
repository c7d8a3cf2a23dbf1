//! Framework for multi-part puzzles identified by year and day.
//!
//! A puzzle parses its input once with [`PuzzleParser`], answers each part
//! through [`PartSolver<N>`], and gets a [`Solver`] dispatch from
//! `#[derive(PuzzleSolver)]`. A [`SolverRegistry`] maps dates to puzzles and
//! hands out parsed [`DynSolver`]s; `#[derive(AutoRegisterSolver)]` submits a
//! puzzle so [`RegistryBuilder::register_plugins`] picks it up.
//!
//! ```
//! use puzzle_solver::{ParseError, PartSolver, PuzzleParser, PuzzleSolver, RegistryBuilder, SolveError};
//!
//! #[derive(PuzzleSolver)]
//! #[puzzle_solver(parts = 2)]
//! struct Widths;
//!
//! impl PuzzleParser for Widths {
//!     type Shared = Vec<usize>;
//!
//!     fn parse(input: &str) -> Result<Vec<usize>, ParseError> {
//!         let widths: Vec<usize> = input.lines().map(str::len).collect();
//!         if widths.is_empty() {
//!             return Err(ParseError::MissingData("rows".into()));
//!         }
//!         Ok(widths)
//!     }
//! }
//!
//! impl PartSolver<1> for Widths {
//!     fn solve(widths: &mut Vec<usize>) -> Result<String, SolveError> {
//!         Ok(widths.len().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Widths {
//!     fn solve(widths: &mut Vec<usize>) -> Result<String, SolveError> {
//!         Ok(widths.iter().max().copied().unwrap_or(0).to_string())
//!     }
//! }
//!
//! let registry = RegistryBuilder::new()
//!     .register_solver::<Widths>(2020, 20)
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2020, 20, "#..\n#.#.\n").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "2");
//! assert_eq!(solver.solve(2).unwrap().answer, "4");
//! assert!(solver.solve(3).is_err());
//! ```

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult};
pub use registry::{PuzzleInfo, RegistryBuilder, SolverEntry, SolverPlugin, SolverRegistry};
pub use solver::{PartSolver, PuzzleParser, Solver};

#[doc(hidden)]
pub use inventory;

pub use puzzle_solver_macros::{AutoRegisterSolver, PuzzleSolver};
