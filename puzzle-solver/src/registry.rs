//! Puzzles keyed by (year, day), filled by hand or from link-time plugins.

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, Parsed};
use crate::solver::Solver;
use std::collections::BTreeMap;

/// Puzzle dates start with the first event in 2015 and run days 1 to 25.
const FIRST_YEAR: u16 = 2015;
const LAST_DAY: u8 = 25;

/// How to parse input for one solver type, plus its part count.
#[derive(Clone, Copy)]
pub struct SolverEntry {
    parts: u8,
    parse: fn(&str) -> Result<Box<dyn DynSolver>, ParseError>,
}

impl SolverEntry {
    /// Entry for `S`; usable in statics, which `#[derive(AutoRegisterSolver)]` relies on.
    pub const fn of<S: Solver + 'static>() -> Self {
        Self {
            parts: S::PARTS,
            parse: Parsed::<S>::boxed,
        }
    }

    pub fn parts(&self) -> u8 {
        self.parts
    }
}

/// A solver submitted with `inventory`, normally by `#[derive(AutoRegisterSolver)]`.
pub struct SolverPlugin {
    pub year: u16,
    pub day: u8,
    pub tags: &'static [&'static str],
    pub entry: SolverEntry,
}

inventory::collect!(SolverPlugin);

/// What the registry knows about a puzzle without parsing anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleInfo {
    pub year: u16,
    pub day: u8,
    pub parts: u8,
}

#[derive(Default)]
pub struct RegistryBuilder {
    entries: BTreeMap<(u16, u8), SolverEntry>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(mut self, year: u16, day: u8, entry: SolverEntry) -> Result<Self, RegistrationError> {
        if year < FIRST_YEAR || !(1..=LAST_DAY).contains(&day) {
            return Err(RegistrationError::OutOfRange { year, day });
        }
        if self.entries.insert((year, day), entry).is_some() {
            return Err(RegistrationError::Duplicate { year, day });
        }
        Ok(self)
    }

    /// Register `S` under a date of the caller's choosing.
    pub fn register_solver<S: Solver + 'static>(
        self,
        year: u16,
        day: u8,
    ) -> Result<Self, RegistrationError> {
        self.insert(year, day, SolverEntry::of::<S>())
    }

    /// Register every linked plugin accepted by `keep`.
    ///
    /// ```no_run
    /// # use puzzle_solver::RegistryBuilder;
    /// let grids = RegistryBuilder::new()
    ///     .register_plugins(|plugin| plugin.tags.contains(&"grid"))
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_plugins<F>(self, keep: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        inventory::iter::<SolverPlugin>()
            .filter(|plugin| keep(plugin))
            .try_fold(self, |builder, plugin| {
                builder.insert(plugin.year, plugin.day, plugin.entry)
            })
    }

    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            entries: self.entries,
        }
    }
}

pub struct SolverRegistry {
    entries: BTreeMap<(u16, u8), SolverEntry>,
}

impl SolverRegistry {
    /// Registered puzzles, oldest first.
    pub fn puzzles(&self) -> impl Iterator<Item = PuzzleInfo> + '_ {
        self.entries.iter().map(|(&(year, day), entry)| PuzzleInfo {
            year,
            day,
            parts: entry.parts,
        })
    }

    pub fn info(&self, year: u16, day: u8) -> Option<PuzzleInfo> {
        self.entries.get(&(year, day)).map(|entry| PuzzleInfo {
            year,
            day,
            parts: entry.parts,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse `input` with the solver for `year`/`day`.
    pub fn create_solver(
        &self,
        year: u16,
        day: u8,
        input: &str,
    ) -> Result<Box<dyn DynSolver>, SolverError> {
        let entry = self
            .entries
            .get(&(year, day))
            .ok_or(SolverError::NotFound { year, day })?;
        Ok((entry.parse)(input)?)
    }
}
