//! Sequential executor for running solvers

use crate::config::Config;
use chrono::TimeDelta;
use log::{debug, info};
use puzzle_solver::{SolverError, SolverRegistry};
use std::ops::RangeInclusive;

/// Result from a single solver execution
#[derive(Debug)]
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, SolverError>,
    /// Parse time, shared by every part of one work item (None if parsing failed)
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

/// Work item representing a solver to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Runs every matching solver on one input, in year/day/part order
pub struct Executor<'a> {
    registry: SolverRegistry,
    config: &'a Config,
}

impl<'a> Executor<'a> {
    pub fn new(registry: SolverRegistry, config: &'a Config) -> Self {
        Self { registry, config }
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        let cfg = self.config;
        self.registry
            .puzzles()
            .filter(|info| cfg.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| cfg.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: filter_parts(cfg.part_filter, info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Solve every work item, handing each part's result to `emit` as soon as it is known
    pub fn execute<F>(&self, input: &str, mut emit: F)
    where
        F: FnMut(SolverResult),
    {
        for work in self.collect_work_items() {
            self.run_solver(&work, input, &mut emit);
        }
    }

    fn run_solver<F>(&self, work: &WorkItem, input: &str, emit: &mut F)
    where
        F: FnMut(SolverResult),
    {
        let (year, day) = (work.year, work.day);
        info!("running {}/{:02} parts {:?}", year, day, work.parts);

        let mut solver = match self.registry.create_solver(year, day, input) {
            Ok(solver) => solver,
            Err(e) => {
                debug!("{}/{:02} failed to parse: {}", year, day, e);
                for part in work.parts.clone() {
                    emit(SolverResult {
                        year,
                        day,
                        part,
                        answer: Err(e.clone()),
                        parse_duration: None,
                        solve_duration: TimeDelta::zero(),
                    });
                }
                return;
            }
        };

        let parse_duration = solver.parse_time();
        for part in work.parts.clone() {
            let result = match solver.solve(part) {
                Ok(solved) => SolverResult {
                    year,
                    day,
                    part,
                    solve_duration: solved.elapsed,
                    answer: Ok(solved.answer),
                    parse_duration: Some(parse_duration),
                },
                Err(e) => SolverResult {
                    year,
                    day,
                    part,
                    answer: Err(e.into()),
                    parse_duration: Some(parse_duration),
                    solve_duration: TimeDelta::zero(),
                },
            };
            emit(result);
        }
    }
}

/// Filter parts based on the part filter and solver's max parts
#[allow(clippy::reversed_empty_ranges)]
fn filter_parts(part_filter: Option<u8>, max_parts: u8) -> RangeInclusive<u8> {
    match part_filter {
        Some(p) if p <= max_parts => p..=p,
        Some(_) => 1..=0, // Empty range - intentional
        None => 1..=max_parts,
    }
}
