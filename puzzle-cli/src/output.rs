//! Output formatting for solver results

use crate::executor::SolverResult;
use chrono::TimeDelta;

/// Output formatter for solver results
pub struct OutputFormatter {
    verbose: bool,
    start_time: std::time::Instant,
}

impl OutputFormatter {
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            start_time: std::time::Instant::now(),
        }
    }

    /// Format and print a single result: answers to stdout, failures to stderr
    pub fn print_result(&self, result: &SolverResult) {
        match (&result.answer, self.verbose) {
            (Ok(_), _) => println!("{}", self.format_answer(result)),
            (Err(e), false) => eprintln!("Error: {}", e),
            (Err(e), true) => eprintln!("{}: Error - {}", prefix(result), e),
        }
    }

    /// The stdout line for a solved part
    fn format_answer(&self, result: &SolverResult) -> String {
        let Ok(answer) = &result.answer else {
            return String::new();
        };
        if !self.verbose {
            return answer.clone();
        }
        let parse_timing = result
            .parse_duration
            .map(|d| format!("parse: {}, ", format_duration(d)))
            .unwrap_or_default();
        format!(
            "{}: {} ({}solve: {})",
            prefix(result),
            answer,
            parse_timing,
            format_duration(result.solve_duration)
        )
    }

    /// Print a summary after all results (verbose only)
    pub fn print_summary(&self, results: &[SolverResult]) {
        if !self.verbose {
            return;
        }

        let total = results.len();
        let successes = results.iter().filter(|r| r.answer.is_ok()).count();
        let failures = total - successes;

        // Parse time is shared across the parts of one solver; count it once.
        let total_parse_time: TimeDelta = results
            .iter()
            .filter(|r| r.answer.is_ok())
            .scan(None, |last, r| {
                let key = Some((r.year, r.day));
                let first = *last != key;
                *last = key;
                Some(if first { r.parse_duration } else { None })
            })
            .flatten()
            .sum();
        let total_solve_time: TimeDelta = results
            .iter()
            .filter(|r| r.answer.is_ok())
            .map(|r| r.solve_duration)
            .sum();

        println!();
        println!("--- Summary ---");
        println!("Parts: {} solved, {} failed", successes, failures);
        println!("Total parse time: {}", format_duration(total_parse_time));
        println!("Total solve time: {}", format_duration(total_solve_time));
        println!(
            "Elapsed wall-clock time: {}",
            format_std_duration(self.start_time.elapsed())
        );
    }
}

fn prefix(result: &SolverResult) -> String {
    format!("{}/{:02} Part {}", result.year, result.day, result.part)
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: std::time::Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}
