//! Check command
//!
//! Validates a candidate against a history given on the command line.

use crate::core::{Digits, Round, sanitize};
use crate::rules::{self, Knowledge, Mode, Rejection};
use crate::solver::Solver;

/// Outcome of checking one candidate
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub candidate: Digits,
    pub rounds: Vec<Round>,
    pub knowledge: Knowledge,
    pub result: Result<(), Rejection>,
    /// Secrets that would have produced every given verdict
    pub remaining: usize,
}

/// Parse `GUESS:FEEDBACK` rounds and check `candidate` against them
///
/// # Errors
///
/// Returns an error if the candidate is not five digits or any round fails to parse.
pub fn run_check(candidate: &str, rounds: &[String], mode: Mode) -> Result<CheckReport, String> {
    let candidate = Digits::new(&sanitize(candidate)).map_err(|e| e.to_string())?;
    let rounds = rounds
        .iter()
        .map(|text| text.parse::<Round>().map_err(|e| format!("{text}: {e}")))
        .collect::<Result<Vec<_>, _>>()?;

    let knowledge = Knowledge::aggregate(&rounds, mode);
    let result = rules::check(&candidate, &knowledge, mode);
    let remaining = Solver::new(mode, 0).count_candidates(&rounds);

    Ok(CheckReport {
        candidate,
        rounds,
        knowledge,
        result,
        remaining,
    })
}
