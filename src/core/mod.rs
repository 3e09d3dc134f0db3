//! Core domain types for Numberdle
//!
//! Digits, verdicts and rounds, plus the scoring rule that links them.
//! Everything here is pure and has no knowledge of difficulty modes.

mod digits;
mod round;
mod verdict;

pub use digits::{Digits, DigitsError, LENGTH, MAX_VALUE, new_secret, sanitize};
pub use round::{Round, RoundParseError};
pub use verdict::{Mark, Verdict, score};
