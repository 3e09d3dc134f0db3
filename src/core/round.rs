//! One accepted guess together with its feedback

use super::digits::{Digits, DigitsError};
use super::verdict::Verdict;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A scored guess in the game history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Round {
    pub guess: Digits,
    pub verdict: Verdict,
}

/// Error type for `GUESS:FEEDBACK` round strings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundParseError {
    #[error("Round must look like GUESS:FEEDBACK, e.g. 12345:GY-G-")]
    MissingSeparator,
    #[error("Invalid guess in round: {0}")]
    Guess(#[from] DigitsError),
    #[error("Invalid feedback in round: {0}")]
    Feedback(String),
}

impl Round {
    #[must_use]
    pub const fn new(guess: Digits, verdict: Verdict) -> Self {
        Self { guess, verdict }
    }

    /// Score `guess` against `secret` and keep both
    #[must_use]
    pub fn scored(secret: &Digits, guess: Digits) -> Self {
        Self::new(guess, Verdict::calculate(secret, &guess))
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.guess, self.verdict.to_emoji())
    }
}

impl FromStr for Round {
    type Err = RoundParseError;

    /// Parse `12345:GY-G-`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (guess, feedback) = s
            .split_once(':')
            .ok_or(RoundParseError::MissingSeparator)?;
        let guess = Digits::new(guess.trim())?;
        let verdict = Verdict::parse(feedback.trim())
            .ok_or_else(|| RoundParseError::Feedback(feedback.to_string()))?;
        Ok(Self::new(guess, verdict))
    }
}
