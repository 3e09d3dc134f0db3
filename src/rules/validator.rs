//! Difficulty-mode checks for a new guess
//!
//! Checks run in a fixed order and the first failure is reported:
//! 1. green positions keep their digit
//! 2. every known digit appears at least `min_count` times
//! 3. no digit sits where it was yellow before
//! 4. Ultra only: excluded digits, maximum counts, then gray-derived position bans
//!
//! Within each check, positions and digits are visited in ascending order.

use super::{Knowledge, Mode};
use crate::core::{Digits, Round};
use thiserror::Error;

/// Why a guess breaks the active mode
///
/// Positions are 0-based; messages show them 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("Position {} must be {digit} based on previous feedback.", .position + 1)]
    GreenMoved { position: usize, digit: u8 },

    #[error("Use digit {digit} at least {required} time(s); missing {missing}.")]
    MissingDigit { digit: u8, required: u8, missing: u8 },

    #[error("Digit {digit} cannot be in position {} (yellow earlier).", .position + 1)]
    YellowPosition { digit: u8, position: usize },

    #[error("Digit {digit} is not in the number based on earlier feedback.")]
    ExcludedDigit { digit: u8 },

    #[error("Too many '{digit}' digits; max allowed is {max}.")]
    TooMany { digit: u8, max: u8 },

    #[error("Digit {digit} cannot be in position {} (ruled out earlier).", .position + 1)]
    RuledOutPosition { digit: u8, position: usize },
}

/// Check `candidate` against everything `history` proves, under `mode`
///
/// [`Mode::Normal`] accepts every candidate without looking at the history.
///
/// # Errors
/// Returns the first [`Rejection`] in check order.
///
/// # Examples
/// ```
/// use numberdle::core::{Digits, Round};
/// use numberdle::rules::{Mode, Rejection, validate};
///
/// let history = ["12345:G----".parse::<Round>().unwrap()];
/// let ok = Digits::new("12999").unwrap();
/// let moved = Digits::new("22999").unwrap();
///
/// assert_eq!(validate(&ok, &history, Mode::Hard), Ok(()));
/// assert_eq!(
///     validate(&moved, &history, Mode::Hard),
///     Err(Rejection::GreenMoved { position: 0, digit: 1 })
/// );
/// ```
pub fn validate(candidate: &Digits, history: &[Round], mode: Mode) -> Result<(), Rejection> {
    if !mode.is_constrained() {
        return Ok(());
    }

    let knowledge = Knowledge::aggregate(history, mode);
    check(candidate, &knowledge, mode)
}

/// Check `candidate` against an already aggregated summary
///
/// # Errors
/// Returns the first [`Rejection`] in check order.
pub fn check(candidate: &Digits, knowledge: &Knowledge, mode: Mode) -> Result<(), Rejection> {
    if !mode.is_constrained() {
        return Ok(());
    }

    for (position, digit) in knowledge.greens() {
        if candidate.digit_at(position) != digit {
            return Err(Rejection::GreenMoved { position, digit });
        }
    }

    let counts = candidate.counts();

    for digit in 0..10u8 {
        let required = knowledge.min_count(digit);
        let have = counts[usize::from(digit)];
        if have < required {
            return Err(Rejection::MissingDigit {
                digit,
                required,
                missing: required - have,
            });
        }
    }

    for digit in 0..10u8 {
        if let Some(position) = knowledge
            .banned_yellow(digit)
            .iter()
            .find(|&p| candidate.digit_at(p) == digit)
        {
            return Err(Rejection::YellowPosition { digit, position });
        }
    }

    if mode == Mode::Ultra {
        for digit in 0..10u8 {
            let have = counts[usize::from(digit)];
            let max = knowledge.max_count(digit);
            if max == 0 && have > 0 {
                return Err(Rejection::ExcludedDigit { digit });
            }
            if have > max {
                return Err(Rejection::TooMany { digit, max });
            }
        }

        for digit in 0..10u8 {
            if let Some(position) = knowledge
                .banned_all(digit)
                .iter()
                .find(|&p| candidate.digit_at(p) == digit)
            {
                return Err(Rejection::RuledOutPosition { digit, position });
            }
        }
    }

    Ok(())
}
