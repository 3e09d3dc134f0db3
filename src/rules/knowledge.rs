//! Constraint summary folded from the round history
//!
//! Every field is a digit- or position-indexed table with an explicit default:
//! - `min_count` defaults to 0
//! - `max_count` defaults to [`DEFAULT_MAX_COUNT`]
//! - position sets default to empty
//!
//! The summary is recomputed from scratch whenever it is needed and never stored,
//! so the same history and mode always give the same result.

use super::Mode;
use crate::core::{LENGTH, Mark, Round};
use std::fmt;

/// Upper bound for a digit nothing has constrained yet
pub const DEFAULT_MAX_COUNT: u8 = LENGTH as u8;

/// A set of positions (0-4), stored as a bitmask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PositionSet(u8);

impl PositionSet {
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, position: usize) {
        debug_assert!(position < LENGTH);
        self.0 |= 1 << position;
    }

    #[must_use]
    pub const fn contains(self, position: usize) -> bool {
        position < LENGTH && self.0 & (1 << position) != 0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Positions in ascending order
    pub fn iter(self) -> impl Iterator<Item = usize> {
        (0..LENGTH).filter(move |&p| self.contains(p))
    }
}

impl fmt::Display for PositionSet {
    /// 1-based positions, e.g. `{1, 4}`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let positions: Vec<String> = self.iter().map(|p| (p + 1).to_string()).collect();
        write!(f, "{{{}}}", positions.join(", "))
    }
}

/// Everything the history proves about the secret
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Knowledge {
    greens: [Option<u8>; LENGTH],
    min_count: [u8; 10],
    max_count: [u8; 10],
    banned_yellow: [PositionSet; 10],
    banned_all: [PositionSet; 10],
}

impl Default for Knowledge {
    fn default() -> Self {
        Self {
            greens: [None; LENGTH],
            min_count: [0; 10],
            max_count: [DEFAULT_MAX_COUNT; 10],
            banned_yellow: [PositionSet::empty(); 10],
            banned_all: [PositionSet::empty(); 10],
        }
    }
}

impl Knowledge {
    /// Fold every round of `history` in order
    ///
    /// Gray-derived position bans are only collected in [`Mode::Ultra`]; everything
    /// else is collected in every mode and left to the validator to enforce.
    #[must_use]
    pub fn aggregate(history: &[Round], mode: Mode) -> Self {
        let mut knowledge = Self::default();
        for round in history {
            knowledge.absorb(round, mode);
        }
        knowledge
    }

    fn absorb(&mut self, round: &Round, mode: Mode) {
        let guess = round.guess;
        let marks = round.verdict.marks();
        let mut matches = [0u8; 10];

        for (pos, &mark) in marks.iter().enumerate() {
            let digit = guess.digit_at(pos);
            let d = usize::from(digit);
            match mark {
                Mark::Green => {
                    self.greens[pos] = Some(digit);
                    matches[d] += 1;
                }
                Mark::Yellow => {
                    self.banned_yellow[d].insert(pos);
                    self.banned_all[d].insert(pos);
                    matches[d] += 1;
                }
                Mark::Gray => {}
            }
        }

        let counts = guess.counts();
        for d in (0..10).filter(|&d| counts[d] > 0) {
            let k = matches[d];
            self.min_count[d] = self.min_count[d].max(k);
            // k == 0 proves the digit is absent; otherwise at most k copies exist
            self.max_count[d] = self.max_count[d].min(k);

            if mode == Mode::Ultra && k > 0 {
                for (pos, &mark) in marks.iter().enumerate() {
                    if mark == Mark::Gray && usize::from(guess.digit_at(pos)) == d {
                        self.banned_all[d].insert(pos);
                    }
                }
            }
        }
    }

    /// Digit fixed at `position` by an earlier green
    #[must_use]
    pub fn green_at(&self, position: usize) -> Option<u8> {
        self.greens.get(position).copied().flatten()
    }

    /// Fixed positions and their digits, ascending by position
    pub fn greens(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.greens
            .iter()
            .enumerate()
            .filter_map(|(pos, digit)| digit.map(|d| (pos, d)))
    }

    /// Fewest copies of `digit` a guess must contain (0 if unconstrained)
    #[must_use]
    pub fn min_count(&self, digit: u8) -> u8 {
        self.min_count[usize::from(digit)]
    }

    /// Most copies of `digit` the secret can contain ([`DEFAULT_MAX_COUNT`] if unconstrained)
    #[must_use]
    pub fn max_count(&self, digit: u8) -> u8 {
        self.max_count[usize::from(digit)]
    }

    /// Positions ruled out for `digit` by yellow feedback
    #[must_use]
    pub fn banned_yellow(&self, digit: u8) -> PositionSet {
        self.banned_yellow[usize::from(digit)]
    }

    /// Positions ruled out for `digit` by yellow feedback or, in Ultra, by gray copies
    #[must_use]
    pub fn banned_all(&self, digit: u8) -> PositionSet {
        self.banned_all[usize::from(digit)]
    }

    /// The history proves the secret has none of `digit`
    #[must_use]
    pub fn is_excluded(&self, digit: u8) -> bool {
        self.max_count(digit) == 0
    }
}

/// Summarize the rounds played before `upto_round`
///
/// Rounds past the end of `history` have not been played yet and are skipped.
#[must_use]
pub fn aggregate(history: &[Round], upto_round: usize, mode: Mode) -> Knowledge {
    let played = upto_round.min(history.len());
    Knowledge::aggregate(&history[..played], mode)
}
