//! Per-round hints about the secret
//!
//! Five candidate facts are built in a fixed order and two of them are picked.
//! The choice depends only on the secret and the round index, never on the guess
//! or the clock, so replaying a game shows the same hints.
//!
//! # Seeding
//! The generator is a PCG-32 seeded with `(secret_value << 32) | round_index`.
//! Draw order is fixed: first the adjacent pair for the relation fact
//! (`random_range(0..4)`), then two distinct candidate indices
//! (`rand::seq::index::sample(rng, 5, 2)`), which are reported in candidate order.

use crate::core::{Digits, LENGTH, MAX_VALUE};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use std::cmp::Ordering;
use std::fmt;

/// Number of candidate facts
pub const CANDIDATE_COUNT: usize = 5;

/// Number of facts reported per round
pub const HINTS_PER_ROUND: usize = 2;

/// Narrowest padding on either side of the range fact
const MIN_RANGE_PAD: u32 = 50;

const ADJACENT_PAIRS: [(usize, usize); LENGTH - 1] = [(0, 1), (1, 2), (2, 3), (3, 4)];

/// A fact about the secret
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    /// Inclusive bounds containing the secret
    Range { low: u32, high: u32 },
    /// Parity of the secret's value
    Parity { even: bool },
    /// Digit sum reduced mod 3
    DigitSumMod3(u32),
    /// Relation between two adjacent positions (0-based)
    PairRelation {
        first: usize,
        second: usize,
        relation: Ordering,
    },
    /// Whether any digit occurs more than once
    Repetition { repeats: bool },
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Range { low, high } => {
                write!(f, "The number is between {low:05} and {high:05}.")
            }
            Self::Parity { even: true } => f.write_str("It is an even number."),
            Self::Parity { even: false } => f.write_str("It is an odd number."),
            Self::DigitSumMod3(rem) => write!(f, "Sum of digits {rem} (mod 3)."),
            Self::PairRelation {
                first,
                second,
                relation,
            } => {
                let symbol = match relation {
                    Ordering::Less => '<',
                    Ordering::Greater => '>',
                    Ordering::Equal => '=',
                };
                write!(f, "Digit {} {symbol} digit {}.", first + 1, second + 1)
            }
            Self::Repetition { repeats: true } => f.write_str("At least one digit repeats."),
            Self::Repetition { repeats: false } => f.write_str("All digits are distinct."),
        }
    }
}

/// Seed for the hint generator of one round
#[must_use]
pub fn hint_seed(secret: &Digits, round_index: u32) -> u64 {
    (u64::from(secret.value()) << 32) | u64::from(round_index)
}

/// Bounds around the guess and the secret, padded by a fifth of their distance
///
/// # Examples
/// ```
/// use numberdle::core::Digits;
/// use numberdle::rules::range_bounds;
///
/// let guess = Digits::new("12345").unwrap();
/// let secret = Digits::new("12000").unwrap();
/// assert_eq!(range_bounds(&guess, &secret), (11_931, 12_414));
/// ```
#[must_use]
pub fn range_bounds(guess: &Digits, secret: &Digits) -> (u32, u32) {
    let (g, s) = (guess.value(), secret.value());
    let (lo, hi) = (g.min(s), g.max(s));
    let pad = MIN_RANGE_PAD.max((hi - lo) / 5);
    (lo.saturating_sub(pad), (hi + pad).min(MAX_VALUE))
}

/// Build the five candidate facts in their fixed order
fn candidates<R: Rng>(secret: &Digits, guess: &Digits, rng: &mut R) -> [Hint; CANDIDATE_COUNT] {
    let (low, high) = range_bounds(guess, secret);
    let (first, second) = ADJACENT_PAIRS[rng.random_range(0..ADJACENT_PAIRS.len())];

    [
        Hint::Range { low, high },
        Hint::Parity {
            even: secret.value() % 2 == 0,
        },
        Hint::DigitSumMod3(secret.digit_sum() % 3),
        Hint::PairRelation {
            first,
            second,
            relation: secret.digit_at(first).cmp(&secret.digit_at(second)),
        },
        Hint::Repetition {
            repeats: secret.has_repeats(),
        },
    ]
}

/// Pick the two hints shown after `guess` in round `round_index`
///
/// The result is sorted by candidate order, not by draw order.
#[must_use]
pub fn hints(secret: &Digits, guess: &Digits, round_index: u32) -> [Hint; HINTS_PER_ROUND] {
    let mut rng = Pcg32::seed_from_u64(hint_seed(secret, round_index));
    let facts = candidates(secret, guess, &mut rng);

    let mut picked =
        rand::seq::index::sample(&mut rng, CANDIDATE_COUNT, HINTS_PER_ROUND).into_vec();
    picked.sort_unstable();

    [facts[picked[0]], facts[picked[1]]]
}

/// Hint sentences for display
#[must_use]
pub fn hint_texts(secret: &Digits, guess: &Digits, round_index: u32) -> [String; HINTS_PER_ROUND] {
    hints(secret, guess, round_index).map(|hint| hint.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits(s: &str) -> Digits {
        Digits::new(s).unwrap()
    }

    fn candidate_rank(hint: &Hint) -> usize {
        match hint {
            Hint::Range { .. } => 0,
            Hint::Parity { .. } => 1,
            Hint::DigitSumMod3(_) => 2,
            Hint::PairRelation { .. } => 3,
            Hint::Repetition { .. } => 4,
        }
    }

    #[test]
    fn hints_are_deterministic() {
        let secret = digits("48213");
        let guess = digits("12345");
        for round in 0..6 {
            assert_eq!(hints(&secret, &guess, round), hints(&secret, &guess, round));
        }
    }

    #[test]
    fn hint_selection_is_pinned() {
        let texts = |secret: &str, guess: &str, round| {
            hint_texts(&digits(secret), &digits(guess), round)
        };

        assert_eq!(
            texts("48213", "12345", 0),
            ["It is an odd number.", "All digits are distinct."]
        );
        assert_eq!(
            texts("48213", "12345", 1),
            ["It is an odd number.", "All digits are distinct."]
        );
        assert_eq!(
            texts("48213", "12345", 2),
            ["The number is between 05172 and 55386.", "Sum of digits 0 (mod 3)."]
        );
        assert_eq!(
            texts("00007", "99999", 0),
            ["Digit 1 = digit 2.", "At least one digit repeats."]
        );
        assert_eq!(
            texts("00007", "99999", 1),
            ["Sum of digits 1 (mod 3).", "At least one digit repeats."]
        );
    }

    #[test]
    fn hint_selection_ignores_guess_content() {
        let secret = digits("48213");
        let a = hints(&secret, &digits("00000"), 2);
        let b = hints(&secret, &digits("99999"), 2);
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(candidate_rank(x), candidate_rank(y));
        }
    }

    #[test]
    fn hints_are_distinct_and_in_candidate_order() {
        for value in (0..=MAX_VALUE).step_by(7919) {
            let secret = Digits::from_value(value).unwrap();
            for round in 0..6 {
                let [first, second] = hints(&secret, &digits("55555"), round);
                assert!(candidate_rank(&first) < candidate_rank(&second));
            }
        }
    }

    #[test]
    fn hints_hold_for_the_secret() {
        let secret = digits("30712");
        let guess = digits("45678");
        for round in 0..6 {
            for hint in hints(&secret, &guess, round) {
                match hint {
                    Hint::Range { low, high } => {
                        assert!((low..=high).contains(&secret.value()));
                    }
                    Hint::Parity { even } => assert!(even),
                    Hint::DigitSumMod3(rem) => assert_eq!(rem, 13 % 3),
                    Hint::PairRelation {
                        first,
                        second,
                        relation,
                    } => {
                        assert_eq!(second, first + 1);
                        assert_eq!(
                            secret.digit_at(first).cmp(&secret.digit_at(second)),
                            relation
                        );
                    }
                    Hint::Repetition { repeats } => assert!(!repeats),
                }
            }
        }
    }

    #[test]
    fn hints_never_spell_out_the_secret() {
        let secret = digits("27183");
        for round in 0..6 {
            for text in hint_texts(&secret, &digits("31415"), round) {
                assert!(!text.contains("27183"), "leaked secret in {text:?}");
            }
        }
    }

    #[test]
    fn range_bounds_padding_and_clamping() {
        // Close values fall back to the minimum pad
        assert_eq!(
            range_bounds(&digits("50000"), &digits("50010")),
            (49_950, 50_060)
        );
        // Clamped at both ends
        assert_eq!(range_bounds(&digits("00000"), &digits("00010")), (0, 60));
        assert_eq!(
            range_bounds(&digits("00000"), &digits("99999")),
            (0, MAX_VALUE)
        );
    }

    #[test]
    fn hint_display_text() {
        assert_eq!(
            Hint::Range { low: 120, high: 4500 }.to_string(),
            "The number is between 00120 and 04500."
        );
        assert_eq!(Hint::Parity { even: true }.to_string(), "It is an even number.");
        assert_eq!(Hint::DigitSumMod3(2).to_string(), "Sum of digits 2 (mod 3).");
        assert_eq!(
            Hint::PairRelation {
                first: 2,
                second: 3,
                relation: Ordering::Greater
            }
            .to_string(),
            "Digit 3 > digit 4."
        );
        assert_eq!(
            Hint::Repetition { repeats: false }.to_string(),
            "All digits are distinct."
        );
    }

    #[test]
    fn hint_seed_separates_rounds() {
        let secret = digits("00001");
        assert_eq!(hint_seed(&secret, 0), 1 << 32);
        assert_ne!(hint_seed(&secret, 0), hint_seed(&secret, 1));
    }
}
