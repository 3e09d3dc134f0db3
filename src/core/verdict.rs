//! Per-position feedback for a guess
//!
//! A verdict encodes the feedback using base-3 digits:
//! - 0 = Gray (digit absent, or every copy already accounted for)
//! - 1 = Yellow (digit present, wrong position)
//! - 2 = Green (digit in the correct position)
//!
//! The verdict is stored as a single u8 value (0-242), where each position
//! contributes mark × 3^position to the total.

use super::digits::{Digits, LENGTH};
use std::fmt;

/// Feedback tag for one position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Gray,
    Yellow,
    Green,
}

impl Mark {
    const fn from_code(code: u8) -> Self {
        match code {
            2 => Self::Green,
            1 => Self::Yellow,
            _ => Self::Gray,
        }
    }

    const fn code(self) -> u8 {
        match self {
            Self::Gray => 0,
            Self::Yellow => 1,
            Self::Green => 2,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Gray => "gray",
            Self::Yellow => "yellow",
            Self::Green => "green",
        };
        f.write_str(name)
    }
}

/// Feedback for one scored guess
///
/// Represents the colored feedback as a single byte value.
/// Value range: 0-242 (3^5 - 1 = 243 possible verdicts)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Verdict(u8);

impl Verdict {
    /// All greens (the guess is the secret)
    pub const PERFECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Build a verdict from five marks in position order
    #[must_use]
    pub fn from_marks(marks: [Mark; LENGTH]) -> Self {
        let mut value = 0u8;
        let mut multiplier = 1u8;
        for mark in marks {
            value += mark.code() * multiplier;
            multiplier = multiplier.wrapping_mul(3);
        }
        Self(value)
    }

    /// Get the raw verdict value (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Mark at a position (0-4)
    #[must_use]
    pub fn mark(self, position: usize) -> Mark {
        let mut val = self.0;
        for _ in 0..position {
            val /= 3;
        }
        Mark::from_code(val % 3)
    }

    /// Decode all five marks in position order
    #[must_use]
    pub fn marks(self) -> [Mark; LENGTH] {
        let mut marks = [Mark::Gray; LENGTH];
        let mut val = self.0;
        for mark in &mut marks {
            *mark = Mark::from_code(val % 3);
            val /= 3;
        }
        marks
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == 242
    }

    /// Score `guess` against `secret`
    ///
    /// Two passes keep duplicate digits honest: greens are settled first and every
    /// unmatched secret digit goes into a tally; the remaining guess positions then
    /// claim yellows from that tally strictly left to right.
    ///
    /// # Examples
    /// ```
    /// use numberdle::core::{Digits, Mark, Verdict};
    ///
    /// let secret = Digits::new("11223").unwrap();
    /// let guess = Digits::new("21321").unwrap();
    /// let verdict = Verdict::calculate(&secret, &guess);
    ///
    /// use Mark::{Green, Yellow};
    /// assert_eq!(verdict.marks(), [Yellow, Green, Yellow, Green, Yellow]);
    /// ```
    #[must_use]
    pub fn calculate(secret: &Digits, guess: &Digits) -> Self {
        let mut marks = [Mark::Gray; LENGTH];
        let mut remaining = [0u8; 10];

        // First pass: greens, and tally the secret digits left unmatched
        for (i, mark) in marks.iter_mut().enumerate() {
            if guess.digit_at(i) == secret.digit_at(i) {
                *mark = Mark::Green;
            } else {
                remaining[usize::from(secret.digit_at(i))] += 1;
            }
        }

        // Second pass: yellows from the tally, left to right
        for (i, mark) in marks.iter_mut().enumerate() {
            if *mark == Mark::Green {
                continue;
            }
            let slot = &mut remaining[usize::from(guess.digit_at(i))];
            if *slot > 0 {
                *mark = Mark::Yellow;
                *slot -= 1;
            }
        }

        Self::from_marks(marks)
    }

    /// Parse a verdict from a string like "GY-G-" or "🟩🟨⬜🟩⬜"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for green
    /// - 'Y'/'y'/🟨 for yellow
    /// - '-'/'_'/'.'/⬜ for gray
    ///
    /// # Examples
    /// ```
    /// use numberdle::core::Verdict;
    ///
    /// let v1 = Verdict::parse("GY-GY").unwrap();
    /// let v2 = Verdict::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(v1, v2);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();

        if chars.len() != LENGTH {
            return None;
        }

        let mut marks = [Mark::Gray; LENGTH];
        for (mark, ch) in marks.iter_mut().zip(chars) {
            *mark = match ch {
                'G' | 'g' | '🟩' => Mark::Green,
                'Y' | 'y' | '🟨' => Mark::Yellow,
                '-' | '_' | '.' | '⬜' => Mark::Gray,
                _ => return None,
            };
        }

        Some(Self::from_marks(marks))
    }

    /// Convert verdict to emoji string
    ///
    /// # Examples
    /// ```
    /// use numberdle::core::Verdict;
    ///
    /// let v = Verdict::parse("GY-GY").unwrap();
    /// assert_eq!(v.to_emoji(), "🟩🟨⬜🟩🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.marks()
            .iter()
            .map(|mark| match mark {
                Mark::Green => '🟩',
                Mark::Yellow => '🟨',
                Mark::Gray => '⬜',
            })
            .collect()
    }
}

impl std::str::FromStr for Verdict {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}

/// Score a guess against the secret
///
/// Free-function form of [`Verdict::calculate`].
#[must_use]
pub fn score(secret: &Digits, guess: &Digits) -> Verdict {
    Verdict::calculate(secret, guess)
}

#[cfg(test)]
mod tests {
    use super::*;
    use Mark::{Gray, Green, Yellow};
    use proptest::prelude::*;

    fn digits(s: &str) -> Digits {
        Digits::new(s).unwrap()
    }

    fn count(verdict: Verdict, mark: Mark) -> usize {
        verdict.marks().iter().filter(|&&m| m == mark).count()
    }

    #[test]
    fn verdict_perfect_constant() {
        assert_eq!(Verdict::PERFECT.value(), 242);
        assert!(Verdict::PERFECT.is_perfect());
        assert_eq!(count(Verdict::PERFECT, Green), 5);
        assert_eq!(count(Verdict::PERFECT, Yellow), 0);
        assert_eq!(Verdict::from_marks([Green; 5]), Verdict::PERFECT);
    }

    #[test]
    fn verdict_all_gray() {
        let verdict = score(&digits("12345"), &digits("67890"));

        assert_eq!(verdict.value(), 0);
        assert_eq!(verdict.marks(), [Gray; 5]);
    }

    #[test]
    fn verdict_duplicate_golden_fixture() {
        let verdict = score(&digits("11223"), &digits("21321"));
        assert_eq!(verdict.marks(), [Yellow, Green, Yellow, Green, Yellow]);
    }

    #[test]
    fn verdict_extra_copies_are_gray() {
        // Secret has a single 7; only the green copy counts
        let verdict = score(&digits("70000"), &digits("77777"));
        assert_eq!(verdict.marks(), [Green, Gray, Gray, Gray, Gray]);
    }

    #[test]
    fn verdict_yellow_tie_break_is_left_to_right() {
        // Secret has one 5, not at positions 0 or 1; the leftmost 5 wins the yellow
        let verdict = score(&digits("12345"), &digits("55000"));
        assert_eq!(verdict.marks(), [Yellow, Gray, Gray, Gray, Gray]);
    }

    #[test]
    fn verdict_green_takes_priority_over_earlier_yellow() {
        // The 3 at position 2 is green, so the earlier 3 has nothing left to claim
        let verdict = score(&digits("00300"), &digits("33300"));
        assert_eq!(verdict.marks(), [Gray, Gray, Green, Green, Green]);
    }

    #[test]
    fn verdict_mark_accessor_matches_marks() {
        let verdict = Verdict::from_marks([Yellow, Green, Gray, Yellow, Green]);
        for (i, mark) in verdict.marks().into_iter().enumerate() {
            assert_eq!(verdict.mark(i), mark);
        }
        assert_eq!(count(verdict, Green), 2);
        assert_eq!(count(verdict, Yellow), 2);
    }

    #[test]
    fn verdict_parse_valid() {
        let v1 = Verdict::parse("GYG--").unwrap();
        let v2 = Verdict::parse("🟩🟨🟩⬜⬜").unwrap();
        let v3 = Verdict::parse("gyg._").unwrap();

        assert_eq!(v1, v2);
        assert_eq!(v1, v3);

        // G=2, Y=1, G=2, -=0, -=0
        // 2 + 1×3 + 2×9 + 0×27 + 0×81 = 23
        assert_eq!(v1.value(), 23);
    }

    #[test]
    fn verdict_parse_invalid() {
        assert!(Verdict::parse("GYGGYX").is_none());
        assert!(Verdict::parse("GYG").is_none());
        assert!(Verdict::parse("GXGGY").is_none());
        assert!(Verdict::parse("").is_none());
        assert!("GXGGY".parse::<Verdict>().is_err());
    }

    #[test]
    fn mark_display() {
        assert_eq!(Green.to_string(), "green");
        assert_eq!(Yellow.to_string(), "yellow");
        assert_eq!(Gray.to_string(), "gray");
    }

    fn any_digits() -> impl Strategy<Value = Digits> {
        (0u32..=99_999).prop_map(|v| Digits::from_value(v).unwrap())
    }

    proptest! {
        #[test]
        fn greens_equal_exact_matches(secret in any_digits(), guess in any_digits()) {
            let verdict = score(&secret, &guess);
            let exact = (0..LENGTH)
                .filter(|&i| secret.digit_at(i) == guess.digit_at(i))
                .count();
            prop_assert_eq!(count(verdict, Green), exact);
        }

        #[test]
        fn matches_never_exceed_secret_counts(secret in any_digits(), guess in any_digits()) {
            let verdict = score(&secret, &guess);
            let secret_counts = secret.counts();
            let mut matched = [0u8; 10];
            for (i, mark) in verdict.marks().into_iter().enumerate() {
                if mark != Gray {
                    matched[usize::from(guess.digit_at(i))] += 1;
                }
            }
            for d in 0..10 {
                prop_assert!(matched[d] <= secret_counts[d]);
            }
        }

        #[test]
        fn scoring_secret_against_itself_is_perfect(secret in any_digits()) {
            prop_assert!(score(&secret, &secret).is_perfect());
        }
    }
}
