//! Five-digit number representation
//!
//! `Digits` is used for both the secret and every guess. Leading zeros are significant,
//! so the value is stored per position rather than as a single integer.

use rand::Rng;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of positions in a secret or guess
pub const LENGTH: usize = 5;

/// Largest value a secret can take
pub const MAX_VALUE: u32 = 99_999;

/// A five-digit guess or secret, `00000` through `99999`
///
/// Each position holds a digit value in `0..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digits([u8; LENGTH]);

/// Error type for malformed digit strings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DigitsError {
    #[error("Enter exactly 5 digits (got {0}).")]
    InvalidLength(usize),
    #[error("Only the digits 0-9 are allowed.")]
    InvalidCharacters,
}

impl Digits {
    /// Create digits from an exact five-character digit string
    ///
    /// No cleanup is applied; run raw user input through [`sanitize`] first.
    ///
    /// # Errors
    /// Returns `DigitsError` if:
    /// - Length is not exactly 5 characters
    /// - Any character is not an ASCII digit
    ///
    /// # Examples
    /// ```
    /// use numberdle::core::Digits;
    ///
    /// let digits = Digits::new("01234").unwrap();
    /// assert_eq!(digits.to_string(), "01234");
    /// assert_eq!(digits.value(), 1234);
    ///
    /// assert!(Digits::new("1234").is_err());
    /// assert!(Digits::new("12a45").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, DigitsError> {
        let count = text.chars().count();
        if count != LENGTH {
            return Err(DigitsError::InvalidLength(count));
        }

        let mut digits = [0u8; LENGTH];
        for (slot, ch) in digits.iter_mut().zip(text.chars()) {
            let digit = ch.to_digit(10).ok_or(DigitsError::InvalidCharacters)?;
            *slot = digit as u8;
        }

        Ok(Self(digits))
    }

    /// Build digits from an integer in `0..=99999`, zero-padded on the left
    ///
    /// Returns `None` if the value does not fit in five digits.
    #[must_use]
    pub fn from_value(value: u32) -> Option<Self> {
        if value > MAX_VALUE {
            return None;
        }

        let mut digits = [0u8; LENGTH];
        let mut rest = value;
        for slot in digits.iter_mut().rev() {
            *slot = (rest % 10) as u8;
            rest /= 10;
        }

        Some(Self(digits))
    }

    /// Draw a uniformly random secret from `00000..=99999`
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let value = rng.random_range(0..=MAX_VALUE);
        Self::from_value(value).unwrap_or(Self([0; LENGTH]))
    }

    /// Get the digit values as an array
    #[inline]
    #[must_use]
    pub const fn digits(&self) -> &[u8; LENGTH] {
        &self.0
    }

    /// Get the digit at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn digit_at(&self, position: usize) -> u8 {
        self.0[position]
    }

    /// Integer value of the number, ignoring leading zeros
    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
            .iter()
            .fold(0, |acc, &digit| acc * 10 + u32::from(digit))
    }

    /// Occurrences of each digit value, indexed by digit
    #[must_use]
    pub fn counts(&self) -> [u8; 10] {
        let mut counts = [0u8; 10];
        for &digit in &self.0 {
            counts[usize::from(digit)] += 1;
        }
        counts
    }

    /// Check whether any digit occurs more than once
    #[must_use]
    pub fn has_repeats(&self) -> bool {
        self.counts().iter().any(|&count| count > 1)
    }

    /// Sum of all five digits
    #[must_use]
    pub fn digit_sum(&self) -> u32 {
        self.0.iter().map(|&digit| u32::from(digit)).sum()
    }
}

impl fmt::Display for Digits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &digit in &self.0 {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

impl FromStr for Digits {
    type Err = DigitsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Strip every non-digit character and keep at most the first five digits
///
/// This is what any text-capture front end runs before handing input to the engine.
///
/// # Examples
/// ```
/// use numberdle::core::sanitize;
///
/// assert_eq!(sanitize("12-3a45"), "12345");
/// assert_eq!(sanitize(" 9 8 7 6 5 4 "), "98765");
/// assert_eq!(sanitize("abc"), "");
/// ```
#[must_use]
pub fn sanitize(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(LENGTH)
        .collect()
}

/// Pick a fresh secret using the thread-local generator
#[must_use]
pub fn new_secret() -> Digits {
    Digits::random(&mut rand::rng())
}
