//! Difficulty policies

use std::fmt;
use std::str::FromStr;

/// Which history checks a new guess must pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// No restrictions between guesses
    #[default]
    Normal,
    /// Greens stay fixed, known digits must be reused, yellow spots are off limits
    Hard,
    /// Hard rules plus exact maximum counts and gray-derived position bans
    Ultra,
}

impl Mode {
    pub const ALL: [Self; 3] = [Self::Normal, Self::Hard, Self::Ultra];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Hard => "Hard",
            Self::Ultra => "Ultra",
        }
    }

    /// Short rule summary for help screens
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Normal => "No restrictions between guesses.",
            Self::Hard => {
                "Green digits stay put; yellow digits must be reused, but not in the same spot."
            }
            Self::Ultra => {
                "Hard rules plus: gray digits are out, and no digit may exceed its known count."
            }
        }
    }

    /// Cycle Normal -> Hard -> Ultra -> Normal
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Normal => Self::Hard,
            Self::Hard => Self::Ultra,
            Self::Ultra => Self::Normal,
        }
    }

    /// Whether any history-based checks apply
    #[inline]
    #[must_use]
    pub const fn is_constrained(self) -> bool {
        !matches!(self, Self::Normal)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" | "n" => Ok(Self::Normal),
            "hard" | "h" => Ok(Self::Hard),
            "ultra" | "u" => Ok(Self::Ultra),
            other => Err(format!("Unknown mode '{other}' (expected normal, hard or ultra)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_parse_case_insensitive() {
        assert_eq!("Hard".parse::<Mode>(), Ok(Mode::Hard));
        assert_eq!("ULTRA".parse::<Mode>(), Ok(Mode::Ultra));
        assert_eq!(" normal ".parse::<Mode>(), Ok(Mode::Normal));
        assert!("expert".parse::<Mode>().is_err());
    }

    #[test]
    fn mode_cycle_visits_all() {
        let mut mode = Mode::default();
        for expected in [Mode::Hard, Mode::Ultra, Mode::Normal] {
            mode = mode.next();
            assert_eq!(mode, expected);
        }
    }

    #[test]
    fn only_normal_is_unconstrained() {
        assert!(!Mode::Normal.is_constrained());
        assert!(Mode::Hard.is_constrained());
        assert!(Mode::Ultra.is_constrained());
    }
}
