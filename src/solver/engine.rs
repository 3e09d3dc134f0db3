//! Constraint-following auto-player

use crate::core::{Digits, MAX_VALUE, Round, score};
use crate::game::{GameSession, GameStatus};
use crate::rules::{self, Knowledge, Mode};

const CANDIDATE_SPACE: u32 = MAX_VALUE + 1;

/// Plays by always guessing a number that could still be the secret
///
/// Candidates are scanned cyclically from `start`, so different start values give
/// different but reproducible games.
#[derive(Debug, Clone, Copy)]
pub struct Solver {
    mode: Mode,
    start: u32,
}

/// How an automatic game went
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameReport {
    pub secret: Digits,
    pub rounds: Vec<Round>,
    pub status: GameStatus,
    /// No candidate was both consistent and allowed by the mode
    pub stuck: bool,
}

impl Solver {
    #[must_use]
    pub const fn new(mode: Mode, start: u32) -> Self {
        Self {
            mode,
            start: start % CANDIDATE_SPACE,
        }
    }

    /// Whether `candidate` would have produced every recorded verdict
    #[must_use]
    pub fn is_consistent(candidate: &Digits, history: &[Round]) -> bool {
        history
            .iter()
            .all(|round| score(candidate, &round.guess) == round.verdict)
    }

    fn candidates(&self) -> impl Iterator<Item = Digits> + '_ {
        (0..CANDIDATE_SPACE)
            .filter_map(move |offset| Digits::from_value((self.start + offset) % CANDIDATE_SPACE))
    }

    /// Next guess: the first consistent candidate the mode also accepts
    ///
    /// Returns `None` if no such candidate exists.
    #[must_use]
    pub fn next_guess(&self, history: &[Round]) -> Option<Digits> {
        let knowledge = Knowledge::aggregate(history, self.mode);
        self.candidates().find(|candidate| {
            Self::is_consistent(candidate, history)
                && rules::check(candidate, &knowledge, self.mode).is_ok()
        })
    }

    /// Count candidates still consistent with the history, ignoring the mode
    #[must_use]
    pub fn count_candidates(&self, history: &[Round]) -> usize {
        self.candidates()
            .filter(|candidate| Self::is_consistent(candidate, history))
            .count()
    }

    /// Play a full game against `secret`
    #[must_use]
    pub fn play(&self, secret: Digits) -> GameReport {
        let mut session = GameSession::with_secret(secret, self.mode);
        let mut stuck = false;

        while !session.status().is_over() {
            let Some(guess) = self.next_guess(session.rounds()) else {
                stuck = true;
                session.give_up();
                break;
            };
            if session.submit_digits(guess).is_err() {
                stuck = true;
                session.give_up();
            }
        }

        GameReport {
            secret,
            rounds: session.rounds().to_vec(),
            status: session.status(),
            stuck,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::MAX_ROUNDS;

    fn digits(s: &str) -> Digits {
        Digits::new(s).unwrap()
    }

    #[test]
    fn first_guess_is_start_value() {
        let solver = Solver::new(Mode::Normal, 4242);
        assert_eq!(solver.next_guess(&[]), Some(digits("04242")));
    }

    #[test]
    fn start_wraps_around() {
        let solver = Solver::new(Mode::Normal, CANDIDATE_SPACE + 7);
        assert_eq!(solver.next_guess(&[]), Some(digits("00007")));
    }

    #[test]
    fn consistency_check() {
        let secret = digits("31500");
        let history = [Round::scored(&secret, digits("12100"))];
        assert!(Solver::is_consistent(&secret, &history));
        assert!(!Solver::is_consistent(&digits("12100"), &history));
    }

    #[test]
    fn next_guess_is_consistent_and_valid() {
        let secret = digits("86420");
        let history = [
            Round::scored(&secret, digits("12345")),
            Round::scored(&secret, digits("60480")),
        ];
        for mode in [Mode::Normal, Mode::Hard] {
            let guess = Solver::new(mode, 0).next_guess(&history).unwrap();
            assert!(Solver::is_consistent(&guess, &history));
            assert_eq!(rules::validate(&guess, &history, mode), Ok(()));
        }
    }

    #[test]
    fn secret_is_always_a_candidate() {
        let secret = digits("27083");
        let history = [Round::scored(&secret, digits("11111"))];
        let solver = Solver::new(Mode::Normal, 0);
        // Every number without a 1 is still possible
        assert_eq!(solver.count_candidates(&history), 9usize.pow(5));
    }

    #[test]
    fn play_wins_in_normal_and_hard() {
        for mode in [Mode::Normal, Mode::Hard] {
            for (secret, start) in [("27183", 0), ("00000", 50_000), ("99899", 12_345)] {
                let report = Solver::new(mode, start).play(digits(secret));
                assert!(!report.stuck);
                assert!(report.rounds.len() <= MAX_ROUNDS);
                if let GameStatus::Won { tries } = report.status {
                    assert_eq!(tries, report.rounds.len());
                    assert_eq!(report.rounds.last().unwrap().guess, report.secret);
                } else {
                    assert_eq!(report.status, GameStatus::Lost);
                    assert_eq!(report.rounds.len(), MAX_ROUNDS);
                }
            }
        }
    }

    #[test]
    fn play_is_reproducible() {
        let solver = Solver::new(Mode::Ultra, 777);
        assert_eq!(solver.play(digits("13579")), solver.play(digits("13579")));
    }
}
