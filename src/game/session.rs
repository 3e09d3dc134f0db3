//! Game session state and the submit flow

use crate::core::{Digits, DigitsError, Round, new_secret, sanitize};
use crate::rules::{self, Hint, Knowledge, Mode, Rejection};
use thiserror::Error;
use tracing::debug;

/// Guesses allowed per game
pub const MAX_ROUNDS: usize = 6;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won { tries: usize },
    Lost,
    GaveUp,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Why a submitted guess was not scored
///
/// None of these change the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error(transparent)]
    Malformed(#[from] DigitsError),
    #[error(transparent)]
    Rejected(#[from] Rejection),
    #[error("The game is over. Start a new game to keep playing.")]
    GameOver,
}

/// Result of an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    /// 0-based index of the round just played
    pub round_index: usize,
    pub round: Round,
    /// Hints for this round; a winning guess gets none
    pub hints: Option<[Hint; 2]>,
    pub status: GameStatus,
}

/// State of one game: secret, mode, accepted rounds and their hints
#[derive(Debug, Clone)]
pub struct GameSession {
    secret: Digits,
    mode: Mode,
    rounds: Vec<Round>,
    hints: Vec<Option<[Hint; 2]>>,
    status: GameStatus,
}

impl GameSession {
    /// Start a game with a fresh random secret
    #[must_use]
    pub fn new(mode: Mode) -> Self {
        Self::with_secret(new_secret(), mode)
    }

    /// Start a game with a known secret
    #[must_use]
    pub fn with_secret(secret: Digits, mode: Mode) -> Self {
        Self {
            secret,
            mode,
            rounds: Vec::with_capacity(MAX_ROUNDS),
            hints: Vec::with_capacity(MAX_ROUNDS),
            status: GameStatus::InProgress,
        }
    }

    /// Submit raw text from the player
    ///
    /// The text is sanitized first; anything other than exactly five digits
    /// afterwards is rejected as malformed.
    ///
    /// # Errors
    /// - [`GuessError::Malformed`] when fewer than five digits remain
    /// - [`GuessError::Rejected`] when the guess breaks the active mode
    /// - [`GuessError::GameOver`] when the game has already ended
    pub fn submit(&mut self, raw: &str) -> Result<Turn, GuessError> {
        if self.status.is_over() {
            return Err(GuessError::GameOver);
        }
        let guess = Digits::new(&sanitize(raw))?;
        self.submit_digits(guess)
    }

    /// Submit an already parsed guess
    ///
    /// # Errors
    /// - [`GuessError::Rejected`] when the guess breaks the active mode
    /// - [`GuessError::GameOver`] when the game has already ended
    pub fn submit_digits(&mut self, guess: Digits) -> Result<Turn, GuessError> {
        if self.status.is_over() {
            return Err(GuessError::GameOver);
        }

        if let Err(rejection) = rules::validate(&guess, &self.rounds, self.mode) {
            debug!(%guess, mode = %self.mode, %rejection, "guess rejected");
            return Err(rejection.into());
        }

        let round_index = self.rounds.len();
        let round = Round::scored(&self.secret, guess);
        self.rounds.push(round);

        let hints = if round.verdict.is_perfect() {
            self.status = GameStatus::Won {
                tries: self.rounds.len(),
            };
            None
        } else {
            if self.rounds.len() >= MAX_ROUNDS {
                self.status = GameStatus::Lost;
            }
            Some(rules::hints(&self.secret, &guess, round_index as u32))
        };
        self.hints.push(hints);

        debug!(
            %guess,
            verdict = %round.verdict.to_emoji(),
            round = round_index + 1,
            "guess scored"
        );

        Ok(Turn {
            round_index,
            round,
            hints,
            status: self.status,
        })
    }

    /// End the game without solving it
    pub fn give_up(&mut self) {
        if !self.status.is_over() {
            self.status = GameStatus::GaveUp;
        }
    }

    /// Switch difficulty; later guesses are checked under the new mode
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// The secret; callers only show it once the game is over
    #[must_use]
    pub const fn secret(&self) -> &Digits {
        &self.secret
    }

    /// Accepted rounds in play order
    #[must_use]
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    /// Hints per accepted round, aligned with [`Self::rounds`]
    #[must_use]
    pub fn hints(&self) -> &[Option<[Hint; 2]>] {
        &self.hints
    }

    /// 0-based index of the next round
    #[must_use]
    pub fn round_index(&self) -> usize {
        self.rounds.len()
    }

    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        MAX_ROUNDS.saturating_sub(self.rounds.len())
    }

    /// Constraint summary for the rounds played so far
    #[must_use]
    pub fn knowledge(&self) -> Knowledge {
        Knowledge::aggregate(&self.rounds, self.mode)
    }
}
