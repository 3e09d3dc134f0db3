//! One game of Numberdle
//!
//! The session is the only stateful piece; it owns the secret and the history
//! and calls into the pure rules for every guess.

mod session;

pub use session::{GameSession, GameStatus, GuessError, MAX_ROUNDS, Turn};
