//! Numberdle
//!
//! A digit-guessing game: find a secret 5-digit number in six tries, with colored
//! feedback, two hints per miss and optional Hard and Ultra difficulty rules.
//!
//! # Quick Start
//!
//! ```rust
//! use numberdle::core::{Digits, Mark, score};
//! use numberdle::rules::{Mode, hints, validate};
//! use numberdle::core::Round;
//!
//! let secret = Digits::new("11223").unwrap();
//! let guess = Digits::new("21321").unwrap();
//!
//! // Score a guess
//! let verdict = score(&secret, &guess);
//! assert_eq!(verdict.mark(1), Mark::Green);
//!
//! // Two hints for round 0
//! for hint in hints(&secret, &guess, 0) {
//!     println!("{hint}");
//! }
//!
//! // Check the next guess under Hard mode
//! let history = [Round::new(guess, verdict)];
//! assert!(validate(&Digits::new("11223").unwrap(), &history, Mode::Hard).is_ok());
//! ```

// Core domain types
pub mod core;

// Hints, knowledge aggregation and difficulty rules
pub mod rules;

// Game session state
pub mod game;

// Score history persistence
pub mod scores;

// Auto-player for simulations
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
