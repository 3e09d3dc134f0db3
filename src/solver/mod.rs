//! Automatic player
//!
//! Used by the simulator to exercise the rules over many games.

mod engine;

pub use engine::{GameReport, Solver};
