//! Command implementations

pub mod check;
pub mod simple;
pub mod simulate;

pub use check::{CheckReport, run_check};
pub use simple::run_simple;
pub use simulate::{SimulationResult, run_simulation};
