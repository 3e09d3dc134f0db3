//! Game rules on top of the core types
//!
//! Hints, the knowledge summary folded from past rounds, and the
//! difficulty-mode validator that consumes it.

pub mod hints;
pub mod knowledge;
mod mode;
pub mod validator;

pub use hints::{Hint, hint_texts, hints, range_bounds};
pub use knowledge::{DEFAULT_MAX_COUNT, Knowledge, PositionSet, aggregate};
pub use mode::Mode;
pub use validator::{Rejection, check, validate};
