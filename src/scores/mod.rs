//! Completed-game history
//!
//! A score record is just the try-count of every won game, oldest first.
//! Storage is best effort: a missing or damaged file reads as empty and a
//! failed write is logged and dropped.

mod record;
mod store;

pub use record::{RECENT_WINDOW, ScoreRecord};
pub use store::{
    JsonFileStore, MemoryStore, ScoreStore, ScoreStoreError, default_scores_path, record_win,
};
