//! Score persistence
//!
//! The on-disk format is a JSON array of try-counts, e.g. `[3, 5, 2]`.

use super::ScoreRecord;
use serde_json::Value;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// File name used when no data directory is available
const FALLBACK_FILE: &str = "numberdle_stats.json";

/// Why the score file could not be used
#[derive(Debug, Error)]
pub enum ScoreStoreError {
    #[error("cannot access score file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("score file {path} is not valid JSON: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("score file {path} does not contain a list")]
    NotAList { path: PathBuf },
}

/// Where completed-game try-counts live
///
/// Both operations are infallible from the caller's point of view: a store that
/// cannot be read yields an empty list, and a failed save is dropped.
pub trait ScoreStore {
    /// Every recorded try-count, oldest first
    fn load(&self) -> Vec<u32>;

    /// Replace the stored list
    fn save(&mut self, tries: &[u32]);

    /// Loaded entries wrapped for statistics
    fn record(&self) -> ScoreRecord {
        ScoreRecord::new(self.load())
    }
}

/// Append one win and return the updated record
///
/// This is a read-modify-write; only one session may use a store at a time.
pub fn record_win<S: ScoreStore + ?Sized>(store: &mut S, tries: u32) -> ScoreRecord {
    let mut record = store.record();
    record.push(tries);
    store.save(record.entries());
    record
}

/// `<data dir>/numberdle/scores.json`, or `numberdle_stats.json` in the working directory
#[must_use]
pub fn default_scores_path() -> PathBuf {
    dirs::data_dir().map_or_else(
        || PathBuf::from(FALLBACK_FILE),
        |dir| dir.join("numberdle").join("scores.json"),
    )
}

/// Scores kept in a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the file, keeping every entry that is a usable try-count
    ///
    /// A missing file is an empty record, not an error.
    ///
    /// # Errors
    /// Returns `ScoreStoreError` if the file cannot be read, is not JSON, or is
    /// not a JSON array.
    pub fn try_load(&self) -> Result<Vec<u32>, ScoreStoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(ScoreStoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let value: Value = serde_json::from_str(&content).map_err(|source| ScoreStoreError::Json {
            path: self.path.clone(),
            source,
        })?;

        let Value::Array(entries) = value else {
            return Err(ScoreStoreError::NotAList {
                path: self.path.clone(),
            });
        };

        let total = entries.len();
        let tries: Vec<u32> = entries.iter().filter_map(entry_to_tries).collect();
        if tries.len() < total {
            debug!(
                path = %self.path.display(),
                dropped = total - tries.len(),
                "skipped unreadable score entries"
            );
        }

        Ok(tries)
    }

    /// Write the list, creating parent directories as needed
    ///
    /// # Errors
    /// Returns `ScoreStoreError::Io` if the directory or file cannot be written.
    pub fn try_save(&self, tries: &[u32]) -> Result<(), ScoreStoreError> {
        let io_err = |source| ScoreStoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let json = serde_json::to_string(tries).map_err(|source| ScoreStoreError::Json {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, json).map_err(io_err)
    }
}

impl ScoreStore for JsonFileStore {
    fn load(&self) -> Vec<u32> {
        self.try_load().unwrap_or_else(|e| {
            warn!(error = %e, "ignoring score file");
            Vec::new()
        })
    }

    fn save(&mut self, tries: &[u32]) {
        if let Err(e) = self.try_save(tries) {
            warn!(error = %e, "could not save scores");
        }
    }
}

/// Interpret one JSON entry as a try-count
///
/// Integers, integral strings and finite numbers (truncated) are accepted as long
/// as they are non-negative and fit in a `u32`.
fn entry_to_tries(entry: &Value) -> Option<u32> {
    match entry {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| {
                n.as_f64()
                    .filter(|f| f.is_finite() && *f >= 0.0)
                    .map(|f| f.trunc() as u64)
            })
            .and_then(|v| u32::try_from(v).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Scores kept only in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tries: Vec<u32>,
}

impl MemoryStore {
    #[must_use]
    pub const fn new(tries: Vec<u32>) -> Self {
        Self { tries }
    }
}

impl ScoreStore for MemoryStore {
    fn load(&self) -> Vec<u32> {
        self.tries.clone()
    }

    fn save(&mut self, tries: &[u32]) {
        self.tries = tries.to_vec();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> JsonFileStore {
        JsonFileStore::new(dir.path().join("scores.json"))
    }

    #[test]
    fn missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.try_load().unwrap(), Vec::<u32>::new());
        assert!(store.load().is_empty());
    }

    #[test]
    fn save_then_load() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.save(&[3, 5, 2]);

        assert_eq!(fs::read_to_string(store.path()).unwrap(), "[3,5,2]");
        assert_eq!(store.load(), vec![3, 5, 2]);
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("nested/deeper/scores.json"));
        store.save(&[4]);
        assert_eq!(store.load(), vec![4]);
    }

    #[test]
    fn corrupt_entries_are_dropped() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(
            store.path(),
            r#"[3, "4", -1, 2.9, null, "x", true, {"a": 1}, 6]"#,
        )
        .unwrap();
        assert_eq!(store.load(), vec![3, 4, 2, 6]);
    }

    #[test]
    fn invalid_json_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "not json at all").unwrap();

        assert!(matches!(
            store.try_load(),
            Err(ScoreStoreError::Json { .. })
        ));
        assert!(store.load().is_empty());
    }

    #[test]
    fn non_list_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), r#"{"scores": [1, 2]}"#).unwrap();

        assert!(matches!(
            store.try_load(),
            Err(ScoreStoreError::NotAList { .. })
        ));
        assert!(store.load().is_empty());
    }

    #[test]
    fn unwritable_location_is_ignored() {
        let dir = TempDir::new().unwrap();
        // A file where the parent directory should be
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let mut store = JsonFileStore::new(blocker.join("scores.json"));

        assert!(store.try_save(&[1]).is_err());
        store.save(&[1]);
        assert!(store.load().is_empty());
    }

    #[test]
    fn record_win_appends() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.save(&[3, 5]);

        let record = record_win(&mut store, 2);
        assert_eq!(record.entries(), &[3, 5, 2]);
        assert_eq!(store.load(), vec![3, 5, 2]);
        assert_eq!(store.record().last_ten_average(), Some(3.33));
    }

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemoryStore::default();
        assert!(store.load().is_empty());
        record_win(&mut store, 4);
        record_win(&mut store, 6);
        assert_eq!(store.load(), vec![4, 6]);
    }
}
