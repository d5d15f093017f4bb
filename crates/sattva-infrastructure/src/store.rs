//! The persistent key-value store adapter.
//!
//! One JSON file per key under the store directory. Values are opaque to
//! the adapter: no validation, no schema handling, no encryption. Stored
//! text that is not valid JSON surfaces a serialization error to the
//! caller; callers decide the fallback behavior.

use crate::paths::SattvaPaths;
use crate::storage::AtomicFile;
use sattva_core::Result;
use serde_json::Value;
use std::path::PathBuf;

/// The store keys used by the application.
pub mod keys {
    /// Current-user pointer.
    pub const SESSION: &str = "session";
    /// User collection.
    pub const USERS: &str = "users";
    /// Mood-entry collection.
    pub const MOODS: &str = "moods";
    /// Cached daily quote.
    pub const DAILY_QUOTE: &str = "daily_quote";
}

/// Key-value JSON store over a directory of `<key>.json` files.
#[derive(Debug, Clone)]
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    /// A store rooted at an explicit directory. The directory is created
    /// lazily on first write.
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// The store at the default platform data directory.
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(SattvaPaths::store_dir()?))
    }

    /// Reads and parses the value stored under `key`.
    ///
    /// Returns `Ok(None)` when the key is absent. A present but
    /// unparseable value is an error; it is never silently replaced by a
    /// default here.
    pub fn get(&self, key: &str) -> Result<Option<Value>> {
        match self.file(key).load()? {
            None => Ok(None),
            Some(text) => Ok(Some(serde_json::from_str(&text)?)),
        }
    }

    /// Writes `value` under `key` atomically.
    pub fn set(&self, key: &str, value: &Value) -> Result<()> {
        let text = serde_json::to_string_pretty(value).map_err(sattva_core::SattvaError::from)?;
        self.file(key).save(&text)
    }

    /// Removes `key`. Absent keys are not an error.
    pub fn remove(&self, key: &str) -> Result<()> {
        self.file(key).remove()
    }

    fn file(&self, key: &str) -> AtomicFile {
        AtomicFile::new(self.dir.join(format!("{key}.json")))
    }
}
