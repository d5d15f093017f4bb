//! Atomic text-file operations for the key-value store.
//!
//! Provides a thin layer for safe access to store files:
//!
//! - **Atomicity**: updates are all-or-nothing via tmp file + atomic rename
//! - **Isolation**: an advisory file lock serializes writers
//! - **Durability**: explicit fsync before rename

use fs2::FileExt;
use sattva_core::{Result, SattvaError};
use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};

/// A handle to one atomically-written text file.
pub struct AtomicFile {
    path: PathBuf,
}

impl AtomicFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Reads the file contents.
    ///
    /// Returns `Ok(None)` when the file doesn't exist or is empty.
    pub fn load(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(None);
        }

        Ok(Some(content))
    }

    /// Writes the file atomically under the advisory lock.
    pub fn save(&self, content: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let _lock = FileLock::acquire(&self.path)?;

        // Write to a temporary file in the same directory
        let tmp_path = self.temp_path()?;
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(content.as_bytes())?;

        // Ensure data is on disk before the rename
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    /// Deletes the file. Missing files are not an error.
    pub fn remove(&self) -> Result<()> {
        if self.path.exists() {
            let _lock = FileLock::acquire(&self.path)?;
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    fn temp_path(&self) -> Result<PathBuf> {
        let parent = self
            .path
            .parent()
            .ok_or_else(|| SattvaError::io("Path has no parent directory"))?;
        let file_name = self
            .path
            .file_name()
            .ok_or_else(|| SattvaError::io("Path has no file name"))?;
        let tmp_name = format!(".{}.tmp", file_name.to_string_lossy());
        Ok(parent.join(tmp_name))
    }
}

/// An advisory lock guard that releases the lock when dropped.
struct FileLock {
    #[allow(dead_code)]
    file: File,
    lock_path: PathBuf,
}

impl FileLock {
    fn acquire(path: &Path) -> Result<Self> {
        let lock_path = path.with_extension("lock");

        if let Some(parent) = lock_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        file.lock_exclusive()
            .map_err(|e| SattvaError::io(format!("Failed to acquire store lock: {}", e)))?;

        Ok(FileLock { file, lock_path })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        // Unlock is automatic when the handle is dropped; removing the
        // lock file is best effort.
        let _ = fs::remove_file(&self.lock_path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicFile::new(temp_dir.path().join("value.json"));

        file.save("{\"count\": 42}").unwrap();
        assert_eq!(file.load().unwrap().unwrap(), "{\"count\": 42}");
    }

    #[test]
    fn test_load_nonexistent_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicFile::new(temp_dir.path().join("missing.json"));
        assert!(file.load().unwrap().is_none());
    }

    #[test]
    fn test_empty_file_loads_as_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("empty.json");
        fs::write(&path, "  \n").unwrap();
        assert!(AtomicFile::new(path).load().unwrap().is_none());
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("value.json");
        AtomicFile::new(path.clone()).save("x").unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join(".value.json.tmp").exists());
    }

    #[test]
    fn test_remove() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("value.json");
        let file = AtomicFile::new(path.clone());

        file.save("x").unwrap();
        file.remove().unwrap();
        assert!(!path.exists());

        // Removing again is fine
        file.remove().unwrap();
    }
}
