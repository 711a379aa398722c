use std::fs;
use std::path::PathBuf;

use crate::error::Result;

/// Abstract interface for raw storage I/O.
/// This trait handles the "how" of storage (filesystem vs memory), while
/// [`super::PromptStore`] handles the "what" (parsing, lookup, sync logic).
pub trait StorageBackend {
    // --- Script files ---

    /// List prompt filenames in the library directory, non-recursively.
    /// Only `.json` files count; dotfiles (temp files, the lock) do not.
    fn list_files(&self) -> Result<Vec<String>>;

    /// Read one file's text. Returns Ok(None) if the file does not exist;
    /// Err only on actual I/O failure.
    fn read_file(&self, name: &str) -> Result<Option<String>>;

    /// Write a file. MUST be atomic (write to a temp file in the same
    /// directory, then rename) so readers never observe partial content.
    fn write_file(&self, name: &str, contents: &str) -> Result<()>;

    /// Delete a file. Errors with NotFound if it is already gone.
    fn remove_file(&self, name: &str) -> Result<()>;

    // --- Settings document (one directory up) ---

    /// Read the settings document. Ok(None) when absent.
    fn read_settings(&self) -> Result<Option<String>>;

    /// Write the settings document. MUST be atomic.
    fn write_settings(&self, contents: &str) -> Result<()>;

    // --- Locking ---

    /// Acquire the directory-scoped advisory lock. Fails immediately when
    /// another process holds it; the guard releases on drop.
    fn lock(&self) -> Result<StoreLock>;
}

/// Guard for the advisory lock. Dropping it removes the lock file.
#[derive(Debug)]
pub struct StoreLock {
    path: Option<PathBuf>,
}

impl StoreLock {
    /// A lock that guards nothing (in-memory backends).
    pub(crate) fn noop() -> Self {
        Self { path: None }
    }

    pub(crate) fn held(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }
}

impl Drop for StoreLock {
    fn drop(&mut self) {
        if let Some(path) = self.path.take() {
            let _ = fs::remove_file(path);
        }
    }
}
