use std::cell::RefCell;
use std::collections::BTreeMap;

use super::backend::{StorageBackend, StoreLock};
use crate::error::{PrompterError, Result};

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since the tool is single-threaded.
/// Write-failure injection lets tests exercise the partial-sync paths
/// without a filesystem.
pub struct MemBackend {
    files: RefCell<BTreeMap<String, String>>,
    settings: RefCell<Option<String>>,
    fail_file_writes: RefCell<bool>,
    fail_settings_writes: RefCell<bool>,
}

impl Default for MemBackend {
    fn default() -> Self {
        Self {
            files: RefCell::new(BTreeMap::new()),
            settings: RefCell::new(None),
            fail_file_writes: RefCell::new(false),
            fail_settings_writes: RefCell::new(false),
        }
    }
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent prompt-file writes fail.
    pub fn set_fail_file_writes(&self, fail: bool) {
        *self.fail_file_writes.borrow_mut() = fail;
    }

    /// Make subsequent settings writes fail.
    pub fn set_fail_settings_writes(&self, fail: bool) {
        *self.fail_settings_writes.borrow_mut() = fail;
    }

    /// Seed a raw file directly, bypassing the store (for malformed-file
    /// and orphan scenarios).
    pub fn insert_raw(&self, name: &str, contents: &str) {
        self.files
            .borrow_mut()
            .insert(name.to_string(), contents.to_string());
    }

    /// Seed the raw settings document directly.
    pub fn set_raw_settings(&self, contents: &str) {
        *self.settings.borrow_mut() = Some(contents.to_string());
    }
}

impl StorageBackend for MemBackend {
    fn list_files(&self) -> Result<Vec<String>> {
        Ok(self.files.borrow().keys().cloned().collect())
    }

    fn read_file(&self, name: &str) -> Result<Option<String>> {
        Ok(self.files.borrow().get(name).cloned())
    }

    fn write_file(&self, name: &str, contents: &str) -> Result<()> {
        if *self.fail_file_writes.borrow() {
            return Err(PrompterError::Store("simulated write error".to_string()));
        }
        self.files
            .borrow_mut()
            .insert(name.to_string(), contents.to_string());
        Ok(())
    }

    fn remove_file(&self, name: &str) -> Result<()> {
        if self.files.borrow_mut().remove(name).is_none() {
            return Err(PrompterError::NotFound(name.to_string()));
        }
        Ok(())
    }

    fn read_settings(&self) -> Result<Option<String>> {
        Ok(self.settings.borrow().clone())
    }

    fn write_settings(&self, contents: &str) -> Result<()> {
        if *self.fail_settings_writes.borrow() {
            return Err(PrompterError::Store("simulated write error".to_string()));
        }
        *self.settings.borrow_mut() = Some(contents.to_string());
        Ok(())
    }

    fn lock(&self) -> Result<StoreLock> {
        Ok(StoreLock::noop())
    }
}
