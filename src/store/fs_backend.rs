use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

use uuid::Uuid;

use super::backend::{StorageBackend, StoreLock};
use crate::config::LibraryPaths;
use crate::error::{PrompterError, Result};
use crate::model::RECORD_EXT;

const LOCK_FILENAME: &str = ".teleprompt.lock";

pub struct FsBackend {
    paths: LibraryPaths,
}

impl FsBackend {
    pub fn new(paths: LibraryPaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &LibraryPaths {
        &self.paths
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(PrompterError::Io)?;
        }
        Ok(())
    }

    /// Write to a uniquely named dotfile next to the target, then rename
    /// into place. Readers see the old content or the new, never a mix.
    fn write_atomic(&self, target: &Path, contents: &str) -> Result<()> {
        let dir = target
            .parent()
            .ok_or_else(|| PrompterError::Store(format!("no parent directory for {}", target.display())))?;
        self.ensure_dir(dir)?;
        let tmp = dir.join(format!(".prompt-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp, contents).map_err(PrompterError::Io)?;
        fs::rename(&tmp, target).map_err(PrompterError::Io)?;
        Ok(())
    }

    fn read_optional(&self, path: &Path) -> Result<Option<String>> {
        match fs::read_to_string(path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PrompterError::Io(e)),
        }
    }
}

impl StorageBackend for FsBackend {
    fn list_files(&self) -> Result<Vec<String>> {
        let dir = self.paths.library_dir();
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(dir).map_err(PrompterError::Io)? {
            let entry = entry.map_err(PrompterError::Io)?;
            if !entry.path().is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                if name.ends_with(RECORD_EXT) && !name.starts_with('.') {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    fn read_file(&self, name: &str) -> Result<Option<String>> {
        self.read_optional(&self.paths.library_dir().join(name))
    }

    fn write_file(&self, name: &str, contents: &str) -> Result<()> {
        self.write_atomic(&self.paths.library_dir().join(name), contents)
    }

    fn remove_file(&self, name: &str) -> Result<()> {
        match fs::remove_file(self.paths.library_dir().join(name)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(PrompterError::NotFound(name.to_string()))
            }
            Err(e) => Err(PrompterError::Io(e)),
        }
    }

    fn read_settings(&self) -> Result<Option<String>> {
        self.read_optional(self.paths.settings_path())
    }

    fn write_settings(&self, contents: &str) -> Result<()> {
        self.write_atomic(self.paths.settings_path(), contents)
    }

    fn lock(&self) -> Result<StoreLock> {
        let dir = self.paths.library_dir();
        self.ensure_dir(dir)?;
        let path = dir.join(LOCK_FILENAME);
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(mut file) => {
                let _ = writeln!(file, "{}", std::process::id());
                Ok(StoreLock::held(path))
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Err(PrompterError::Store(format!(
                "library is locked by another process ({})",
                path.display()
            ))),
            Err(e) => Err(PrompterError::Io(e)),
        }
    }
}
