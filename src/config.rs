//! Library location handling.
//!
//! The script directory is chosen once, at the edge: `--dir` flag, then the
//! `ELGATO_PROMPTER_DIR` environment variable, then the current directory.
//! Everything inward of the CLI receives a resolved [`LibraryPaths`] value;
//! no code below this layer consults the environment.

use std::env;
use std::path::{Path, PathBuf};

use crate::settings::SETTINGS_FILENAME;

pub const DIR_ENV: &str = "ELGATO_PROMPTER_DIR";

/// The resolved on-disk locations of a prompt library: the directory holding
/// the script files, and the settings document one level above it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryPaths {
    library_dir: PathBuf,
    settings_path: PathBuf,
}

impl LibraryPaths {
    /// The settings path is derived, not chosen: always
    /// `parent_of(library_dir)/AppSettings.json`.
    pub fn new(library_dir: impl Into<PathBuf>) -> Self {
        let library_dir = library_dir.into();
        let settings_path = library_dir
            .parent()
            .map(|parent| parent.join(SETTINGS_FILENAME))
            .unwrap_or_else(|| PathBuf::from(SETTINGS_FILENAME));
        Self {
            library_dir,
            settings_path,
        }
    }

    pub fn library_dir(&self) -> &Path {
        &self.library_dir
    }

    pub fn settings_path(&self) -> &Path {
        &self.settings_path
    }
}

/// Resolve the library directory from an optional flag value.
pub fn resolve_library_dir(flag: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = flag {
        return dir;
    }
    if let Some(dir) = env::var_os(DIR_ENV) {
        if !dir.is_empty() {
            return PathBuf::from(dir);
        }
    }
    env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_path_is_one_level_up() {
        let paths = LibraryPaths::new("/data/Elgato/Prompter/Texts");
        assert_eq!(paths.library_dir(), Path::new("/data/Elgato/Prompter/Texts"));
        assert_eq!(
            paths.settings_path(),
            Path::new("/data/Elgato/Prompter/AppSettings.json")
        );
    }

    #[test]
    fn test_flag_wins_over_environment() {
        let dir = resolve_library_dir(Some(PathBuf::from("/tmp/somewhere")));
        assert_eq!(dir, PathBuf::from("/tmp/somewhere"));
    }
}
