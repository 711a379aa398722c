//! # Storage Layer
//!
//! Two stores that must agree with each other:
//!
//! 1. **Script files**: one JSON file per prompt in the library directory.
//! 2. **Library list**: the GUID array inside `AppSettings.json`, one
//!    directory up.
//!
//! The files are ground truth. The list is what Camera Hub actually reads,
//! so a prompt missing from it is invisible to the app, and a list entry
//! without a file is a dead button. [`PromptStore`] owns the logic that keeps
//! the two aligned: guid-collision-checked writes, deletes mirrored into the
//! list by the command layer, and [`PromptStore::reconcile`] to repair any
//! divergence left behind by a crash between the two writes of one
//! operation.
//!
//! ## Backends
//!
//! Raw I/O lives behind [`backend::StorageBackend`]:
//! - [`fs_backend::FsBackend`]: production; every write is temp-then-rename
//!   atomic, and a lock file serializes whole operations against other
//!   invocations of this tool.
//! - [`mem_backend::MemBackend`]: tests, with write-failure injection.
//!
//! ## Scanning
//!
//! A scan parses every `.json` file in the directory. Files this tool wrote
//! follow the `{index:03}_{slug}_{GUID}.json` pattern, but Camera Hub names
//! files differently, so the scan trusts file *contents*, not names, and
//! remembers which file each prompt came from ([`StoredPrompt`]). Malformed
//! files are collected as [`SkippedFile`] entries instead of failing the
//! scan; callers surface them as warnings.

use crate::error::{PrompterError, Result};
use crate::model::Prompt;
use crate::settings::Settings;

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;

use backend::{StorageBackend, StoreLock};

/// A prompt paired with the filename it was actually read from (or will be
/// written to). The two differ from the derived name when the file was
/// written by Camera Hub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredPrompt {
    pub file: String,
    pub prompt: Prompt,
}

/// A file that could not be parsed during a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub file: String,
    pub reason: String,
}

/// Result of scanning the library directory. Prompt order is unspecified;
/// callers sort.
#[derive(Debug, Default)]
pub struct Scan {
    pub prompts: Vec<StoredPrompt>,
    pub skipped: Vec<SkippedFile>,
}

/// How a delete target is picked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Exactly zero or one match; input accepted in any case.
    Guid(String),
    /// Zero, one, or many matches; exact name, case-insensitive.
    Name(String),
    /// Exact on-disk filename.
    Filename(String),
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Selector::Guid(guid) => write!(f, "GUID {}", guid),
            Selector::Name(name) => write!(f, "name {}", name),
            Selector::Filename(file) => write!(f, "file {}", file),
        }
    }
}

/// What [`PromptStore::reconcile`] changed.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    /// GUIDs found on disk but missing from the library list, now added.
    pub adopted: Vec<String>,
    /// List entries with no file behind them, now removed.
    pub evicted: Vec<String>,
}

impl ReconcileReport {
    pub fn is_clean(&self) -> bool {
        self.adopted.is_empty() && self.evicted.is_empty()
    }
}

pub struct PromptStore<B: StorageBackend> {
    pub(crate) backend: B,
}

impl<B: StorageBackend> PromptStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    /// Acquire the advisory lock for a mutating operation.
    pub fn lock(&self) -> Result<StoreLock> {
        self.backend.lock()
    }

    /// Read and strictly parse one record file.
    pub fn read(&self, file: &str) -> Result<StoredPrompt> {
        let raw = self
            .backend
            .read_file(file)?
            .ok_or_else(|| PrompterError::NotFound(file.to_string()))?;
        let prompt = serde_json::from_str::<Prompt>(&raw)
            .map_err(|e| PrompterError::Malformed(file.to_string(), e.to_string()))?;
        Ok(StoredPrompt {
            file: file.to_string(),
            prompt,
        })
    }

    /// Parse every record file. Malformed files are skipped and reported,
    /// never fatal.
    pub fn scan(&self) -> Result<Scan> {
        let mut scan = Scan::default();
        for file in self.backend.list_files()? {
            match self.read(&file) {
                Ok(stored) => scan.prompts.push(stored),
                // Listed but gone by read time: deleted under us.
                Err(PrompterError::NotFound(_)) => continue,
                Err(PrompterError::Malformed(file, reason)) => {
                    scan.skipped.push(SkippedFile { file, reason })
                }
                Err(e) => return Err(e),
            }
        }
        Ok(scan)
    }

    /// Highest index among parsed records, `None` when the store is empty.
    pub fn max_index(&self) -> Result<Option<u32>> {
        Ok(self.scan()?.prompts.iter().map(|s| s.prompt.index).max())
    }

    pub fn find(&self, selector: &Selector) -> Result<Vec<StoredPrompt>> {
        let scan = self.scan()?;
        let matches = scan
            .prompts
            .into_iter()
            .filter(|stored| match selector {
                Selector::Guid(guid) => stored.prompt.guid.eq_ignore_ascii_case(guid.trim()),
                Selector::Name(name) => {
                    stored.prompt.name.trim().to_lowercase() == name.trim().to_lowercase()
                }
                Selector::Filename(file) => stored.file == *file,
            })
            .collect();
        Ok(matches)
    }

    /// Serialize and write a prompt to its derived filename.
    ///
    /// Writing the identical filename again is an idempotent overwrite; the
    /// same GUID already on disk under a *different* filename is a stale
    /// rename and fails with `AlreadyExists`.
    pub fn write(&self, prompt: &Prompt) -> Result<StoredPrompt> {
        let filename = prompt.filename();
        for stored in self.scan()?.prompts {
            if stored.prompt.guid.eq_ignore_ascii_case(&prompt.guid) && stored.file != filename {
                return Err(PrompterError::AlreadyExists(prompt.guid.clone()));
            }
        }
        self.backend.write_file(&filename, &prompt.to_json()?)?;
        Ok(StoredPrompt {
            file: filename,
            prompt: prompt.clone(),
        })
    }

    /// Remove a prompt's file. `NotFound` if already gone.
    pub fn remove(&self, stored: &StoredPrompt) -> Result<()> {
        self.backend.remove_file(&stored.file)
    }

    pub fn load_settings(&self) -> Result<Settings> {
        let raw = self.backend.read_settings()?;
        Ok(Settings::parse(raw.as_deref()))
    }

    pub fn save_settings(&self, settings: &Settings) -> Result<()> {
        self.backend.write_settings(&settings.to_json()?)
    }

    /// Repair the library list to match the files on disk: adopt orphaned
    /// records, evict stale entries. Surviving entries keep their order.
    /// Saves only when something changed.
    pub fn reconcile(&self) -> Result<ReconcileReport> {
        let scan = self.scan()?;
        let mut settings = self.load_settings()?;
        let mut report = ReconcileReport::default();

        let on_disk: Vec<String> = scan.prompts.iter().map(|s| s.prompt.guid.clone()).collect();

        for listed in settings.guids() {
            if !on_disk.iter().any(|g| g.eq_ignore_ascii_case(&listed)) {
                settings.remove(&listed);
                report.evicted.push(listed);
            }
        }

        for guid in on_disk {
            if settings.add(&guid) {
                report.adopted.push(guid);
            }
        }

        if !report.is_clean() {
            self.save_settings(&settings)?;
        }
        Ok(report)
    }
}
