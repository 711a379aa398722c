//! # API Facade
//!
//! A thin facade over the command layer: the single entry point any UI goes
//! through. It dispatches, nothing more; logic lives in `commands/*` and is
//! tested there. Generic over [`StorageBackend`], so production wires an
//! [`FsBackend`] and tests wire a
//! [`MemBackend`](crate::store::mem_backend::MemBackend).

use crate::commands::{self, create::CreateRequest, CmdResult};
use crate::config::LibraryPaths;
use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::fs_backend::FsBackend;
use crate::store::{PromptStore, Selector};

pub struct PrompterApi<B: StorageBackend> {
    store: PromptStore<B>,
}

impl PrompterApi<FsBackend> {
    /// Open the library at the given paths with the production backend.
    pub fn open(paths: LibraryPaths) -> Self {
        Self::new(PromptStore::with_backend(FsBackend::new(paths)))
    }
}

impl<B: StorageBackend> PrompterApi<B> {
    pub fn new(store: PromptStore<B>) -> Self {
        Self { store }
    }

    pub fn add_prompt(&self, request: CreateRequest) -> Result<CmdResult> {
        commands::create::run(&self.store, request)
    }

    pub fn delete_prompts(&self, selector: &Selector, confirm: bool) -> Result<CmdResult> {
        commands::delete::run(&self.store, selector, confirm)
    }

    pub fn list_prompts(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn doctor(&self) -> Result<CmdResult> {
        commands::reconcile::run(&self.store)
    }
}
