//! # Command Layer
//!
//! The core business logic, one operation per submodule. Commands operate on
//! a [`crate::store::PromptStore`], return structured [`CmdResult`] values,
//! and never touch stdout, stderr, or process exit codes; the UI decides how
//! to render messages and prompts.
//!
//! - [`create`]: build a prompt, write its file, add its GUID to the
//!   library list
//! - [`delete`]: resolve a selector, remove file(s) and list entries
//! - [`list`]: scan and sort, reporting malformed files and any
//!   store/settings divergence
//! - [`reconcile`]: repair the library list to match the files on disk
//!
//! This is where the lion's share of testing lives, against
//! [`crate::store::mem_backend::MemBackend`].

use serde::Serialize;

use crate::store::StoredPrompt;

pub mod create;
pub mod delete;
pub mod list;
pub mod reconcile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Prompts created or removed by the operation.
    pub affected: Vec<StoredPrompt>,
    /// Prompts to display, already in display order.
    pub listed: Vec<StoredPrompt>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}
