//! # teleprompt Architecture
//!
//! teleprompt is a **UI-agnostic library for managing an Elgato Prompter
//! script library**, with a CLI client on top. The library directory holds
//! one JSON file per prompt; `AppSettings.json`, one directory above, holds
//! the list of prompt GUIDs Camera Hub actually displays. Keeping those two
//! in agreement is the whole job.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, collects chapter input, prints tables  │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - create / delete / list / reconcile business logic        │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract StorageBackend trait                            │
//! │  - FsBackend (production, atomic writes + advisory lock)    │
//! │  - MemBackend (testing, failure injection)                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Two-Store Problem
//!
//! Every create and delete touches two files that cannot be updated in one
//! atomic step: the prompt's own JSON file and the settings document. Each
//! single write IS atomic (temp file + rename), and a lock file keeps two
//! teleprompt invocations from interleaving, but a crash between the two
//! writes still leaves them disagreeing. That state is detected and reported
//! by `list` and repaired by `doctor`, which treats the script files as
//! ground truth and rebuilds the list to match.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: The [`model::Prompt`] record, slugs, filename derivation
//! - [`settings`]: The AppSettings document and its library list
//! - [`config`]: Library path resolution
//! - [`error`]: Error types
//! - `cli`: Argument parsing and printing for the binary (not part of the
//!   lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod settings;
pub mod store;
