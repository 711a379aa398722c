//! # CLI Layer
//!
//! The terminal client for the teleprompt library. This module is the only
//! place that knows about stdout/stderr, exit codes, and argument parsing;
//! everything it does funnels through [`teleprompt::api::PrompterApi`] and
//! renders the structured results that come back.

mod commands;
mod print;
mod setup;

pub use commands::run;
