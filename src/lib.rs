//! argline: split command-line arguments into tokens and query them.
//!
//! Each user argument becomes a [`Token`] holding the argument verbatim plus
//! a command and an optional value, split at the first `=` (or any other
//! [`Splitter`]). Tokens live in a [`CommandSequence`] that can be queried by
//! predicate, exact option name, regex, or fuzzy name, with a callback for
//! every matching argument.
//!
//! # Architecture
//!
//! - **[`parse`]** — Token model: split criterion, tokens, shlex line splitting.
//! - **[`engine`]** — Command sequence, linked token view, query strategies.
//! - **[`source`]** — Argument sources: process args, fixed lists, command lines.
//! - **[`config`]** — Configuration loading: embedded defaults + user overlay merge.
//! - **[`logging`]** — simplelog setup for stderr and an optional log file.

/// Command sequence and query engine.
pub mod engine;
/// Error type shared by construction and configuration.
pub mod error;
/// Configuration types, loading, and overlay merge logic.
pub mod config;
/// Logger installation.
pub mod logging;
/// Token model: split criterion, tokens, command line splitting.
pub mod parse;
/// Where the raw invocation list comes from.
pub mod source;

pub use engine::{CommandSequence, Linked, Names};
pub use error::{Error, Result};
pub use parse::{Splitter, Token};
pub use source::{ArgumentSource, CommandLine, ProcessArgs};
