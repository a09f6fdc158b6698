//! Kiln core - the reusable pieces of the Kiln build front end.
//!
//! This crate carries everything the CLI shares with embedders:
//!
//! - [`diagnostics`] - templated log messages, severity palettes, and the
//!   verbosity-aware [`diagnostics::BuildLog`]
//! - [`args`] - the layered [`args::ArgumentStore`] merging command-line,
//!   environment, and persisted-settings values
//! - [`verbosity`] - the [`verbosity::Verbosity`] threshold and
//!   [`verbosity::LogLevel`] severity enumerations
//! - [`fs`] and [`engine`] - the narrow seams toward the file system and
//!   the task-graph execution engine, which live outside this crate
//!
//! # Example
//!
//! ```
//! use kiln_core::diagnostics::{BuildLog, MemoryConsole};
//! use kiln_core::log_args;
//! use kiln_core::verbosity::Verbosity;
//!
//! let console = MemoryConsole::new();
//! let log = BuildLog::new(Box::new(console.clone()), Verbosity::Normal);
//! log.information("building {0}", log_args!["demo.kiln"]).unwrap();
//! assert_eq!(console.output(), "building demo.kiln\n");
//! ```

pub mod args;
pub mod diagnostics;
pub mod engine;
pub mod fs;
pub mod verbosity;

pub use args::{ArgumentError, ArgumentSources, ArgumentStore};
pub use diagnostics::{BuildLog, LogError, LogValue};
pub use engine::{EngineError, RunMode, ScriptRunner};
pub use fs::{FileSystem, NativeFileSystem};
pub use verbosity::{LogLevel, ParseVerbosityError, Verbosity};
