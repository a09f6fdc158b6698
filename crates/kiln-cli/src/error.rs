//! Error types for the Kiln front end.
//!
//! Invocation-parsing failures abort before any command executes; errors
//! raised during command execution surface through the exit code. The
//! top-level report shows only the message, unless the run is at
//! Diagnostic verbosity, in which case the full source chain is printed.

use std::io;

use kiln_core::args::ArgumentError;
use kiln_core::diagnostics::LogError;
use kiln_core::engine::EngineError;
use kiln_core::log_args;
use kiln_core::verbosity::{ParseVerbosityError, Verbosity};
use kiln_core::BuildLog;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

/// Top-level CLI error.
#[derive(Debug, Error)]
pub enum CliError {
    /// No script argument and nothing at the default script locations.
    #[error("no build script found to execute\n\nHint: pass a script path as the first argument, or add a script at one of the default locations")]
    NoScriptFound,

    /// More than one bare (non-option) argument.
    #[error("more than one build script specified")]
    AmbiguousScript,

    /// The same option name appeared twice on the command line.
    #[error(transparent)]
    Argument(#[from] ArgumentError),

    /// `-verbosity` carried a value outside the enumeration.
    #[error(transparent)]
    Verbosity(#[from] ParseVerbosityError),

    /// A log template failed to parse or render.
    #[error(transparent)]
    Log(#[from] LogError),

    /// The external build tooling reported failure.
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Report `err` through the build log at Error severity.
///
/// At Diagnostic verbosity the whole `source` chain is included; at every
/// other level only the top-level message is shown. Falls back to plain
/// stderr if the log itself cannot render the report.
pub fn report(log: &BuildLog, err: &dyn std::error::Error) {
    let message = if log.verbosity() == Verbosity::Diagnostic {
        let mut detail = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            detail.push_str("\n  caused by: ");
            detail.push_str(&cause.to_string());
            source = cause.source();
        }
        detail
    } else {
        err.to_string()
    };

    if log.error("{0}", log_args![message.as_str()]).is_err() {
        eprintln!("error: {message}");
    }
}
