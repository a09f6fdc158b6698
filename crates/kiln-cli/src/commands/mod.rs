//! Command selection and dispatch.
//!
//! One invocation maps to exactly one command. Help and version win over
//! everything else; with a script in hand the run mode flags pick between
//! executing, dry-running, and describing; without a script the fallback
//! shows usage but still fails the invocation.

mod build;
mod help;
mod version;

use kiln_core::engine::{RunMode, ScriptRunner};
use kiln_core::log_args;
use kiln_core::BuildLog;

use crate::error::Result;
use crate::options::InvocationOptions;

/// The command a parsed invocation resolves to.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    /// Run the build script's target.
    Build,
    /// Walk the task graph without executing task bodies.
    DryRun,
    /// Print the script's registered tasks.
    Describe,
    Help,
    Version,
    /// Runs the wrapped command for its output, but the invocation still
    /// counts as failed.
    ErrorFallback(Box<Command>),
}

impl Command {
    /// Pick the command for `options`.
    pub fn select(options: &InvocationOptions, log: &BuildLog) -> Result<Command> {
        if options.show_help {
            return Ok(Command::Help);
        }
        if options.show_version {
            return Ok(Command::Version);
        }
        if options.script.is_some() {
            return Ok(if options.dry_run {
                Command::DryRun
            } else if options.show_description {
                Command::Describe
            } else {
                Command::Build
            });
        }

        log.error("Could not find a build script to run.", log_args![])?;
        log.error("Either pass one as the first argument, or add one at a default location.", log_args![])?;
        Ok(Command::ErrorFallback(Box::new(Command::Help)))
    }

    /// Execute the command. `Ok(true)` means the invocation succeeded.
    pub fn execute(
        &self,
        options: &InvocationOptions,
        runner: &mut dyn ScriptRunner,
        log: &BuildLog,
    ) -> Result<bool> {
        match self {
            Command::Build => build::run(options, runner, log, RunMode::Execute),
            Command::DryRun => build::run(options, runner, log, RunMode::DryRun),
            Command::Describe => build::run(options, runner, log, RunMode::Describe),
            Command::Help => {
                help::print();
                Ok(true)
            }
            Command::Version => {
                version::print();
                Ok(true)
            }
            Command::ErrorFallback(inner) => {
                inner.execute(options, runner, log)?;
                Ok(false)
            }
        }
    }
}
