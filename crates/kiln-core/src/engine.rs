//! Seam toward the task-graph execution engine.
//!
//! The front end never orders, schedules, or runs tasks itself. Once a
//! script and target are resolved it hands off through [`ScriptRunner`],
//! choosing only the mode: execute for real, dry-run the plan, or describe
//! the registered tasks.

use std::io;
use std::path::Path;

use thiserror::Error;

use crate::args::ArgumentStore;

/// How a resolved script should be run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Run the target and its dependencies.
    Execute,
    /// Walk the task graph without executing task bodies.
    DryRun,
    /// Print the registered tasks and their descriptions.
    Describe,
}

/// Raised by runner implementations. Wraps whatever the external build
/// tooling reported; the front end only relays it.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("build tool '{tool}' failed: {message}")]
    ToolExecution { tool: String, message: String },

    #[error("failed to launch build tool '{tool}'")]
    ToolLaunch {
        tool: String,
        #[source]
        source: io::Error,
    },
}

/// Runs a resolved build script.
pub trait ScriptRunner {
    fn run(
        &mut self,
        mode: RunMode,
        script: &Path,
        target: &str,
        arguments: &ArgumentStore,
    ) -> Result<(), EngineError>;
}
