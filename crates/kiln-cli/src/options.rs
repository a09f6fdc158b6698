//! Validated invocation options.

use std::env;
use std::path::PathBuf;

use kiln_core::args::{ArgumentSources, ArgumentStore};
use kiln_core::verbosity::Verbosity;

/// Everything one invocation resolved to: the script, the flags that pick
/// the command variant, and the layered argument store carrying every
/// `-name=value` pair for the build script's own use.
///
/// Built once per invocation by the invocation parser; commands only read
/// from it.
#[derive(Debug)]
pub struct InvocationOptions {
    /// Resolved build script, when one was given or discovered.
    pub script: Option<PathBuf>,
    /// Initial target to run, resolved from the argument store
    /// (`-target=...`, environment, or settings) with a `Default` fallback.
    pub target: String,
    pub verbosity: Verbosity,
    pub dry_run: bool,
    pub show_help: bool,
    pub show_version: bool,
    pub show_description: bool,
    /// Directory script paths resolve against. Defaults to the process's
    /// current directory; `-workingdirectory` overrides it.
    pub working_directory: PathBuf,
    pub arguments: ArgumentStore,
}

impl InvocationOptions {
    pub fn new() -> Self {
        InvocationOptions {
            script: None,
            target: "Default".to_string(),
            verbosity: Verbosity::Normal,
            dry_run: false,
            show_help: false,
            show_version: false,
            show_description: false,
            working_directory: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            arguments: ArgumentStore::new(ArgumentSources::all()),
        }
    }
}

impl Default for InvocationOptions {
    fn default() -> Self {
        Self::new()
    }
}
