//! Invocation parsing.
//!
//! Walks the raw invocation tokens into an [`InvocationOptions`]: the first
//! bare value is the build script, everything after it must be a
//! `-name[=value]` option. When no script is given, a fixed list of
//! conventional default script names is searched, first relative to the
//! current directory and then relative to the working directory.

use std::path::{Path, PathBuf};

use kiln_core::fs::FileSystem;
use kiln_core::log_args;
use kiln_core::BuildLog;

use crate::error::{CliError, Result};
use crate::options::InvocationOptions;

/// Default script name conventions, searched in order.
pub const DEFAULT_SCRIPT_NAMES: [&str; 3] = ["build.kiln", "build/build.kiln", "kiln/build.kiln"];

/// Turns raw invocation tokens into validated options.
pub struct InvocationParser<'a> {
    log: &'a BuildLog,
    fs: &'a dyn FileSystem,
}

impl<'a> InvocationParser<'a> {
    pub fn new(log: &'a BuildLog, fs: &'a dyn FileSystem) -> Self {
        InvocationParser { log, fs }
    }

    /// Parse `args` (the invocation tokens after the program name).
    ///
    /// Fails with [`CliError::NoScriptFound`] when the invocation is empty
    /// and no default script exists; an option-only invocation instead
    /// leaves `script` unset and lets the dispatcher fall back. A second
    /// bare value, a repeated option name, and an unknown verbosity value
    /// are all fatal.
    pub fn parse(&self, args: &[String]) -> Result<InvocationOptions> {
        let mut options = InvocationOptions::new();

        // No arguments at all: a default script is required.
        if args.is_empty() {
            options.script = Some(
                self.find_default_script(&options.working_directory)?
                    .ok_or(CliError::NoScriptFound)?,
            );
        }

        let mut parsing_options = false;
        for arg in args {
            let value = unquote(arg);
            if parsing_options {
                if is_option(value) {
                    self.parse_option(value, &mut options)?;
                } else {
                    self.log
                        .error("More than one build script specified: {0}", log_args![value])?;
                    return Err(CliError::AmbiguousScript);
                }
            } else {
                parsing_options = true;
                if is_option(value) {
                    // Option-first invocation: parse it, then look for a
                    // default script. Absence is tolerated here; the
                    // dispatcher decides what to do without a script.
                    self.parse_option(value, &mut options)?;
                    options.script = self.find_default_script(&options.working_directory)?;
                } else {
                    options.script = Some(PathBuf::from(value));
                }
            }
        }

        options.target = options.arguments.get_argument_or("target", "Default");
        Ok(options)
    }

    /// Search the default script names, first against the current directory
    /// and then against the working directory.
    fn find_default_script(&self, working_directory: &Path) -> Result<Option<PathBuf>> {
        self.log
            .verbose("Searching for a default build script...", log_args![])?;

        for name in DEFAULT_SCRIPT_NAMES {
            let candidate = PathBuf::from(name);
            let found = if self.fs.file_exists(&candidate) {
                Some(candidate)
            } else {
                let in_working = working_directory.join(name);
                self.fs.file_exists(&in_working).then_some(in_working)
            };

            if let Some(path) = found {
                self.log
                    .verbose("Found default build script: {0}", log_args![name])?;
                return Ok(Some(path));
            }
        }
        Ok(None)
    }

    /// Parse one `-name[=value]` token: recognized names set well-known
    /// option fields, and every name is also bound in the argument store.
    fn parse_option(&self, arg: &str, options: &mut InvocationOptions) -> Result<()> {
        let body = &arg[1..];
        let (name, raw_value) = match body.split_once('=') {
            Some((name, value)) => (name, value),
            None => (body, ""),
        };
        let value = unquote_option_value(raw_value);

        if matches_any(name, &["verbosity", "v"]) {
            options.verbosity = value.parse()?;
        }
        if matches_any(name, &["showdescription", "s"]) {
            options.show_description = true;
        }
        if matches_any(name, &["dryrun", "noop", "whatif"]) {
            options.dry_run = true;
        }
        if matches_any(name, &["help", "?"]) {
            options.show_help = true;
        }
        if matches_any(name, &["version", "ver"]) {
            options.show_version = true;
        }
        if matches_any(name, &["workingdirectory", "workingfolder"]) {
            options.working_directory = PathBuf::from(value);
        }

        if let Err(err) = options.arguments.set_argument(name, value) {
            self.log
                .error("Multiple arguments with the same name ({0}).", log_args![name])?;
            return Err(err.into());
        }
        Ok(())
    }
}

fn is_option(arg: &str) -> bool {
    !arg.trim().is_empty() && arg.starts_with('-')
}

/// Strip a single matching pair of surrounding quotes.
fn unquote(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

/// Option values keep an empty quote pair (`""`) verbatim.
fn unquote_option_value(value: &str) -> &str {
    if value.len() > 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

fn matches_any(name: &str, candidates: &[&str]) -> bool {
    candidates
        .iter()
        .any(|candidate| name.eq_ignore_ascii_case(candidate))
}
