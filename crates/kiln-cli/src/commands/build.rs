//! The build command: hand a resolved script and target to the runner.

use kiln_core::engine::{RunMode, ScriptRunner};
use kiln_core::log_args;
use kiln_core::BuildLog;

use crate::error::{self, CliError, Result};
use crate::options::InvocationOptions;

/// Run the script in the given mode. Failures raised by the run are
/// reported through the log and turned into a failed-but-handled result,
/// so the process exits nonzero without a second error dump.
pub(super) fn run(
    options: &InvocationOptions,
    runner: &mut dyn ScriptRunner,
    log: &BuildLog,
    mode: RunMode,
) -> Result<bool> {
    match run_script(options, runner, log, mode) {
        Ok(()) => Ok(true),
        Err(err) => {
            error::report(log, &err);
            Ok(false)
        }
    }
}

fn run_script(
    options: &InvocationOptions,
    runner: &mut dyn ScriptRunner,
    log: &BuildLog,
    mode: RunMode,
) -> Result<()> {
    let script = options.script.as_deref().ok_or(CliError::NoScriptFound)?;
    log.verbose("Running build script: {0}", log_args![script])?;
    log.debug("Target: {0}", log_args![options.target.as_str()])?;
    runner.run(mode, script, &options.target, &options.arguments)?;
    Ok(())
}
