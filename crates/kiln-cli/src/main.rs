use std::env;
use std::process::ExitCode;

use kiln_cli::commands::Command;
use kiln_cli::error;
use kiln_cli::parser::InvocationParser;
use kiln_cli::runner::ToolRunner;
use kiln_core::diagnostics::AnsiConsole;
use kiln_core::fs::NativeFileSystem;
use kiln_core::verbosity::Verbosity;
use kiln_core::BuildLog;

fn main() -> ExitCode {
    // The log starts at Normal so parse failures are visible; the parsed
    // verbosity takes over as soon as it is known.
    let log = BuildLog::new(Box::new(AnsiConsole::stdout()), Verbosity::Normal);
    let fs = NativeFileSystem;

    let args: Vec<String> = env::args().skip(1).collect();
    let mut options = match InvocationParser::new(&log, &fs).parse(&args) {
        Ok(options) => options,
        Err(err) => {
            error::report(&log, &err);
            return ExitCode::FAILURE;
        }
    };
    log.set_verbosity(options.verbosity);

    // Relative scripts resolve against the working directory.
    if let Some(script) = options.script.take() {
        options.script = Some(if script.is_absolute() {
            script
        } else {
            options.working_directory.join(script)
        });
    }

    let command = match Command::select(&options, &log) {
        Ok(command) => command,
        Err(err) => {
            error::report(&log, &err);
            return ExitCode::FAILURE;
        }
    };

    let mut runner = ToolRunner::new();
    match command.execute(&options, &mut runner, &log) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            error::report(&log, &err);
            ExitCode::FAILURE
        }
    }
}
