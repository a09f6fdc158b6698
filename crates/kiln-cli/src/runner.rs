//! Default script runner: shells out to the configured build tool.
//!
//! Each run is a restore step followed by a compile step. The tool and the
//! build configuration come from the argument store, so `-buildtool=...`
//! and `-configuration=...` (or their environment/settings equivalents)
//! reconfigure the run without code changes. Dry-run and describe modes
//! print the step plan instead of launching anything.

use std::path::{Path, PathBuf};
use std::process::Command as Process;

use kiln_core::args::ArgumentStore;
use kiln_core::engine::{EngineError, RunMode, ScriptRunner};

const DEFAULT_TOOL: &str = "dotnet";
const DEFAULT_CONFIGURATION: &str = "Release";

pub struct ToolRunner;

impl ToolRunner {
    pub fn new() -> Self {
        ToolRunner
    }

    fn invoke(tool: &str, args: &[String], dir: &Path) -> Result<(), EngineError> {
        let status = Process::new(tool)
            .args(args)
            .current_dir(dir)
            .status()
            .map_err(|source| EngineError::ToolLaunch {
                tool: tool.to_string(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(EngineError::ToolExecution {
                tool: tool.to_string(),
                message: match status.code() {
                    Some(code) => format!("'{}' exited with code {code}", args.join(" ")),
                    None => format!("'{}' was terminated by a signal", args.join(" ")),
                },
            })
        }
    }
}

impl Default for ToolRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptRunner for ToolRunner {
    fn run(
        &mut self,
        mode: RunMode,
        script: &Path,
        target: &str,
        arguments: &ArgumentStore,
    ) -> Result<(), EngineError> {
        let tool = arguments.get_argument_or("buildtool", DEFAULT_TOOL);
        let configuration = arguments.get_argument_or("configuration", DEFAULT_CONFIGURATION);

        // The tool runs from the script's directory.
        let script_dir = match script.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let restore = vec!["restore".to_string()];
        let compile = vec![
            "build".to_string(),
            "--configuration".to_string(),
            configuration,
            format!("-t:{target}"),
        ];

        match mode {
            RunMode::Execute => {
                Self::invoke(&tool, &restore, &script_dir)?;
                Self::invoke(&tool, &compile, &script_dir)
            }
            RunMode::DryRun | RunMode::Describe => {
                println!("Steps for {}:", script.display());
                println!("  Restore: {tool} {}", restore.join(" "));
                println!("  Compile: {tool} {}", compile.join(" "));
                Ok(())
            }
        }
    }
}
