use crate::entities::invocation::{CommandOutput, Invocation};
use crate::error::{BootstrapError, Result};
use crate::service::runner::CommandRunner;
use log::debug;
use std::path::Path;

/// A Python interpreter that answered the version probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpreter {
    pub program: String,
    pub version: String,
}

/// Returns the first candidate that runs `--version` successfully and reports Python 3.
pub fn locate(
    runner: &dyn CommandRunner,
    candidates: &[String],
    root: &Path,
) -> Result<Interpreter> {
    for candidate in candidates {
        let invocation = Invocation::new(candidate).arg("--version").current_dir(root);
        match runner.output(&invocation) {
            Ok(output) if output.status.success() => {
                let version = version_line(&output).unwrap_or_else(|| candidate.clone());
                if version.starts_with("Python 2") {
                    debug!("{} is {}, skipping", candidate, version);
                    continue;
                }
                return Ok(Interpreter { program: candidate.clone(), version });
            }
            Ok(output) => debug!("{} --version exited with {}", candidate, output.status),
            Err(e) => debug!("{} not available: {}", candidate, e),
        }
    }

    Err(BootstrapError::InterpreterMissing(candidates.to_vec()))
}

// Python 2 prints its version on stderr.
fn version_line(output: &CommandOutput) -> Option<String> {
    [&output.stdout, &output.stderr]
        .into_iter()
        .flat_map(|stream| stream.lines())
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}
