use crate::entities::invocation::{CommandOutput, CommandStatus, Invocation};
use crate::entities::step::Step;
use crate::error::{BootstrapError, Result};
use log::debug;
use std::io;
use std::process::{Command, Stdio};

/// Runs external commands on behalf of the bootstrap steps.
pub trait CommandRunner {
    /// Runs to completion with inherited stdio, so the tool's own output
    /// reaches the console unchanged.
    fn status(&self, invocation: &Invocation) -> io::Result<CommandStatus>;

    /// Runs to completion capturing stdout and stderr.
    fn output(&self, invocation: &Invocation) -> io::Result<CommandOutput>;
}

/// [`CommandRunner`] backed by `std::process::Command`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    fn command(invocation: &Invocation) -> Command {
        let mut command = Command::new(&invocation.program);
        command.args(&invocation.args);
        command.envs(invocation.env.iter());
        if let Some(dir) = &invocation.current_dir {
            command.current_dir(dir);
        }
        command
    }
}

impl CommandRunner for SystemRunner {
    fn status(&self, invocation: &Invocation) -> io::Result<CommandStatus> {
        debug!("running: {}", invocation);
        let status = Self::command(invocation)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;
        debug!("{} finished with {}", invocation.program_name(), CommandStatus::from(status));
        Ok(status.into())
    }

    fn output(&self, invocation: &Invocation) -> io::Result<CommandOutput> {
        debug!("running (captured): {}", invocation);
        let output = Self::command(invocation).stdin(Stdio::null()).output()?;
        Ok(CommandOutput {
            status: output.status.into(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Runs `invocation` and turns a spawn failure or non-zero exit into an error for `step`.
pub fn run_step(runner: &dyn CommandRunner, invocation: &Invocation, step: Step) -> Result<()> {
    let status = runner.status(invocation).map_err(|source| BootstrapError::Spawn {
        step,
        program: invocation.program_name(),
        source,
    })?;
    if !status.success() {
        return Err(BootstrapError::CommandFailed { step, status });
    }
    Ok(())
}
