use crate::entities::environment::ProcessEnvironment;
use crate::entities::invocation::Invocation;
use crate::entities::step::{Step, VenvOutcome};
use crate::error::Result;
use crate::service::interpreter::Interpreter;
use crate::service::runner::{run_step, CommandRunner};
use std::path::{Path, PathBuf};

/// Layout of a Python virtual environment on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualEnv {
    root: PathBuf,
}

impl VirtualEnv {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn exists(&self) -> bool {
        self.root.is_dir()
    }

    pub fn bin_dir(&self) -> PathBuf {
        if cfg!(windows) {
            self.root.join("Scripts")
        } else {
            self.root.join("bin")
        }
    }

    pub fn python(&self) -> PathBuf {
        if cfg!(windows) {
            self.bin_dir().join("python.exe")
        } else {
            self.bin_dir().join("python")
        }
    }

    /// Shell command a user runs to activate the environment.
    pub fn activate_hint(&self) -> String {
        if cfg!(windows) {
            format!("{}", self.bin_dir().join("activate").display())
        } else {
            format!("source {}", self.bin_dir().join("activate").display())
        }
    }

    /// Creates the environment with `<interpreter> -m venv` unless its directory exists.
    pub fn ensure(
        &self,
        runner: &dyn CommandRunner,
        interpreter: &Interpreter,
        workdir: &Path,
        env: &ProcessEnvironment,
    ) -> Result<VenvOutcome> {
        if self.exists() {
            return Ok(VenvOutcome::Reused);
        }

        let invocation = Invocation::new(&interpreter.program)
            .args(["-m", "venv"])
            .arg(self.root.to_string_lossy())
            .current_dir(workdir)
            .env(env);
        run_step(runner, &invocation, Step::VirtualEnv)?;

        Ok(VenvOutcome::Created)
    }
}
