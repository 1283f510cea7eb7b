use crate::entities::environment::ProcessEnvironment;
use crate::entities::invocation::Invocation;
use crate::entities::step::Step;
use crate::error::{BootstrapError, Result};
use crate::service::runner::{run_step, CommandRunner};
use crate::service::venv::VirtualEnv;
use crate::utils::config::NumericPackage;
use std::path::Path;

/// Runs pip from inside a virtual environment.
pub struct PackageInstaller<'a> {
    runner: &'a dyn CommandRunner,
    venv: &'a VirtualEnv,
    workdir: &'a Path,
    env: &'a ProcessEnvironment,
}

impl<'a> PackageInstaller<'a> {
    pub fn new(
        runner: &'a dyn CommandRunner,
        venv: &'a VirtualEnv,
        workdir: &'a Path,
        env: &'a ProcessEnvironment,
    ) -> Self {
        Self { runner, venv, workdir, env }
    }

    fn pip(&self) -> Invocation {
        Invocation::new(self.venv.python())
            .args(["-m", "pip"])
            .current_dir(self.workdir)
            .env(self.env)
    }

    pub fn upgrade_pip(&self) -> Result<()> {
        let invocation = self.pip().args(["install", "--upgrade", "pip"]);
        run_step(self.runner, &invocation, Step::UpgradePip)
    }

    /// Installs the pinned numerical library, from its CPU wheel index when one is set.
    pub fn install_numeric(&self, package: &NumericPackage) -> Result<()> {
        let mut invocation = self.pip().arg("install").arg(package.requirement.as_str());
        if let Some(index_url) = &package.index_url {
            invocation = invocation.arg("--index-url").arg(index_url.as_str());
        }
        run_step(self.runner, &invocation, Step::NumericLibrary)
    }

    /// Installs everything listed in a requirements file relative to the working directory.
    pub fn install_manifest(&self, manifest: &str) -> Result<()> {
        let path = self.workdir.join(manifest);
        if !path.is_file() {
            return Err(BootstrapError::ManifestMissing(path));
        }

        let invocation = self.pip().args(["install", "-r", manifest]);
        run_step(self.runner, &invocation, Step::Manifest)
    }
}
