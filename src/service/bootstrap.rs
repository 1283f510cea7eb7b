//! Bootstrap procedure
//!
//! Prepares the application's runtime in a fixed order: working directories,
//! interpreter check, virtual environment, pip packages, environment
//! variables, import smoke test and the optional model download. The first
//! failing step ends the run; nothing already done is rolled back.
//!
//! # Example
//! ```no_run
//! use qgen_bootstrap::service::{Bootstrapper, StdinPrompt, SystemRunner};
//! use qgen_bootstrap::utils::{AppConfig, ModelDownloader};
//! use qgen_bootstrap::Locales;
//!
//! let config = AppConfig::load("config/app.yml").unwrap();
//! let mut locales = Locales::new("locales").unwrap();
//! locales.set_default("es").unwrap();
//!
//! let runner = SystemRunner;
//! let prompt = StdinPrompt::stdin();
//! let hub = ModelDownloader::new();
//! let report = Bootstrapper::new(&config, &locales, ".", &runner, &prompt, &hub).run().unwrap();
//! println!("{:?}", report.download);
//! ```

use crate::entities::environment::ProcessEnvironment;
use crate::entities::step::{BootstrapReport, DownloadOutcome, SkipReason, VenvOutcome};
use crate::error::Result;
use crate::locales::Locales;
use crate::service::interpreter::{self, Interpreter};
use crate::service::models::{verify, ModelHub};
use crate::service::packages::PackageInstaller;
use crate::service::prompt::Prompt;
use crate::service::runner::CommandRunner;
use crate::service::smoke_test;
use crate::service::venv::VirtualEnv;
use crate::utils::config::{AppConfig, DownloadPolicy};
use log::{debug, info, warn};
use std::ffi::OsString;
use std::path::PathBuf;

pub struct Bootstrapper<'a> {
    config: &'a AppConfig,
    locales: &'a Locales,
    root: PathBuf,
    runner: &'a dyn CommandRunner,
    prompt: &'a dyn Prompt,
    hub: &'a dyn ModelHub,
    base_path: Option<OsString>,
}

impl<'a> Bootstrapper<'a> {
    /// `root` is the project directory; every configured path is relative to it.
    pub fn new(
        config: &'a AppConfig,
        locales: &'a Locales,
        root: impl Into<PathBuf>,
        runner: &'a dyn CommandRunner,
        prompt: &'a dyn Prompt,
        hub: &'a dyn ModelHub,
    ) -> Self {
        Self {
            config,
            locales,
            root: root.into(),
            runner,
            prompt,
            hub,
            base_path: std::env::var_os("PATH"),
        }
    }

    /// Overrides the `PATH` the activated environment is prepended to.
    pub fn with_base_path(mut self, base_path: Option<OsString>) -> Self {
        self.base_path = base_path;
        self
    }

    pub fn venv(&self) -> VirtualEnv {
        VirtualEnv::new(self.root.join(&self.config.venv.path))
    }

    pub fn run(&self) -> Result<BootstrapReport> {
        let directories = self.ensure_directories();
        let interpreter = self.check_interpreter()?;

        let venv = self.venv();
        let venv_outcome = self.prepare_venv(&venv, &interpreter)?;
        let mut env = self.activate(&venv)?;

        self.install_packages(&venv, &env)?;
        self.configure_environment(&mut env);
        self.smoke_test(&venv, &env)?;

        let download = self.download_model()?;

        Ok(BootstrapReport {
            directories,
            interpreter: interpreter.program,
            interpreter_version: interpreter.version,
            venv: venv_outcome,
            environment: env,
            download,
        })
    }

    /// Lines printed after a successful run.
    pub fn usage_hints(&self) -> Vec<String> {
        let entry = [("entry", self.config.usage.entry.as_str())];
        vec![
            self.locales.t("usage.done"),
            self.locales.t_with("usage.activate", &[("activate", self.venv().activate_hint())]),
            self.locales.t("usage.header"),
            self.locales.t_with("usage.gui", &entry),
            self.locales.t_with("usage.file", &entry),
            self.locales.t_with("usage.help", &entry),
        ]
    }

    fn say(&self, key: &str) {
        info!("{}", self.locales.t(key));
    }

    fn say_with<V: AsRef<str>>(&self, key: &str, args: &[(&str, V)]) {
        info!("{}", self.locales.t_with(key, args));
    }

    fn ensure_directories(&self) -> Vec<PathBuf> {
        self.say("steps.directories");

        let mut ensured = Vec::new();
        for dir in &self.config.directories {
            let path = self.root.join(dir);
            match std::fs::create_dir_all(&path) {
                Ok(()) => ensured.push(path),
                Err(e) => {
                    // best effort, later steps surface the consequences
                    warn!(
                        "{}",
                        self.locales.t_with(
                            "steps.directory_failed",
                            &[("path", path.display().to_string()), ("error", e.to_string())],
                        )
                    );
                }
            }
        }
        ensured
    }

    fn check_interpreter(&self) -> Result<Interpreter> {
        self.say("steps.interpreter");
        let interpreter =
            interpreter::locate(self.runner, &self.config.interpreter.candidates, &self.root)?;
        self.say_with(
            "steps.interpreter_found",
            &[("version", interpreter.version.as_str()), ("program", interpreter.program.as_str())],
        );
        Ok(interpreter)
    }

    fn prepare_venv(&self, venv: &VirtualEnv, interpreter: &Interpreter) -> Result<VenvOutcome> {
        let path = [("path", venv.root().display().to_string())];
        if venv.exists() {
            self.say_with("steps.venv_reused", &path);
        } else {
            self.say_with("steps.venv_creating", &path);
        }
        venv.ensure(self.runner, interpreter, &self.root, &ProcessEnvironment::new())
    }

    fn activate(&self, venv: &VirtualEnv) -> Result<ProcessEnvironment> {
        self.say("steps.activating");
        let mut env = ProcessEnvironment::new();
        env.activate(venv.root(), &venv.bin_dir(), self.base_path.clone())?;
        Ok(env)
    }

    fn install_packages(&self, venv: &VirtualEnv, env: &ProcessEnvironment) -> Result<()> {
        let packages = &self.config.packages;
        let installer = PackageInstaller::new(self.runner, venv, &self.root, env);

        if packages.upgrade_pip {
            self.say("steps.upgrade_pip");
            installer.upgrade_pip()?;
        }

        self.say_with("steps.numeric", &[("requirement", packages.numeric.requirement.as_str())]);
        installer.install_numeric(&packages.numeric)?;

        self.say_with("steps.manifest", &[("manifest", packages.manifest.as_str())]);
        installer.install_manifest(&packages.manifest)
    }

    fn configure_environment(&self, env: &mut ProcessEnvironment) {
        self.say("steps.environment");
        env.extend(&self.config.environment);
        for (key, value) in &self.config.environment {
            debug!("{}={}", key, value);
        }
    }

    fn smoke_test(&self, venv: &VirtualEnv, env: &ProcessEnvironment) -> Result<()> {
        let modules = &self.config.smoke_test.modules;
        self.say("steps.smoke_test");
        smoke_test::run(self.runner, venv, modules, &self.root, env)?;
        self.say_with("steps.smoke_test_ok", &[("modules", modules.join(", "))]);
        Ok(())
    }

    fn download_model(&self) -> Result<DownloadOutcome> {
        let download = &self.config.download;
        if download.policy == DownloadPolicy::No {
            self.say("download.disabled");
            return Ok(DownloadOutcome::Skipped(SkipReason::Disabled));
        }

        let model = self.config.get_model_config(&download.model)?;
        let name = model.hf_hub_id.as_str();

        if download.policy == DownloadPolicy::Ask {
            let question = self.locales.t_with(
                "download.prompt",
                &[("model", name.to_string()), ("size", model.size_mb.to_string())],
            );
            if !self.prompt.confirm(&question)? {
                self.say("download.skipped");
                return Ok(DownloadOutcome::Skipped(SkipReason::Declined));
            }
        }

        let cache_dir = self.root.join(&download.cache_dir);

        self.say_with("download.tokenizer", &[("model", name)]);
        let tokenizer = self.hub.fetch_tokenizer(&model, &cache_dir)?;

        self.say_with("download.weights", &[("model", name)]);
        let weights = self.hub.fetch_model(&model, &cache_dir)?;

        if download.verify {
            let files: Vec<PathBuf> = tokenizer.iter().chain(weights.iter()).cloned().collect();
            let verified = verify::verify(&files)?;
            self.say_with("download.verified", &[("tensors", verified.tensors.to_string())]);
        }

        self.say_with(
            "download.done",
            &[("model", name.to_string()), ("path", cache_dir.display().to_string())],
        );
        Ok(DownloadOutcome::Fetched { tokenizer, weights })
    }
}
