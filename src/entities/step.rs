use crate::entities::environment::ProcessEnvironment;
use std::fmt;
use std::path::PathBuf;

/// Stages of a bootstrap run that can fail, in execution order.
///
/// Directory creation and environment configuration are best effort and
/// never end a run, so they have no variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Interpreter,
    VirtualEnv,
    UpgradePip,
    NumericLibrary,
    Manifest,
    SmokeTest,
    ModelDownload,
}

impl Step {
    pub fn name(&self) -> &'static str {
        match self {
            Step::Interpreter => "interpreter",
            Step::VirtualEnv => "venv",
            Step::UpgradePip => "upgrade-pip",
            Step::NumericLibrary => "numeric-library",
            Step::Manifest => "manifest",
            Step::SmokeTest => "smoke-test",
            Step::ModelDownload => "model-download",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VenvOutcome {
    Created,
    Reused,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The confirmation prompt was answered with anything but yes.
    Declined,
    /// The configured policy never downloads.
    Disabled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    Skipped(SkipReason),
    Fetched { tokenizer: Vec<PathBuf>, weights: Vec<PathBuf> },
}

/// Summary of a successful run.
#[derive(Debug, Clone)]
pub struct BootstrapReport {
    pub directories: Vec<PathBuf>,
    pub interpreter: String,
    pub interpreter_version: String,
    pub venv: VenvOutcome,
    pub environment: ProcessEnvironment,
    pub download: DownloadOutcome,
}
