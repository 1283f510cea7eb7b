use crate::entities::invocation::CommandStatus;
use crate::entities::step::Step;
use crate::locales::LocaleError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("No Python interpreter found (tried: {})", .0.join(", "))]
    InterpreterMissing(Vec<String>),
    #[error("Step `{step}` failed with {status}")]
    CommandFailed { step: Step, status: CommandStatus },
    #[error("Step `{step}` could not launch {program}: {source}")]
    Spawn {
        step: Step,
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Dependency manifest not found: {}", .0.display())]
    ManifestMissing(PathBuf),
    #[error("Smoke test failed importing {}", .0.join(", "))]
    SmokeTestFailed(Vec<String>),
    #[error("Unknown model: {0}")]
    UnknownModel(String),
    #[error("Model download error: {0}")]
    Download(String),
    #[error("Model verification error: {0}")]
    Verification(String),
    #[error("Prompt error: {0}")]
    Prompt(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Locale error: {0}")]
    Locale(#[from] LocaleError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BootstrapError {
    /// Process exit code reported for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            BootstrapError::InterpreterMissing(_) => 1,
            BootstrapError::CommandFailed { .. }
            | BootstrapError::Spawn { .. }
            | BootstrapError::ManifestMissing(_) => 2,
            BootstrapError::SmokeTestFailed(_) => 3,
            BootstrapError::UnknownModel(_)
            | BootstrapError::Download(_)
            | BootstrapError::Verification(_) => 4,
            BootstrapError::Config(_) | BootstrapError::Locale(_) => 5,
            BootstrapError::Prompt(_) | BootstrapError::Io(_) => 6,
        }
    }

    /// Locale key of the user-facing message.
    pub fn message_key(&self) -> &'static str {
        match self {
            BootstrapError::InterpreterMissing(_) => "errors.interpreter_missing",
            BootstrapError::CommandFailed { .. } => "errors.command_failed",
            BootstrapError::Spawn { .. } => "errors.spawn",
            BootstrapError::ManifestMissing(_) => "errors.manifest_missing",
            BootstrapError::SmokeTestFailed(_) => "errors.smoke_test_failed",
            BootstrapError::UnknownModel(_) => "errors.unknown_model",
            BootstrapError::Download(_) => "errors.download_failed",
            BootstrapError::Verification(_) => "errors.verification_failed",
            BootstrapError::Prompt(_) => "errors.prompt",
            BootstrapError::Config(_) | BootstrapError::Locale(_) => "errors.config",
            BootstrapError::Io(_) => "errors.io",
        }
    }

    /// Stage the error ended the run in, if it belongs to one.
    pub fn step(&self) -> Option<Step> {
        match self {
            BootstrapError::InterpreterMissing(_) => Some(Step::Interpreter),
            BootstrapError::CommandFailed { step, .. } | BootstrapError::Spawn { step, .. } => {
                Some(*step)
            }
            BootstrapError::ManifestMissing(_) => Some(Step::Manifest),
            BootstrapError::SmokeTestFailed(_) => Some(Step::SmokeTest),
            BootstrapError::UnknownModel(_)
            | BootstrapError::Download(_)
            | BootstrapError::Verification(_)
            | BootstrapError::Prompt(_) => Some(Step::ModelDownload),
            BootstrapError::Config(_) | BootstrapError::Locale(_) | BootstrapError::Io(_) => None,
        }
    }

    /// Placeholder values for the localized message.
    pub fn message_args(&self) -> Vec<(&'static str, String)> {
        match self {
            BootstrapError::CommandFailed { step, .. } | BootstrapError::Spawn { step, .. } => {
                vec![("step", step.to_string())]
            }
            _ => Vec::new(),
        }
    }
}

impl From<hf_hub::api::sync::ApiError> for BootstrapError {
    fn from(err: hf_hub::api::sync::ApiError) -> Self {
        BootstrapError::Download(err.to_string())
    }
}

impl From<safetensors::SafeTensorError> for BootstrapError {
    fn from(err: safetensors::SafeTensorError) -> Self {
        BootstrapError::Verification(err.to_string())
    }
}

impl From<serde_json::Error> for BootstrapError {
    fn from(err: serde_json::Error) -> Self {
        BootstrapError::Verification(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BootstrapError>;
