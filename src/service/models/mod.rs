//! Model hub access
//!
//! The bootstrapper only pre-fetches files into the cache the application
//! reads later; nothing here loads a model for inference.
//!
//! # Example
//! ```no_run
//! use qgen_bootstrap::service::models::{verify, ModelHub};
//! use qgen_bootstrap::utils::{AppConfig, ModelDownloader};
//! use std::path::Path;
//!
//! let config = AppConfig::default();
//! let model = config.get_model_config("distilgpt2").unwrap();
//! let hub = ModelDownloader::new();
//! let mut files = hub.fetch_tokenizer(&model, Path::new("models")).unwrap();
//! files.extend(hub.fetch_model(&model, Path::new("models")).unwrap());
//! let checked = verify::verify(&files).unwrap();
//! println!("{} tensors", checked.tensors);
//! ```

pub mod verify;

use crate::error::Result;
use crate::utils::config::ModelConfig;
use std::path::{Path, PathBuf};

pub use verify::VerifiedModel;

/// Source of pretrained model files.
pub trait ModelHub {
    /// Fetches the tokenizer files of `model` into `cache_dir`, returning their local paths.
    fn fetch_tokenizer(&self, model: &ModelConfig, cache_dir: &Path) -> Result<Vec<PathBuf>>;

    /// Fetches the model configuration and weights of `model` into `cache_dir`.
    fn fetch_model(&self, model: &ModelConfig, cache_dir: &Path) -> Result<Vec<PathBuf>>;
}
