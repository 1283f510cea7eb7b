use crate::error::{BootstrapError, Result};
use crate::service::models::ModelHub;
use crate::utils::config::ModelConfig;
use hf_hub::api::sync::{Api, ApiBuilder};
use log::debug;
use std::path::{Path, PathBuf};

/// Fetches model files from the Hugging Face hub into a local cache directory.
///
/// Files land in the hub cache layout (`models--<id>/snapshots/<rev>/...`), the
/// same layout `transformers` reads when given `cache_dir`.
pub struct ModelDownloader {
    progress: bool,
}

impl Default for ModelDownloader {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelDownloader {
    pub fn new() -> Self {
        Self { progress: true }
    }

    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    fn api(&self, cache_dir: &Path) -> Result<Api> {
        let api = ApiBuilder::new()
            .with_cache_dir(cache_dir.to_path_buf())
            .with_progress(self.progress)
            .build()?;
        Ok(api)
    }

    fn download_files(
        &self,
        model: &ModelConfig,
        cache_dir: &Path,
        files: &[String],
    ) -> Result<Vec<PathBuf>> {
        let api = self.api(cache_dir)?;
        let repo = api.model(model.hf_hub_id.clone());

        files
            .iter()
            .map(|file| {
                debug!("fetching {}/{} into {}", model.hf_hub_id, file, cache_dir.display());
                repo.get(file).map_err(|e| {
                    BootstrapError::Download(format!("{}/{}: {}", model.hf_hub_id, file, e))
                })
            })
            .collect()
    }
}

impl ModelHub for ModelDownloader {
    fn fetch_tokenizer(&self, model: &ModelConfig, cache_dir: &Path) -> Result<Vec<PathBuf>> {
        self.download_files(model, cache_dir, &model.tokenizer_files)
    }

    fn fetch_model(&self, model: &ModelConfig, cache_dir: &Path) -> Result<Vec<PathBuf>> {
        self.download_files(model, cache_dir, &model.weight_files)
    }
}
