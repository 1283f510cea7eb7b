use crate::error::{BootstrapError, Result};
use log::debug;
use safetensors::SafeTensors;
use std::fs::File;
use std::path::{Path, PathBuf};
use tokenizers::Tokenizer;

/// What could be read back from a downloaded model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerifiedModel {
    pub tensors: usize,
    pub tokenizer_vocab_size: Option<usize>,
    pub model_type: Option<String>,
    pub vocab_size: Option<u64>,
}

/// Checks that fetched files parse: `tokenizer.json` loads, every
/// `.safetensors` file deserializes and `config.json` is valid JSON.
/// Other files are not inspected.
pub fn verify(files: &[PathBuf]) -> Result<VerifiedModel> {
    let mut verified = VerifiedModel::default();

    for path in files {
        match path.file_name().and_then(|name| name.to_str()) {
            Some("tokenizer.json") => {
                verified.tokenizer_vocab_size = Some(load_tokenizer(path)?);
            }
            Some("config.json") => {
                let config: serde_json::Value = serde_json::from_reader(open(path)?)?;
                verified.model_type = config["model_type"].as_str().map(str::to_string);
                verified.vocab_size = config["vocab_size"].as_u64();
            }
            Some(name) if name.ends_with(".safetensors") => {
                verified.tensors += count_tensors(path)?;
            }
            _ => debug!("not verifying {}", path.display()),
        }
    }

    debug!("verified model: {:?}", verified);
    Ok(verified)
}

fn open(path: &Path) -> Result<File> {
    File::open(path)
        .map_err(|e| BootstrapError::Verification(format!("{}: {}", path.display(), e)))
}

fn load_tokenizer(path: &Path) -> Result<usize> {
    let tokenizer = Tokenizer::from_file(path)
        .map_err(|e| BootstrapError::Verification(format!("{}: {}", path.display(), e)))?;
    Ok(tokenizer.get_vocab_size(true))
}

fn count_tensors(path: &Path) -> Result<usize> {
    let file = open(path)?;
    // read-only mapping of a file nothing else writes during the run
    let mmap = unsafe { memmap2::MmapOptions::new().map(&file) }
        .map_err(|e| BootstrapError::Verification(format!("{}: {}", path.display(), e)))?;
    let tensors = SafeTensors::deserialize(&mmap)?;
    Ok(tensors.names().len())
}
