use crate::error::BootstrapError;
use serde::Deserialize;
use std::collections::BTreeMap;

pub const DEFAULT_CONFIG_PATH: &str = "config/app.yml";
/// Environment variable overriding [`DEFAULT_CONFIG_PATH`].
pub const CONFIG_PATH_ENV: &str = "BOOTSTRAP_CONFIG";

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LocalesConfig {
    pub path: String,
    pub default: String,
}

impl Default for LocalesConfig {
    fn default() -> Self {
        Self { path: "locales".to_string(), default: "es".to_string() }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct InterpreterConfig {
    /// Probed in order; the first that answers `--version` is used.
    pub candidates: Vec<String>,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self { candidates: vec!["python3".to_string(), "python".to_string()] }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct VenvConfig {
    pub path: String,
}

impl Default for VenvConfig {
    fn default() -> Self {
        Self { path: "venv".to_string() }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct NumericPackage {
    pub requirement: String,
    #[serde(default)]
    pub index_url: Option<String>,
}

impl Default for NumericPackage {
    fn default() -> Self {
        Self {
            requirement: "torch==2.1.0".to_string(),
            index_url: Some("https://download.pytorch.org/whl/cpu".to_string()),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct PackagesConfig {
    pub upgrade_pip: bool,
    pub numeric: NumericPackage,
    pub manifest: String,
}

impl Default for PackagesConfig {
    fn default() -> Self {
        Self {
            upgrade_pip: true,
            numeric: NumericPackage::default(),
            manifest: "requirements.txt".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SmokeTestConfig {
    pub modules: Vec<String>,
}

impl Default for SmokeTestConfig {
    fn default() -> Self {
        Self { modules: vec!["torch".to_string(), "transformers".to_string(), "fitz".to_string()] }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DownloadPolicy {
    /// Ask on the terminal.
    #[default]
    Ask,
    Yes,
    No,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ModelConfig {
    /// Hub repository id. Defaults to the catalog key.
    #[serde(default)]
    pub hf_hub_id: String,
    #[serde(default)]
    pub size_mb: u32,
    #[serde(default)]
    pub description: String,
    pub tokenizer_files: Vec<String>,
    pub weight_files: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DownloadConfig {
    pub model: String,
    pub cache_dir: String,
    pub policy: DownloadPolicy,
    pub verify: bool,
    pub catalog: BTreeMap<String, ModelConfig>,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        let mut catalog = BTreeMap::new();
        catalog.insert(
            "distilgpt2".to_string(),
            ModelConfig {
                hf_hub_id: "distilbert/distilgpt2".to_string(),
                size_mb: 300,
                description: "GPT-2 destilado, rápido y eficiente".to_string(),
                tokenizer_files: vec![
                    "tokenizer.json".to_string(),
                    "vocab.json".to_string(),
                    "merges.txt".to_string(),
                ],
                weight_files: vec!["config.json".to_string(), "model.safetensors".to_string()],
            },
        );
        catalog.insert(
            "mrm8488/t5-base-finetuned-question-generation-ap".to_string(),
            ModelConfig {
                hf_hub_id: String::new(),
                size_mb: 250,
                description: "T5-base afinado para generación de preguntas en español".to_string(),
                tokenizer_files: vec![
                    "spiece.model".to_string(),
                    "tokenizer_config.json".to_string(),
                    "special_tokens_map.json".to_string(),
                ],
                weight_files: vec!["config.json".to_string(), "pytorch_model.bin".to_string()],
            },
        );
        Self {
            model: "distilgpt2".to_string(),
            cache_dir: "models".to_string(),
            policy: DownloadPolicy::Ask,
            verify: true,
            catalog,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct UsageConfig {
    /// Application entry script named in the closing hints.
    pub entry: String,
}

impl Default for UsageConfig {
    fn default() -> Self {
        Self { entry: "main.py".to_string() }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub locales: LocalesConfig,
    pub directories: Vec<String>,
    pub interpreter: InterpreterConfig,
    pub venv: VenvConfig,
    pub packages: PackagesConfig,
    pub environment: BTreeMap<String, String>,
    pub smoke_test: SmokeTestConfig,
    pub download: DownloadConfig,
    pub usage: UsageConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let environment = [
            ("TRANSFORMERS_CACHE", "./models"),
            ("TORCH_HOME", "./models"),
            ("TOKENIZERS_PARALLELISM", "false"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            locales: LocalesConfig::default(),
            directories: vec!["models".to_string(), "output".to_string()],
            interpreter: InterpreterConfig::default(),
            venv: VenvConfig::default(),
            packages: PackagesConfig::default(),
            environment,
            smoke_test: SmokeTestConfig::default(),
            download: DownloadConfig::default(),
            usage: UsageConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn load(config_path: &str) -> anyhow::Result<Self> {
        let config_file = std::fs::File::open(config_path)?;
        let config: Self = serde_yaml::from_reader(config_file)?;
        config.validate()?;
        Ok(config)
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), BootstrapError> {
        if self.interpreter.candidates.is_empty() {
            return Err(BootstrapError::Config("interpreter.candidates is empty".to_string()));
        }
        if self.venv.path.trim().is_empty() {
            return Err(BootstrapError::Config("venv.path is empty".to_string()));
        }
        if self.download.policy != DownloadPolicy::No {
            self.get_model_config(&self.download.model)?;
        }
        Ok(())
    }

    /// Catalog entry for `model_id`, with `hf_hub_id` filled from the key when unset.
    pub fn get_model_config(&self, model_id: &str) -> Result<ModelConfig, BootstrapError> {
        let mut config = self
            .download
            .catalog
            .get(model_id)
            .cloned()
            .ok_or_else(|| BootstrapError::UnknownModel(model_id.to_string()))?;

        if config.hf_hub_id.is_empty() {
            config.hf_hub_id = model_id.to_string();
        }

        Ok(config)
    }
}
