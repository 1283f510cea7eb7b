use qgen_bootstrap::error::BootstrapError;
use qgen_bootstrap::utils::config::{AppConfig, DownloadPolicy};
use std::path::Path;

fn shipped_config() -> AppConfig {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("config").join("app.yml");
    AppConfig::load(path.to_str().unwrap()).unwrap()
}

#[test]
fn test_shipped_config_matches_defaults() {
    let shipped = shipped_config();
    let defaults = AppConfig::default();

    assert_eq!(shipped.directories, defaults.directories);
    assert_eq!(shipped.interpreter.candidates, defaults.interpreter.candidates);
    assert_eq!(shipped.venv.path, defaults.venv.path);
    assert_eq!(shipped.packages.numeric.requirement, defaults.packages.numeric.requirement);
    assert_eq!(shipped.packages.numeric.index_url, defaults.packages.numeric.index_url);
    assert_eq!(shipped.packages.manifest, defaults.packages.manifest);
    assert_eq!(shipped.environment, defaults.environment);
    assert_eq!(shipped.smoke_test.modules, defaults.smoke_test.modules);
    assert_eq!(shipped.download.model, "distilgpt2");
    assert_eq!(shipped.download.cache_dir, "models");
    assert_eq!(shipped.download.policy, DownloadPolicy::Ask);
    assert_eq!(shipped.locales.default, "es");
}

#[test]
fn test_missing_sections_fall_back_to_defaults() {
    let config = AppConfig::parse("venv:\n  path: .venv\n").unwrap();

    assert_eq!(config.venv.path, ".venv");
    assert_eq!(config.directories, vec!["models", "output"]);
    assert_eq!(config.environment.get("TOKENIZERS_PARALLELISM").map(String::as_str), Some("false"));
    assert!(config.packages.upgrade_pip);
}

#[test]
fn test_policy_values() {
    for (text, policy) in [("ask", DownloadPolicy::Ask), ("yes", DownloadPolicy::Yes), ("no", DownloadPolicy::No)] {
        let config = AppConfig::parse(&format!("download:\n  policy: {}\n", text)).unwrap();
        assert_eq!(config.download.policy, policy);
    }
    assert!(AppConfig::parse("download:\n  policy: sometimes\n").is_err());
}

#[test]
fn test_hub_id_defaults_to_catalog_key() {
    let config = shipped_config();

    let model = config.get_model_config("t5-small").unwrap();

    assert_eq!(model.hf_hub_id, "t5-small");
    assert_eq!(model.size_mb, 200);
    assert!(model.weight_files.contains(&"model.safetensors".to_string()));
}

#[test]
fn test_distilgpt2_resolves_to_canonical_hub_repo() {
    for config in [shipped_config(), AppConfig::default()] {
        let model = config.get_model_config("distilgpt2").unwrap();

        assert_eq!(model.hf_hub_id, "distilbert/distilgpt2");
        assert_eq!(model.size_mb, 300);
    }
}

#[test]
fn test_question_generation_model_is_in_catalog() {
    let config = shipped_config();
    let id = "mrm8488/t5-base-finetuned-question-generation-ap";

    let model = config.get_model_config(id).unwrap();

    assert_eq!(model.hf_hub_id, id);
    assert!(model.tokenizer_files.contains(&"spiece.model".to_string()));
    assert!(model.weight_files.contains(&"config.json".to_string()));
    // selectable without a catalog of its own
    assert!(AppConfig::parse(&format!("download:\n  model: {}\n", id)).is_ok());
}

#[test]
fn test_unknown_model_is_rejected() {
    let config = AppConfig::default();

    let err = config.get_model_config("gpt-9").unwrap_err();
    assert!(matches!(err, BootstrapError::UnknownModel(ref id) if id == "gpt-9"));

    assert!(AppConfig::parse("download:\n  model: gpt-9\n").is_err());
    // never downloading, so the model is not looked up
    assert!(AppConfig::parse("download:\n  model: gpt-9\n  policy: \"no\"\n").is_ok());
}

#[test]
fn test_empty_candidates_are_rejected() {
    let err = AppConfig::parse("interpreter:\n  candidates: []\n").unwrap_err();

    assert!(err.to_string().contains("interpreter.candidates"));
}
