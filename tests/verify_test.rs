mod common;

use common::scratch_dir;
use qgen_bootstrap::error::BootstrapError;
use qgen_bootstrap::service::models::verify::verify;
use std::path::PathBuf;

// Two f32 tensors, 8 bytes each.
fn safetensors_bytes() -> Vec<u8> {
    let header = r#"{"wte":{"dtype":"F32","shape":[2],"data_offsets":[0,8]},"wpe":{"dtype":"F32","shape":[2],"data_offsets":[8,16]}}"#;
    let mut bytes = (header.len() as u64).to_le_bytes().to_vec();
    bytes.extend_from_slice(header.as_bytes());
    bytes.extend_from_slice(&[0u8; 16]);
    bytes
}

const TOKENIZER_JSON: &str = r#"{
  "version": "1.0",
  "truncation": null,
  "padding": null,
  "added_tokens": [],
  "normalizer": null,
  "pre_tokenizer": null,
  "post_processor": null,
  "decoder": null,
  "model": { "type": "WordLevel", "vocab": { "[UNK]": 0, "hola": 1, "mundo": 2 }, "unk_token": "[UNK]" }
}"#;

fn write(dir: &PathBuf, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_verify_reads_weights_and_config() {
    let dir = scratch_dir();
    let files = vec![
        write(&dir, "config.json", br#"{"model_type": "gpt2", "vocab_size": 50257}"#),
        write(&dir, "model.safetensors", &safetensors_bytes()),
        write(&dir, "merges.txt", b"#version: 0.2\n"),
    ];

    let verified = verify(&files).unwrap();

    assert_eq!(verified.tensors, 2);
    assert_eq!(verified.model_type.as_deref(), Some("gpt2"));
    assert_eq!(verified.vocab_size, Some(50257));
    assert_eq!(verified.tokenizer_vocab_size, None);
}

#[test]
fn test_verify_loads_tokenizer() {
    let dir = scratch_dir();
    let files = vec![write(&dir, "tokenizer.json", TOKENIZER_JSON.as_bytes())];

    let verified = verify(&files).unwrap();

    assert_eq!(verified.tokenizer_vocab_size, Some(3));
}

#[test]
fn test_verify_rejects_truncated_weights() {
    let dir = scratch_dir();
    let mut bytes = safetensors_bytes();
    bytes.truncate(bytes.len() - 4);
    let files = vec![write(&dir, "model.safetensors", &bytes)];

    let err = verify(&files).unwrap_err();

    assert!(matches!(err, BootstrapError::Verification(_)));
    assert_eq!(err.exit_code(), 4);
}

#[test]
fn test_verify_rejects_broken_config() {
    let dir = scratch_dir();
    let files = vec![write(&dir, "config.json", b"{not json")];

    assert!(matches!(verify(&files).unwrap_err(), BootstrapError::Verification(_)));
}

#[test]
fn test_verify_reports_missing_file() {
    let dir = scratch_dir();

    let err = verify(&[dir.join("model.safetensors")]).unwrap_err();

    assert!(matches!(err, BootstrapError::Verification(ref msg) if msg.contains("model.safetensors")));
}
