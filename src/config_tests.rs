use super::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_defaults_when_file_absent() {
    let dir = tempdir().expect("temp dir");
    let config = load_config(&dir.path().join("config.toml")).expect("missing file is fine");
    assert_eq!(config, RegistryConfig::default());
}

#[test]
fn test_empty_toml_produces_defaults() {
    let cfg: RegistryConfig = toml::from_str("").expect("Should parse empty TOML");
    assert_eq!(cfg, RegistryConfig::default());
    assert_eq!(cfg.numbering.start_number, 1000);
}

#[test]
fn test_numbering_section_only() {
    let cfg: RegistryConfig =
        toml::from_str("[numbering]\nstart_number = 1\n").expect("Should parse [numbering]");
    assert_eq!(cfg.numbering.start_number, 1);
    assert_eq!(cfg.classification, ClassificationConfig::default());
}

#[test]
fn test_classification_explicit() {
    let toml_str = "[classification]\nstatuses = [\"OPEN\", \"DONE\"]\ntypes = []\n";
    let cfg: RegistryConfig = toml::from_str(toml_str).expect("Should parse classification");
    assert_eq!(cfg.classification.statuses, vec!["OPEN", "DONE"]);
    assert!(cfg.classification.types.is_empty());
}

#[test]
fn test_unknown_keys_are_rejected() {
    let result: Result<RegistryConfig, _> = toml::from_str("[numbering]\nstart = 5\n");
    assert!(result.is_err());
}

#[test]
fn test_load_from_file() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "[numbering]\nstart_number = 500\n").expect("write config");
    let cfg = load_config(&path).expect("Should load");
    assert_eq!(cfg.numbering.start_number, 500);
}

#[test]
fn test_load_invalid_file() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "numbering = [").expect("write config");
    assert!(matches!(load_config(&path), Err(ConfigError::Toml(_))));
}

#[test]
fn test_roundtrip_serialization() {
    let original = RegistryConfig::default();
    let serialized = toml::to_string(&original).expect("Should serialize");
    let deserialized: RegistryConfig = toml::from_str(&serialized).expect("Should deserialize");
    assert_eq!(original, deserialized);
}
