mod loader;

pub use loader::load_config;

use crate::numbering::START_NUMBER;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read registry config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse registry config TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

fn default_start_number() -> u32 {
    START_NUMBER
}

fn default_statuses() -> Vec<String> {
    ["in-progress", "on-hold", "signed", "done"]
        .map(str::to_string)
        .to_vec()
}

fn default_types() -> Vec<String> {
    ["contract", "nda", "lease", "service"]
        .map(str::to_string)
        .to_vec()
}

/// Numbering settings (`[numbering]` table in the TOML file).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct NumberingConfig {
    /// Number given to the first contract of an empty register
    #[serde(default = "default_start_number")]
    pub start_number: u32,
}

impl Default for NumberingConfig {
    fn default() -> Self {
        Self {
            start_number: default_start_number(),
        }
    }
}

/// Allowed classifier values (`[classification]` table). An empty list allows anything.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ClassificationConfig {
    #[serde(default = "default_statuses")]
    pub statuses: Vec<String>,
    #[serde(default = "default_types")]
    pub types: Vec<String>,
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        Self {
            statuses: default_statuses(),
            types: default_types(),
        }
    }
}

/// Top-level registry configuration, deserialized from `<store>/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegistryConfig {
    #[serde(default)]
    pub numbering: NumberingConfig,
    #[serde(default)]
    pub classification: ClassificationConfig,
}

#[cfg(test)]
#[path = "../config_tests.rs"]
mod config_tests;
