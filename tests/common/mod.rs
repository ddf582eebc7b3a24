//! Common test utilities

use contract_registry::{ContractRegistry, CreateContractOptions, FileStore, RegistryConfig};
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

/// Create a temporary directory for testing
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Open a registry over the contract files in `store_dir`
pub fn open_registry(store_dir: &Path) -> ContractRegistry<FileStore> {
    ContractRegistry::new(
        Arc::new(FileStore::new(store_dir)),
        &RegistryConfig::default(),
    )
}

/// Options for a contract with only a title
#[allow(dead_code)] // Test utility for integration tests
pub fn titled(title: &str) -> CreateContractOptions {
    CreateContractOptions {
        title: title.to_string(),
        ..CreateContractOptions::default()
    }
}
