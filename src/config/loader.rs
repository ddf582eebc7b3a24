use super::{ConfigError, RegistryConfig};
use std::path::Path;
use tracing::debug;
/// Load the registry configuration from `path`.
///
/// Returns `Ok(RegistryConfig::default())` if the file does not exist.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file exists but cannot be read or parsed.
pub fn load_config(path: &Path) -> Result<RegistryConfig, ConfigError> {
    if !path.exists() {
        debug!("Registry config not found at {}; using defaults", path.display());
        return Ok(RegistryConfig::default());
    }
    let content = std::fs::read_to_string(path)?;
    let config: RegistryConfig = toml::from_str(&content)?;
    debug!("Loaded registry config from {}", path.display());
    Ok(config)
}
