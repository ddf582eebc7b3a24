use std::path::{Path, PathBuf};

/// Default store folder, relative to the working directory
pub const CONTRACTS_FOLDER: &str = ".contracts";

/// Name of the registry config file inside the store folder
pub const CONFIG_FILE: &str = "config.toml";

/// Folder under the home directory holding logs and user-level files
pub const HOME_FOLDER: &str = ".contract-registry";

/// Get the path to the config file of a store folder
#[must_use]
pub fn get_config_path(store_path: &Path) -> PathBuf {
    store_path.join(CONFIG_FILE)
}

/// Get the per-user folder (`~/.contract-registry`), falling back to `./.contract-registry`
#[must_use]
pub fn get_home_folder() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(HOME_FOLDER)
}

/// Get current timestamp in ISO 8601 format
#[must_use]
pub fn now_iso() -> String {
    chrono::Utc::now().to_rfc3339()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_config_path() {
        let store_path = Path::new("/srv/legal/.contracts");
        assert_eq!(
            get_config_path(store_path),
            Path::new("/srv/legal/.contracts/config.toml")
        );
    }

    #[test]
    fn test_home_folder_name() {
        assert!(get_home_folder().ends_with(HOME_FOLDER));
    }

    #[test]
    fn test_now_iso_format() {
        let timestamp = now_iso();

        // Should be parseable
        let parsed = chrono::DateTime::parse_from_rfc3339(&timestamp);
        assert!(parsed.is_ok(), "Should be valid RFC3339 format");
    }
}
