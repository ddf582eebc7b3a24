mod init;

pub use init::{init_logging, parse_rotation};

use std::path::PathBuf;
use tracing::Level;
use tracing_appender::rolling::Rotation;

/// Log filename used by the registry.
pub const LOG_FILENAME: &str = "contract-registry.log";

/// Configuration for the logging system.
pub struct LogConfig {
    pub log_dir: PathBuf,
    pub log_level: Level,
    pub json_format: bool,
    pub rotation: Rotation,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: crate::utils::get_home_folder().join("logs"),
            log_level: Level::INFO,
            json_format: false,
            rotation: Rotation::DAILY,
        }
    }
}

/// Parse a log level name, falling back to `INFO`.
#[must_use]
pub fn parse_level(s: &str) -> Level {
    s.parse().unwrap_or(Level::INFO)
}

#[cfg(test)]
#[path = "../logging_tests.rs"]
mod logging_tests;
