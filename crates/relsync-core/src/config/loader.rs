//! Lenient JSON config loading

use std::fs;
use std::path::Path;

use super::discovery::ConfigDiscovery;
use super::types::PathsConfig;

/// Loads [`PathsConfig`] without ever failing the run
pub struct ConfigLoader;

impl ConfigLoader {
    /// Discover and load the paths file
    ///
    /// Returns the default (empty) configuration when `disabled` is set, when
    /// no file is found, or when the file cannot be read or parsed.
    #[must_use]
    pub fn load(cli_path: Option<&Path>, disabled: bool) -> PathsConfig {
        if disabled {
            tracing::debug!("config loading disabled");
            return PathsConfig::default();
        }

        match ConfigDiscovery::discover(cli_path) {
            Some(path) => Self::load_file(&path),
            None => {
                tracing::debug!("no config file found");
                PathsConfig::default()
            }
        }
    }

    /// Load a single file, falling back to the empty configuration
    #[must_use]
    pub fn load_file(path: &Path) -> PathsConfig {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "config file unreadable, using empty config");
                return PathsConfig::default();
            }
        };

        match serde_json::from_str::<PathsConfig>(&raw) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "loaded config");
                config
            }
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "config file invalid, using empty config");
                PathsConfig::default()
            }
        }
    }
}
