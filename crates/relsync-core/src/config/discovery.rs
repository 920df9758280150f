//! Configuration file discovery from multiple locations

use std::path::{Path, PathBuf};

/// Directory holding the paths file, relative to a base location
const CONFIG_DIR: &str = "config";
/// File name of the paths file
const CONFIG_FILE: &str = "paths.json";
/// Application directory under the user config dir
const APP_DIR: &str = "relsync";

/// Config file discovery
pub struct ConfigDiscovery;

impl ConfigDiscovery {
    /// Default config locations in order of precedence
    ///
    /// 1. `<program dir>/../config/paths.json`
    /// 2. `./config/paths.json`
    /// 3. `<user config dir>/relsync/paths.json`
    #[must_use]
    pub fn candidates() -> Vec<PathBuf> {
        let mut candidates = Vec::new();
        if let Some(path) = Self::beside_program() {
            candidates.push(path);
        }
        if let Ok(cwd) = std::env::current_dir() {
            candidates.push(cwd.join(CONFIG_DIR).join(CONFIG_FILE));
        }
        if let Some(dir) = dirs::config_dir() {
            candidates.push(dir.join(APP_DIR).join(CONFIG_FILE));
        }
        candidates
    }

    /// Config file to load
    ///
    /// An explicit path from the command line wins and is returned even if
    /// missing, so the loader can log it. Otherwise the first default
    /// candidate that exists as a file.
    #[must_use]
    pub fn discover(cli_path: Option<&Path>) -> Option<PathBuf> {
        match cli_path {
            Some(path) => Some(path.to_path_buf()),
            None => Self::candidates().into_iter().find(|p| p.is_file()),
        }
    }

    /// `config/paths.json` next to the directory containing the executable
    fn beside_program() -> Option<PathBuf> {
        let exe = std::env::current_exe().ok()?;
        let bin_dir = exe.parent()?;
        let base = bin_dir.parent().unwrap_or(bin_dir);
        Some(base.join(CONFIG_DIR).join(CONFIG_FILE))
    }
}
