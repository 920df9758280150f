//! Configuration types and structures

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Contents of the JSON paths file
///
/// Every key is optional; unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathsConfig {
    /// Default source directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_dir: Option<PathBuf>,

    /// Default destination directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_dir: Option<PathBuf>,

    /// Extra base names to skip, added to the default ignore set
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ignore: Vec<String>,
}
