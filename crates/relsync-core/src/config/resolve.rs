//! Effective source/destination resolution

use std::path::PathBuf;

use super::types::PathsConfig;
use crate::error::{PathRole, Result, SyncError};
use crate::ignore_set::IgnoreSet;

/// Values supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct PathOverrides {
    /// `--src`
    pub source: Option<PathBuf>,
    /// `--dest`
    pub destination: Option<PathBuf>,
    /// Repeated `--ignore`
    pub ignore: Vec<String>,
    /// `--no-default-ignores`
    pub no_default_ignores: bool,
}

/// Fully resolved inputs for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncPaths {
    /// Tree to read
    pub source: PathBuf,
    /// Tree to write
    pub destination: PathBuf,
    /// Names skipped at every depth
    pub ignore: IgnoreSet,
}

impl SyncPaths {
    /// Resolve paths with precedence flag > config
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::MissingPath`] when neither source supplies a path.
    pub fn resolve(overrides: PathOverrides, config: PathsConfig) -> Result<Self> {
        let source = overrides
            .source
            .or(config.work_dir)
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or(SyncError::MissingPath {
                role: PathRole::Source,
                flag: "src",
                key: "workDir",
            })?;

        let destination = overrides
            .destination
            .or(config.release_dir)
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or(SyncError::MissingPath {
                role: PathRole::Destination,
                flag: "dest",
                key: "releaseDir",
            })?;

        let base = if overrides.no_default_ignores {
            IgnoreSet::empty()
        } else {
            IgnoreSet::default()
        };
        let ignore = base.with_names(config.ignore).with_names(overrides.ignore);

        Ok(Self {
            source,
            destination,
            ignore,
        })
    }
}
