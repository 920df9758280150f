//! Fatal error types for a sync run
//!
//! Failures scoped to a single entry below the source root are not errors
//! here; they are recorded in [`crate::CopyReport`] and the walk continues.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using [`SyncError`]
pub type Result<T> = std::result::Result<T, SyncError>;

/// Which side of the copy a path belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathRole {
    /// The tree being read
    Source,
    /// The tree being written
    Destination,
}

impl std::fmt::Display for PathRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Source => f.write_str("source"),
            Self::Destination => f.write_str("destination"),
        }
    }
}

/// Errors that abort a sync run
#[derive(Debug, Error)]
pub enum SyncError {
    /// Neither a flag nor the config file supplied a path
    #[error("no {role} directory configured (pass --{flag} or set `{key}` in the config file)")]
    MissingPath {
        /// Which path is missing
        role: PathRole,
        /// Command-line flag that would supply it
        flag: &'static str,
        /// Config key that would supply it
        key: &'static str,
    },

    /// Source root does not exist
    #[error("Source not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    /// Source root exists but is not a directory
    #[error("Source is not a directory: {}", .0.display())]
    SourceNotDirectory(PathBuf),

    /// Destination lies below the source root
    #[error(
        "Destination {} is inside source {}. Aborting to avoid recursion/destruction.",
        destination_root.display(),
        source_root.display()
    )]
    DestinationInsideSource {
        /// Normalised source root
        source_root: PathBuf,
        /// Normalised destination root
        destination_root: PathBuf,
    },

    /// Destination and source resolve to the same directory
    #[error("Destination is the source directory itself: {}", .0.display())]
    DestinationIsSource(PathBuf),

    /// Destination root could not be created
    #[error("Failed to create destination {}: {source}", path.display())]
    DestinationInit {
        /// Destination root
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Source root could not be listed
    #[error("Failed to read source {}: {source}", path.display())]
    SourceRead {
        /// Source root
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Any other I/O failure at the root of the run
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// Path being accessed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

impl SyncError {
    /// Whether the error was raised before anything was written
    #[must_use]
    pub const fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::MissingPath { .. }
                | Self::SourceNotFound(_)
                | Self::SourceNotDirectory(_)
                | Self::DestinationInsideSource { .. }
                | Self::DestinationIsSource(_)
        )
    }
}
