//! Process exit statuses

use std::process::ExitCode;

use relsync_core::SyncError;

/// Outcome classes visible to calling scripts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Walk completed, possibly with logged per-entry failures
    Success = 0,
    /// Failure after the safety checks passed
    Unexpected = 1,
    /// Source root missing or not a directory
    SourceMissing = 3,
    /// Destination is the source or inside it
    UnsafeDestination = 4,
    /// No source or destination supplied
    NotConfigured = 5,
    /// `--strict` and at least one entry failed
    PartialFailure = 6,
}

impl Status {
    /// Classify a fatal error by its root [`SyncError`]
    pub fn from_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<SyncError>() {
            Some(e) if e.is_precondition() => match e {
                SyncError::SourceNotFound(_) | SyncError::SourceNotDirectory(_) => {
                    Self::SourceMissing
                }
                SyncError::MissingPath { .. } => Self::NotConfigured,
                _ => Self::UnsafeDestination,
            },
            _ => Self::Unexpected,
        }
    }
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        Self::from(status as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use relsync_core::PathRole;
    use std::path::PathBuf;

    fn wrapped(err: SyncError) -> anyhow::Error {
        Err::<(), _>(err).context("outer").unwrap_err()
    }

    #[test]
    fn test_classification_through_context() {
        assert_eq!(
            Status::from_error(&wrapped(SyncError::SourceNotFound(PathBuf::from("x")))),
            Status::SourceMissing
        );
        assert_eq!(
            Status::from_error(&wrapped(SyncError::DestinationIsSource(PathBuf::from("x")))),
            Status::UnsafeDestination
        );
        assert_eq!(
            Status::from_error(&wrapped(SyncError::MissingPath {
                role: PathRole::Destination,
                flag: "dest",
                key: "releaseDir",
            })),
            Status::NotConfigured
        );
    }

    #[test]
    fn test_walk_errors_are_unexpected() {
        let err = SyncError::DestinationInit {
            path: PathBuf::from("/release"),
            source: std::io::Error::other("read-only file system"),
        };
        assert_eq!(Status::from_error(&wrapped(err)), Status::Unexpected);
    }

    #[test]
    fn test_other_errors_are_unexpected() {
        assert_eq!(
            Status::from_error(&anyhow::anyhow!("something else")),
            Status::Unexpected
        );
    }
}
