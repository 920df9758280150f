//! Per-run statistics and per-entry failures

use std::fmt;
use std::path::PathBuf;

/// One entry that could not be mirrored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryFailure {
    /// Source path of the entry
    pub source: PathBuf,
    /// Destination path, when one could be derived
    pub destination: Option<PathBuf>,
    /// Error message
    pub message: String,
}

impl fmt::Display for EntryFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.destination {
            Some(dest) => write!(
                f,
                "Failed to copy {} -> {}: {}",
                self.source.display(),
                dest.display(),
                self.message
            ),
            None => write!(f, "Failed to process {}: {}", self.source.display(), self.message),
        }
    }
}

/// Outcome of a completed walk
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyReport {
    /// Regular files copied
    pub files_copied: usize,
    /// Bytes written by file copies
    pub bytes_copied: u64,
    /// Destination directories created or found already present, root included
    pub dirs_ensured: usize,
    /// Entries skipped because their name is in the ignore set
    pub ignored: usize,
    /// Symbolic links skipped
    pub symlinks_skipped: usize,
    /// FIFOs, sockets and device nodes skipped
    pub special_skipped: usize,
    /// Entries that failed
    pub failures: Vec<EntryFailure>,
}

impl CopyReport {
    /// Whether every reachable entry was mirrored
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Total entries skipped for any reason
    #[must_use]
    pub const fn skipped(&self) -> usize {
        self.ignored + self.symlinks_skipped + self.special_skipped
    }

    /// Log and store a failure
    pub(crate) fn record_failure(
        &mut self,
        source: PathBuf,
        destination: Option<PathBuf>,
        message: String,
    ) {
        let failure = EntryFailure {
            source,
            destination,
            message,
        };
        tracing::error!("{failure}");
        self.failures.push(failure);
    }
}
