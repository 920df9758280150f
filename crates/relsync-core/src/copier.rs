//! Tree copier: depth-first mirror of a source tree into a destination tree
//!
//! Every regular file is copied over whatever sits at the same relative
//! path in the destination. Nothing is compared and nothing is deleted.

mod report;
mod reporting;


use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

pub use report::{CopyReport, EntryFailure};
pub use reporting::SyncReporter;

use crate::error::{Result, SyncError};
use crate::ignore_set::IgnoreSet;

/// Mirrors one directory tree into another
#[derive(Debug, Clone, Default)]
pub struct TreeCopier {
    ignore: IgnoreSet,
}

impl TreeCopier {
    /// Create a copier that skips entries named in `ignore`
    #[must_use]
    pub const fn new(ignore: IgnoreSet) -> Self {
        Self { ignore }
    }

    /// Copy `source` into `destination`
    ///
    /// Failures on individual entries below the root are recorded in the
    /// returned report and the walk moves on to the next sibling.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::DestinationInit`] if the destination root cannot
    /// be created and [`SyncError::SourceRead`] if the source root cannot be
    /// listed.
    pub fn copy(&self, source: &Path, destination: &Path) -> Result<CopyReport> {
        let mut report = CopyReport::default();

        fs::create_dir_all(destination).map_err(|e| SyncError::DestinationInit {
            path: destination.to_path_buf(),
            source: e,
        })?;
        report.dirs_ensured += 1;

        let mut walker = WalkDir::new(source)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter();

        while let Some(next) = walker.next() {
            let entry = match next {
                Ok(entry) => entry,
                Err(err) if err.depth() == 0 => {
                    let message = err.to_string();
                    return Err(SyncError::SourceRead {
                        path: source.to_path_buf(),
                        source: err
                            .into_io_error()
                            .unwrap_or_else(|| io::Error::other(message)),
                    });
                }
                Err(err) => {
                    let path = err.path().map_or_else(|| source.to_path_buf(), Path::to_path_buf);
                    let target = Self::target_path(source, destination, &path);
                    report.record_failure(path, target, err.to_string());
                    continue;
                }
            };

            if entry.depth() == 0 {
                continue;
            }

            let file_type = entry.file_type();
            let path = entry.path();

            if self.ignore.contains(entry.file_name()) {
                tracing::debug!(path = %path.display(), "skipping ignored entry");
                if file_type.is_dir() {
                    walker.skip_current_dir();
                }
                report.ignored += 1;
                continue;
            }

            if file_type.is_symlink() {
                tracing::debug!(path = %path.display(), "skipping symlink");
                report.symlinks_skipped += 1;
                continue;
            }

            let Some(target) = Self::target_path(source, destination, path) else {
                report.record_failure(
                    path.to_path_buf(),
                    None,
                    "entry is outside the source root".to_string(),
                );
                continue;
            };

            if file_type.is_dir() {
                match fs::create_dir_all(&target) {
                    Ok(()) => {
                        tracing::trace!(path = %target.display(), "directory ready");
                        report.dirs_ensured += 1;
                    }
                    Err(e) => {
                        report.record_failure(path.to_path_buf(), Some(target), e.to_string());
                        walker.skip_current_dir();
                    }
                }
            } else if file_type.is_file() {
                match fs::copy(path, &target) {
                    Ok(bytes) => {
                        tracing::trace!(from = %path.display(), to = %target.display(), bytes, "copied");
                        report.files_copied += 1;
                        report.bytes_copied += bytes;
                    }
                    Err(e) => {
                        report.record_failure(path.to_path_buf(), Some(target), e.to_string());
                    }
                }
            } else {
                tracing::debug!(path = %path.display(), "skipping special file");
                report.special_skipped += 1;
            }
        }

        Ok(report)
    }

    /// Destination path for a source entry, by relative path
    fn target_path(source: &Path, destination: &Path, entry: &Path) -> Option<PathBuf> {
        entry
            .strip_prefix(source)
            .ok()
            .map(|relative| destination.join(relative))
    }
}
