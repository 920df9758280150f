//! Pre-copy safety checks
//!
//! Both checks run before anything is written: the source root must be an
//! existing directory, and the destination must not be the source or lie
//! anywhere below it.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::error::{Result, SyncError};

/// Validates a source/destination pair
pub struct SafetyGuard;

impl SafetyGuard {
    /// Run all checks
    ///
    /// # Errors
    ///
    /// Returns the first failed check as a [`SyncError`].
    pub fn check(source: &Path, destination: &Path) -> Result<()> {
        Self::check_source(source)?;
        Self::check_containment(source, destination)
    }

    /// The source root must exist and be a directory
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::SourceNotFound`], [`SyncError::SourceNotDirectory`]
    /// or [`SyncError::SourceRead`] when the metadata lookup fails otherwise.
    pub fn check_source(source: &Path) -> Result<()> {
        match fs::metadata(source) {
            Ok(meta) if meta.is_dir() => Ok(()),
            Ok(_) => Err(SyncError::SourceNotDirectory(source.to_path_buf())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(SyncError::SourceNotFound(source.to_path_buf()))
            }
            Err(e) => Err(SyncError::SourceRead {
                path: source.to_path_buf(),
                source: e,
            }),
        }
    }

    /// The destination must not be the source or nested inside it
    ///
    /// Comparison is by path components on resolved forms, so `/data2` is
    /// never considered inside `/data`.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::DestinationIsSource`] or
    /// [`SyncError::DestinationInsideSource`].
    pub fn check_containment(source: &Path, destination: &Path) -> Result<()> {
        let source_root = resolve(source).map_err(|e| SyncError::Io {
            path: source.to_path_buf(),
            source: e,
        })?;
        let destination_root = resolve(destination).map_err(|e| SyncError::Io {
            path: destination.to_path_buf(),
            source: e,
        })?;

        if destination_root == source_root {
            return Err(SyncError::DestinationIsSource(destination_root));
        }
        if destination_root.starts_with(&source_root) {
            return Err(SyncError::DestinationInsideSource {
                source_root,
                destination_root,
            });
        }
        Ok(())
    }
}

/// Absolute path with symlinks resolved on the longest existing prefix
///
/// The existing prefix is canonicalised as written, so the OS applies any
/// `..` after following symlinks. Only the missing tail is folded
/// lexically. The destination usually does not exist yet, so plain
/// canonicalisation is not enough.
fn resolve(path: &Path) -> io::Result<PathBuf> {
    let absolute = std::path::absolute(path)?;
    let components: Vec<Component<'_>> = absolute.components().collect();

    for split in (1..=components.len()).rev() {
        let prefix: PathBuf = components[..split].iter().collect();
        if let Ok(canonical) = dunce::canonicalize(&prefix) {
            return Ok(fold(canonical, &components[split..]));
        }
    }
    Ok(fold(PathBuf::new(), &components))
}

/// Append `tail` to `base`, dropping `.` and popping on `..`
fn fold(mut base: PathBuf, tail: &[Component<'_>]) -> PathBuf {
    for component in tail {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                base.pop();
            }
            other => base.push(other.as_os_str()),
        }
    }
    base
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_source() {
        let tmp = TempDir::new().unwrap();
        let err = SafetyGuard::check(&tmp.path().join("absent"), &tmp.path().join("out")).unwrap_err();
        assert!(matches!(err, SyncError::SourceNotFound(_)));
    }

    #[test]
    fn test_source_is_file() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("file.txt");
        fs::write(&file, "x").unwrap();

        let err = SafetyGuard::check(&file, &tmp.path().join("out")).unwrap_err();
        assert!(matches!(err, SyncError::SourceNotDirectory(_)));
    }

    #[test]
    fn test_destination_inside_source() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("a/b");
        fs::create_dir_all(&src).unwrap();

        let err = SafetyGuard::check(&src, &src.join("c")).unwrap_err();
        assert!(matches!(err, SyncError::DestinationInsideSource { .. }));
    }

    #[test]
    fn test_destination_deeply_inside_source_not_yet_existing() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src");
        fs::create_dir_all(&src).unwrap();

        let err = SafetyGuard::check(&src, &src.join("x/y/z")).unwrap_err();
        assert!(matches!(err, SyncError::DestinationInsideSource { .. }));
    }

    #[test]
    fn test_sibling_with_shared_prefix_is_allowed() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("data");
        fs::create_dir_all(&src).unwrap();

        assert!(SafetyGuard::check(&src, &tmp.path().join("data2")).is_ok());
    }

    #[test]
    fn test_parent_dir_components_are_folded() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src");
        fs::create_dir_all(&src).unwrap();

        let sneaky = tmp.path().join("other/../src/nested");
        let err = SafetyGuard::check(&src, &sneaky).unwrap_err();
        assert!(matches!(err, SyncError::DestinationInsideSource { .. }));

        let escaped = src.join("../release");
        assert!(SafetyGuard::check(&src, &escaped).is_ok());
    }

    #[test]
    fn test_destination_equal_to_source() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src");
        fs::create_dir_all(&src).unwrap();

        let err = SafetyGuard::check(&src, &src.join(".")).unwrap_err();
        assert!(matches!(err, SyncError::DestinationIsSource(_)));
    }

    #[test]
    fn test_source_inside_destination_is_allowed() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("release/work");
        fs::create_dir_all(&src).unwrap();

        assert!(SafetyGuard::check(&src, &tmp.path().join("release")).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_destination_through_symlink_into_source() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src");
        fs::create_dir_all(&src).unwrap();
        let link = tmp.path().join("alias");
        std::os::unix::fs::symlink(&src, &link).unwrap();

        let err = SafetyGuard::check(&src, &link.join("out")).unwrap_err();
        assert!(matches!(err, SyncError::DestinationInsideSource { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_then_parent_dir_lands_inside_source() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("real/s");
        fs::create_dir_all(src.join("deep")).unwrap();
        let link = tmp.path().join("L");
        std::os::unix::fs::symlink(src.join("deep"), &link).unwrap();

        // L/.. is real/s once the link is followed, not tmp
        let err = SafetyGuard::check(&src, &link.join("../inner")).unwrap_err();
        assert!(matches!(err, SyncError::DestinationInsideSource { .. }));
    }

    #[test]
    fn test_fold() {
        let components: Vec<_> = Path::new("/a/./b/../c").components().collect();
        assert_eq!(fold(PathBuf::new(), &components), PathBuf::from("/a/c"));

        let components: Vec<_> = Path::new("/a/b/../../..").components().collect();
        assert_eq!(fold(PathBuf::new(), &components), PathBuf::from("/"));
    }
}
