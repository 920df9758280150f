//! # relsync-core
//!
//! Core library for mirroring a working tree into a release tree.
//!
//! A run resolves a source and a destination directory, checks that the
//! pair is safe to copy, then walks the source depth-first and overwrites
//! every regular file at the matching destination path. Entries whose base
//! name is in the [`IgnoreSet`] are skipped together with their subtree and
//! symbolic links are never followed or copied.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod copier;
pub mod error;
pub mod guard;
pub mod ignore_set;

pub use config::{ConfigLoader, PathOverrides, PathsConfig, SyncPaths};
pub use copier::{CopyReport, EntryFailure, SyncReporter, TreeCopier};
pub use error::{PathRole, Result, SyncError};
pub use guard::SafetyGuard;
pub use ignore_set::IgnoreSet;
