//! Exact base-name ignore set
//!
//! Names are compared against the final component of each directory entry at
//! every depth. There is no glob or path matching: `dist` skips any entry
//! named exactly `dist`, and nothing else.

use std::collections::BTreeSet;
use std::ffi::{OsStr, OsString};

/// Names skipped by default: dependency caches, VCS metadata and build output
pub const DEFAULT_IGNORES: [&str; 4] = ["node_modules", ".git", "dist", "out"];

/// Set of entry names excluded from traversal and copying
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreSet {
    names: BTreeSet<OsString>,
}

impl IgnoreSet {
    /// Create an empty ignore set
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            names: BTreeSet::new(),
        }
    }

    /// Add names to the set
    ///
    /// Blank names are dropped; a path separator inside a name can never
    /// match a base name, so such names are dropped as well.
    #[must_use]
    pub fn with_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            let name = name.as_ref().trim();
            if name.is_empty() || name.contains(['/', '\\']) {
                tracing::warn!(name, "ignoring unusable ignore entry");
                continue;
            }
            self.names.insert(OsString::from(name));
        }
        self
    }

    /// Whether an entry with this base name should be skipped
    #[must_use]
    pub fn contains(&self, name: &OsStr) -> bool {
        self.names.contains(name)
    }

    /// Number of names in the set
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the set has no names
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate names in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &OsStr> {
        self.names.iter().map(OsString::as_os_str)
    }
}

impl Default for IgnoreSet {
    fn default() -> Self {
        Self::empty().with_names(DEFAULT_IGNORES)
    }
}
