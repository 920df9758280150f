//! Configuration file discovery, loading and path resolution
//!
//! This module handles:
//! - Locating the JSON paths file (CLI flag, program dir, working dir, user config dir)
//! - Lenient loading: a missing or broken file is an empty configuration
//! - Resolving source/destination with flag > config precedence
//! - Building the ignore set from defaults, config and flags

mod discovery;
mod loader;
mod resolve;
mod types;

pub use discovery::ConfigDiscovery;
pub use loader::ConfigLoader;
pub use resolve::{PathOverrides, SyncPaths};
pub use types::PathsConfig;
