use std::collections::HashMap;
use std::ffi::OsString;
use std::path::PathBuf;

use clap::{ArgAction, CommandFactory, Parser};

/// Release tree synchronization tool
///
/// Mirror a working directory into a release directory, overwriting files at
/// matching paths and skipping node_modules, .git, dist, out and symlinks
#[derive(Parser, Debug)]
#[command(name = "relsync")]
#[command(about, long_about = None, version)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Source directory (overrides `workDir` from the config file)
    #[arg(long, value_name = "PATH", allow_hyphen_values = true)]
    pub src: Option<PathBuf>,

    /// Destination directory (overrides `releaseDir` from the config file)
    #[arg(long, value_name = "PATH", allow_hyphen_values = true)]
    pub dest: Option<PathBuf>,

    /// Use specific config file
    #[arg(
        long,
        value_name = "PATH",
        allow_hyphen_values = true,
        conflicts_with = "no_config"
    )]
    pub config: Option<PathBuf>,

    /// Ignore all config files
    #[arg(long, conflicts_with = "config")]
    pub no_config: bool,

    /// Extra entry name to skip at any depth (repeatable)
    #[arg(long = "ignore", value_name = "NAME", allow_hyphen_values = true)]
    pub ignore: Vec<String>,

    /// Do not skip node_modules, .git, dist and out by default
    #[arg(long)]
    pub no_default_ignores: bool,

    /// Exit non-zero when any single entry failed to copy
    #[arg(long)]
    pub strict: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only print errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Drop command-line tokens that are not flags of [`Cli`]
///
/// Unknown flags, and stray values not attached to a known flag, are removed
/// so that clap never rejects them. The program name is kept as is.
pub fn retain_known_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut cmd = Cli::command();
    cmd.build();

    let mut longs: HashMap<String, bool> = HashMap::new();
    let mut shorts: HashMap<char, bool> = HashMap::new();
    for arg in cmd.get_arguments() {
        let takes_value = arg.get_action().takes_values();
        if let Some(long) = arg.get_long() {
            longs.insert(long.to_string(), takes_value);
        }
        if let Some(short) = arg.get_short() {
            shorts.insert(short, takes_value);
        }
    }

    let mut args = args.into_iter().map(Into::into);
    let mut kept: Vec<OsString> = args.next().into_iter().collect();

    while let Some(arg) = args.next() {
        let Some(text) = arg.to_str() else {
            continue;
        };

        let wants_value = if let Some(long) = text.strip_prefix("--") {
            match long.split_once('=') {
                Some((name, _)) => longs.get(name).map(|_| false),
                None => longs.get(long).copied(),
            }
        } else if let Some(cluster) = text.strip_prefix('-').filter(|s| !s.is_empty()) {
            if cluster.chars().all(|c| shorts.contains_key(&c)) {
                cluster.chars().last().and_then(|c| shorts.get(&c).copied())
            } else {
                None
            }
        } else {
            None
        };

        match wants_value {
            Some(true) => {
                kept.push(arg);
                if let Some(value) = args.next() {
                    kept.push(value);
                }
            }
            Some(false) => kept.push(arg),
            None => {}
        }
    }

    kept
}
