use anyhow::Context;
use relsync_core::{
    ConfigLoader, CopyReport, PathOverrides, SafetyGuard, SyncPaths, SyncReporter, TreeCopier,
};

use crate::cli::Cli;

pub struct SyncCommand;

impl SyncCommand {
    pub fn execute(cli: &Cli) -> anyhow::Result<CopyReport> {
        let config = ConfigLoader::load(cli.config.as_deref(), cli.no_config);

        let overrides = PathOverrides {
            source: cli.src.clone(),
            destination: cli.dest.clone(),
            ignore: cli.ignore.clone(),
            no_default_ignores: cli.no_default_ignores,
        };
        let paths = SyncPaths::resolve(overrides, config).context("Failed to resolve sync paths")?;

        SafetyGuard::check(&paths.source, &paths.destination).context("Safety check failed")?;

        if !cli.quiet {
            println!(
                "Syncing from:\n  {}\nTo:\n  {}\n",
                paths.source.display(),
                paths.destination.display()
            );
        }
        tracing::info!(
            ignore = ?paths.ignore.iter().collect::<Vec<_>>(),
            "starting sync"
        );

        let copier = TreeCopier::new(paths.ignore);
        let report = copier
            .copy(&paths.source, &paths.destination)
            .context("Release sync failed")?;

        if !cli.quiet {
            println!("{}", SyncReporter::generate_summary(&report));
            println!("Sync complete.");
        }

        Ok(report)
    }
}
