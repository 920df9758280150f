mod cli;
mod commands;
mod exit;
mod logging;

use std::process::ExitCode;

use clap::Parser;
use cli::Cli;
use exit::Status;

fn main() -> ExitCode {
    let cli = Cli::parse_from(cli::retain_known_args(std::env::args_os()));
    logging::init_tracing(cli.verbose, cli.quiet);

    // Set up Ctrl+C handler for graceful interruption
    if let Err(e) = ctrlc::set_handler(|| {
        eprintln!("\n\nInterrupted by user (Ctrl+C)");
        std::process::exit(130); // Standard exit code for SIGINT
    }) {
        tracing::warn!(error = %e, "Failed to set Ctrl+C handler");
    }

    match commands::SyncCommand::execute(&cli) {
        Ok(report) if cli.strict && !report.is_complete() => {
            eprintln!(
                "Error: {} entries failed to copy (--strict)",
                report.failures.len()
            );
            Status::PartialFailure.into()
        }
        Ok(_) => Status::Success.into(),
        Err(e) => {
            eprintln!("Error: {e:#}");
            Status::from_error(&e).into()
        }
    }
}
