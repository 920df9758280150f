//! Sync run summary rendering

use std::fmt::Write;

use super::CopyReport;

/// Sync run reporter
pub struct SyncReporter;

impl SyncReporter {
    /// Generate a summary report
    #[must_use]
    pub fn generate_summary(report: &CopyReport) -> String {
        let mut output = String::new();

        output.push_str("\n=== Sync Summary ===\n");
        let _ = writeln!(output, "Files copied:  {}", report.files_copied);
        let _ = writeln!(output, "Bytes copied:  {}", report.bytes_copied);
        let _ = writeln!(output, "Dirs ensured:  {}", report.dirs_ensured);

        if report.skipped() > 0 {
            let _ = writeln!(
                output,
                "Skipped:       {} (ignored: {}, symlinks: {}, special: {})",
                report.skipped(),
                report.ignored,
                report.symlinks_skipped,
                report.special_skipped
            );
        } else {
            let _ = writeln!(output, "Skipped:       0");
        }

        if !report.failures.is_empty() {
            let _ = writeln!(output, "\nFailures ({}):", report.failures.len());
            for failure in &report.failures {
                let _ = writeln!(output, "  - {failure}");
            }
        }

        if report.is_complete() {
            output.push_str("Status: ✓ Success\n");
        } else {
            output.push_str("Status: ✗ Completed with errors\n");
        }

        output
    }
}
