//! Normalize command.

use nestrace::{MalformedPolicy, NormalizeSummary, TracePaths};
use tracing::error;

use crate::cli::{EXIT_FAILURE, EXIT_SUCCESS};
use crate::terminal::{self, Status};

/// Handle the `normalize` command.
pub fn cmd_normalize(paths: &TracePaths, policy: MalformedPolicy) -> i32 {
    match nestrace::normalize_file(&paths.desired, &paths.normalized, policy) {
        Ok(summary) => {
            print_summary(&summary, paths);
            EXIT_SUCCESS
        }
        Err(e) => {
            error!(error = %e, "normalization failed");
            terminal::summary(Status::Fail, &e.to_string());
            EXIT_FAILURE
        }
    }
}

pub fn print_summary(summary: &NormalizeSummary, paths: &TracePaths) {
    let message = format!(
        "normalized {} of {} reference lines",
        summary.written, summary.read
    );
    if summary.skipped + summary.passthrough == 0 {
        terminal::summary(Status::Pass, &message);
    } else {
        terminal::summary(
            Status::Warn,
            &format!(
                "{message} ({} skipped, {} passed through)",
                summary.skipped, summary.passthrough
            ),
        );
    }
    terminal::trace_file("written", &paths.normalized);
}
