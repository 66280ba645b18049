//! Compare command.

use nestrace::{CompareOutcome, CompareReport, TracePaths};
use tracing::error;

use crate::cli::{EXIT_FAILURE, EXIT_SUCCESS};
use crate::terminal::{self, Status};

/// Handle the `compare` command.
pub fn cmd_compare(paths: &TracePaths, fail_on_divergence: bool) -> i32 {
    match nestrace::compare_files(&paths.actual, &paths.normalized) {
        Ok(report) => print_summary(&report, paths, fail_on_divergence),
        Err(e) => {
            error!(error = %e, "comparison failed");
            terminal::summary(Status::Fail, &e.to_string());
            EXIT_FAILURE
        }
    }
}

/// Exit status for a finished comparison.
///
/// Divergences and a missing line only fail the run when asked to.
pub fn exit_code(report: &CompareReport, fail_on_divergence: bool) -> i32 {
    if fail_on_divergence && !report.is_match() {
        EXIT_FAILURE
    } else {
        EXIT_SUCCESS
    }
}

/// Print the comparison outcome and pick the exit code.
pub fn print_summary(
    report: &CompareReport,
    paths: &TracePaths,
    fail_on_divergence: bool,
) -> i32 {
    if let CompareOutcome::MissingLine { line } = report.outcome {
        terminal::summary(
            Status::Warn,
            &format!("actual trace has no content at line {line}; comparison stopped"),
        );
    }

    match report.first_divergence() {
        Some(first) => {
            terminal::summary(
                Status::Warn,
                &format!(
                    "first divergence at line {} ({} of {} compared lines differ)",
                    first.line,
                    report.divergences.len(),
                    report.compared
                ),
            );
            terminal::trace_line("expected", &first.expected);
            terminal::trace_line("actual", &first.actual);
            terminal::trace_file("actual", &paths.actual);
            terminal::trace_file("expected", &paths.normalized);
        }
        None if report.outcome == CompareOutcome::Completed => {
            terminal::summary(
                Status::Pass,
                &format!("{} lines matched", report.compared),
            );
        }
        None => {}
    }

    exit_code(report, fail_on_divergence)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINE: &str = "C000 A:00 X:00 Y:00 P:24 SP:FD\n";
    const OTHER: &str = "C000 A:01 X:00 Y:00 P:24 SP:FD\n";

    fn paths() -> TracePaths {
        TracePaths::in_dir("traces")
    }

    #[test]
    fn test_match_exits_success() {
        let report = nestrace::compare_lines(&[LINE, LINE], &[LINE, LINE]);

        assert_eq!(print_summary(&report, &paths(), false), EXIT_SUCCESS);
        assert_eq!(print_summary(&report, &paths(), true), EXIT_SUCCESS);
    }

    #[test]
    fn test_divergence_exits_success_by_default() {
        let report = nestrace::compare_lines(&[LINE, OTHER], &[LINE, LINE]);

        assert_eq!(report.divergent_lines(), vec![2]);
        assert_eq!(print_summary(&report, &paths(), false), EXIT_SUCCESS);
    }

    #[test]
    fn test_divergence_fails_when_requested() {
        let report = nestrace::compare_lines(&[LINE, OTHER], &[LINE, LINE]);

        assert_eq!(print_summary(&report, &paths(), true), EXIT_FAILURE);
    }

    #[test]
    fn test_missing_line_fails_only_when_requested() {
        let report = nestrace::compare_lines(&[LINE, ""], &[LINE, LINE]);

        assert_eq!(report.outcome, CompareOutcome::MissingLine { line: 2 });
        assert!(report.divergences.is_empty());
        assert_eq!(exit_code(&report, false), EXIT_SUCCESS);
        assert_eq!(print_summary(&report, &paths(), true), EXIT_FAILURE);
    }

    #[test]
    fn test_length_mismatch_alone_is_success() {
        let report = nestrace::compare_lines(&[LINE], &[LINE, LINE, LINE]);

        assert_eq!(exit_code(&report, true), EXIT_SUCCESS);
    }
}
