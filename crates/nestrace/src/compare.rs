//! Line-by-line comparison of the actual trace against the normalized reference.

use std::borrow::Cow;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::{Result, io_error};

/// A line that differs between the two traces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Divergence {
    /// 1-based line number.
    pub line: usize,
    /// Normalized reference text, terminator included.
    pub expected: String,
    /// Actual text, terminator included.
    pub actual: String,
}

/// How the comparison ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOutcome {
    /// Every pair up to the shorter trace was examined.
    Completed,
    /// Stopped at an empty actual line.
    MissingLine { line: usize },
}

/// Result of comparing two traces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareReport {
    pub outcome: CompareOutcome,
    /// Divergent lines in ascending order.
    pub divergences: Vec<Divergence>,
    /// Number of line pairs examined.
    pub compared: usize,
    /// Lines in the actual trace.
    pub actual_lines: usize,
    /// Lines in the normalized reference.
    pub expected_lines: usize,
}

impl CompareReport {
    /// 1-based numbers of the divergent lines.
    #[must_use]
    pub fn divergent_lines(&self) -> Vec<usize> {
        self.divergences.iter().map(|d| d.line).collect()
    }

    /// The first point where the traces disagree.
    #[must_use]
    pub fn first_divergence(&self) -> Option<&Divergence> {
        self.divergences.first()
    }

    /// True when the comparison ran to completion without any divergence.
    #[must_use]
    pub fn is_match(&self) -> bool {
        self.outcome == CompareOutcome::Completed && self.divergences.is_empty()
    }

    /// Lines present in only one of the traces and never compared.
    #[must_use]
    pub const fn unpaired(&self) -> usize {
        self.actual_lines.abs_diff(self.expected_lines)
    }

    /// Emit the report on the warning channel.
    ///
    /// A missing line logs `Missing line N` followed by the divergences found
    /// before it; otherwise only the divergence list is logged.
    pub fn emit(&self) {
        if let CompareOutcome::MissingLine { line } = self.outcome {
            warn!("Missing line {line}");
        }
        warn!("{:?}", self.divergent_lines());
    }
}

/// Compare two traces pairwise, stopping at the shorter one.
///
/// Lines are compared as exact text, terminators included. An empty actual
/// line stops the comparison with [`CompareOutcome::MissingLine`]; lines read
/// from a file always carry a terminator or content, so only in-memory callers
/// can hit that path.
#[must_use]
pub fn compare_lines(actual: &[&str], expected: &[&str]) -> CompareReport {
    let mut divergences = Vec::new();
    let mut compared = 0;
    let mut outcome = CompareOutcome::Completed;

    for (act, exp) in actual.iter().zip(expected) {
        compared += 1;
        if act.is_empty() {
            outcome = CompareOutcome::MissingLine { line: compared };
            break;
        }
        if act != exp {
            divergences.push(Divergence {
                line: compared,
                expected: (*exp).to_string(),
                actual: (*act).to_string(),
            });
        }
    }

    CompareReport {
        outcome,
        divergences,
        compared,
        actual_lines: actual.len(),
        expected_lines: expected.len(),
    }
}

/// Rewrite `\r\n` and lone `\r` terminators as `\n`.
fn translate_newlines(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Split text into lines that keep their `\n`.
fn split_lines(text: &str) -> Vec<&str> {
    text.split_inclusive('\n').collect()
}

/// Compare the actual trace file against the normalized reference file.
///
/// Both files are read as text with `\r\n` and `\r` translated to `\n`, so
/// CRLF traces compare equal to LF ones. A missing final newline still counts.
/// The report is emitted on the warning channel before it is returned.
///
/// # Errors
///
/// Returns [`crate::Error::Io`] when either file can't be read.
pub fn compare_files(actual: &Path, expected: &Path) -> Result<CompareReport> {
    let actual_text = std::fs::read_to_string(actual).map_err(io_error(actual))?;
    let expected_text = std::fs::read_to_string(expected).map_err(io_error(expected))?;

    let actual_text = translate_newlines(&actual_text);
    let expected_text = translate_newlines(&expected_text);

    let report = compare_lines(&split_lines(&actual_text), &split_lines(&expected_text));

    if report.unpaired() > 0 {
        info!(
            actual = report.actual_lines,
            expected = report.expected_lines,
            unpaired = report.unpaired(),
            "trace lengths differ; trailing lines not compared"
        );
    }
    if let Some(first) = report.first_divergence() {
        debug!(
            line = first.line,
            expected = first.expected.trim_end(),
            actual = first.actual.trim_end(),
            "first divergence"
        );
    }

    report.emit();
    Ok(report)
}
