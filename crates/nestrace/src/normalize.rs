//! Reference trace normalization.
//!
//! Rewrites every reference line as `<opcode> <status>` so it lines up with
//! what the emulator under test logs.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use nestrace_format::{Extracted, MalformedPolicy};
use tracing::{debug, info, warn};

use crate::error::{Error, Result, io_error};

/// Line counts from one normalization pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeSummary {
    /// Reference lines read.
    pub read: usize,
    /// Normalized lines written.
    pub written: usize,
    /// Malformed lines dropped.
    pub skipped: usize,
    /// Malformed lines written with legacy slicing.
    pub passthrough: usize,
}

/// Normalize a single reference line.
///
/// `line_no` is 1-based and only used for diagnostics. Returns `None` when the
/// policy drops the line.
///
/// # Errors
///
/// Returns [`Error::Malformed`] when the markers can't be found and `policy`
/// is [`MalformedPolicy::Fail`].
pub fn normalize_line(
    line_no: usize,
    line: &str,
    policy: MalformedPolicy,
    summary: &mut NormalizeSummary,
) -> Result<Option<String>> {
    let extracted = policy
        .extract(line)
        .map_err(|source| Error::Malformed {
            line: line_no,
            source,
        })?;

    match &extracted {
        Extracted::WellFormed(_) => {}
        Extracted::Passthrough { error, .. } => {
            warn!(line = line_no, error = %error, "malformed reference line passed through");
            summary.passthrough += 1;
        }
        Extracted::Skipped(error) => {
            warn!(line = line_no, error = %error, "malformed reference line skipped");
            summary.skipped += 1;
        }
    }

    let normalized = extracted.normalized();
    if normalized.is_some() {
        summary.written += 1;
    }
    Ok(normalized)
}

/// Normalize the reference trace at `desired` into `normalized`.
///
/// The output file is created or truncated, then written one line per kept
/// reference line, each terminated by `\n`.
///
/// # Errors
///
/// Returns [`Error::Io`] when either file can't be opened, read, or written,
/// and [`Error::Malformed`] under [`MalformedPolicy::Fail`].
pub fn normalize_file(
    desired: &Path,
    normalized: &Path,
    policy: MalformedPolicy,
) -> Result<NormalizeSummary> {
    debug!(
        desired = %desired.display(),
        normalized = %normalized.display(),
        ?policy,
        "normalizing reference trace"
    );

    let reader = BufReader::new(File::open(desired).map_err(io_error(desired))?);
    let mut writer = BufWriter::new(File::create(normalized).map_err(io_error(normalized))?);
    let mut summary = NormalizeSummary::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(io_error(desired))?;
        summary.read += 1;
        if let Some(text) = normalize_line(idx + 1, &line, policy, &mut summary)? {
            writeln!(writer, "{text}").map_err(io_error(normalized))?;
        }
    }
    writer.flush().map_err(io_error(normalized))?;

    info!(
        read = summary.read,
        written = summary.written,
        path = %normalized.display(),
        "normalized reference trace"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_line_well_formed() {
        let mut summary = NormalizeSummary::default();
        let line = "C000  4C F5 C5  JMP $C5F5                       A:00 X:00 Y:00 P:24 SP:FD PPU:  0, 21 CYC:7";

        let text = normalize_line(1, line, MalformedPolicy::Fail, &mut summary).unwrap();

        assert_eq!(text.as_deref(), Some("C000 A:00 X:00 Y:00 P:24 SP:FD"));
        assert_eq!(summary.written, 1);
        assert_eq!(summary.skipped, 0);
    }

    #[test]
    fn test_normalize_line_fail_reports_line_number() {
        let mut summary = NormalizeSummary::default();
        let err = normalize_line(42, "garbage", MalformedPolicy::Fail, &mut summary).unwrap_err();

        assert!(matches!(err, Error::Malformed { line: 42, .. }));
        assert_eq!(summary.written, 0);
    }

    #[test]
    fn test_normalize_line_skip_and_passthrough_counts() {
        let mut summary = NormalizeSummary::default();

        let skipped = normalize_line(1, "garbage", MalformedPolicy::Skip, &mut summary).unwrap();
        assert_eq!(skipped, None);

        let kept =
            normalize_line(2, "A:00 X:00", MalformedPolicy::Passthrough, &mut summary).unwrap();
        assert_eq!(kept.as_deref(), Some("A:00 A:00"));

        assert_eq!(
            summary,
            NormalizeSummary {
                read: 0,
                written: 1,
                skipped: 1,
                passthrough: 1,
            }
        );
    }
}
