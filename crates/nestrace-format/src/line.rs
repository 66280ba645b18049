use std::fmt;

use crate::{MarkerError, Result};

/// Width of the leading opcode field, in characters.
pub const OPCODE_WIDTH: usize = 4;

/// Marker that opens the register status field.
pub const STATUS_START_MARKER: &str = "A:";

/// Marker of the stack pointer, the last register in the status field.
pub const STATUS_END_MARKER: &str = "SP";

/// Bytes kept from the start of `SP` (`SP:FD`).
pub const STATUS_END_SPAN: usize = 5;

/// The two fields kept from a reference trace line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceFields<'a> {
    /// First [`OPCODE_WIDTH`] characters of the line.
    pub opcode: &'a str,
    /// `A:.. X:.. Y:.. P:.. SP:..` run.
    pub status: &'a str,
}

impl<'a> TraceFields<'a> {
    /// Extract the opcode and status fields from a trace line.
    ///
    /// The status field starts at the first `A:` and ends [`STATUS_END_SPAN`]
    /// bytes past the first `SP`, clamped to the end of the line. A trailing
    /// `\n` or `\r\n` is never part of either field.
    ///
    /// # Errors
    ///
    /// Returns [`MarkerError::MissingMarker`] when either marker is absent and
    /// [`MarkerError::MisorderedMarkers`] when the field would end before it starts.
    pub fn extract(line: &'a str) -> Result<Self> {
        let line = strip_terminator(line);
        let opcode = opcode_field(line);

        let start = line
            .find(STATUS_START_MARKER)
            .ok_or(MarkerError::MissingMarker {
                marker: STATUS_START_MARKER,
            })?;
        // Searched from the line start, not from `A:`.
        let sp = line
            .find(STATUS_END_MARKER)
            .ok_or(MarkerError::MissingMarker {
                marker: STATUS_END_MARKER,
            })?;
        let end = floor_char_boundary(line, sp + STATUS_END_SPAN);

        if end <= start {
            return Err(MarkerError::MisorderedMarkers {
                status_start: start,
                status_end: end,
            });
        }

        Ok(Self {
            opcode,
            status: &line[start..end],
        })
    }

    /// Extract the fields with the legacy slicing rules, never failing.
    ///
    /// A missing `A:` behaves like a start index of -1 (the last character of
    /// the line), a missing `SP` like an end index of 4. Negative starts wrap
    /// from the end, both bounds clamp to the line, and an empty range yields
    /// an empty status.
    #[must_use]
    pub fn extract_lossy(line: &'a str) -> Self {
        let line = strip_terminator(line);
        let opcode = opcode_field(line);

        let start = line
            .find(STATUS_START_MARKER)
            .unwrap_or_else(|| line.len().saturating_sub(1));
        let end = line
            .find(STATUS_END_MARKER)
            .map_or(STATUS_END_SPAN - 1, |sp| sp + STATUS_END_SPAN);

        let start = floor_char_boundary(line, start);
        let end = floor_char_boundary(line, end);
        let status = if start < end { &line[start..end] } else { "" };

        Self { opcode, status }
    }
}

impl fmt::Display for TraceFields<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.opcode, self.status)
    }
}

/// Drop a trailing `\n` or `\r\n`.
#[must_use]
pub fn strip_terminator(line: &str) -> &str {
    line.strip_suffix('\n')
        .map_or(line, |l| l.strip_suffix('\r').unwrap_or(l))
}

fn opcode_field(line: &str) -> &str {
    line.char_indices()
        .nth(OPCODE_WIDTH)
        .map_or(line, |(idx, _)| &line[..idx])
}

/// Largest char boundary at or below `idx`, clamped to the string length.
fn floor_char_boundary(s: &str, idx: usize) -> usize {
    let mut idx = idx.min(s.len());
    while !s.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}
