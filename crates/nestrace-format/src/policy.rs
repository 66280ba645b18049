use crate::{MarkerError, Result, TraceFields};

/// What to do with a reference line whose markers can't be found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MalformedPolicy {
    /// Abort normalization at the first malformed line.
    #[default]
    Fail,
    /// Drop the line. The normalized trace gets shorter than the reference.
    Skip,
    /// Emit whatever the legacy slicing rules produce.
    Passthrough,
}

/// Result of extracting one line under a [`MalformedPolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extracted<'a> {
    WellFormed(TraceFields<'a>),
    /// Malformed line kept under [`MalformedPolicy::Passthrough`].
    Passthrough {
        fields: TraceFields<'a>,
        error: MarkerError,
    },
    /// Malformed line dropped under [`MalformedPolicy::Skip`].
    Skipped(MarkerError),
}

impl Extracted<'_> {
    /// Normalized text for this line, without a terminator.
    #[must_use]
    pub fn normalized(&self) -> Option<String> {
        match self {
            Self::WellFormed(fields) | Self::Passthrough { fields, .. } => Some(fields.to_string()),
            Self::Skipped(_) => None,
        }
    }
}

impl MalformedPolicy {
    /// Extract the fields of `line`, applying this policy on failure.
    ///
    /// # Errors
    ///
    /// Returns the extraction error only under [`MalformedPolicy::Fail`].
    pub fn extract(self, line: &str) -> Result<Extracted<'_>> {
        match TraceFields::extract(line) {
            Ok(fields) => Ok(Extracted::WellFormed(fields)),
            Err(error) => match self {
                Self::Fail => Err(error),
                Self::Skip => Ok(Extracted::Skipped(error)),
                Self::Passthrough => Ok(Extracted::Passthrough {
                    fields: TraceFields::extract_lossy(line),
                    error,
                }),
            },
        }
    }
}
