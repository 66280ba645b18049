//! nestrace - golden trace comparison for NES CPU emulation
//!
//! Normalizes a nestest-style reference log down to `<opcode> <status>` lines,
//! then diffs it line by line against the trace an emulator wrote.
//!
//! # Example
//!
//! ```no_run
//! use nestrace::{MalformedPolicy, TracePaths};
//!
//! # fn main() -> nestrace::Result<()> {
//! let report = nestrace::run(&TracePaths::in_dir("testing"), MalformedPolicy::Fail)?;
//! println!("divergent lines: {:?}", report.compare.divergent_lines());
//! # Ok(())
//! # }
//! ```

mod compare;
mod config;
mod error;
mod normalize;

pub use compare::*;
pub use config::*;
pub use error::{Error, Result};
pub use normalize::*;

pub use nestrace_format::{Extracted, MalformedPolicy, MarkerError, TraceFields};

/// Results of a full normalize-then-compare run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub normalize: NormalizeSummary,
    pub compare: CompareReport,
}

/// Normalize the reference trace, then compare the actual trace against it.
///
/// # Errors
///
/// Propagates the first I/O or malformed-line error; comparison does not run
/// if normalization fails.
pub fn run(paths: &TracePaths, policy: MalformedPolicy) -> Result<RunReport> {
    let normalize = normalize_file(&paths.desired, &paths.normalized, policy)?;
    let compare = compare_files(&paths.actual, &paths.normalized)?;
    Ok(RunReport { normalize, compare })
}
