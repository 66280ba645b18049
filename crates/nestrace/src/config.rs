//! Trace file locations.

use std::path::{Path, PathBuf};

/// Default trace produced by the emulator under test.
pub const DEFAULT_ACTUAL_PATH: &str = "output.txt";
/// Default reference (golden) trace.
pub const DEFAULT_DESIRED_PATH: &str = "desired_output.txt";
/// Default location of the normalized reference trace.
pub const DEFAULT_NORMALIZED_PATH: &str = "parsed_desired_output.txt";

/// The three files a run touches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracePaths {
    /// Trace written by the emulator under test.
    pub actual: PathBuf,
    /// Reference trace to normalize.
    pub desired: PathBuf,
    /// Normalized reference trace; overwritten on every run.
    pub normalized: PathBuf,
}

impl Default for TracePaths {
    fn default() -> Self {
        Self {
            actual: PathBuf::from(DEFAULT_ACTUAL_PATH),
            desired: PathBuf::from(DEFAULT_DESIRED_PATH),
            normalized: PathBuf::from(DEFAULT_NORMALIZED_PATH),
        }
    }
}

impl TracePaths {
    /// Default file names resolved under `dir`.
    #[must_use]
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            actual: dir.join(DEFAULT_ACTUAL_PATH),
            desired: dir.join(DEFAULT_DESIRED_PATH),
            normalized: dir.join(DEFAULT_NORMALIZED_PATH),
        }
    }

    #[must_use]
    pub fn with_actual(mut self, path: impl Into<PathBuf>) -> Self {
        self.actual = path.into();
        self
    }

    #[must_use]
    pub fn with_desired(mut self, path: impl Into<PathBuf>) -> Self {
        self.desired = path.into();
        self
    }

    #[must_use]
    pub fn with_normalized(mut self, path: impl Into<PathBuf>) -> Self {
        self.normalized = path.into();
        self
    }
}
