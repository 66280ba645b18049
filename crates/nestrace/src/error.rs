use std::io;
use std::path::{Path, PathBuf};

use nestrace_format::MarkerError;
use thiserror::Error;

/// Trace normalization and comparison errors.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error on {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("Malformed reference line {line}: {source}")]
    Malformed { line: usize, source: MarkerError },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Attach `path` to an I/O error.
pub(crate) fn io_error(path: &Path) -> impl FnOnce(io::Error) -> Error {
    move |source| Error::Io {
        path: path.to_path_buf(),
        source,
    }
}
