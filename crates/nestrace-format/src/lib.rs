//! Field extraction for nestest-style CPU trace lines.
//!
//! A reference trace line looks like
//!
//! ```text
//! C000  4C F5 C5  JMP $C5F5                       A:00 X:00 Y:00 P:24 SP:FD PPU:  0, 21 CYC:7
//! ```
//!
//! Only two fields survive normalization: the first four characters and the
//! register status run from `A:` through `SP:xx`. Everything here is pure; file
//! handling lives in the `nestrace` crate.

mod line;
mod policy;

pub use line::*;
pub use policy::*;

use thiserror::Error;

/// Field extraction errors.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerError {
    #[error("marker `{marker}` not found")]
    MissingMarker { marker: &'static str },
    #[error("status field ends at byte {status_end}, before it starts at byte {status_start}")]
    MisorderedMarkers {
        status_start: usize,
        status_end: usize,
    },
}

pub type Result<T> = std::result::Result<T, MarkerError>;
