//! Error handling for the snap-tester crate.

use std::{io, path::PathBuf, result};

use thiserror::Error;

/// Convenient result type for snap-tester operations.
pub type Result<T> = result::Result<T, Error>;

/// Errors that can occur while running the tester.
#[derive(Debug, Error)]
pub enum Error {
    /// Wrapper for standard I/O errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// A scenario or settings file could not be parsed.
    #[error("failed to parse {}: {message}", .path.display())]
    Parse {
        /// File that failed to parse.
        path: PathBuf,
        /// Parser diagnostic.
        message: String,
    },
    /// An action argument names an unknown flag.
    #[error("bad action argument: {0}")]
    ActionSpec(#[from] snap_winops::ParseActionError),
    /// Errors surfaced by the placement pipeline.
    #[error("placement error: {0}")]
    Winops(#[from] snap_winops::Error),
    /// JSON report serialization failed.
    #[error("failed to render report: {0}")]
    Json(#[from] serde_json::Error),
    /// No actions were supplied.
    #[error("no actions supplied; pass one or more actions such as left_half+next_display")]
    NoActions,
    /// One or more actions failed classification.
    #[error("{0} action(s) rejected")]
    Rejected(usize),
}
