//! Error types for action decoding, geometry resolution and effectors.

use thiserror::Error;

use crate::{action::InvalidActionError, window::WindowId};

/// Failures while computing a target frame.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionError {
    /// The display-list provider returned no displays. Display attach/detach
    /// is asynchronous to the request, so callers may simply try again later.
    #[error("no displays attached")]
    NoDisplays,

    /// The window overlaps no display. Only surfaced when the offscreen
    /// policy is [`OffscreenPolicy::Fail`](crate::OffscreenPolicy::Fail).
    #[error("window is outside every display")]
    WindowOffscreen,
}

/// Errors that can occur while moving the frontmost window.
#[derive(Error, Debug)]
pub enum Error {
    /// The requested action combines flags that have no defined meaning.
    #[error(transparent)]
    InvalidAction(#[from] InvalidActionError),

    /// The target frame could not be computed.
    #[error("resolution failed: {0}")]
    Resolution(#[from] ResolutionError),

    /// The window-mover effector refused or failed to apply the frame.
    #[error("failed to move window {window}: {message}")]
    Effector {
        /// Window the effector was asked to move.
        window: WindowId,
        /// Effector-supplied reason.
        message: String,
    },
}

impl Error {
    /// Helper for effector implementations.
    pub fn effector<M: Into<String>>(window: WindowId, msg: M) -> Self {
        Self::Effector {
            window,
            message: msg.into(),
        }
    }
}

/// Result alias for fallible window operations.
pub type Result<T> = std::result::Result<T, Error>;
