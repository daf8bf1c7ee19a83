//! Window identity and frame snapshots.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geom::Rect;

/// Identifier for an on-screen window.
///
/// Couples the owning process id with the window server's window number so
/// effectors never have to guess which process a window belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowId {
    /// Process identifier that owns the window.
    pub pid: i32,
    /// Window server identifier.
    pub window_id: u32,
}

impl WindowId {
    /// Construct a new identifier from process id and window id.
    #[must_use]
    pub const fn new(pid: i32, window_id: u32) -> Self {
        Self { pid, window_id }
    }
}

impl From<(i32, u32)> for WindowId {
    fn from(value: (i32, u32)) -> Self {
        Self::new(value.0, value.1)
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.pid, self.window_id)
    }
}

/// Snapshot of the focused window as reported by a provider.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    /// Window identity.
    pub id: WindowId,
    /// Current frame in global desktop coordinates.
    pub frame: Rect,
}

impl Window {
    /// Construct a window snapshot.
    #[must_use]
    pub const fn new(id: WindowId, frame: Rect) -> Self {
        Self { id, frame }
    }
}
