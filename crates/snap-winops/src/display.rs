//! Display descriptions and current-display selection.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{config::OverlapTieBreak, geom::Rect};

/// Opaque display identifier supplied by the display-list provider.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayId(pub u32);

impl fmt::Display for DisplayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "display#{}", self.0)
    }
}

/// An attached display in global desktop coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Display {
    /// Provider-assigned identifier.
    pub id: DisplayId,
    /// Full display bounds.
    pub bounds: Rect,
    /// Area left after reserved system UI (menu bar, dock), if known.
    #[serde(default)]
    pub usable: Option<Rect>,
}

impl Display {
    /// A display whose usable area equals its bounds.
    #[must_use]
    pub const fn new(id: u32, bounds: Rect) -> Self {
        Self {
            id: DisplayId(id),
            bounds,
            usable: None,
        }
    }

    /// Attach a usable-area sub-rectangle (global coordinates).
    #[must_use]
    pub const fn with_usable(mut self, usable: Rect) -> Self {
        self.usable = Some(usable);
        self
    }

    /// Usable area in global coordinates, clipped to the bounds.
    ///
    /// Falls back to the full bounds when no usable area is supplied or the
    /// supplied one does not intersect the display.
    #[must_use]
    pub fn usable_area(&self) -> Rect {
        self.usable
            .and_then(|u| u.intersection(&self.bounds))
            .unwrap_or(self.bounds)
    }

    /// Usable area relative to this display's top-left corner.
    #[must_use]
    pub fn local_usable_area(&self) -> Rect {
        self.usable_area().to_local(self.bounds.origin())
    }
}

/// Pick the display a window currently occupies.
///
/// The display containing the frame's center wins; otherwise the display with
/// the largest overlap. Equal candidates are broken by `tie`. Returns `None`
/// when the frame touches no display.
#[must_use]
pub fn current_display_index(
    frame: &Rect,
    displays: &[Display],
    tie: OverlapTieBreak,
) -> Option<usize> {
    let pick = |candidates: Vec<usize>| match tie {
        OverlapTieBreak::LowestIndex => candidates.first().copied(),
        OverlapTieBreak::HighestIndex => candidates.last().copied(),
    };

    let containing: Vec<usize> = displays
        .iter()
        .enumerate()
        .filter(|(_, d)| d.bounds.contains_center_of(frame))
        .map(|(i, _)| i)
        .collect();
    if !containing.is_empty() {
        trace!(?containing, "current display by center");
        return pick(containing);
    }

    let areas: Vec<i64> = displays.iter().map(|d| d.bounds.overlap_area(frame)).collect();
    let best = areas.iter().copied().max().filter(|a| *a > 0)?;
    let tied: Vec<usize> = areas
        .iter()
        .enumerate()
        .filter(|(_, a)| **a == best)
        .map(|(i, _)| i)
        .collect();
    trace!(?tied, best, "current display by overlap");
    pick(tied)
}
