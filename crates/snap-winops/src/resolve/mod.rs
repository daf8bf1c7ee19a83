//! Geometry resolution: operation shape + window + displays -> target frame.
//!
//! The resolver is a pure function over a snapshot. It never talks to the
//! window server; callers hand the returned [`TargetFrame`] to an effector.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    action::{OperationShape, Side},
    config::{OffscreenPolicy, ResolverConfig},
    display::{Display, current_display_index},
    error::ResolutionError,
    geom::Rect,
    observability::record_offscreen_fallback,
    window::Window,
};

mod walk;

#[cfg(test)]
mod deterministic_tests;

pub use walk::{reanchor, step_index};

/// Computed destination for a window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetFrame {
    /// Destination display.
    pub display: Display,
    /// Position of the destination display in the provider's ordering.
    pub display_index: usize,
    /// Target rectangle relative to the destination display's top-left corner.
    pub rect: Rect,
}

impl TargetFrame {
    /// Target rectangle in global desktop coordinates.
    #[must_use]
    pub fn global_rect(&self) -> Rect {
        self.rect.to_global(self.display.bounds.origin())
    }
}

/// Half of a display's usable area, in that display's local coordinates.
#[must_use]
pub fn half_of(display: &Display, side: Side) -> Rect {
    let (left, right) = display.local_usable_area().split_halves();
    match side {
        Side::Left => left,
        Side::Right => right,
    }
}

/// Compute the target frame for `shape`.
///
/// `displays` is the provider's ordered list; display moves walk it
/// circularly. Fails with [`ResolutionError::NoDisplays`] when it is empty.
/// [`ResolutionError::WindowOffscreen`] is only surfaced for fullscreen and
/// half snaps under [`OffscreenPolicy::Fail`].
pub fn resolve(
    shape: OperationShape,
    window: &Window,
    displays: &[Display],
    config: &ResolverConfig,
) -> Result<TargetFrame, ResolutionError> {
    if displays.is_empty() {
        return Err(ResolutionError::NoDisplays);
    }
    let current = match current_display_index(&window.frame, displays, config.overlap_tie_break) {
        Some(idx) => idx,
        None => offscreen_fallback(shape, window, config)?,
    };
    let at = |index: usize, rect: Rect| TargetFrame {
        display: displays[index],
        display_index: index,
        rect,
    };

    let target = match shape {
        OperationShape::NoOp => at(
            current,
            window.frame.to_local(displays[current].bounds.origin()),
        ),
        OperationShape::MoveFullscreen => at(current, displays[current].local_usable_area()),
        OperationShape::MoveHalf(side) => at(current, half_of(&displays[current], side)),
        OperationShape::MoveDisplay(dir) => {
            let dest = step_index(current, displays.len(), dir)
                .ok_or(ResolutionError::NoDisplays)?;
            at(
                dest,
                reanchor(&window.frame, &displays[current], &displays[dest]),
            )
        }
        OperationShape::MoveHalfAndDisplay(side, dir) => {
            let dest = step_index(current, displays.len(), dir)
                .ok_or(ResolutionError::NoDisplays)?;
            at(dest, half_of(&displays[dest], side))
        }
    };

    debug!(
        window = %window.id,
        %shape,
        from = current,
        to = target.display_index,
        display = %target.display.id,
        rect = %target.rect,
        "resolved target frame"
    );
    Ok(target)
}

/// Display index to treat as current when the window overlaps no display.
///
/// `NoOp` anchors on display 0 silently. Display walks always start from
/// display 0. Fullscreen and half snaps follow the configured policy.
fn offscreen_fallback(
    shape: OperationShape,
    window: &Window,
    config: &ResolverConfig,
) -> Result<usize, ResolutionError> {
    match shape {
        OperationShape::NoOp => return Ok(0),
        OperationShape::MoveFullscreen | OperationShape::MoveHalf(_)
            if config.offscreen == OffscreenPolicy::Fail =>
        {
            return Err(ResolutionError::WindowOffscreen);
        }
        _ => {}
    }
    warn!(
        window = %window.id,
        frame = %window.frame,
        %shape,
        "window overlaps no display; using display 0"
    );
    record_offscreen_fallback(shape);
    Ok(0)
}
