//! Circular display walk and relative re-anchoring between displays.

use crate::{
    action::Direction,
    display::Display,
    geom::{Rect, rescale},
};

/// Circular index walk: one step in `dir`, wrapping at either end.
///
/// Returns `None` when `len` is zero. An out-of-range `index` is first
/// reduced modulo `len`.
#[must_use]
pub fn step_index(index: usize, len: usize, dir: Direction) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let index = index % len;
    Some(match dir {
        Direction::Next => (index + 1) % len,
        Direction::Previous => index.checked_sub(1).unwrap_or(len - 1),
    })
}

/// Carry `frame` from `from` to `to`, keeping its relative position.
///
/// The origin's offset from the source display's origin, as a fraction of the
/// source display's size, is applied to the destination usable area; the size
/// is kept. The result is
/// clamped into the destination usable area (shrinking if the window is larger)
/// and returned in the destination display's local coordinates.
#[must_use]
pub fn reanchor(frame: &Rect, from: &Display, to: &Display) -> Rect {
    let src = from.bounds;
    let dst = to.usable_area();
    let x = dst.x + rescale(frame.x - src.x, src.w, dst.w);
    let y = dst.y + rescale(frame.y - src.y, src.h, dst.h);
    Rect::new(x, y, frame.w, frame.h)
        .clamp_within(&dst)
        .to_local(to.bounds.origin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walk_wraps_both_ways() {
        assert_eq!(step_index(0, 3, Direction::Next), Some(1));
        assert_eq!(step_index(2, 3, Direction::Next), Some(0));
        assert_eq!(step_index(0, 3, Direction::Previous), Some(2));
        assert_eq!(step_index(1, 3, Direction::Previous), Some(0));
        assert_eq!(step_index(0, 1, Direction::Next), Some(0));
        assert_eq!(step_index(0, 1, Direction::Previous), Some(0));
    }

    #[test]
    fn walk_over_empty_list_is_none() {
        assert_eq!(step_index(0, 0, Direction::Next), None);
        assert_eq!(step_index(0, 0, Direction::Previous), None);
        assert_eq!(step_index(usize::MAX, 3, Direction::Next), Some(1));
    }

    #[test]
    fn reanchor_keeps_fraction() {
        let from = Display::new(1, Rect::new(0, 0, 2000, 1000));
        let to = Display::new(2, Rect::new(2000, 0, 1000, 500));
        // Origin at (25%, 50%) of the source.
        let r = reanchor(&Rect::new(500, 500, 200, 100), &from, &to);
        assert_eq!(r, Rect::new(250, 250, 200, 100));
    }

    #[test]
    fn reanchor_clamps_to_destination() {
        let from = Display::new(1, Rect::new(0, 0, 2000, 1000));
        let to = Display::new(2, Rect::new(2000, 0, 1000, 500));
        // Would overflow the right edge after scaling.
        let r = reanchor(&Rect::new(1800, 0, 400, 100), &from, &to);
        assert_eq!(r, Rect::new(600, 0, 400, 100));
        // Larger than the destination: shrink to fit.
        let r = reanchor(&Rect::new(0, 0, 1600, 900), &from, &to);
        assert_eq!(r, Rect::new(0, 0, 1000, 500));
    }

    #[test]
    fn reanchor_respects_usable_areas() {
        let from = Display::new(1, Rect::new(0, 0, 1000, 1000))
            .with_usable(Rect::new(0, 100, 1000, 900));
        let to = Display::new(2, Rect::new(-1000, -200, 1000, 1000))
            .with_usable(Rect::new(-1000, -175, 1000, 975));
        // 20% down the source display -> 20% of the destination usable height.
        let r = reanchor(&Rect::new(0, 200, 300, 300), &from, &to);
        assert_eq!(r, Rect::new(0, 220, 300, 300));
    }

    #[test]
    fn reanchor_measures_from_source_bounds() {
        let from = Display::new(1, Rect::new(0, 0, 1000, 1000))
            .with_usable(Rect::new(0, 100, 1000, 900));
        let to = Display::new(2, Rect::new(1000, 0, 1000, 1000));
        let r = reanchor(&Rect::new(100, 100, 200, 200), &from, &to);
        assert_eq!(r, Rect::new(100, 100, 200, 200));
    }
}
