use super::{TargetFrame, resolve};
use crate::{
    Action, Display, DisplayId, OffscreenPolicy, OverlapTieBreak, ResolutionError,
    ResolverConfig, Window, WindowId,
    action::{Direction, OperationShape, Side, classify},
    geom::Rect,
    observability::offscreen_fallback_count,
};

fn window(x: i32, y: i32, w: i32, h: i32) -> Window {
    Window::new(WindowId::new(42, 7), Rect::new(x, y, w, h))
}

fn two_displays() -> Vec<Display> {
    vec![
        Display::new(1, Rect::new(0, 0, 1920, 1080)).with_usable(Rect::new(0, 0, 1920, 1080)),
        Display::new(2, Rect::new(1920, 0, 1600, 900)),
    ]
}

fn three_displays() -> Vec<Display> {
    vec![
        Display::new(10, Rect::new(0, 0, 1440, 900)).with_usable(Rect::new(0, 25, 1440, 875)),
        Display::new(11, Rect::new(1440, -300, 2560, 1440)),
        Display::new(12, Rect::new(-1080, -500, 1080, 1920)),
    ]
}

fn run(action: Action, w: &Window, ds: &[Display]) -> TargetFrame {
    let shape = classify(action).expect("valid action");
    resolve(shape, w, ds, &ResolverConfig::default()).expect("resolves")
}

#[test]
fn left_half_on_next_display() {
    let t = run(
        Action::LEFT_HALF | Action::NEXT_DISPLAY,
        &window(100, 100, 400, 300),
        &two_displays(),
    );
    assert_eq!(t.display.id, DisplayId(2));
    assert_eq!(t.display_index, 1);
    assert_eq!(t.rect, Rect::new(0, 0, 800, 900));
    assert_eq!(t.global_rect(), Rect::new(1920, 0, 800, 900));
}

#[test]
fn right_half_on_previous_display_wraps() {
    let t = run(
        Action::RIGHT_HALF | Action::PREVIOUS_DISPLAY,
        &window(100, 100, 400, 300),
        &two_displays(),
    );
    assert_eq!(t.display_index, 1);
    assert_eq!(t.rect, Rect::new(800, 0, 800, 900));
}

#[test]
fn fullscreen_single_display_ignores_prior_frame() {
    let ds = vec![Display::new(1, Rect::new(0, 0, 2560, 1600))];
    for w in [window(10, 10, 100, 100), window(-50, 1500, 3000, 400)] {
        let t = run(Action::FULLSCREEN, &w, &ds);
        assert_eq!(t.rect, Rect::new(0, 0, 2560, 1600));
    }
}

#[test]
fn fullscreen_prefers_usable_area() {
    let ds = three_displays();
    let t = run(Action::FULLSCREEN, &window(100, 100, 400, 300), &ds);
    assert_eq!(t.display_index, 0);
    assert_eq!(t.rect, Rect::new(0, 25, 1440, 875));
}

#[test]
fn halves_on_odd_usable_width() {
    let ds = vec![Display::new(1, Rect::new(0, 0, 1001, 700))];
    let w = window(0, 0, 200, 200);
    let l = run(Action::LEFT_HALF, &w, &ds);
    let r = run(Action::RIGHT_HALF, &w, &ds);
    assert_eq!(l.rect, Rect::new(0, 0, 501, 700));
    assert_eq!(r.rect, Rect::new(501, 0, 500, 700));
}

#[test]
fn half_uses_current_display_not_first() {
    let ds = three_displays();
    // Window on the portrait display left of the primary.
    let t = run(Action::RIGHT_HALF, &window(-900, 0, 300, 300), &ds);
    assert_eq!(t.display.id, DisplayId(12));
    assert_eq!(t.rect, Rect::new(540, 0, 540, 1920));
    assert_eq!(t.global_rect(), Rect::new(-540, -500, 540, 1920));
}

#[test]
fn noop_is_identity() {
    let ds = three_displays();
    for w in [
        window(100, 100, 400, 300),
        window(1500, -250, 2000, 2000),
        window(-1000, -400, 50, 50),
    ] {
        let t = run(Action::none(), &w, &ds);
        assert_eq!(t.global_rect(), w.frame);
    }
}

#[test]
fn next_display_preserves_relative_position() {
    let ds = two_displays();
    let t = run(Action::NEXT_DISPLAY, &window(960, 540, 400, 300), &ds);
    assert_eq!(t.display_index, 1);
    // 50% of 1920x1080 -> 50% of 1600x900.
    assert_eq!(t.rect, Rect::new(800, 450, 400, 300));
}

#[test]
fn next_display_clamps_into_destination() {
    let ds = two_displays();
    let t = run(Action::NEXT_DISPLAY, &window(1500, 800, 400, 250), &ds);
    let dest = ds[1].local_usable_area();
    assert!(dest.contains_rect(&t.rect), "{} not in {}", t.rect, dest);
    assert_eq!(t.rect.size(), Rect::new(0, 0, 400, 250).size());
}

#[test]
fn next_cycles_back_after_n_steps() {
    let ds = three_displays();
    let shape = OperationShape::MoveDisplay(Direction::Next);
    let cfg = ResolverConfig::default();
    let mut w = window(100, 100, 400, 300);
    let mut seen = Vec::new();
    for _ in 0..ds.len() {
        let t = resolve(shape, &w, &ds, &cfg).unwrap();
        seen.push(t.display_index);
        w.frame = t.global_rect();
    }
    assert_eq!(seen, vec![1, 2, 0]);
}

#[test]
fn next_then_previous_returns() {
    let ds = three_displays();
    let cfg = ResolverConfig::default();
    let w = window(200, 200, 400, 300);
    let fwd = resolve(OperationShape::MoveDisplay(Direction::Next), &w, &ds, &cfg).unwrap();
    let back = resolve(
        OperationShape::MoveDisplay(Direction::Previous),
        &Window::new(w.id, fwd.global_rect()),
        &ds,
        &cfg,
    )
    .unwrap();
    assert_eq!(back.display_index, 0);
}

#[test]
fn empty_displays_fail_for_every_shape() {
    let w = window(0, 0, 10, 10);
    for shape in [
        OperationShape::NoOp,
        OperationShape::MoveFullscreen,
        OperationShape::MoveHalf(Side::Left),
        OperationShape::MoveDisplay(Direction::Previous),
        OperationShape::MoveHalfAndDisplay(Side::Right, Direction::Next),
    ] {
        assert_eq!(
            resolve(shape, &w, &[], &ResolverConfig::default()),
            Err(ResolutionError::NoDisplays)
        );
    }
}

#[test]
fn offscreen_falls_back_to_first_display() {
    let ds = three_displays();
    let before = offscreen_fallback_count();
    let t = run(Action::LEFT_HALF, &window(9000, 9000, 100, 100), &ds);
    assert_eq!(t.display_index, 0);
    assert_eq!(t.rect, Rect::new(0, 25, 720, 875));
    assert!(offscreen_fallback_count() > before);
}

fn fail_offscreen() -> ResolverConfig {
    ResolverConfig {
        offscreen: OffscreenPolicy::Fail,
        ..ResolverConfig::default()
    }
}

#[test]
fn offscreen_fails_when_configured() {
    let w = window(9000, 9000, 100, 100);
    for shape in [
        OperationShape::MoveFullscreen,
        OperationShape::MoveHalf(Side::Right),
    ] {
        assert_eq!(
            resolve(shape, &w, &three_displays(), &fail_offscreen()),
            Err(ResolutionError::WindowOffscreen)
        );
    }
}

#[test]
fn offscreen_noop_is_identity_under_fail_policy() {
    let w = window(9000, 9000, 100, 100);
    let t = resolve(OperationShape::NoOp, &w, &three_displays(), &fail_offscreen()).unwrap();
    assert_eq!(t.display_index, 0);
    assert_eq!(t.global_rect(), w.frame);
}

#[test]
fn offscreen_display_moves_walk_from_first_under_fail_policy() {
    let ds = three_displays();
    let w = window(9000, 9000, 100, 100);
    let t = resolve(
        OperationShape::MoveDisplay(Direction::Next),
        &w,
        &ds,
        &fail_offscreen(),
    )
    .unwrap();
    assert_eq!(t.display_index, 1);
    assert!(ds[1].local_usable_area().contains_rect(&t.rect));

    let t = resolve(
        OperationShape::MoveHalfAndDisplay(Side::Left, Direction::Previous),
        &w,
        &ds,
        &fail_offscreen(),
    )
    .unwrap();
    assert_eq!(t.display_index, 2);
    assert_eq!(t.rect, Rect::new(0, 0, 540, 1920));
}

#[test]
fn tie_break_selects_source_display() {
    let ds = vec![
        Display::new(1, Rect::new(0, 0, 1000, 1000)),
        Display::new(2, Rect::new(1000, 0, 800, 1000)),
    ];
    let w = window(900, 950, 200, 200);
    let low = resolve(
        OperationShape::MoveFullscreen,
        &w,
        &ds,
        &ResolverConfig::default(),
    )
    .unwrap();
    let high = resolve(
        OperationShape::MoveFullscreen,
        &w,
        &ds,
        &ResolverConfig {
            overlap_tie_break: OverlapTieBreak::HighestIndex,
            ..ResolverConfig::default()
        },
    )
    .unwrap();
    assert_eq!(low.display_index, 0);
    assert_eq!(high.display_index, 1);
    assert_eq!(high.rect, Rect::new(0, 0, 800, 1000));
}
