//! Collaborator seams: focused-window lookup, display enumeration and the
//! effector that actually applies a frame.
//!
//! Hosts implement these over their native window APIs; tests use
//! [`MockDesktop`] (enabled with the `test-utils` feature).

use crate::{Result, display::Display, resolve::TargetFrame, window::Window};

/// Source of the currently focused window.
pub trait FocusedWindowProvider: Send + Sync {
    /// The frontmost eligible window, or `None` when nothing is focused.
    fn focused_window(&self) -> Option<Window>;
}

/// Source of the attached displays, in a stable order.
pub trait DisplayProvider: Send + Sync {
    /// Attached displays. Order defines next/previous display walks.
    fn displays(&self) -> Vec<Display>;
}

/// Effector that applies a computed frame to a real window.
pub trait WindowMover: Send + Sync {
    /// Move `window` to `target`.
    fn set_frame(&self, window: &Window, target: &TargetFrame) -> Result<()>;
}

#[cfg(any(test, feature = "test-utils"))]
pub use mock::MockDesktop;

#[cfg(any(test, feature = "test-utils"))]
mod mock {
    use std::sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    };

    use parking_lot::Mutex;

    use super::{DisplayProvider, FocusedWindowProvider, WindowMover};
    use crate::{Error, Result, display::Display, geom::Rect, resolve::TargetFrame, window::Window};

    /// In-memory desktop implementing every collaborator trait.
    ///
    /// Successful moves update the focused window's frame, so consecutive
    /// requests observe the previous result.
    #[derive(Clone, Default)]
    pub struct MockDesktop {
        calls: Arc<Mutex<Vec<String>>>,
        focused: Arc<Mutex<Option<Window>>>,
        displays: Arc<Mutex<Vec<Display>>>,
        moves: Arc<Mutex<Vec<TargetFrame>>>,
        fail_set_frame: Arc<AtomicBool>,
    }

    impl MockDesktop {
        /// Empty desktop: no displays and no focused window.
        pub fn new() -> Self {
            Self::default()
        }

        /// Desktop with the given displays and focused window.
        pub fn with(displays: Vec<Display>, focused: Option<Window>) -> Self {
            let me = Self::new();
            me.set_displays(displays);
            me.set_focused(focused);
            me
        }

        /// Replace the display list.
        pub fn set_displays(&self, displays: Vec<Display>) {
            *self.displays.lock() = displays;
        }

        /// Replace the focused window.
        pub fn set_focused(&self, window: Option<Window>) {
            *self.focused.lock() = window;
        }

        /// Make the effector fail.
        pub fn set_fail_set_frame(&self, fail: bool) {
            self.fail_set_frame.store(fail, Ordering::SeqCst);
        }

        /// Current frame of the focused window.
        pub fn focused_frame(&self) -> Option<Rect> {
            self.focused.lock().map(|w| w.frame)
        }

        /// Every target frame handed to the effector, oldest first.
        pub fn moves(&self) -> Vec<TargetFrame> {
            self.moves.lock().clone()
        }

        /// Names of the trait methods invoked, in order.
        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().clone()
        }

        /// True when `name` was invoked at least once.
        pub fn calls_contains(&self, name: &str) -> bool {
            self.calls.lock().iter().any(|c| c == name)
        }

        fn note(&self, name: &str) {
            self.calls.lock().push(name.to_string());
        }
    }

    impl FocusedWindowProvider for MockDesktop {
        fn focused_window(&self) -> Option<Window> {
            self.note("focused_window");
            *self.focused.lock()
        }
    }

    impl DisplayProvider for MockDesktop {
        fn displays(&self) -> Vec<Display> {
            self.note("displays");
            self.displays.lock().clone()
        }
    }

    impl WindowMover for MockDesktop {
        fn set_frame(&self, window: &Window, target: &TargetFrame) -> Result<()> {
            self.note("set_frame");
            if self.fail_set_frame.load(Ordering::SeqCst) {
                return Err(Error::effector(window.id, "mock failure"));
            }
            self.moves.lock().push(*target);
            let mut focused = self.focused.lock();
            if let Some(w) = focused.as_mut()
                && w.id == window.id
            {
                w.frame = target.global_rect();
            }
            Ok(())
        }
    }
}
