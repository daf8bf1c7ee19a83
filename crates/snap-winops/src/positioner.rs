//! The end-to-end entry point: decode, resolve, apply.

use std::sync::Arc;

use tracing::{debug, info};

use crate::{
    Result,
    action::{Action, OperationShape, classify, classify_bits},
    config::ResolverConfig,
    ops::{DisplayProvider, FocusedWindowProvider, WindowMover},
    resolve::{TargetFrame, resolve},
};

/// What a move request did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// No window was focused; nothing happened.
    NoWindow,
    /// The target equals the current frame; the effector was not called.
    Unchanged(TargetFrame),
    /// The effector applied the target frame.
    Moved(TargetFrame),
}

impl MoveOutcome {
    /// Resolved target, if a window was found.
    #[must_use]
    pub fn target(&self) -> Option<&TargetFrame> {
        match self {
            Self::NoWindow => None,
            Self::Unchanged(t) | Self::Moved(t) => Some(t),
        }
    }
}

/// Moves the frontmost window using injected collaborators.
///
/// Holds no window or display state: both are fetched fresh per request.
#[derive(Clone)]
pub struct Positioner {
    windows: Arc<dyn FocusedWindowProvider>,
    displays: Arc<dyn DisplayProvider>,
    mover: Arc<dyn WindowMover>,
    config: ResolverConfig,
}

impl Positioner {
    /// Construct with the default resolver policy.
    pub fn new(
        windows: Arc<dyn FocusedWindowProvider>,
        displays: Arc<dyn DisplayProvider>,
        mover: Arc<dyn WindowMover>,
    ) -> Self {
        Self {
            windows,
            displays,
            mover,
            config: ResolverConfig::default(),
        }
    }

    /// Replace the resolver policy.
    #[must_use]
    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Active resolver policy.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Apply `action` to the frontmost window.
    ///
    /// Invalid actions are rejected before any collaborator is consulted.
    pub fn move_frontmost_window(&self, action: Action) -> Result<MoveOutcome> {
        let shape = classify(action)?;
        debug!(%action, %shape, "classified action");
        self.apply(shape)
    }

    /// Apply a raw flag value to the frontmost window.
    pub fn move_frontmost_window_bits(&self, bits: u32) -> Result<MoveOutcome> {
        let shape = classify_bits(bits)?;
        debug!(bits, %shape, "classified raw action");
        self.apply(shape)
    }

    fn apply(&self, shape: OperationShape) -> Result<MoveOutcome> {
        let Some(window) = self.windows.focused_window() else {
            debug!(%shape, "no focused window; nothing to do");
            return Ok(MoveOutcome::NoWindow);
        };
        let displays = self.displays.displays();
        let target = resolve(shape, &window, &displays, &self.config)?;

        if target.global_rect() == window.frame {
            debug!(window = %window.id, %shape, "target equals current frame; skipping effector");
            return Ok(MoveOutcome::Unchanged(target));
        }

        info!(
            window = %window.id,
            %shape,
            display = %target.display.id,
            rect = %target.rect,
            "moving window"
        );
        self.mover.set_frame(&window, &target)?;
        Ok(MoveOutcome::Moved(target))
    }
}
