//! snap-winops: snap the frontmost window to a screen half, fill the screen,
//! or carry it to an adjacent display.
//!
//! A request flows through three stages:
//! - [`classify`] validates an [`Action`] flag set into an [`OperationShape`];
//! - [`resolve`] turns the shape, the window frame and the ordered display
//!   list into a [`TargetFrame`] in the destination display's local
//!   coordinates;
//! - a [`WindowMover`] applies the frame.
//!
//! [`Positioner`] composes the three over injected collaborators. Nothing here
//! touches the window server directly.

mod action;
mod config;
mod display;
mod error;
pub mod geom;
mod observability;
pub mod ops;
mod positioner;
mod resolve;
mod window;

pub use action::{
    Action, Direction, InvalidActionError, OperationShape, ParseActionError, Side, classify,
    classify_bits,
};
pub use config::{OffscreenPolicy, OverlapTieBreak, ResolverConfig};
pub use display::{Display, DisplayId, current_display_index};
pub use error::{Error, ResolutionError, Result};
pub use observability::{offscreen_fallback_count, reset_offscreen_fallback_count};
pub use ops::{DisplayProvider, FocusedWindowProvider, WindowMover};
pub use positioner::{MoveOutcome, Positioner};
pub use resolve::{TargetFrame, half_of, reanchor, resolve, step_index};
pub use window::{Window, WindowId};
