//! Resolver policy knobs.
//!
//! Defaults match the documented behavior; hosts may load overrides from a
//! settings file (the tester reads RON).

use serde::{Deserialize, Serialize};

/// How to choose between displays that qualify equally as "current".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlapTieBreak {
    /// Earliest display in provider order wins.
    #[default]
    LowestIndex,
    /// Latest display in provider order wins.
    HighestIndex,
}

/// What to do when the window touches no display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OffscreenPolicy {
    /// Treat the display at index 0 as current, and record the fallback.
    #[default]
    FallbackToFirst,
    /// Surface [`ResolutionError::WindowOffscreen`](crate::ResolutionError::WindowOffscreen).
    Fail,
}

/// Policy configuration for [`resolve`](crate::resolve).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Tie-break between equally qualified current displays.
    pub overlap_tie_break: OverlapTieBreak,
    /// Handling of windows outside every display.
    pub offscreen: OffscreenPolicy,
}
