//! Action flags and the decoder that turns them into operation shapes.
//!
//! Callers express a request as a flag set. Half-snaps may be combined with a
//! display move; every other combination is rejected rather than resolved by
//! picking a "primary" flag. Only [`OperationShape`] values reach the resolver.

use std::{fmt, str::FromStr};

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use thiserror::Error;

bitflags! {
    /// Raw layout action flags. The bit values are stable across releases.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct Action: u32 {
        /// Fill the usable area of the current display.
        const FULLSCREEN = 0x1;
        /// Snap to the left half of the usable area.
        const LEFT_HALF = 0x2;
        /// Snap to the right half of the usable area.
        const RIGHT_HALF = 0x4;
        /// Move to the next display in provider order.
        const NEXT_DISPLAY = 0x8;
        /// Move to the previous display in provider order.
        const PREVIOUS_DISPLAY = 0x10;
    }
}

impl Action {
    /// Layout flags; at most one may be set.
    pub const LAYOUT: Self = Self::FULLSCREEN
        .union(Self::LEFT_HALF)
        .union(Self::RIGHT_HALF);
    /// Display-move flags; at most one may be set.
    pub const DISPLAY: Self = Self::NEXT_DISPLAY.union(Self::PREVIOUS_DISPLAY);

    /// The no-op action.
    #[must_use]
    pub const fn none() -> Self {
        Self::empty()
    }

    /// Text name of a single flag, as accepted by [`FromStr`].
    fn flag_name(self) -> &'static str {
        const NAMES: [(Action, &str); 5] = [
            (Action::FULLSCREEN, "fullscreen"),
            (Action::LEFT_HALF, "left_half"),
            (Action::RIGHT_HALF, "right_half"),
            (Action::NEXT_DISPLAY, "next_display"),
            (Action::PREVIOUS_DISPLAY, "previous_display"),
        ];
        NAMES
            .iter()
            .find(|(flag, _)| *flag == self)
            .map_or("?", |(_, name)| *name)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "none");
        }
        let names: Vec<&str> = self.iter().map(Self::flag_name).collect();
        write!(f, "{}", names.join("+"))
    }
}

/// Error returned when an action string names an unknown flag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown action flag '{0}'")]
pub struct ParseActionError(pub String);

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut out = Self::empty();
        for part in s.split(['+', '|', ',']).map(str::trim) {
            if part.is_empty() {
                continue;
            }
            let norm: String = part
                .chars()
                .filter(|c| !matches!(c, '_' | '-' | ' '))
                .flat_map(char::to_lowercase)
                .collect();
            let flag = match norm.as_str() {
                "none" | "noop" => Self::empty(),
                "fullscreen" | "full" | "maximize" => Self::FULLSCREEN,
                "lefthalf" | "left" => Self::LEFT_HALF,
                "righthalf" | "right" => Self::RIGHT_HALF,
                "nextdisplay" | "next" => Self::NEXT_DISPLAY,
                "previousdisplay" | "prevdisplay" | "previous" | "prev" => Self::PREVIOUS_DISPLAY,
                _ => return Err(ParseActionError(part.to_string())),
            };
            out |= flag;
        }
        Ok(out)
    }
}

/// Half of the usable area to snap into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Left half (receives the extra pixel on odd widths).
    Left,
    /// Right half.
    Right,
}

/// Direction of a circular walk over the display list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Advance one position, wrapping to the first display.
    Next,
    /// Retreat one position, wrapping to the last display.
    Previous,
}

/// A validated action. Invalid flag combinations cannot be expressed here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationShape {
    /// Leave the window where it is.
    NoOp,
    /// Fill the current display's usable area.
    MoveFullscreen,
    /// Snap to one half of the current display.
    MoveHalf(Side),
    /// Move to an adjacent display, preserving relative position.
    MoveDisplay(Direction),
    /// Move to an adjacent display, then snap to one half of it.
    MoveHalfAndDisplay(Side, Direction),
}

impl OperationShape {
    /// Flag set that classifies to this shape.
    #[must_use]
    pub fn action(self) -> Action {
        let side = |s: Side| match s {
            Side::Left => Action::LEFT_HALF,
            Side::Right => Action::RIGHT_HALF,
        };
        let dir = |d: Direction| match d {
            Direction::Next => Action::NEXT_DISPLAY,
            Direction::Previous => Action::PREVIOUS_DISPLAY,
        };
        match self {
            Self::NoOp => Action::empty(),
            Self::MoveFullscreen => Action::FULLSCREEN,
            Self::MoveHalf(s) => side(s),
            Self::MoveDisplay(d) => dir(d),
            Self::MoveHalfAndDisplay(s, d) => side(s) | dir(d),
        }
    }

    /// Display-walk direction, when this shape changes display.
    #[must_use]
    pub fn direction(self) -> Option<Direction> {
        match self {
            Self::MoveDisplay(d) | Self::MoveHalfAndDisplay(_, d) => Some(d),
            _ => None,
        }
    }
}

impl fmt::Display for OperationShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoOp => write!(f, "noop"),
            Self::MoveFullscreen => write!(f, "fullscreen"),
            Self::MoveHalf(s) => write!(f, "half({s:?})"),
            Self::MoveDisplay(d) => write!(f, "display({d:?})"),
            Self::MoveHalfAndDisplay(s, d) => write!(f, "half({s:?})+display({d:?})"),
        }
    }
}

/// Rejected action value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidActionError {
    /// Mutually exclusive flags were combined.
    #[error("invalid action: conflicting flags {flags}")]
    Conflict {
        /// The flags that cannot be combined.
        flags: Action,
    },
    /// The raw value carries bits outside the defined flags.
    #[error("invalid action: unknown bits {bits:#x}")]
    UnknownBits {
        /// The undefined bits.
        bits: u32,
    },
}

/// Classify a flag set into an operation shape.
pub fn classify(action: Action) -> Result<OperationShape, InvalidActionError> {
    let layout = action & Action::LAYOUT;
    let display = action & Action::DISPLAY;

    if layout.bits().count_ones() > 1 {
        return Err(InvalidActionError::Conflict { flags: layout });
    }
    if display.bits().count_ones() > 1 {
        return Err(InvalidActionError::Conflict { flags: display });
    }
    if layout.contains(Action::FULLSCREEN) && !display.is_empty() {
        return Err(InvalidActionError::Conflict {
            flags: layout | display,
        });
    }

    let side = if layout == Action::LEFT_HALF {
        Some(Side::Left)
    } else if layout == Action::RIGHT_HALF {
        Some(Side::Right)
    } else {
        None
    };
    let dir = if display == Action::NEXT_DISPLAY {
        Some(Direction::Next)
    } else if display == Action::PREVIOUS_DISPLAY {
        Some(Direction::Previous)
    } else {
        None
    };

    Ok(match (layout == Action::FULLSCREEN, side, dir) {
        (true, _, _) => OperationShape::MoveFullscreen,
        (false, Some(s), Some(d)) => OperationShape::MoveHalfAndDisplay(s, d),
        (false, Some(s), None) => OperationShape::MoveHalf(s),
        (false, None, Some(d)) => OperationShape::MoveDisplay(d),
        (false, None, None) => OperationShape::NoOp,
    })
}

/// Classify a raw flag value, rejecting undefined bits.
pub fn classify_bits(bits: u32) -> Result<OperationShape, InvalidActionError> {
    let action = Action::from_bits(bits).ok_or(InvalidActionError::UnknownBits {
        bits: bits & !Action::all().bits(),
    })?;
    classify(action)
}
