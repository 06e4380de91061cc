//! The per-cart intersection choice cycle.

use std::fmt;

use mc_core::Direction;

/// What a cart does at the next intersection it reaches.
///
/// Cycles `Left → Straight → Right → Left …`, advancing once per intersection
/// regardless of which intersection it was.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnChoice {
    #[default]
    Left,
    Straight,
    Right,
}

impl TurnChoice {
    /// The choice that follows `self` in the cycle.
    #[inline]
    pub fn next(self) -> TurnChoice {
        match self {
            TurnChoice::Left     => TurnChoice::Straight,
            TurnChoice::Straight => TurnChoice::Right,
            TurnChoice::Right    => TurnChoice::Left,
        }
    }

    /// The facing after taking this choice while facing `facing`.
    #[inline]
    pub fn apply(self, facing: Direction) -> Direction {
        match self {
            TurnChoice::Left     => facing.rotate_counterclockwise(),
            TurnChoice::Straight => facing,
            TurnChoice::Right    => facing.rotate_clockwise(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TurnChoice::Left     => "left",
            TurnChoice::Straight => "straight",
            TurnChoice::Right    => "right",
        }
    }
}

impl fmt::Display for TurnChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
