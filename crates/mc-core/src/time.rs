//! Simulation time model and run configuration.
//!
//! Time is a monotonically increasing `Tick` counter of *completed* ticks.
//! Tick 0 is the initial layout; after every cart has moved once the clock
//! reads `T1`, and so on.  There is no wall-clock mapping: a tick is purely a
//! scheduling step.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// Number of completed simulation ticks.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── CollisionCheck ────────────────────────────────────────────────────────────

/// When coincident cart positions are looked for.
///
/// Both variants agree on the first tick at which two carts share a cell and
/// on where that is; they differ only in whether the scan runs lazily at the
/// start of the following tick or immediately after the moves.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CollisionCheck {
    /// Scan only while ordering carts at the start of a tick.
    #[default]
    NextTickStart,
    /// Additionally scan once every cart has moved.
    EndOfTick,
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Run configuration for a simulation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Stop after this many ticks without a collision.  `None` runs until a
    /// collision or a fault, which never happens on a collision-free layout.
    pub max_ticks: Option<u64>,

    /// Emit a snapshot every N ticks.  0 disables snapshots; 1 = every tick.
    pub output_interval_ticks: u64,

    /// Where in the tick coincident positions are detected.
    pub collision_check: CollisionCheck,
}

impl SimConfig {
    /// The tick at which a run gives up, if capped.
    #[inline]
    pub fn end_tick(&self) -> Option<Tick> {
        self.max_ticks.map(Tick)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            max_ticks:             None,
            output_interval_ticks: 1,
            collision_check:       CollisionCheck::NextTickStart,
        }
    }
}
