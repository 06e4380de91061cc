//! Plain data row types written by output backends.

/// One cart's state at a given tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartSnapshotRow {
    pub tick:      u64,
    pub cart_id:   u32,
    pub row:       u32,
    pub col:       u32,
    pub facing:    &'static str,
    pub next_turn: &'static str,
}

/// How the run stood once `tick` ticks had completed.  One row per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:    u64,
    pub carts:   u64,
    /// `continue`, `collision`, or `fault`.
    pub outcome: &'static str,
}
