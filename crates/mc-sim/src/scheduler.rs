//! The per-tick scheduling algorithm.
//!
//! These are free functions over a grid and a cart slice so a single tick can
//! be exercised without building a [`Sim`][crate::Sim].

use mc_cart::{Cart, StepEffect};
use mc_core::{CollisionCheck, Position};
use mc_track::TrackGrid;

use crate::SimResult;

/// Where in the tick a collision was found.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum CollisionPhase {
    /// While ordering, before any cart moved.  The carts met during the
    /// previous tick.
    BeforeMoves,
    /// After every cart moved (`CollisionCheck::EndOfTick` only).
    AfterMoves,
}

/// Result of one tick that did not fault.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum TickOutcome {
    /// Every cart moved; no two share a cell.
    Continue,
    /// Two or more carts share `position`.  This is the designed end of a run.
    Collision { position: Position, phase: CollisionPhase },
}

/// Sort carts into processing order: row ascending, then column ascending.
///
/// Stable, so carts that share a cell keep their relative order.
#[inline]
pub fn order_carts(carts: &mut [Cart]) {
    carts.sort_by_key(|cart| cart.position);
}

/// First shared position in a slice already sorted by [`order_carts`].
///
/// Coincident carts are adjacent after sorting, so one pass over neighbouring
/// pairs finds the top-most, left-most collision.
pub fn first_collision(carts: &[Cart]) -> Option<Position> {
    carts
        .windows(2)
        .find(|pair| pair[0].position == pair[1].position)
        .map(|pair| pair[0].position)
}

/// Run one tick.  See [`tick_observed`].
pub fn tick(grid: &TrackGrid, carts: &mut [Cart], check: CollisionCheck) -> SimResult<TickOutcome> {
    tick_observed(grid, carts, check, |_, _| {})
}

/// Run one tick, calling `on_step` after each cart has been fully resolved.
///
/// On return `carts` is in the order it was processed in.  A fault stops the
/// tick immediately: carts later in the order have not moved.
pub fn tick_observed<F>(
    grid:        &TrackGrid,
    carts:       &mut [Cart],
    check:       CollisionCheck,
    mut on_step: F,
) -> SimResult<TickOutcome>
where
    F: FnMut(&Cart, StepEffect),
{
    // ── ① + ② Order and scan ──────────────────────────────────────────────
    order_carts(carts);
    if let Some(position) = first_collision(carts) {
        return Ok(TickOutcome::Collision { position, phase: CollisionPhase::BeforeMoves });
    }

    // ── ③ Move, strictly one cart at a time ───────────────────────────────
    for cart in carts.iter_mut() {
        let effect = cart.step(grid)?;
        on_step(cart, effect);
    }

    // ── ④ Optional eager re-scan ──────────────────────────────────────────
    //
    // Scans a sorted copy of the positions so `carts` keeps its processing
    // order for the caller.
    if check == CollisionCheck::EndOfTick {
        let mut landed: Vec<Position> = carts.iter().map(|cart| cart.position).collect();
        landed.sort_unstable();
        if let Some(pair) = landed.windows(2).find(|pair| pair[0] == pair[1]) {
            return Ok(TickOutcome::Collision { position: pair[0], phase: CollisionPhase::AfterMoves });
        }
    }

    Ok(TickOutcome::Continue)
}
