//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use mc_cart::{Cart, CartError};
use mc_core::Tick;
use mc_sim::{Collision, SimObserver};
use mc_track::TrackGrid;

use crate::row::{CartSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that writes cart snapshots and tick summaries to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
///
/// Tick summaries hold one row per tick.  A `continue` row is held back until
/// the next tick ends or the run finishes, because a collision or fault
/// reported for the same tick replaces it.
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    pending:    Option<TickSummaryRow>,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, pending: None, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn flush_pending(&mut self) {
        if let Some(row) = self.pending.take() {
            let result = self.writer.write_tick_summary(&row);
            self.store_err(result);
        }
    }

    /// Write the terminal row for `tick`, dropping a held `continue` row for
    /// the same tick.
    fn terminal(&mut self, tick: Tick, carts: &[Cart], outcome: &'static str) {
        if self.pending.is_some_and(|row| row.tick == tick.0) {
            self.pending = None;
        }
        self.flush_pending();
        let row = summary_row(tick, carts, outcome);
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, carts: &[Cart]) {
        self.flush_pending();
        self.pending = Some(summary_row(tick, carts, "continue"));
    }

    fn on_snapshot(&mut self, tick: Tick, _grid: &TrackGrid, carts: &[Cart]) {
        let mut rows: Vec<CartSnapshotRow> = carts
            .iter()
            .map(|cart| CartSnapshotRow {
                tick:      tick.0,
                cart_id:   cart.id.0,
                row:       cart.position.row,
                col:       cart.position.col,
                facing:    cart.facing.as_str(),
                next_turn: cart.next_turn.as_str(),
            })
            .collect();
        // Stable row order per tick regardless of processing order.
        rows.sort_by_key(|r| r.cart_id);

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_collision(&mut self, collision: &Collision, carts: &[Cart]) {
        self.terminal(collision.tick, carts, "collision");
    }

    fn on_fault(&mut self, tick: Tick, _error: &CartError, carts: &[Cart]) {
        self.terminal(tick, carts, "fault");
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        self.flush_pending();
        let result = self.writer.finish();
        self.store_err(result);
    }
}

fn summary_row(tick: Tick, carts: &[Cart], outcome: &'static str) -> TickSummaryRow {
    TickSummaryRow { tick: tick.0, carts: carts.len() as u64, outcome }
}
