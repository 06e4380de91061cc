//! Simulation observer trait for progress reporting and data collection.

use mc_cart::{Cart, CartError, StepEffect};
use mc_core::Tick;
use mc_track::TrackGrid;

use crate::Collision;

/// Callbacks invoked by [`Sim::step`][crate::Sim::step] and
/// [`Sim::run`][crate::Sim::run] at key points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  Every `tick` argument is a count of
/// completed ticks at the moment the hook fires.  Hooks only ever see shared
/// references: nothing outside the scheduler mutates carts while a tick is in
/// progress.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, carts: &[Cart]) {
///         if tick.0 % self.interval == 0 {
///             println!("{tick}: {} carts still rolling", carts.len());
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the start of each tick, before ordering.  `tick` is the
    /// number of ticks completed so far.
    fn on_tick_start(&mut self, _tick: Tick, _carts: &[Cart]) {}

    /// Called once per cart, in processing order, after it has moved and
    /// reacted to its new cell.  `tick` is the number of ticks completed
    /// before this one, the same value `on_tick_start` just received.
    fn on_cart_step(&mut self, _tick: Tick, _cart: &Cart, _effect: StepEffect) {}

    /// Called after every cart has moved.  `tick` is the number of ticks now
    /// completed.
    fn on_tick_end(&mut self, _tick: Tick, _carts: &[Cart]) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks`
    /// completed ticks, plus once for the initial layout at `T0`).
    fn on_snapshot(&mut self, _tick: Tick, _grid: &TrackGrid, _carts: &[Cart]) {}

    /// Called once when the first collision is found.
    fn on_collision(&mut self, _collision: &Collision, _carts: &[Cart]) {}

    /// Called once if a cart faults.  The run stops with an error right after.
    /// `tick` counts the ticks completed before the faulting one; `carts` is
    /// the fleet as the fault left it.
    fn on_fault(&mut self, _tick: Tick, _error: &CartError, _carts: &[Cart]) {}

    /// Called once when [`Sim::run`][crate::Sim::run] returns, whatever the
    /// outcome.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
