//! The `Sim` struct and its run loop.

use mc_cart::Cart;
use mc_core::{Position, SimConfig, Tick};
use mc_track::TrackGrid;

use crate::scheduler::{self, CollisionPhase, TickOutcome};
use crate::{SimError, SimObserver, SimResult};

/// The first collision of a run.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Collision {
    /// Ticks completed when the carts came to share a cell.
    pub tick:     Tick,
    pub position: Position,
}

/// How [`Sim::run`] ended without a fault.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum RunOutcome {
    Collision(Collision),
    /// `config.max_ticks` ticks completed without a collision.
    TickLimit(Tick),
}

/// Terminal state of a run.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum Finish {
    Collided(Collision),
    Faulted,
}

/// The simulation runner.
///
/// Owns the read-only track and the cart list, which only the scheduler
/// mutates.  Create via [`SimBuilder`][crate::SimBuilder].
///
/// Once a collision or fault has been reported the sim is terminal and
/// [`step`][Self::step] returns [`SimError::Finished`].
pub struct Sim {
    /// Run configuration (tick cap, snapshot interval, collision check).
    pub config: SimConfig,

    /// Static track layout.
    pub grid: TrackGrid,

    /// All carts, in the order the most recent tick processed them.
    pub carts: Vec<Cart>,

    /// Completed ticks.
    pub clock: Tick,

    finish: Option<Finish>,
}

impl Sim {
    pub(crate) fn new(config: SimConfig, grid: TrackGrid, carts: Vec<Cart>) -> Self {
        Self { config, grid, carts, clock: Tick::ZERO, finish: None }
    }

    // ── Status ────────────────────────────────────────────────────────────

    pub fn is_finished(&self) -> bool {
        self.finish.is_some()
    }

    /// The collision that ended the run, if any.
    pub fn collision(&self) -> Option<Collision> {
        match self.finish {
            Some(Finish::Collided(c)) => Some(c),
            _ => None,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run until the first collision or until `config.max_ticks` ticks have
    /// completed.  Without a cap this only returns on a collision or a fault.
    ///
    /// Faults propagate as `Err`.  Use [`NoopObserver`][crate::NoopObserver]
    /// if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<RunOutcome> {
        if self.clock == Tick::ZERO && !self.is_finished() && self.config.output_interval_ticks > 0 {
            observer.on_snapshot(self.clock, &self.grid, &self.carts);
        }

        let result = loop {
            if self.config.end_tick().is_some_and(|end| self.clock >= end) {
                // Carts that met on the final tick have not been scanned yet
                // under the lazy check.
                break Ok(match self.settle(observer) {
                    Some(c) => RunOutcome::Collision(c),
                    None => RunOutcome::TickLimit(self.clock),
                });
            }
            match self.step(observer) {
                Ok(None) => continue,
                Ok(Some(c)) => break Ok(RunOutcome::Collision(c)),
                Err(e) => break Err(e),
            }
        };

        observer.on_sim_end(self.clock);
        result
    }

    /// Run at most `n` ticks from the current position, ignoring `max_ticks`.
    ///
    /// Returns the collision if one ends the run early.  Useful for tests and
    /// incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<Option<Collision>> {
        for _ in 0..n {
            if let Some(c) = self.step(observer)? {
                return Ok(Some(c));
            }
        }
        Ok(None)
    }

    /// Process one tick.
    ///
    /// Returns `Ok(Some(_))` when a collision is found, `Ok(None)` when all
    /// carts moved without meeting, and `Err` on a fault or if the sim has
    /// already finished.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<Option<Collision>> {
        if self.is_finished() {
            return Err(SimError::Finished { tick: self.clock });
        }

        let now = self.clock;
        observer.on_tick_start(now, &self.carts);

        let result = scheduler::tick_observed(
            &self.grid,
            &mut self.carts,
            self.config.collision_check,
            |cart, effect| observer.on_cart_step(now, cart, effect),
        );

        let outcome = match result {
            Ok(outcome) => outcome,
            Err(e) => {
                self.finish = Some(Finish::Faulted);
                if let SimError::Fault(fault) = &e {
                    observer.on_fault(now, fault, &self.carts);
                }
                return Err(e);
            }
        };

        match outcome {
            TickOutcome::Continue => {
                self.complete_tick(observer);
                Ok(None)
            }
            TickOutcome::Collision { position, phase } => {
                if phase == CollisionPhase::AfterMoves {
                    self.complete_tick(observer);
                }
                Ok(Some(self.collide(position, observer)))
            }
        }
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn complete_tick<O: SimObserver>(&mut self, observer: &mut O) {
        self.clock = self.clock + 1;
        observer.on_tick_end(self.clock, &self.carts);
        let interval = self.config.output_interval_ticks;
        if interval > 0 && self.clock.0.is_multiple_of(interval) {
            observer.on_snapshot(self.clock, &self.grid, &self.carts);
        }
    }

    fn collide<O: SimObserver>(&mut self, position: Position, observer: &mut O) -> Collision {
        let collision = Collision { tick: self.clock, position };
        self.finish = Some(Finish::Collided(collision));
        observer.on_collision(&collision, &self.carts);
        collision
    }

    /// Order and scan the current positions without moving anything.
    fn settle<O: SimObserver>(&mut self, observer: &mut O) -> Option<Collision> {
        if self.is_finished() {
            return self.collision();
        }
        scheduler::order_carts(&mut self.carts);
        scheduler::first_collision(&self.carts).map(|position| self.collide(position, observer))
    }
}
