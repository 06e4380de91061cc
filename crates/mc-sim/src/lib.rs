//! `mc-sim` — tick scheduler and run loop for the minecart track simulator.
//!
//! # One tick
//!
//! ```text
//! ① Order   — sort carts by position, row-major (top row first, left to right).
//! ② Scan    — one pass over adjacent pairs; equal positions ⇒ Collision,
//!             nothing moves this tick.
//! ③ Move    — for each cart in that order: advance one cell, then react to
//!             the segment landed on.  Each cart is fully resolved before the
//!             next one moves.  A fault aborts the tick.
//! ④ Re-scan — only with `CollisionCheck::EndOfTick`; otherwise the next
//!             tick's step ② finds the same collision.
//! ```
//!
//! Collisions are an `Ok` outcome; faults are the `Err` arm.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use mc_sim::{NoopObserver, RunOutcome, SimBuilder};
//!
//! let mut sim = SimBuilder::from_layout(LAYOUT).max_ticks(10_000).build()?;
//! if let RunOutcome::Collision(c) = sim.run(&mut NoopObserver)? {
//!     println!("first crash at {} on {}", c.position, c.tick);
//! }
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod scheduler;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use scheduler::{CollisionPhase, TickOutcome, first_collision, order_carts, tick, tick_observed};
pub use sim::{Collision, RunOutcome, Sim};
