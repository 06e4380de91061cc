//! `mc-core` — foundational types for the minecart track simulator.
//!
//! This crate is a dependency of every other `mc-*` crate.  It has no `mc-*`
//! dependencies and no required external ones (only an optional `serde`).
//!
//! # What lives here
//!
//! | Module   | Contents                                           |
//! |----------|----------------------------------------------------|
//! | [`ids`]  | `CartId`                                           |
//! | [`geo`]  | `Position` (row-major ordered), `Direction`        |
//! | [`time`] | `Tick`, `SimConfig`, `CollisionCheck`              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod geo;
pub mod ids;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use geo::{Direction, Position};
pub use ids::CartId;
pub use time::{CollisionCheck, SimConfig, Tick};
