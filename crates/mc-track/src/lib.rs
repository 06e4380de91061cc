//! `mc-track` — the static half of the simulation: track geometry.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`segment`] | `TrackSegment` and its layout symbols                       |
//! | [`grid`]    | `TrackGrid` (ragged, read-only), `CartPlacement`, `parse_layout` |
//! | [`loader`]  | `load_layout_path`, `load_layout_reader`                    |
//! | [`error`]   | `TrackError`, `TrackResult<T>`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod grid;
pub mod loader;
pub mod segment;

#[cfg(test)]
mod tests;

pub use error::{TrackError, TrackResult};
pub use grid::{CartPlacement, TrackGrid, parse_layout};
pub use loader::{load_layout_path, load_layout_reader};
pub use segment::TrackSegment;
