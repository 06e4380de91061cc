//! `mc-cart` — per-cart state and the rules for reacting to track.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                 |
//! |-----------|----------------------------------------------------------|
//! | [`turn`]  | `TurnChoice` — the Left → Straight → Right cycle         |
//! | [`cart`]  | `Cart`, `StepEffect`                                     |
//! | [`error`] | `CartError` (out-of-bounds, unknown segment), `CartResult<T>` |
//!
//! # State machine
//!
//! A cart's state is its `(facing, next_turn)` pair.  Every step is a move
//! one cell along `facing` followed by a reaction to the segment landed on:
//!
//! ```text
//!   - |   no change
//!   /     North/South → turn right,  East/West → turn left
//!   \     North/South → turn left,   East/West → turn right
//!   +     apply next_turn, then advance next_turn
//!   else  fault (UnknownSegment)
//! ```

pub mod cart;
pub mod error;
pub mod turn;

#[cfg(test)]
mod tests;

pub use cart::{Cart, StepEffect};
pub use error::{CartError, CartResult};
pub use turn::TurnChoice;
