use mc_core::{CartId, Direction, Position};
use mc_track::TrackSegment;
use thiserror::Error;

/// Faults raised while a cart moves.  Both indicate malformed track data or
/// a bad placement, never a normal end of the simulation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    #[error("{cart} at {from} cannot move {facing}: leaves the grid")]
    OutOfBounds {
        cart:   CartId,
        from:   Position,
        facing: Direction,
    },

    #[error("{cart} landed at {position} on {}", describe(.found))]
    UnknownSegment {
        cart:     CartId,
        position: Position,
        /// The segment found there; `None` if the cell is outside every row.
        found:    Option<TrackSegment>,
    },
}

fn describe(found: &Option<TrackSegment>) -> String {
    match found {
        Some(segment) => format!("unrecognised segment {segment}"),
        None          => "a cell with no track".to_owned(),
    }
}

pub type CartResult<T> = Result<T, CartError>;
