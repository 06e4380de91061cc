//! A single cart and its movement rules.

use mc_core::{CartId, Direction, Position};
use mc_track::{CartPlacement, TrackGrid, TrackSegment};

use crate::{CartError, CartResult, TurnChoice};

/// What a cart's most recent reaction did to its state.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum StepEffect {
    /// Straight track: facing unchanged.
    Straight,
    /// A curve rotated the cart.
    Curve,
    /// An intersection was resolved with this choice.
    Intersection(TurnChoice),
}

/// One agent on the track.
///
/// `position` changes only through [`Cart::advance`]; `facing` and
/// `next_turn` only through [`Cart::react`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cart {
    pub id:        CartId,
    pub position:  Position,
    pub facing:    Direction,
    pub next_turn: TurnChoice,
}

impl Cart {
    pub fn new(id: CartId, position: Position, facing: Direction) -> Self {
        Self { id, position, facing, next_turn: TurnChoice::Left }
    }

    /// Move one cell along `facing` and return the new position.
    ///
    /// On failure the cart is left where it was.
    pub fn advance(&mut self) -> CartResult<Position> {
        let next = self.position.step(self.facing).ok_or(CartError::OutOfBounds {
            cart:   self.id,
            from:   self.position,
            facing: self.facing,
        })?;
        self.position = next;
        Ok(next)
    }

    /// Update facing and turn state for the segment under the cart.
    pub fn react(&mut self, segment: Option<TrackSegment>) -> CartResult<StepEffect> {
        match segment {
            Some(TrackSegment::Horizontal | TrackSegment::Vertical) => Ok(StepEffect::Straight),

            Some(TrackSegment::CurveForward) => {
                self.facing = if self.facing.is_vertical() {
                    self.facing.rotate_clockwise()
                } else {
                    self.facing.rotate_counterclockwise()
                };
                Ok(StepEffect::Curve)
            }

            Some(TrackSegment::CurveBack) => {
                self.facing = if self.facing.is_vertical() {
                    self.facing.rotate_counterclockwise()
                } else {
                    self.facing.rotate_clockwise()
                };
                Ok(StepEffect::Curve)
            }

            Some(TrackSegment::Intersection) => {
                let choice = self.next_turn;
                self.facing = choice.apply(self.facing);
                self.next_turn = choice.next();
                Ok(StepEffect::Intersection(choice))
            }

            found @ (Some(TrackSegment::Empty | TrackSegment::Unknown(_)) | None) => {
                Err(CartError::UnknownSegment {
                    cart:     self.id,
                    position: self.position,
                    found,
                })
            }
        }
    }

    /// Advance one cell and react to the segment landed on.
    pub fn step(&mut self, grid: &TrackGrid) -> CartResult<StepEffect> {
        let landed = self.advance()?;
        self.react(grid.segment_at(landed))
    }
}

impl From<CartPlacement> for Cart {
    fn from(p: CartPlacement) -> Self {
        Cart::new(p.id, p.position, p.facing)
    }
}
