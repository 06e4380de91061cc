//! Track grid representation and layout parsing.
//!
//! # Data layout
//!
//! One `Vec<TrackSegment>` per layout row.  Rows keep their original length,
//! so the grid may be ragged; a lookup past the end of a row (or below the last
//! row) yields `None` instead of panicking.
//!
//! The grid is built once by [`parse_layout`] and never mutated afterwards.
//! Every field is private and no `&mut` accessor exists.

use mc_core::{CartId, Direction, Position};

use crate::{TrackError, TrackResult, TrackSegment};

// ── CartPlacement ─────────────────────────────────────────────────────────────

/// Where a cart marker was found in the source layout.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CartPlacement {
    pub id:       CartId,
    pub position: Position,
    pub facing:   Direction,
}

// ── TrackGrid ─────────────────────────────────────────────────────────────────

/// Immutable map from grid cell to track segment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrackGrid {
    rows: Vec<Vec<TrackSegment>>,
}

impl TrackGrid {
    /// The segment at `position`, or `None` if the cell lies outside every row.
    #[inline]
    pub fn segment_at(&self, position: Position) -> Option<TrackSegment> {
        self.rows
            .get(position.row as usize)
            .and_then(|row| row.get(position.col as usize))
            .copied()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest row.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Iterator over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[TrackSegment]> + '_ {
        self.rows.iter().map(Vec::as_slice)
    }
}

// ── Layout parsing ────────────────────────────────────────────────────────────

/// Split a textual layout into the static track and the initial carts.
///
/// Each cart marker (`^ > v <`) is replaced by the straight segment it must be
/// standing on (`|` under `^`/`v`, `-` under `<`/`>`), and its cell and facing
/// are returned as a [`CartPlacement`].  Cart IDs are handed out in row-major
/// scan order.
///
/// Row indices, marker columns and cart IDs must fit in a `u32`; anything
/// larger is [`TrackError::LayoutTooLarge`].
pub fn parse_layout<I, S>(rows: I) -> TrackResult<(TrackGrid, Vec<CartPlacement>)>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut grid_rows = Vec::new();
    let mut placements = Vec::new();

    for (r, line) in rows.into_iter().enumerate() {
        let row_index = narrow(r, r, 0)?;
        let mut row = Vec::new();

        for (c, ch) in line.as_ref().chars().enumerate() {
            let segment = match Direction::from_marker(ch) {
                Some(facing) => {
                    let id = CartId(narrow(placements.len(), r, c)?);
                    let position = Position::new(row_index, narrow(c, r, c)?);
                    placements.push(CartPlacement { id, position, facing });
                    if facing.is_vertical() {
                        TrackSegment::Vertical
                    } else {
                        TrackSegment::Horizontal
                    }
                }
                None => TrackSegment::from_symbol(ch),
            };
            row.push(segment);
        }
        grid_rows.push(row);
    }

    Ok((TrackGrid { rows: grid_rows }, placements))
}

/// Convert a layout index to `u32`, reporting the offending cell on overflow.
pub(crate) fn narrow(n: usize, row: usize, col: usize) -> TrackResult<u32> {
    u32::try_from(n).map_err(|_| TrackError::LayoutTooLarge { row, col })
}
