//! Grid coordinates and cardinal directions.
//!
//! Rows grow downwards and columns grow to the right, with `(0, 0)` in the
//! top-left corner of the layout.  Both coordinates are unsigned: a move that
//! would take a cart above row 0 or left of column 0 has no representation and
//! is reported as `None` by [`Position::step`].

use std::fmt;

// ── Position ──────────────────────────────────────────────────────────────────

/// A cell on the track grid.
///
/// Field order matters: the derived `Ord` compares `row` first and `col`
/// second, which is exactly the order carts are processed in each tick.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: u32,
    pub col: u32,
}

impl Position {
    #[inline]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// The neighbouring cell one step in `direction`.
    ///
    /// Returns `None` if the step leaves the non-negative quadrant (or, in
    /// theory, overflows `u32`).  Callers treat that as an out-of-bounds fault;
    /// there is no clamping or wrap-around.
    #[inline]
    pub fn step(self, direction: Direction) -> Option<Position> {
        match direction {
            Direction::North => self.row.checked_sub(1).map(|row| Position { row, ..self }),
            Direction::South => self.row.checked_add(1).map(|row| Position { row, ..self }),
            Direction::East  => self.col.checked_add(1).map(|col| Position { col, ..self }),
            Direction::West  => self.col.checked_sub(1).map(|col| Position { col, ..self }),
        }
    }
}

impl fmt::Display for Position {
    /// Formats as `X,Y` (column first), the convention used for reporting
    /// crash sites.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.col, self.row)
    }
}

// ── Direction ─────────────────────────────────────────────────────────────────

/// One of the four cardinal facings, arranged in a clockwise ring
/// North → East → South → West → North.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All four directions in clockwise ring order, starting at North.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// One step clockwise around the ring ("turn right").
    #[inline]
    pub fn rotate_clockwise(self) -> Direction {
        match self {
            Direction::North => Direction::East,
            Direction::East  => Direction::South,
            Direction::South => Direction::West,
            Direction::West  => Direction::North,
        }
    }

    /// One step counter-clockwise around the ring ("turn left").
    #[inline]
    pub fn rotate_counterclockwise(self) -> Direction {
        match self {
            Direction::North => Direction::West,
            Direction::West  => Direction::South,
            Direction::South => Direction::East,
            Direction::East  => Direction::North,
        }
    }

    /// `true` for North and South.
    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::North | Direction::South)
    }

    /// Parse a cart marker (`^`, `>`, `v`, `<`) from a layout.
    pub fn from_marker(c: char) -> Option<Direction> {
        match c {
            '^' => Some(Direction::North),
            '>' => Some(Direction::East),
            'v' => Some(Direction::South),
            '<' => Some(Direction::West),
            _   => None,
        }
    }

    /// The layout marker drawn for a cart facing this way.
    pub fn marker(self) -> char {
        match self {
            Direction::North => '^',
            Direction::East  => '>',
            Direction::South => 'v',
            Direction::West  => '<',
        }
    }

    /// Lower-case label, used for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::East  => "east",
            Direction::South => "south",
            Direction::West  => "west",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
