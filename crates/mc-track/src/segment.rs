//! Track segment symbols.

use std::fmt;

/// The piece of track occupying one grid cell.
///
/// Unrecognised symbols are preserved as [`TrackSegment::Unknown`] rather than
/// rejected at load time: a stray character is only a problem if a cart ever
/// lands on it, and the scheduler reports it at that moment.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrackSegment {
    /// `-`
    Horizontal,
    /// `|`
    Vertical,
    /// `/`
    CurveForward,
    /// `\`
    CurveBack,
    /// `+`
    Intersection,
    /// A blank cell (space).
    Empty,
    /// Any other character.
    Unknown(char),
}

impl TrackSegment {
    pub fn from_symbol(c: char) -> TrackSegment {
        match c {
            '-'  => TrackSegment::Horizontal,
            '|'  => TrackSegment::Vertical,
            '/'  => TrackSegment::CurveForward,
            '\\' => TrackSegment::CurveBack,
            '+'  => TrackSegment::Intersection,
            ' '  => TrackSegment::Empty,
            other => TrackSegment::Unknown(other),
        }
    }

    pub fn symbol(self) -> char {
        match self {
            TrackSegment::Horizontal   => '-',
            TrackSegment::Vertical     => '|',
            TrackSegment::CurveForward => '/',
            TrackSegment::CurveBack    => '\\',
            TrackSegment::Intersection => '+',
            TrackSegment::Empty        => ' ',
            TrackSegment::Unknown(c)   => c,
        }
    }

    /// `true` for `-` and `|`.
    #[inline]
    pub fn is_straight(self) -> bool {
        matches!(self, TrackSegment::Horizontal | TrackSegment::Vertical)
    }
}

impl fmt::Display for TrackSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.symbol())
    }
}
