//! Text rendering of the board.
//!
//! ```text
//!      0123456789012
//!   0: /---\
//!   1: |   |  /----\
//!   2: | /-+--+-\  |
//!   3: | | |  X |  |
//!   4: \-+-/  \-+--/
//!   5:   \------/
//! ```
//!
//! The header row repeats the last digit of each column index.  Carts are
//! drawn with their facing marker; the crash site, if given, with `X`.

use mc_cart::Cart;
use mc_core::Position;
use mc_track::TrackGrid;

/// Width of the row-number gutter, including the `": "` separator.
const GUTTER: usize = 5;

/// Render the track with carts and an optional crash marker overlaid.
///
/// Carts or crash sites outside the grid are ignored.  The result ends with a
/// newline.
pub fn render_board(grid: &TrackGrid, carts: &[Cart], crash: Option<Position>) -> String {
    let mut board: Vec<Vec<char>> = grid
        .rows()
        .map(|row| row.iter().map(|segment| segment.symbol()).collect())
        .collect();

    let mut place = |at: Position, c: char| {
        if let Some(cell) = board
            .get_mut(at.row as usize)
            .and_then(|row| row.get_mut(at.col as usize))
        {
            *cell = c;
        }
    };
    for cart in carts {
        place(cart.position, cart.facing.marker());
    }
    if let Some(at) = crash {
        place(at, 'X');
    }

    let mut out = String::new();
    out.push_str(&" ".repeat(GUTTER));
    for col in 0..grid.width() {
        out.push(char::from(b'0' + (col % 10) as u8));
    }
    out.push('\n');

    for (r, row) in board.iter().enumerate() {
        out.push_str(&format!("{r:>3}: "));
        out.extend(row.iter());
        out.push('\n');
    }
    out
}
