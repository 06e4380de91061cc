//! Plain-text layout loader.
//!
//! # Format
//!
//! One layout row per line, drawn with the track symbols `- | / \ +`, spaces
//! for empty cells, and the cart markers `^ > v <`.  Reading stops at end of
//! input or at the first empty line, so a trailing newline (or notes placed
//! after a blank line) never adds a row.  Rows may have different lengths.
//!
//! ```text
//! /->-\
//! |   |  /----\
//! | /-+--+-\  |
//! | | |  | v  |
//! \-+-/  \-+--/
//!   \------/
//! ```

use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::{CartPlacement, TrackError, TrackGrid, TrackResult, parse_layout};

/// Load a layout from a text file.
pub fn load_layout_path(path: &Path) -> TrackResult<(TrackGrid, Vec<CartPlacement>)> {
    let file = std::fs::File::open(path)?;
    load_layout_reader(file)
}

/// Like [`load_layout_path`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for embedded layouts.
pub fn load_layout_reader<R: Read>(reader: R) -> TrackResult<(TrackGrid, Vec<CartPlacement>)> {
    let mut rows = Vec::new();
    for line in BufReader::new(reader).lines() {
        let line = line?;
        let line = line.strip_suffix('\r').unwrap_or(&line);
        if line.is_empty() {
            break;
        }
        rows.push(line.to_owned());
    }

    if rows.is_empty() {
        return Err(TrackError::EmptyLayout);
    }
    parse_layout(rows)
}
