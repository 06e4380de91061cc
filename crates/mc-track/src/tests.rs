//! Unit tests for mc-track.
//!
//! All tests use small inline layouts so they run without any files on disk
//! (except the loader tests, which write to a temp dir).

#[cfg(test)]
mod helpers {
    /// The two-loop worked example with two carts.
    pub const WORKED_EXAMPLE: &str = "\
/->-\\
|   |  /----\\
| /-+--+-\\  |
| | |  | v  |
\\-+-/  \\-+--/
  \\------/
";
}

// ── Segments ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod segment {
    use crate::TrackSegment;

    #[test]
    fn known_symbols() {
        assert_eq!(TrackSegment::from_symbol('-'), TrackSegment::Horizontal);
        assert_eq!(TrackSegment::from_symbol('|'), TrackSegment::Vertical);
        assert_eq!(TrackSegment::from_symbol('/'), TrackSegment::CurveForward);
        assert_eq!(TrackSegment::from_symbol('\\'), TrackSegment::CurveBack);
        assert_eq!(TrackSegment::from_symbol('+'), TrackSegment::Intersection);
        assert_eq!(TrackSegment::from_symbol(' '), TrackSegment::Empty);
    }

    #[test]
    fn backtick_is_not_a_curve() {
        assert_eq!(TrackSegment::from_symbol('`'), TrackSegment::Unknown('`'));
        assert!(!TrackSegment::from_symbol('`').is_straight());
    }

    #[test]
    fn symbol_round_trip() {
        for c in ['-', '|', '/', '\\', '+', ' ', '#'] {
            assert_eq!(TrackSegment::from_symbol(c).symbol(), c);
        }
    }

    #[test]
    fn classification() {
        assert!(TrackSegment::Horizontal.is_straight());
        assert!(TrackSegment::Vertical.is_straight());
        assert!(!TrackSegment::Intersection.is_straight());
        assert!(!TrackSegment::Empty.is_straight());
    }
}

// ── Grid & parsing ────────────────────────────────────────────────────────────

#[cfg(test)]
mod grid {
    use mc_core::{CartId, Direction, Position};

    use super::helpers::WORKED_EXAMPLE;
    use crate::grid::narrow;
    use crate::{TrackError, TrackSegment, parse_layout};

    #[test]
    fn markers_become_straights_and_placements() {
        let (grid, carts) = parse_layout(WORKED_EXAMPLE.lines()).unwrap();
        assert_eq!(carts.len(), 2);

        assert_eq!(carts[0].id, CartId(0));
        assert_eq!(carts[0].position, Position::new(0, 2));
        assert_eq!(carts[0].facing, Direction::East);
        assert_eq!(grid.segment_at(Position::new(0, 2)), Some(TrackSegment::Horizontal));

        assert_eq!(carts[1].id, CartId(1));
        assert_eq!(carts[1].position, Position::new(3, 9));
        assert_eq!(carts[1].facing, Direction::South);
        assert_eq!(grid.segment_at(Position::new(3, 9)), Some(TrackSegment::Vertical));
    }

    #[test]
    fn ids_follow_row_major_scan_order() {
        let (_, carts) = parse_layout(["-<->-", "^   v"]).unwrap();
        let order: Vec<_> = carts.iter().map(|c| (c.id.0, c.position)).collect();
        assert_eq!(
            order,
            [
                (0, Position::new(0, 1)),
                (1, Position::new(0, 3)),
                (2, Position::new(1, 0)),
                (3, Position::new(1, 4)),
            ]
        );
    }

    #[test]
    fn ragged_rows_and_out_of_range_lookups() {
        let (grid, _) = parse_layout(WORKED_EXAMPLE.lines()).unwrap();
        assert_eq!(grid.row_count(), 6);
        let lens: Vec<usize> = grid.rows().map(<[_]>::len).collect();
        assert_eq!(lens, [5, 13, 13, 13, 13, 10]);
        assert_eq!(grid.width(), 13);

        // Past the end of a short row, but within the width of the widest.
        assert_eq!(grid.segment_at(Position::new(0, 8)), None);
        // Below the last row.
        assert_eq!(grid.segment_at(Position::new(6, 0)), None);
        assert_eq!(grid.segment_at(Position::new(1, 12)), Some(TrackSegment::CurveBack));
    }

    #[test]
    fn unknown_symbols_survive_parsing() {
        let (grid, carts) = parse_layout([">-#-"]).unwrap();
        assert_eq!(carts.len(), 1);
        assert_eq!(grid.segment_at(Position::new(0, 2)), Some(TrackSegment::Unknown('#')));
    }

    #[test]
    fn empty_input_yields_empty_grid() {
        let (grid, carts) = parse_layout(Vec::<String>::new()).unwrap();
        assert_eq!(grid.row_count(), 0);
        assert_eq!(grid.width(), 0);
        assert!(carts.is_empty());
    }

    #[test]
    fn indices_that_fit_are_narrowed() {
        assert_eq!(narrow(0, 0, 0).unwrap(), 0);
        assert_eq!(narrow(u32::MAX as usize, 0, 7).unwrap(), u32::MAX);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn oversized_index_is_an_error_not_a_wrap() {
        let too_big = u32::MAX as usize + 1;
        let err = narrow(too_big, 3, too_big).unwrap_err();
        assert!(matches!(err, TrackError::LayoutTooLarge { row: 3, col } if col == too_big), "{err}");
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use mc_core::Position;

    use super::helpers::WORKED_EXAMPLE;
    use crate::{TrackError, TrackSegment, load_layout_path, load_layout_reader};

    #[test]
    fn reader_matches_parse() {
        let (grid, carts) = load_layout_reader(Cursor::new(WORKED_EXAMPLE)).unwrap();
        assert_eq!(grid.row_count(), 6);
        assert_eq!(carts.len(), 2);
    }

    #[test]
    fn stops_at_first_blank_line() {
        let text = "/-\\\n\\-/\n\nnotes: >>> not a cart\n";
        let (grid, carts) = load_layout_reader(Cursor::new(text)).unwrap();
        assert_eq!(grid.row_count(), 2);
        assert!(carts.is_empty());
    }

    #[test]
    fn strips_carriage_returns() {
        let text = "->-\r\n-+-\r\n";
        let (grid, carts) = load_layout_reader(Cursor::new(text)).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.segment_at(Position::new(1, 1)), Some(TrackSegment::Intersection));
        assert_eq!(carts.len(), 1);
    }

    #[test]
    fn empty_input_is_rejected() {
        let err = load_layout_reader(Cursor::new("")).unwrap_err();
        assert!(matches!(err, TrackError::EmptyLayout));
        let err = load_layout_reader(Cursor::new("\n-->--\n")).unwrap_err();
        assert!(matches!(err, TrackError::EmptyLayout));
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("layout.txt");
        std::fs::write(&path, WORKED_EXAMPLE).unwrap();
        let (grid, carts) = load_layout_path(&path).unwrap();
        assert_eq!(grid.row_count(), 6);
        assert_eq!(carts.len(), 2);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let err = load_layout_path(&dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, TrackError::Io(_)));
    }
}
