//! Unit tests for mc-cart.

use mc_core::{CartId, Direction, Position};
use mc_track::{TrackSegment, parse_layout};

use crate::{Cart, CartError, StepEffect, TurnChoice};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn cart_facing(facing: Direction) -> Cart {
    Cart::new(CartId(0), Position::new(5, 5), facing)
}

// ── TurnChoice ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod turn_choice {
    use super::*;

    #[test]
    fn cycle_has_period_three() {
        let mut t = TurnChoice::default();
        let mut seen = Vec::new();
        for _ in 0..7 {
            seen.push(t);
            t = t.next();
        }
        use TurnChoice::*;
        assert_eq!(seen, [Left, Straight, Right, Left, Straight, Right, Left]);
    }

    #[test]
    fn apply_rotates_one_step() {
        assert_eq!(TurnChoice::Left.apply(Direction::North), Direction::West);
        assert_eq!(TurnChoice::Straight.apply(Direction::North), Direction::North);
        assert_eq!(TurnChoice::Right.apply(Direction::North), Direction::East);
        assert_eq!(TurnChoice::Left.apply(Direction::East), Direction::North);
        assert_eq!(TurnChoice::Right.apply(Direction::West), Direction::North);
    }
}

// ── Curves & straights ────────────────────────────────────────────────────────

#[cfg(test)]
mod react {
    use super::*;

    /// All eight (curve, facing) combinations.
    #[test]
    fn curve_table() {
        use Direction::*;
        let table = [
            (TrackSegment::CurveForward, East,  North),
            (TrackSegment::CurveForward, North, East),
            (TrackSegment::CurveForward, West,  South),
            (TrackSegment::CurveForward, South, West),
            (TrackSegment::CurveBack,    East,  South),
            (TrackSegment::CurveBack,    South, East),
            (TrackSegment::CurveBack,    North, West),
            (TrackSegment::CurveBack,    West,  North),
        ];
        for (segment, before, after) in table {
            let mut cart = cart_facing(before);
            assert_eq!(cart.react(Some(segment)), Ok(StepEffect::Curve));
            assert_eq!(cart.facing, after, "{segment} while facing {before}");
            assert_eq!(cart.next_turn, TurnChoice::Left, "curves leave the turn cycle alone");
        }
    }

    #[test]
    fn straights_change_nothing() {
        for facing in Direction::ALL {
            for segment in [TrackSegment::Horizontal, TrackSegment::Vertical] {
                let mut cart = cart_facing(facing);
                let before = cart.clone();
                assert_eq!(cart.react(Some(segment)), Ok(StepEffect::Straight));
                assert_eq!(cart, before);
            }
        }
    }

    #[test]
    fn intersections_consume_the_cycle() {
        let mut cart = cart_facing(Direction::North);
        let mut applied = Vec::new();
        for _ in 0..6 {
            match cart.react(Some(TrackSegment::Intersection)).unwrap() {
                StepEffect::Intersection(choice) => applied.push(choice),
                other => panic!("unexpected effect {other:?}"),
            }
        }
        use TurnChoice::*;
        assert_eq!(applied, [Left, Straight, Right, Left, Straight, Right]);
        // Left, Straight, Right twice is a net rotation of zero.
        assert_eq!(cart.facing, Direction::North);
        assert_eq!(cart.next_turn, Left);
    }

    #[test]
    fn first_intersection_turns_left() {
        let mut cart = cart_facing(Direction::East);
        cart.react(Some(TrackSegment::Intersection)).unwrap();
        assert_eq!(cart.facing, Direction::North);
        assert_eq!(cart.next_turn, TurnChoice::Straight);
    }

    #[test]
    fn empty_unknown_and_missing_cells_fault() {
        for found in [Some(TrackSegment::Empty), Some(TrackSegment::Unknown('`')), None] {
            let mut cart = cart_facing(Direction::East);
            let err = cart.react(found).unwrap_err();
            assert_eq!(
                err,
                CartError::UnknownSegment { cart: CartId(0), position: Position::new(5, 5), found }
            );
        }
    }
}

// ── Movement ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod movement {
    use super::*;

    #[test]
    fn advance_follows_facing() {
        let mut cart = cart_facing(Direction::West);
        assert_eq!(cart.advance(), Ok(Position::new(5, 4)));
        cart.facing = Direction::North;
        assert_eq!(cart.advance(), Ok(Position::new(4, 4)));
    }

    #[test]
    fn leaving_the_grid_is_out_of_bounds() {
        let mut cart = Cart::new(CartId(3), Position::new(0, 2), Direction::North);
        let err = cart.advance().unwrap_err();
        assert_eq!(
            err,
            CartError::OutOfBounds {
                cart:   CartId(3),
                from:   Position::new(0, 2),
                facing: Direction::North,
            }
        );
        // No clamping, no partial move.
        assert_eq!(cart.position, Position::new(0, 2));
    }

    #[test]
    fn step_moves_then_reacts() {
        let (grid, placements) = parse_layout(["->-\\", "   |"]).unwrap();
        let mut cart = Cart::from(placements[0]);
        assert_eq!(cart.step(&grid), Ok(StepEffect::Straight));
        assert_eq!(cart.position, Position::new(0, 2));
        assert_eq!(cart.step(&grid), Ok(StepEffect::Curve));
        assert_eq!(cart.position, Position::new(0, 3));
        assert_eq!(cart.facing, Direction::South);
        assert_eq!(cart.step(&grid), Ok(StepEffect::Straight));
        assert_eq!(cart.position, Position::new(1, 3));
    }

    #[test]
    fn stepping_off_a_ragged_row_faults() {
        let (grid, placements) = parse_layout(["-->"]).unwrap();
        let mut cart = Cart::from(placements[0]);
        let err = cart.step(&grid).unwrap_err();
        assert!(matches!(
            err,
            CartError::UnknownSegment { position, found: None, .. } if position == Position::new(0, 3)
        ));
    }

    #[test]
    fn error_messages_name_the_cart() {
        let err = CartError::OutOfBounds {
            cart:   CartId(1),
            from:   Position::new(0, 4),
            facing: Direction::North,
        };
        assert_eq!(err.to_string(), "CartId(1) at 4,0 cannot move north: leaves the grid");

        let err = CartError::UnknownSegment {
            cart:     CartId(2),
            position: Position::new(1, 1),
            found:    Some(TrackSegment::Unknown('#')),
        };
        assert_eq!(err.to_string(), "CartId(2) landed at 1,1 on unrecognised segment '#'");
    }
}
