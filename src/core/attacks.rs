// Copyright 2017-2021 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Covered tiles for every piece kind. A covered tile is one that a piece attacks; it is what king safety is
//! computed from and, for most pieces, what move generation starts from.

use crate::core::*;
use crate::position::Position;

pub const ORTHOGONAL: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub const DIAGONAL: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// Casts a ray from `origin` along each of `directions` in turn. Each ray includes the first occupied tile it
/// reaches, regardless of who occupies it, and stops there or at the edge of the board.
pub fn ray_attacks(pos: &Position, origin: Coordinate, directions: &[(i32, i32)]) -> Vec<Coordinate> {
    let mut covered = Vec::new();
    for &(drow, dcol) in directions {
        for distance in 1..8 {
            let cursor = origin.offset(drow * distance, dcol * distance);
            if !cursor.inside_board() {
                break;
            }

            covered.push(cursor);
            if pos.is_occupied(cursor) {
                break;
            }
        }
    }

    covered
}

pub fn rook_attacks(pos: &Position, origin: Coordinate) -> Vec<Coordinate> {
    ray_attacks(pos, origin, &ORTHOGONAL)
}

pub fn bishop_attacks(pos: &Position, origin: Coordinate) -> Vec<Coordinate> {
    ray_attacks(pos, origin, &DIAGONAL)
}

/// Rook rays followed by bishop rays, with any repeated tile kept only at its first appearance.
pub fn queen_attacks(pos: &Position, origin: Coordinate) -> Vec<Coordinate> {
    let mut covered = rook_attacks(pos, origin);
    for tile in bishop_attacks(pos, origin) {
        if !covered.contains(&tile) {
            covered.push(tile);
        }
    }

    covered
}

/// Knight attacks ignore occupancy entirely; tiles held by friendly pieces are still covered.
pub fn knight_attacks(origin: Coordinate) -> Vec<Coordinate> {
    KNIGHT_OFFSETS
        .iter()
        .map(|&(drow, dcol)| origin.offset(drow, dcol))
        .filter(|c| c.inside_board())
        .collect()
}

/// The neighbouring tiles of a king that are on the board and not held by one of its own pieces.
pub fn king_attacks(pos: &Position, origin: Coordinate, color: Color) -> Vec<Coordinate> {
    let mut covered = Vec::with_capacity(8);
    for drow in -1..=1 {
        for dcol in -1..=1 {
            if drow == 0 && dcol == 0 {
                continue;
            }

            let tile = origin.offset(drow, dcol);
            if tile.inside_board() && !pos.is_occupied_by(tile, color) {
                covered.push(tile);
            }
        }
    }

    covered
}

/// The two forward diagonals of a pawn. These are capture tiles only and are covered whether or not anything
/// stands on them.
pub fn pawn_attacks(origin: Coordinate, color: Color) -> Vec<Coordinate> {
    let mut covered = Vec::with_capacity(2);
    let ahead = origin.offset(color.forward(), 0);
    if !ahead.inside_board() {
        return covered;
    }

    if origin.col() < 7 {
        covered.push(ahead.offset(0, 1));
    }
    if origin.col() > 0 {
        covered.push(ahead.offset(0, -1));
    }

    covered
}

/// The tiles covered by `piece` standing at `origin` on `pos`.
pub fn tiles_covered(pos: &Position, origin: Coordinate, piece: Piece) -> Vec<Coordinate> {
    match piece.kind {
        PieceKind::Pawn => pawn_attacks(origin, piece.color),
        PieceKind::Rook => rook_attacks(pos, origin),
        PieceKind::Knight => knight_attacks(origin),
        PieceKind::Bishop => bishop_attacks(pos, origin),
        PieceKind::Queen => queen_attacks(pos, origin),
        PieceKind::King => king_attacks(pos, origin, piece.color),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(s: &str) -> Coordinate {
        s.parse().unwrap()
    }

    fn sorted(mut tiles: Vec<Coordinate>) -> Vec<Coordinate> {
        tiles.sort();
        tiles
    }

    mod knights {
        use super::*;

        #[test]
        fn center_covers_eight() {
            assert_eq!(8, knight_attacks(Coordinate::new(4, 4)).len());
        }

        #[test]
        fn corner_covers_two() {
            let tiles = sorted(knight_attacks(Coordinate::new(0, 0)));
            assert_eq!(vec![Coordinate::new(1, 2), Coordinate::new(2, 1)], tiles);
        }

        #[test]
        fn friendly_tiles_still_covered() {
            let pos = Position::from_placement("8/8/8/8/8/8/2P5/N7").unwrap();
            let tiles = tiles_covered(&pos, c("a0"), pos.piece_at(c("a0")).unwrap());
            assert!(tiles.contains(&c("c1")));
        }
    }

    mod rooks {
        use super::*;

        #[test]
        fn empty_board_covers_fourteen() {
            let pos = Position::from_placement("8/8/8/8/3R4/8/8/8").unwrap();
            let origin = Coordinate::new(3, 3);
            let tiles = rook_attacks(&pos, origin);
            assert_eq!(14, tiles.len());
            assert!(tiles
                .iter()
                .all(|t| (t.row() == 3) != (t.col() == 3)));
        }

        #[test]
        fn ray_order() {
            let pos = Position::empty();
            let tiles = rook_attacks(&pos, c("a0"));
            assert_eq!(c("a1"), tiles[0]);
            assert_eq!(c("b0"), tiles[7]);
        }

        #[test]
        fn stops_at_blockers_of_either_color() {
            let pos = Position::from_placement("8/8/8/3p4/8/1P1R4/8/8").unwrap();
            let tiles = sorted(rook_attacks(&pos, c("d2")));
            assert!(tiles.contains(&c("d4")));
            assert!(!tiles.contains(&c("d5")));
            assert!(tiles.contains(&c("b2")));
            assert!(!tiles.contains(&c("a2")));
            assert_eq!(
                vec![
                    c("d0"),
                    c("d1"),
                    c("b2"),
                    c("c2"),
                    c("e2"),
                    c("f2"),
                    c("g2"),
                    c("h2"),
                    c("d3"),
                    c("d4")
                ],
                tiles
            );
        }
    }

    mod bishops {
        use super::*;

        #[test]
        fn stops_at_first_occupied() {
            let pos = Position::from_placement("8/8/8/5p2/8/3B4/2P5/8").unwrap();
            let tiles = bishop_attacks(&pos, c("d2"));
            assert!(tiles.contains(&c("e3")));
            assert!(tiles.contains(&c("f4")));
            assert!(!tiles.contains(&c("g5")));
            assert!(tiles.contains(&c("c1")));
            assert!(!tiles.contains(&c("b0")));
        }

        #[test]
        fn corner_single_ray() {
            let tiles = bishop_attacks(&Position::empty(), c("a0"));
            assert_eq!(7, tiles.len());
            assert_eq!(c("h7"), tiles[6]);
        }
    }

    mod queens {
        use super::*;

        #[test]
        fn union_of_rook_and_bishop() {
            let pos = Position::empty();
            let origin = Coordinate::new(3, 3);
            let tiles = queen_attacks(&pos, origin);
            assert_eq!(14 + 13, tiles.len());

            let mut expected = rook_attacks(&pos, origin);
            expected.extend(bishop_attacks(&pos, origin));
            assert_eq!(expected, tiles);
        }
    }

    mod kings {
        use super::*;

        #[test]
        fn skips_friendly_neighbours() {
            let pos = Position::from_placement("8/8/8/8/8/8/PPp5/K7").unwrap();
            let tiles = king_attacks(&pos, c("a0"), Color::White);
            assert_eq!(vec![c("b0")], tiles);
        }

        #[test]
        fn enemy_neighbours_covered() {
            let pos = Position::from_placement("8/8/8/8/8/8/pp6/K7").unwrap();
            let tiles = sorted(king_attacks(&pos, c("a0"), Color::White));
            assert_eq!(vec![c("b0"), c("a1"), c("b1")], tiles);
        }

        #[test]
        fn center_covers_eight() {
            let tiles = king_attacks(&Position::empty(), c("d4"), Color::Black);
            assert_eq!(8, tiles.len());
        }
    }

    mod pawns {
        use super::*;

        #[test]
        fn white_diagonals() {
            let tiles = pawn_attacks(Coordinate::new(1, 4), Color::White);
            assert_eq!(vec![Coordinate::new(2, 5), Coordinate::new(2, 3)], tiles);
        }

        #[test]
        fn black_moves_down() {
            let tiles = pawn_attacks(Coordinate::new(6, 0), Color::Black);
            assert_eq!(vec![Coordinate::new(5, 1)], tiles);
        }

        #[test]
        fn last_row_covers_nothing() {
            assert!(pawn_attacks(Coordinate::new(7, 3), Color::White).is_empty());
            assert!(pawn_attacks(Coordinate::new(0, 3), Color::Black).is_empty());
        }

        #[test]
        fn occupancy_ignored() {
            let pos = Position::from_placement("8/8/8/8/8/8/8/8").unwrap();
            let piece = Piece::new(PieceKind::Pawn, Color::White);
            assert_eq!(
                pawn_attacks(c("h1"), Color::White),
                tiles_covered(&pos, c("h1"), piece)
            );
            assert_eq!(vec![c("g2")], pawn_attacks(c("h1"), Color::White));
        }
    }
}
