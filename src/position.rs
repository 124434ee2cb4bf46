// Copyright 2017-2021 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::{
    collections::BTreeMap,
    fmt::{self, Write},
};

use thiserror::Error;
use tracing::debug;

use crate::{
    core::{self, *},
    movegen,
};

/// A snapshot of the board: which piece, if any, stands on each tile.
///
/// Positions are never modified once built. Moving a piece produces a brand new Position, so a Position can be
/// freely shared between threads and queried concurrently.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    /// Pieces keyed by the tile they stand on, iterated in row-then-column order.
    pieces: BTreeMap<Coordinate, Piece>,
}

impl Position {
    /// A board with no pieces on it.
    pub fn empty() -> Position {
        Position {
            pieces: BTreeMap::new(),
        }
    }

    /// Builds a position from `(coordinate, piece)` pairs. Later pairs replace earlier ones on the same tile.
    pub fn from_pieces(pieces: impl IntoIterator<Item = (Coordinate, Piece)>) -> Position {
        let pieces = pieces
            .into_iter()
            .inspect(|(coord, _)| debug_assert!(coord.inside_board(), "{:?} off board", coord))
            .collect();
        Position { pieces }
    }

    pub fn piece_at(&self, coord: Coordinate) -> Option<Piece> {
        self.pieces.get(&coord).copied()
    }

    /// All pieces on the board, in row-then-column order.
    pub fn pieces(&self) -> impl Iterator<Item = (Coordinate, Piece)> + '_ {
        self.pieces.iter().map(|(&coord, &piece)| (coord, piece))
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn is_occupied(&self, coord: Coordinate) -> bool {
        self.pieces.contains_key(&coord)
    }

    /// Returns true if a piece of the given color stands on `coord`.
    pub fn is_occupied_by(&self, coord: Coordinate, color: Color) -> bool {
        self.pieces.get(&coord).map_or(false, |p| p.color == color)
    }

    /// Returns a new position where the piece at `from` has moved to `to`, replacing whatever stood there.
    ///
    /// `from` must be occupied. This is only checked in debug builds; with an empty origin the result is an
    /// unchanged copy of this position.
    pub fn with_move(&self, from: Coordinate, to: Coordinate) -> Position {
        debug_assert!(self.is_occupied(from), "no piece to move at {}", from);
        let mut pieces = self.pieces.clone();
        if let Some(piece) = pieces.remove(&from) {
            pieces.insert(to, piece);
        }

        Position { pieces }
    }

    /// Every tile covered by a piece of the given color. A tile covered by more than one piece appears once per
    /// piece.
    pub fn covered_tiles(&self, color: Color) -> impl Iterator<Item = Coordinate> + '_ {
        self.pieces
            .iter()
            .filter(move |(_, piece)| piece.color == color)
            .flat_map(move |(&coord, &piece)| core::tiles_covered(self, coord, piece))
    }

    pub fn is_covered(&self, color: Color, coord: Coordinate) -> bool {
        self.covered_tiles(color).any(|tile| tile == coord)
    }

    /// Every position reachable by moving one piece once, for pieces of both colors.
    pub fn possible_moves(&self) -> impl Iterator<Item = Position> + '_ {
        debug!(pieces = self.len(), "enumerating possible moves");
        self.pieces
            .iter()
            .flat_map(move |(&coord, &piece)| movegen::possible_moves(self, coord, piece))
    }

    /// Returns true if either king stands on a tile covered by the other color. Whose turn it is plays no part.
    pub fn is_check(&self) -> bool {
        self.pieces()
            .filter(|(_, piece)| piece.kind == PieceKind::King)
            .any(|(coord, king)| {
                let check = self.is_covered(king.color.toggle(), coord);
                if check {
                    debug!(king = %coord, color = ?king.color, "king in check");
                }
                check
            })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8 {
            write!(f, "{} ", row)?;
            for col in 0..8 {
                match self.piece_at(Coordinate::new(row, col)) {
                    Some(piece) => write!(f, "{} ", piece.kind)?,
                    None => write!(f, "  ")?,
                }
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

//
// Starting position and placement strings.
//
// A placement string is the piece-placement field of FEN laid over this board: eight segments separated by '/',
// the first one describing row 7 and the last one row 0. Uppercase letters are white pieces, lowercase black, and
// digits count runs of empty tiles.
//

/// The back rank from column 0 to column 7. The king stands on column 3, left of the queen.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::King,
    PieceKind::Queen,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Possible errors that can arise when parsing a placement string into a `Position`.
#[derive(Clone, PartialEq, Eq, Debug, Error)]
pub enum PlacementParseError {
    #[error("unexpected char: {0}")]
    UnexpectedChar(char),
    #[error("unexpected end of placement")]
    UnexpectedEnd,
    #[error("invalid digit")]
    InvalidDigit,
    #[error("row does not sum to 8")]
    RowDoesNotSumToEight,
    #[error("too many rows")]
    TooManyRows,
    #[error("unknown piece: {0}")]
    UnknownPiece(char),
}

impl Position {
    /// The 32-piece starting layout: white on rows 0 and 1, black on rows 6 and 7.
    pub fn starting() -> Position {
        let mut pieces = Vec::with_capacity(32);
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            let col = col as i32;
            pieces.push((Coordinate::new(0, col), Piece::new(kind, Color::White)));
            pieces.push((
                Coordinate::new(1, col),
                Piece::new(PieceKind::Pawn, Color::White),
            ));
            pieces.push((
                Coordinate::new(6, col),
                Piece::new(PieceKind::Pawn, Color::Black),
            ));
            pieces.push((Coordinate::new(7, col), Piece::new(kind, Color::Black)));
        }

        Position::from_pieces(pieces)
    }

    /// Constructs a new position from a placement string.
    pub fn from_placement(placement: impl AsRef<str>) -> Result<Position, PlacementParseError> {
        let mut pieces = BTreeMap::new();
        let mut rows = placement.as_ref().split('/');
        for row in (0..8).rev() {
            let segment = rows.next().ok_or(PlacementParseError::UnexpectedEnd)?;
            if segment.is_empty() {
                return Err(PlacementParseError::UnexpectedEnd);
            }

            let mut col = 0;
            for c in segment.chars() {
                if col >= 8 {
                    return Err(PlacementParseError::RowDoesNotSumToEight);
                }

                // digits 1 through 8 indicate empty tiles.
                if let Some(run) = c.to_digit(10) {
                    if !(1..=8).contains(&run) {
                        return Err(PlacementParseError::InvalidDigit);
                    }

                    col += run as i32;
                    if col > 8 {
                        return Err(PlacementParseError::RowDoesNotSumToEight);
                    }
                    continue;
                }

                if !c.is_ascii_alphabetic() {
                    return Err(PlacementParseError::UnexpectedChar(c));
                }

                let piece =
                    Piece::try_from(c).map_err(|_| PlacementParseError::UnknownPiece(c))?;
                pieces.insert(Coordinate::new(row, col), piece);
                col += 1;
            }

            if col != 8 {
                return Err(PlacementParseError::RowDoesNotSumToEight);
            }
        }

        if rows.next().is_some() {
            return Err(PlacementParseError::TooManyRows);
        }

        Ok(Position { pieces })
    }

    pub fn as_placement(&self) -> String {
        let mut buf = String::new();
        for row in (0..8).rev() {
            let mut empty_tiles = 0;
            for col in 0..8 {
                if let Some(piece) = self.piece_at(Coordinate::new(row, col)) {
                    if empty_tiles != 0 {
                        write!(&mut buf, "{}", empty_tiles).unwrap();
                    }
                    write!(&mut buf, "{}", piece).unwrap();
                    empty_tiles = 0;
                } else {
                    empty_tiles += 1;
                }
            }

            if empty_tiles != 0 {
                write!(&mut buf, "{}", empty_tiles).unwrap();
            }

            if row != 0 {
                buf.push('/');
            }
        }

        buf
    }
}
