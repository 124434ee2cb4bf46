// Copyright 2017-2021 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CoordinateParseError {
    #[error("coordinate must be two chars, got {0}")]
    InvalidLength(usize),
    #[error("invalid column: {0}")]
    InvalidColumn(char),
    #[error("invalid row: {0}")]
    InvalidRow(char),
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PieceParseError {
    #[error("invalid char: {0}")]
    InvalidChar(char),
}

/// A tile on the chessboard, addressed by row and column.
///
/// Coordinates are not validated on construction. Movement rules build candidate coordinates first and filter
/// them with [`Coordinate::inside_board`] afterwards, so a coordinate that has stepped off the board is still a
/// perfectly good value; it just never makes it into a position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    row: u8,
    col: u8,
}

impl Coordinate {
    /// Creates a new coordinate. Components are truncated to a byte: negative values wrap around to values that lie
    /// outside of the board, but values of 256 and above wrap back onto it (`new(256, 0)` is row 0).
    pub const fn new(row: i32, col: i32) -> Coordinate {
        Coordinate {
            row: row as u8,
            col: col as u8,
        }
    }

    pub const fn row(self) -> u8 {
        self.row
    }

    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns true if this coordinate names one of the 64 tiles of the board.
    pub const fn inside_board(self) -> bool {
        self.row <= 7 && self.col <= 7
    }

    /// Returns the coordinate `drow` rows and `dcol` columns away from this one. The result may be off the board.
    pub const fn offset(self, drow: i32, dcol: i32) -> Coordinate {
        Coordinate::new(self.row as i32 + drow, self.col as i32 + dcol)
    }
}

impl FromStr for Coordinate {
    type Err = CoordinateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        let (col_c, row_c) = match chars[..] {
            [col_c, row_c] => (col_c, row_c),
            _ => return Err(CoordinateParseError::InvalidLength(chars.len())),
        };

        let col = match col_c {
            'a'..='h' => col_c as i32 - 'a' as i32,
            c => return Err(CoordinateParseError::InvalidColumn(c)),
        };
        let row = match row_c {
            '0'..='7' => row_c as i32 - '0' as i32,
            c => return Err(CoordinateParseError::InvalidRow(c)),
        };

        Ok(Coordinate::new(row, col))
    }
}

impl TryFrom<&str> for Coordinate {
    type Error = CoordinateParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let col = (b'a').wrapping_add(self.col) as char;
        write!(f, "{}{}", col, self.row)
    }
}

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn toggle(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// The row direction pawns of this color advance in.
    pub const fn forward(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    /// The single uppercase letter used when rendering a board.
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Rook => 'R',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        Piece { kind, color }
    }
}

impl TryFrom<char> for Piece {
    type Error = PieceParseError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        let kind = match value.to_ascii_uppercase() {
            'P' => PieceKind::Pawn,
            'R' => PieceKind::Rook,
            'N' => PieceKind::Knight,
            'B' => PieceKind::Bishop,
            'Q' => PieceKind::Queen,
            'K' => PieceKind::King,
            _ => return Err(PieceParseError::InvalidChar(value)),
        };

        let color = if value.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };

        Ok(Piece { kind, color })
    }
}

/// Formats a piece the way placement strings spell it: uppercase for white, lowercase for black.
impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self.color {
            Color::White => self.kind.letter(),
            Color::Black => self.kind.letter().to_ascii_lowercase(),
        };

        write!(f, "{}", c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod coordinate {
        use super::*;

        #[test]
        fn inside_board_exactly_on_the_grid() {
            for row in -2..10 {
                for col in -2..10 {
                    let expected = (0..=7).contains(&row) && (0..=7).contains(&col);
                    assert_eq!(
                        expected,
                        Coordinate::new(row, col).inside_board(),
                        "({}, {})",
                        row,
                        col
                    );
                }
            }
        }

        #[test]
        fn components_truncate_to_a_byte() {
            assert_eq!(Coordinate::new(0, 0), Coordinate::new(256, 0));
            assert!(Coordinate::new(256, 0).inside_board());
            assert!(!Coordinate::new(-1, 0).inside_board());
            assert!(!Coordinate::new(255, 0).inside_board());
        }

        #[test]
        fn display_column_letter_then_row() {
            assert_eq!("a3", Coordinate::new(3, 0).to_string());
            assert_eq!("h0", Coordinate::new(0, 7).to_string());
            assert_eq!("e7", Coordinate::new(7, 4).to_string());
        }

        #[test]
        fn parse() {
            assert_eq!(Ok(Coordinate::new(3, 0)), "a3".parse::<Coordinate>());
            assert_eq!(Ok(Coordinate::new(7, 7)), Coordinate::try_from("h7"));
        }

        #[test]
        fn parse_errors() {
            assert_eq!(
                Err(CoordinateParseError::InvalidLength(3)),
                "a10".parse::<Coordinate>()
            );
            assert_eq!(
                Err(CoordinateParseError::InvalidColumn('i')),
                "i1".parse::<Coordinate>()
            );
            assert_eq!(
                Err(CoordinateParseError::InvalidRow('8')),
                "a8".parse::<Coordinate>()
            );
        }

        #[test]
        fn ordered_by_row_then_column() {
            assert!(Coordinate::new(0, 7) < Coordinate::new(1, 0));
            assert!(Coordinate::new(2, 3) < Coordinate::new(2, 4));
        }

        #[test]
        fn offset_off_board() {
            assert!(!Coordinate::new(0, 0).offset(-1, 0).inside_board());
            assert!(!Coordinate::new(7, 7).offset(0, 1).inside_board());
            assert_eq!(Coordinate::new(2, 5), Coordinate::new(1, 4).offset(1, 1));
        }
    }

    mod piece {
        use super::*;

        #[test]
        fn parse_case_is_color() {
            assert_eq!(
                Ok(Piece::new(PieceKind::Knight, Color::White)),
                Piece::try_from('N')
            );
            assert_eq!(
                Ok(Piece::new(PieceKind::Queen, Color::Black)),
                Piece::try_from('q')
            );
            assert_eq!(Err(PieceParseError::InvalidChar('z')), Piece::try_from('z'));
        }

        #[test]
        fn display() {
            assert_eq!("K", Piece::new(PieceKind::King, Color::White).to_string());
            assert_eq!("b", Piece::new(PieceKind::Bishop, Color::Black).to_string());
            assert_eq!("R", PieceKind::Rook.to_string());
        }

        #[test]
        fn value_equality() {
            assert_eq!(
                Piece::new(PieceKind::Pawn, Color::Black),
                Piece::new(PieceKind::Pawn, Color::Black)
            );
            assert_ne!(
                Piece::new(PieceKind::Pawn, Color::Black),
                Piece::new(PieceKind::Pawn, Color::White)
            );
        }
    }
}
