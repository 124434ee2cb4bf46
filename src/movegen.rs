// Copyright 2021 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Successor generation for a single piece. Moves are pseudo-legal: apart from the king refusing to step onto a
//! covered tile, nothing stops a piece from leaving its own king in check.

use tracing::trace;

use crate::core::*;
use crate::Position;

/// Moves onto every covered tile that is not held by a friendly piece. Used by rooks, knights, bishops and queens.
pub fn generate_default_moves(
    pos: &Position,
    origin: Coordinate,
    piece: Piece,
    moves: &mut Vec<Position>,
) {
    for tile in tiles_covered(pos, origin, piece) {
        if !pos.is_occupied_by(tile, piece.color) {
            moves.push(pos.with_move(origin, tile));
        }
    }
}

/// Kings move onto covered tiles that the other color does not cover.
pub fn generate_king_moves(pos: &Position, origin: Coordinate, color: Color, moves: &mut Vec<Position>) {
    let them = color.toggle();
    for tile in attacks::king_attacks(pos, origin, color) {
        if !pos.is_covered(them, tile) {
            moves.push(pos.with_move(origin, tile));
        } else {
            trace!(king = %origin, %tile, "king refuses covered tile");
        }
    }
}

/// Pawns only ever push one tile straight ahead onto an empty tile. Their diagonals are covered but are never
/// move destinations.
pub fn generate_pawn_moves(pos: &Position, origin: Coordinate, color: Color, moves: &mut Vec<Position>) {
    let target = origin.offset(color.forward(), 0);
    if target.inside_board() && !pos.is_occupied(target) {
        moves.push(pos.with_move(origin, target));
    }
}

/// All positions reachable by moving `piece`, standing at `origin`, once.
pub fn possible_moves(pos: &Position, origin: Coordinate, piece: Piece) -> Vec<Position> {
    let mut moves = Vec::new();
    match piece.kind {
        PieceKind::King => generate_king_moves(pos, origin, piece.color, &mut moves),
        PieceKind::Pawn => generate_pawn_moves(pos, origin, piece.color, &mut moves),
        PieceKind::Rook | PieceKind::Knight | PieceKind::Bishop | PieceKind::Queen => {
            generate_default_moves(pos, origin, piece, &mut moves)
        }
    }

    trace!(
        piece = ?piece.kind,
        color = ?piece.color,
        %origin,
        count = moves.len(),
        "generated moves"
    );
    moves
}
