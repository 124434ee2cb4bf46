// Copyright 2017-2021 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! `chessai` models chess positions and enumerates the positions reachable from them.
//!
//! Move generation is pseudo-legal. Every piece moves by its own rules and the only safety check performed is
//! that a king never steps onto a tile the other color covers. There is no castling, en passant or promotion, and
//! pawns only ever push a single tile forward.

pub mod core;
pub mod movegen;
pub mod position;

pub use position::{PlacementParseError, Position};
