// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! roque is a chess rules engine: an in-memory representation of a chess
//! position together with the algorithms that generate, validate, apply
//! and notate moves in that position. It answers the questions an
//! interface, analysis tool, or opening-book client asks of the rules of
//! chess: which moves are legal, whether the side to move is mated, what
//! a move is called in standard algebraic notation, and what
//! Polyglot-compatible key identifies the position.

#[macro_use]
extern crate bitflags;
#[macro_use]
extern crate log;
#[macro_use]
extern crate num_derive;

mod attacks;
mod book;
mod error;
mod movegen;
mod moves;
mod position;
mod san;
mod types;
mod zobrist;

pub use crate::attacks::Attackers;
pub use crate::book::BookEntry;
pub use crate::error::{Error, Result};
pub use crate::movegen::{LegalMoves, PseudoLegalMoves};
pub use crate::moves::{Move, MoveInfo};
pub use crate::position::{Position, START_FEN};
pub use crate::types::{CastleStatus, Color, File, Piece, PieceKind, Rank, Square, TableIndex};
pub use crate::types::{COLORS, FILES, PIECE_KINDS, RANKS, SQUARES};
pub use crate::zobrist::POLYGLOT_RANDOM_ARRAY;
