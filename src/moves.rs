// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt::{self, Display, Write};

use crate::error::{Error, Result};
use crate::types::{File, Piece, PieceKind, Rank, Square};

/// A move: a source square, a target square, and an optional promotion
/// piece kind. Castling is encoded as the king's two-square move
/// (e.g. e1g1); en-passant as a pawn capture onto the en-passant square.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub struct Move {
    source: Square,
    target: Square,
    promotion: Option<PieceKind>,
}

impl Move {
    pub fn new(source: Square, target: Square) -> Move {
        Move {
            source,
            target,
            promotion: None,
        }
    }

    /// Creates a promoting move. Only knights, bishops, rooks and queens
    /// are valid promotion targets.
    pub fn promotion(source: Square, target: Square, kind: PieceKind) -> Result<Move> {
        match kind {
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => Ok(Move {
                source,
                target,
                promotion: Some(kind),
            }),
            _ => Err(Error::InvalidArgument("promotion")),
        }
    }

    pub(crate) fn with_promotion(source: Square, target: Square, kind: PieceKind) -> Move {
        debug_assert!(kind != PieceKind::Pawn && kind != PieceKind::King);
        Move {
            source,
            target,
            promotion: Some(kind),
        }
    }

    /// Parses a UCI move string: four or five characters, e.g. `e2e4` or
    /// `e7e8q`.
    pub fn from_uci(uci: &str) -> Result<Move> {
        let chars: Vec<char> = uci.chars().collect();
        if chars.len() != 4 && chars.len() != 5 {
            return Err(Error::InvalidArgument("uci"));
        }

        let square_of = |file: char, rank: char| -> Result<Square> {
            let file = File::from_char(file).map_err(|_| Error::InvalidArgument("uci"))?;
            let rank = Rank::from_char(rank).map_err(|_| Error::InvalidArgument("uci"))?;
            Ok(Square::of(rank, file))
        };

        let source = square_of(chars[0], chars[1])?;
        let target = square_of(chars[2], chars[3])?;
        let promotion = if chars.len() == 5 {
            match chars[4] {
                'n' => Some(PieceKind::Knight),
                'b' => Some(PieceKind::Bishop),
                'r' => Some(PieceKind::Rook),
                'q' => Some(PieceKind::Queen),
                _ => return Err(Error::InvalidArgument("uci")),
            }
        } else {
            None
        };

        Ok(Move {
            source,
            target,
            promotion,
        })
    }

    pub fn source(self) -> Square {
        self.source
    }

    pub fn target(self) -> Square {
        self.target
    }

    pub fn promotion_kind(self) -> Option<PieceKind> {
        self.promotion
    }

    pub fn is_promotion(self) -> bool {
        self.promotion.is_some()
    }

    pub fn uci(self) -> String {
        self.to_string()
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.source, self.target)?;
        if let Some(kind) = self.promotion {
            f.write_char(kind.as_char())?;
        }

        Ok(())
    }
}

/// Everything the engine can tell a caller about a move it just made: the
/// move itself, the moving and captured pieces, the special-move flags,
/// whether the resulting position is check or checkmate, and the SAN.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveInfo {
    pub(crate) mov: Move,
    pub(crate) piece: Piece,
    pub(crate) captured: Option<Piece>,
    pub(crate) san: String,
    pub(crate) is_en_passant: bool,
    pub(crate) is_kingside_castle: bool,
    pub(crate) is_queenside_castle: bool,
    pub(crate) is_check: bool,
    pub(crate) is_checkmate: bool,
}

impl MoveInfo {
    pub(crate) fn new(mov: Move, piece: Piece) -> MoveInfo {
        MoveInfo {
            mov,
            piece,
            captured: None,
            san: String::new(),
            is_en_passant: false,
            is_kingside_castle: false,
            is_queenside_castle: false,
            is_check: false,
            is_checkmate: false,
        }
    }

    pub fn mov(&self) -> Move {
        self.mov
    }

    /// The piece that moved, as it stood before any promotion.
    pub fn piece(&self) -> Piece {
        self.piece
    }

    pub fn captured(&self) -> Option<Piece> {
        self.captured
    }

    pub fn san(&self) -> &str {
        &self.san
    }

    pub fn is_en_passant(&self) -> bool {
        self.is_en_passant
    }

    pub fn is_kingside_castle(&self) -> bool {
        self.is_kingside_castle
    }

    pub fn is_queenside_castle(&self) -> bool {
        self.is_queenside_castle
    }

    pub fn is_castle(&self) -> bool {
        self.is_kingside_castle || self.is_queenside_castle
    }

    pub fn is_check(&self) -> bool {
        self.is_check
    }

    pub fn is_checkmate(&self) -> bool {
        self.is_checkmate
    }
}

#[cfg(test)]
mod tests {
    use super::Move;
    use crate::error::Error;
    use crate::types::{PieceKind, Square};

    #[test]
    fn uci_round_trip() {
        let mov = Move::from_uci("e2e4").unwrap();
        assert_eq!(Square::E2, mov.source());
        assert_eq!(Square::E4, mov.target());
        assert_eq!(None, mov.promotion_kind());
        assert_eq!("e2e4", mov.uci());

        let promo = Move::from_uci("e7e8q").unwrap();
        assert_eq!(Some(PieceKind::Queen), promo.promotion_kind());
        assert_eq!("e7e8q", promo.uci());
    }

    #[test]
    fn uci_rejects_malformed_strings() {
        for bad in &["", "e2", "e2e", "e2e4qq", "i2i4", "e9e4", "e7e8k", "e7e8p"] {
            assert_eq!(Err(Error::InvalidArgument("uci")), Move::from_uci(bad));
        }
    }

    #[test]
    fn promotion_rejects_royalty_and_pawns() {
        assert!(Move::promotion(Square::E7, Square::E8, PieceKind::Queen).is_ok());
        assert_eq!(
            Err(Error::InvalidArgument("promotion")),
            Move::promotion(Square::E7, Square::E8, PieceKind::King)
        );
        assert_eq!(
            Err(Error::InvalidArgument("promotion")),
            Move::promotion(Square::E7, Square::E8, PieceKind::Pawn)
        );
    }
}
