// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Standard Algebraic Notation.
//!
//! Rendering happens as part of `Position::make_move`, against the
//! position as it stood before the move; parsing resolves a SAN string to
//! exactly one legal move of the side to move, failing if the string
//! matches none or is ambiguous between several.

use crate::error::{Error, Result};
use crate::movegen::LegalMoves;
use crate::moves::{Move, MoveInfo};
use crate::position::Position;
use crate::types::{Color, File, Piece, PieceKind, Rank, Square};

/// Renders the SAN of a move that was just made. `pos` is the position
/// before the move and `legal_moves` its legal move set; `info` carries
/// the applied move along with its capture, castle, check and checkmate
/// facts.
pub(crate) fn render(pos: &Position, legal_moves: &LegalMoves, info: &MoveInfo) -> String {
    let mut san = String::new();

    if info.is_kingside_castle {
        san.push_str("O-O");
    } else if info.is_queenside_castle {
        san.push_str("O-O-O");
    } else {
        let mov = info.mov;
        let piece = info.piece;

        if piece.kind == PieceKind::Pawn {
            // Pawn captures take the source file as their disambiguator.
            if info.captured.is_some() {
                san.push(mov.source().file().as_char());
                san.push('x');
            }
        } else {
            san.push(piece.kind.as_char().to_ascii_uppercase());

            // Disambiguate against other legal moves of the same piece
            // kind to the same target square.
            let mut is_ambiguous = false;
            let mut same_rank = false;
            let mut same_file = false;
            for &other in legal_moves.as_slice() {
                if pos.piece_at(other.source()) == Some(piece)
                    && other.source() != mov.source()
                    && other.target() == mov.target()
                {
                    is_ambiguous = true;
                    if other.source().rank() == mov.source().rank() {
                        same_rank = true;
                    }
                    if other.source().file() == mov.source().file() {
                        same_file = true;
                    }
                }
            }

            if same_rank && same_file {
                san.push_str(&mov.source().name());
            } else if same_file {
                san.push(mov.source().rank().as_char());
            } else if same_rank || is_ambiguous {
                san.push(mov.source().file().as_char());
            }

            if info.captured.is_some() {
                san.push('x');
            }
        }

        san.push_str(&mov.target().name());

        if let Some(kind) = mov.promotion_kind() {
            san.push('=');
            san.push(kind.as_char().to_ascii_uppercase());
        }
    }

    if info.is_checkmate {
        san.push('#');
    } else if info.is_check {
        san.push('+');
    }

    if info.is_en_passant {
        san.push_str(" (e.p.)");
    }

    san
}

/// The shape of a non-castling SAN string:
/// `([NBKRQ])?([a-h])?([1-8])?x?([a-h][1-8])(=[NBRQ])?(\+|#)?`.
struct SanPattern {
    kind: PieceKind,
    source_file: Option<File>,
    source_rank: Option<Rank>,
    target: Square,
    promotion: Option<PieceKind>,
}

fn parse_pattern(san: &str) -> Result<SanPattern> {
    let san_err = Error::InvalidArgument("san");

    let mut chars: Vec<char> = san.chars().collect();

    // Strip an optional check or checkmate suffix.
    if let Some(&last) = chars.last() {
        if last == '+' || last == '#' {
            chars.pop();
        }
    }

    // Strip an optional promotion suffix.
    let mut promotion = None;
    if chars.len() >= 2 && chars[chars.len() - 2] == '=' {
        promotion = Some(match chars[chars.len() - 1] {
            'N' => PieceKind::Knight,
            'B' => PieceKind::Bishop,
            'R' => PieceKind::Rook,
            'Q' => PieceKind::Queen,
            _ => return Err(san_err),
        });
        chars.truncate(chars.len() - 2);
    }

    // The trailing file-rank pair names the target square.
    if chars.len() < 2 {
        return Err(san_err);
    }
    let rank_char = chars.pop().unwrap();
    let file_char = chars.pop().unwrap();
    let target = Square::of(
        Rank::from_char(rank_char).map_err(|_| san_err)?,
        File::from_char(file_char).map_err(|_| san_err)?,
    );

    // What remains is an optional piece letter, an optional source file
    // and rank, and an optional capture marker, in that order.
    let mut rest = chars.into_iter().peekable();
    let kind = match rest.peek().copied() {
        Some('N') => PieceKind::Knight,
        Some('B') => PieceKind::Bishop,
        Some('K') => PieceKind::King,
        Some('R') => PieceKind::Rook,
        Some('Q') => PieceKind::Queen,
        _ => PieceKind::Pawn,
    };
    if kind != PieceKind::Pawn {
        rest.next();
    }

    let mut source_file = None;
    if let Some(&c) = rest.peek() {
        if let Ok(file) = File::from_char(c) {
            source_file = Some(file);
            rest.next();
        }
    }

    let mut source_rank = None;
    if let Some(&c) = rest.peek() {
        if let Ok(rank) = Rank::from_char(c) {
            source_rank = Some(rank);
            rest.next();
        }
    }

    if rest.peek() == Some(&'x') {
        rest.next();
    }

    if rest.next().is_some() {
        return Err(san_err);
    }

    Ok(SanPattern {
        kind,
        source_file,
        source_rank,
        target,
        promotion,
    })
}

/// Resolves a SAN string to the one legal move it denotes.
pub(crate) fn parse(pos: &Position, san: &str) -> Result<Move> {
    let san_err = Error::InvalidArgument("san");
    let legal_moves = pos.legal_moves();

    // Castling literals.
    if san == "O-O" || san == "O-O-O" {
        let backrank = match pos.turn() {
            Color::White => Rank::One,
            Color::Black => Rank::Eight,
        };
        let target_file = if san == "O-O" { File::G } else { File::C };
        let mov = Move::new(
            Square::of(backrank, File::E),
            Square::of(backrank, target_file),
        );

        if legal_moves.contains(mov) {
            return Ok(mov);
        }
        return Err(san_err);
    }

    let pattern = parse_pattern(san)?;
    let piece = Piece::new(pattern.kind, pos.turn());

    let mut found = None;
    for &mov in legal_moves.as_slice() {
        if mov.promotion_kind() != pattern.promotion {
            continue;
        }
        if pos.piece_at(mov.source()) != Some(piece) || mov.target() != pattern.target {
            continue;
        }
        if let Some(file) = pattern.source_file {
            if file != mov.source().file() {
                continue;
            }
        }
        if let Some(rank) = pattern.source_rank {
            if rank != mov.source().rank() {
                continue;
            }
        }

        // A second survivor means the SAN is ambiguous.
        if found.is_some() {
            return Err(san_err);
        }
        found = Some(mov);
    }

    found.ok_or(san_err)
}

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::moves::Move;
    use crate::position::Position;

    #[test]
    fn parse_pawn_pushes_and_captures() {
        let pos = Position::from_start_position();
        assert_eq!(
            Move::from_uci("e2e4").unwrap(),
            pos.move_from_san("e4").unwrap()
        );

        let pos =
            Position::from_fen("rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2")
                .unwrap();
        assert_eq!(
            Move::from_uci("e4d5").unwrap(),
            pos.move_from_san("exd5").unwrap()
        );
    }

    #[test]
    fn parse_piece_moves_with_disambiguation() {
        // Knights on c3 and e3 both reach d5.
        let pos = Position::from_fen("4k3/8/8/8/8/2N1N3/8/4K3 w - - 0 1").unwrap();
        assert_eq!(
            Move::from_uci("c3d5").unwrap(),
            pos.move_from_san("Ncd5").unwrap()
        );
        assert_eq!(
            Move::from_uci("e3d5").unwrap(),
            pos.move_from_san("Ned5").unwrap()
        );
        assert_eq!(
            Err(Error::InvalidArgument("san")),
            pos.move_from_san("Nd5")
        );

        // Only the c3 knight reaches d5 here, so no disambiguator is
        // needed.
        let pos =
            Position::from_fen("r1bqkb1r/pppppppp/2n2n2/8/8/2N2N2/PPPPPPPP/R1BQKB1R w KQkq - 4 3")
                .unwrap();
        assert_eq!(
            Move::from_uci("c3d5").unwrap(),
            pos.move_from_san("Nd5").unwrap()
        );
    }

    #[test]
    fn parse_castling_literals() {
        let pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        assert_eq!(
            Move::from_uci("e1g1").unwrap(),
            pos.move_from_san("O-O").unwrap()
        );
        assert_eq!(
            Move::from_uci("e1c1").unwrap(),
            pos.move_from_san("O-O-O").unwrap()
        );

        let no_rights = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w - - 0 1").unwrap();
        assert_eq!(
            Err(Error::InvalidArgument("san")),
            no_rights.move_from_san("O-O")
        );
    }

    #[test]
    fn parse_promotion_requires_the_suffix() {
        let pos = Position::from_fen("8/4P3/8/8/8/8/8/k6K w - - 0 1").unwrap();
        assert_eq!(
            Move::from_uci("e7e8q").unwrap(),
            pos.move_from_san("e8=Q").unwrap()
        );
        assert_eq!(
            Move::from_uci("e7e8n").unwrap(),
            pos.move_from_san("e8=N").unwrap()
        );

        // Without the promotion designator no promoting move matches.
        assert_eq!(Err(Error::InvalidArgument("san")), pos.move_from_san("e8"));
    }

    #[test]
    fn parse_accepts_check_suffixes() {
        let mut pos = Position::from_start_position();
        for san in &["e4", "e5", "Qh5", "Nc6", "Bc4", "Nf6"] {
            pos.make_move_san(san).unwrap();
        }
        assert_eq!(
            Move::from_uci("h5f7").unwrap(),
            pos.move_from_san("Qxf7#").unwrap()
        );
    }

    #[test]
    fn parse_rejects_nonsense() {
        let pos = Position::from_start_position();
        for bad in &["", "e9", "i4", "Ze4", "Qxx4", "e4=Q", "O-O", "Nf6"] {
            assert_eq!(
                Err(Error::InvalidArgument("san")),
                pos.move_from_san(bad),
                "san: {:?}",
                bad
            );
        }
    }

    #[test]
    fn rendered_san_reparses_to_the_same_move() {
        let fens = [
            "r1bqkb1r/pppppppp/2n2n2/8/8/2N2N2/PPPPPPPP/R1BQKB1R w KQkq - 4 3",
            "rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2",
            "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1",
        ];

        for fen in &fens {
            let pos = Position::from_fen(fen).unwrap();
            for mov in pos.legal_moves() {
                let mut next = pos.clone();
                let info = next.make_move(mov).unwrap();
                let reparsed = pos.move_from_san(info.san()).unwrap();
                assert_eq!(mov, reparsed, "san {:?} in {}", info.san(), fen);
            }
        }
    }
}
