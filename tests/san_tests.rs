// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use roque::{Move, Position};

#[test]
fn scholars_mate() {
    let mut pos = Position::from_start_position();
    for san in &["e4", "e5", "Qh5", "Nc6", "Bc4", "Nf6"] {
        let info = pos.make_move_san(san).unwrap();
        assert!(!info.is_check());
        assert!(!info.is_checkmate());
    }

    let info = pos.make_move_san("Qxf7").unwrap();
    assert!(info.is_check());
    assert!(info.is_checkmate());
    assert_eq!("Qxf7#", info.san());

    assert!(pos.is_checkmate());
    assert_eq!(0, pos.legal_moves().len());
}

#[test]
fn rendered_piece_moves_carry_disambiguators_only_when_needed() {
    // Only the c3 knight reaches d5 here.
    let pos =
        Position::from_fen("r1bqkb1r/pppppppp/2n2n2/8/8/2N2N2/PPPPPPPP/R1BQKB1R w KQkq - 4 3")
            .unwrap();
    let mov = Move::from_uci("c3d5").unwrap();
    let info = pos.clone().make_move(mov).unwrap();
    assert_eq!("Nd5", info.san());

    // Re-parsing the rendered SAN yields the same move.
    assert_eq!(mov, pos.move_from_san(info.san()).unwrap());

    // With knights on c3 and e3, the file disambiguates.
    let pos = Position::from_fen("4k3/8/8/8/8/2N1N3/8/4K3 w - - 0 1").unwrap();
    let info = pos.clone().make_move(mov).unwrap();
    assert_eq!("Ncd5", info.san());
    assert_eq!(mov, pos.move_from_san(info.san()).unwrap());

    // Knights on the same file are told apart by rank.
    let pos = Position::from_fen("4k3/8/8/8/2N5/8/2N5/4K3 w - - 0 1").unwrap();
    let info = pos
        .clone()
        .make_move(Move::from_uci("c2e3").unwrap())
        .unwrap();
    assert_eq!("N2e3", info.san());
    assert_eq!(
        Move::from_uci("c2e3").unwrap(),
        pos.move_from_san(info.san()).unwrap()
    );
}

#[test]
fn pawn_captures_name_the_source_file() {
    let mut pos =
        Position::from_fen("rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2")
            .unwrap();
    let info = pos.make_move(Move::from_uci("e4d5").unwrap()).unwrap();
    assert_eq!("exd5", info.san());
}

#[test]
fn en_passant_san_is_annotated() {
    let mut pos =
        Position::from_fen("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3")
            .unwrap();
    let info = pos.make_move(Move::from_uci("e5d6").unwrap()).unwrap();
    assert!(info.is_en_passant());
    assert_eq!("exd6 (e.p.)", info.san());
}

#[test]
fn castles_render_as_the_castling_literals() {
    let mut pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let info = pos.make_move(Move::from_uci("e1g1").unwrap()).unwrap();
    assert_eq!("O-O", info.san());

    let info = pos.make_move(Move::from_uci("e8c8").unwrap()).unwrap();
    assert_eq!("O-O-O", info.san());
}

#[test]
fn promotions_render_with_the_promotion_suffix() {
    let mut pos = Position::from_fen("8/4P3/8/8/8/8/8/k6K w - - 0 1").unwrap();
    let info = pos.make_move(Move::from_uci("e7e8q").unwrap()).unwrap();
    assert_eq!("e8=Q", info.san());
}

#[test]
fn checks_render_with_a_plus() {
    let mut pos = Position::from_start_position();
    pos.make_move_san("e4").unwrap();
    pos.make_move_san("f6").unwrap();
    let info = pos.make_move_san("Qh5").unwrap();

    assert!(info.is_check());
    assert!(!info.is_checkmate());
    assert_eq!("Qh5+", info.san());
}

#[test]
fn san_sequences_and_uci_sequences_agree() {
    let san_moves = ["e4", "c5", "Nf3", "d6", "d4", "cxd4", "Nxd4", "Nf6"];
    let uci_moves = ["e2e4", "c7c5", "g1f3", "d7d6", "d2d4", "c5d4", "f3d4", "g8f6"];

    let mut by_san = Position::from_start_position();
    let mut by_uci = Position::from_start_position();
    for (san, uci) in san_moves.iter().zip(uci_moves.iter()) {
        by_san.make_move_san(san).unwrap();
        by_uci.make_move(Move::from_uci(uci).unwrap()).unwrap();
    }

    assert_eq!(by_san, by_uci);
    assert_eq!(by_san.zobrist_hash(), by_uci.zobrist_hash());
}
