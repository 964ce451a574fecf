// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use num_traits::{FromPrimitive, ToPrimitive};
use std::fmt::{self, Display, Write};

use crate::error::{Error, Result};

// TableIndex is a trait for all types that can serve as an index into a table.
// It is common to use these types as indices into tables, so this trait allows
// any type implementing To and FromPrimitive to be used as table indices.
pub trait TableIndex {
    fn as_index(self) -> usize;
    fn from_index(idx: usize) -> Self;
}

impl<T> TableIndex for T
where
    T: FromPrimitive + ToPrimitive,
{
    fn as_index(self) -> usize {
        self.to_u32().unwrap() as usize
    }

    fn from_index(idx: usize) -> T {
        <T as FromPrimitive>::from_u64(idx as u64).unwrap()
    }
}

#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, FromPrimitive, ToPrimitive)]
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

    pub fn from_char(c: char) -> Result<Color> {
        match c {
            'w' => Ok(Color::White),
            'b' => Ok(Color::Black),
            _ => Err(Error::InvalidArgument("color")),
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_char(self.as_char())
    }
}

pub static COLORS: [Color; 2] = [Color::White, Color::Black];

#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, FromPrimitive, ToPrimitive)]
pub enum Rank {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
}

impl Rank {
    pub fn from_char(c: char) -> Result<Rank> {
        if c < '1' || c > '8' {
            return Err(Error::InvalidArgument("rank"));
        }

        Ok(Rank::from_index(c as usize - '1' as usize))
    }

    pub fn as_char(self) -> char {
        (b'1' + self.as_index() as u8) as char
    }
}

impl Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_char(self.as_char())
    }
}

pub static RANKS: [Rank; 8] = [
    Rank::One,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
];

#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, FromPrimitive, ToPrimitive)]
pub enum File {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

impl File {
    pub fn from_char(c: char) -> Result<File> {
        if c < 'a' || c > 'h' {
            return Err(Error::InvalidArgument("file"));
        }

        Ok(File::from_index(c as usize - 'a' as usize))
    }

    pub fn as_char(self) -> char {
        (b'a' + self.as_index() as u8) as char
    }
}

impl Display for File {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_char(self.as_char())
    }
}

pub static FILES: [File; 8] = [
    File::A,
    File::B,
    File::C,
    File::D,
    File::E,
    File::F,
    File::G,
    File::H,
];

/// A square of the chess board, numbered 0 through 63 with A1 = 0 and
/// H8 = 63 (`index = rank * 8 + file`). A "no such square" state is
/// represented as `Option<Square>` at API boundaries.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, FromPrimitive, ToPrimitive)]
#[rustfmt::skip]
pub enum Square {
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8,
}

impl Square {
    pub fn of(rank: Rank, file: File) -> Square {
        Square::from_index(rank.as_index() * 8 + file.as_index())
    }

    pub fn new(index: usize) -> Result<Square> {
        if index >= 64 {
            return Err(Error::InvalidArgument("index"));
        }

        Ok(Square::from_index(index))
    }

    /// Parses a square name such as `e4`.
    pub fn from_name(name: &str) -> Result<Square> {
        let mut chars = name.chars();
        let file = match chars.next() {
            Some(c) => File::from_char(c)?,
            None => return Err(Error::InvalidArgument("file")),
        };
        let rank = match chars.next() {
            Some(c) => Rank::from_char(c)?,
            None => return Err(Error::InvalidArgument("rank")),
        };
        if chars.next().is_some() {
            return Err(Error::InvalidArgument("rank"));
        }

        Ok(Square::of(rank, file))
    }

    pub fn rank(self) -> Rank {
        Rank::from_index(self.as_index() >> 3)
    }

    pub fn file(self) -> File {
        File::from_index(self.as_index() & 7)
    }

    pub fn name(self) -> String {
        self.to_string()
    }

    /// The index of this square in the 0x88 mailbox layout, where the
    /// eighth rank occupies indices 0..8 and the first rank 112..120.
    pub fn x88(self) -> usize {
        self.file().as_index() + 16 * (7 - self.rank().as_index())
    }

    /// Converts a 0x88 mailbox index back into a square. Indices with the
    /// 0x88 bit set lie off the board and are rejected.
    pub fn from_x88(x88_index: usize) -> Result<Square> {
        if x88_index >= 128 || x88_index & 0x88 != 0 {
            return Err(Error::InvalidArgument("x88_index"));
        }

        let rank = 7 - (x88_index >> 4);
        let file = x88_index & 7;
        Ok(Square::from_index(rank * 8 + file))
    }

    pub fn is_dark(self) -> bool {
        self.as_index() % 2 == 0
    }

    pub fn is_light(self) -> bool {
        !self.is_dark()
    }

    /// Whether this square lies on either player's back rank.
    pub fn is_backrank(self) -> bool {
        self.rank() == Rank::One || self.rank() == Rank::Eight
    }

    /// Whether this square lies on either player's seventh rank, the rank
    /// a pawn must reach before it can promote.
    pub fn is_seventh(self) -> bool {
        self.rank() == Rank::Two || self.rank() == Rank::Seven
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

#[rustfmt::skip]
pub static SQUARES: [Square; 64] = [
    Square::A1, Square::B1, Square::C1, Square::D1,
    Square::E1, Square::F1, Square::G1, Square::H1,
    Square::A2, Square::B2, Square::C2, Square::D2,
    Square::E2, Square::F2, Square::G2, Square::H2,
    Square::A3, Square::B3, Square::C3, Square::D3,
    Square::E3, Square::F3, Square::G3, Square::H3,
    Square::A4, Square::B4, Square::C4, Square::D4,
    Square::E4, Square::F4, Square::G4, Square::H4,
    Square::A5, Square::B5, Square::C5, Square::D5,
    Square::E5, Square::F5, Square::G5, Square::H5,
    Square::A6, Square::B6, Square::C6, Square::D6,
    Square::E6, Square::F6, Square::G6, Square::H6,
    Square::A7, Square::B7, Square::C7, Square::D7,
    Square::E7, Square::F7, Square::G7, Square::H7,
    Square::A8, Square::B8, Square::C8, Square::D8,
    Square::E8, Square::F8, Square::G8, Square::H8,
];

#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, FromPrimitive, ToPrimitive)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// The lowercase letter naming this kind of piece, e.g. `n` for knights.
    pub fn as_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    pub fn from_char(c: char) -> Result<PieceKind> {
        let kind = match c {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return Err(Error::InvalidArgument("symbol")),
        };

        Ok(kind)
    }

    pub fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        }
    }

    pub fn is_sliding(self) -> bool {
        match self {
            PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => true,
            _ => false,
        }
    }
}

impl Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_char(self.as_char())
    }
}

pub static PIECE_KINDS: [PieceKind; 6] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::King,
];

bitflags! {
    pub struct CastleStatus: u8 {
        const NONE = 0;
        const WHITE_KINGSIDE = 0b0000_0001;
        const WHITE_QUEENSIDE = 0b0000_0010;
        const WHITE = Self::WHITE_KINGSIDE.bits | Self::WHITE_QUEENSIDE.bits;
        const BLACK_KINGSIDE = 0b0000_0100;
        const BLACK_QUEENSIDE = 0b0000_1000;
        const BLACK = Self::BLACK_KINGSIDE.bits | Self::BLACK_QUEENSIDE.bits;
        const ALL = Self::WHITE.bits | Self::BLACK.bits;
    }
}

/// A piece: a color paired with a kind. An empty square is an
/// `Option<Piece>` being `None`, not a distinguished null piece.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color) -> Piece {
        Piece { kind, color }
    }

    /// Parses one of the twelve FEN piece symbols, `PNBRQKpnbrqk`.
    /// Uppercase symbols are white.
    pub fn from_symbol(symbol: char) -> Result<Piece> {
        let color = if symbol.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let kind = PieceKind::from_char(symbol.to_ascii_lowercase())?;
        Ok(Piece::new(kind, color))
    }

    pub fn symbol(self) -> char {
        match self.color {
            Color::White => self.kind.as_char().to_ascii_uppercase(),
            Color::Black => self.kind.as_char(),
        }
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_char(self.symbol())
    }
}
