use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
    /// Row delta of a pawn push for this side.
    pub fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
    pub fn back_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
    pub fn pawn_row(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Material weight used to score rollout trials.
    ///
    /// The queen is deliberately worth less than the rook; rollout play is
    /// tuned around this table, so changing it changes engine behaviour.
    pub fn rollout_value(self) -> i32 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 2,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 5,
            PieceKind::Queen => 1,
            PieceKind::King => 1,
        }
    }

    pub fn fen_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    pub fn from_fen_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
    pub has_moved: bool,
}

impl Piece {
    pub fn new(color: Color, kind: PieceKind) -> Self {
        Self {
            color,
            kind,
            has_moved: false,
        }
    }

    pub fn moved(mut self) -> Self {
        self.has_moved = true;
        self
    }
}

/// A board coordinate. Row 0 is White's back rank, column 0 is the a-file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    pub fn new(row: i8, col: i8) -> Option<Square> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Panics on off-board coordinates; meant for constants and tests.
    pub const fn at(row: u8, col: u8) -> Square {
        assert!(row < 8 && col < 8, "square out of range");
        Square { row, col }
    }

    pub fn row(self) -> u8 {
        self.row
    }
    pub fn col(self) -> u8 {
        self.col
    }

    pub fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        Square::new(self.row as i8 + dr, self.col as i8 + dc)
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square { row, col }))
    }

    pub fn from_coord(c: &str) -> Option<Square> {
        let b = c.as_bytes();
        if b.len() != 2 {
            return None;
        }
        let f = b[0];
        let r = b[1];
        if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
            return None;
        }
        Some(Square {
            row: r - b'1',
            col: f - b'a',
        })
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col) as char;
        let rank = (b'1' + self.row) as char;
        write!(f, "{file}{rank}")
    }
}

/// Side effects beyond a plain relocation (and optional capture).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialMove {
    EnPassant,
    CastleKingside,
    CastleQueenside,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// One entry of a game's move history.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub kind: PieceKind,
    pub special: Option<SpecialMove>,
    pub captured: Option<PieceKind>,
    pub promoted: bool,
}

impl MoveRecord {
    pub fn as_move(&self) -> Move {
        Move::new(self.from, self.to)
    }
}
