//! Core value types shared by every layer of the rules engine.
//!
//! Squares, sides, pieces and the small flag/state types are plain `Copy`
//! values. Nothing here knows about legality; that lives in
//! `move_generation`.

use std::fmt;
use std::str::FromStr;

use crate::chess_errors::ChessErrors;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}

impl Side {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Side::White => 0,
            Side::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Rank step a pawn of this side moves in.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Side::White => 1,
            Side::Black => -1,
        }
    }

    /// Zero-based rank pawns of this side start on.
    #[inline]
    pub const fn pawn_start_rank(self) -> u8 {
        match self {
            Side::White => 1,
            Side::Black => 6,
        }
    }

    /// Zero-based rank the king and rooks of this side start on.
    #[inline]
    pub const fn back_rank(self) -> u8 {
        match self {
            Side::White => 0,
            Side::Black => 7,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "White"),
            Side::Black => write!(f, "Black"),
        }
    }
}

/// Piece kind; the side is carried separately by [`Piece`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceType {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceType {
    pub const ALL: [PieceType; 6] = [
        PieceType::King,
        PieceType::Queen,
        PieceType::Rook,
        PieceType::Bishop,
        PieceType::Knight,
        PieceType::Pawn,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceType::King => 0,
            PieceType::Queen => 1,
            PieceType::Rook => 2,
            PieceType::Bishop => 3,
            PieceType::Knight => 4,
            PieceType::Pawn => 5,
        }
    }

    /// Material value used to order captured-piece displays. Kings have
    /// none.
    #[inline]
    pub const fn material_value(self) -> Option<u8> {
        match self {
            PieceType::King => None,
            PieceType::Queen => Some(9),
            PieceType::Rook => Some(5),
            PieceType::Bishop | PieceType::Knight => Some(3),
            PieceType::Pawn => Some(1),
        }
    }

    /// Letter used in standard algebraic notation; pawns have none.
    #[inline]
    pub const fn notation_letter(self) -> Option<char> {
        match self {
            PieceType::King => Some('K'),
            PieceType::Queen => Some('Q'),
            PieceType::Rook => Some('R'),
            PieceType::Bishop => Some('B'),
            PieceType::Knight => Some('N'),
            PieceType::Pawn => None,
        }
    }

    #[inline]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceType::Queen | PieceType::Rook | PieceType::Bishop)
    }
}

/// A piece: its type and the side it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub piece_type: PieceType,
    pub side: Side,
}

impl Piece {
    pub const WHITE_KING: Piece = Piece::new(PieceType::King, Side::White);
    pub const WHITE_QUEEN: Piece = Piece::new(PieceType::Queen, Side::White);
    pub const WHITE_ROOK: Piece = Piece::new(PieceType::Rook, Side::White);
    pub const WHITE_BISHOP: Piece = Piece::new(PieceType::Bishop, Side::White);
    pub const WHITE_KNIGHT: Piece = Piece::new(PieceType::Knight, Side::White);
    pub const WHITE_PAWN: Piece = Piece::new(PieceType::Pawn, Side::White);
    pub const BLACK_KING: Piece = Piece::new(PieceType::King, Side::Black);
    pub const BLACK_QUEEN: Piece = Piece::new(PieceType::Queen, Side::Black);
    pub const BLACK_ROOK: Piece = Piece::new(PieceType::Rook, Side::Black);
    pub const BLACK_BISHOP: Piece = Piece::new(PieceType::Bishop, Side::Black);
    pub const BLACK_KNIGHT: Piece = Piece::new(PieceType::Knight, Side::Black);
    pub const BLACK_PAWN: Piece = Piece::new(PieceType::Pawn, Side::Black);

    #[inline]
    pub const fn new(piece_type: PieceType, side: Side) -> Self {
        Self { piece_type, side }
    }

    /// Unicode chess glyph.
    pub const fn glyph(self) -> char {
        match (self.side, self.piece_type) {
            (Side::White, PieceType::King) => '♔',
            (Side::White, PieceType::Queen) => '♕',
            (Side::White, PieceType::Rook) => '♖',
            (Side::White, PieceType::Bishop) => '♗',
            (Side::White, PieceType::Knight) => '♘',
            (Side::White, PieceType::Pawn) => '♙',
            (Side::Black, PieceType::King) => '♚',
            (Side::Black, PieceType::Queen) => '♛',
            (Side::Black, PieceType::Rook) => '♜',
            (Side::Black, PieceType::Bishop) => '♝',
            (Side::Black, PieceType::Knight) => '♞',
            (Side::Black, PieceType::Pawn) => '♟',
        }
    }

    /// ASCII letter, uppercase for White and lowercase for Black.
    pub const fn letter(self) -> char {
        let upper = match self.piece_type {
            PieceType::King => 'K',
            PieceType::Queen => 'Q',
            PieceType::Rook => 'R',
            PieceType::Bishop => 'B',
            PieceType::Knight => 'N',
            PieceType::Pawn => 'P',
        };
        match self.side {
            Side::White => upper,
            Side::Black => upper.to_ascii_lowercase(),
        }
    }
}

/// A board coordinate. Files and ranks are stored zero-based
/// (`file 0 == A`, `rank 0 == 1`); the text form is always "E4"-style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    pub fn from_file_rank(file: u8, rank: u8) -> Result<Self, ChessErrors> {
        if file > 7 || rank > 7 {
            return Err(ChessErrors::InvalidFileOrRank(file, rank));
        }
        Ok(Self { file, rank })
    }

    /// Caller guarantees both indices are in `0..=7`.
    #[inline]
    pub(crate) const fn new_unchecked(file: u8, rank: u8) -> Self {
        Self { file, rank }
    }

    /// Parses "E4"-style text.
    pub fn parse(text: &str) -> Result<Self, ChessErrors> {
        algebraic_to_square(text)
    }

    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Uppercase file letter, 'A'..='H'.
    #[inline]
    pub const fn file_char(self) -> char {
        (b'A' + self.file) as char
    }

    /// Rank digit, '1'..='8'.
    #[inline]
    pub const fn rank_char(self) -> char {
        (b'1' + self.rank) as char
    }

    /// The square `d_file` files and `d_rank` ranks away, if still on the
    /// board.
    pub fn offset(self, d_file: i8, d_rank: i8) -> Option<Square> {
        let file = self.file as i8 + d_file;
        let rank = self.rank as i8 + d_rank;
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Square {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            None
        }
    }

    /// Every square, files A to H outer and ranks 1 to 8 inner.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|file| (0..8u8).map(move |rank| Square { file, rank }))
    }

    #[inline]
    pub(crate) fn file_distance(self, other: Square) -> u8 {
        self.file.abs_diff(other.file)
    }

    #[inline]
    pub(crate) fn rank_distance(self, other: Square) -> u8 {
        self.rank.abs_diff(other.rank)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&square_to_algebraic(*self))
    }
}

impl FromStr for Square {
    type Err = ChessErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        algebraic_to_square(s)
    }
}

impl TryFrom<&str> for Square {
    type Error = ChessErrors;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        algebraic_to_square(value)
    }
}

/// Castling direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Wing {
    Queenside,
    Kingside,
}

impl fmt::Display for Wing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Wing::Queenside => write!(f, "queenside"),
            Wing::Kingside => write!(f, "kingside"),
        }
    }
}

/// Per-side castling flags. Flags are only ever cleared during a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingRights {
    queenside: [bool; 2],
    kingside: [bool; 2],
}

impl CastlingRights {
    pub const fn all() -> Self {
        Self {
            queenside: [true; 2],
            kingside: [true; 2],
        }
    }

    pub const fn none() -> Self {
        Self {
            queenside: [false; 2],
            kingside: [false; 2],
        }
    }

    #[inline]
    pub fn allowed(&self, side: Side, wing: Wing) -> bool {
        match wing {
            Wing::Queenside => self.queenside[side.index()],
            Wing::Kingside => self.kingside[side.index()],
        }
    }

    #[inline]
    pub fn revoke(&mut self, side: Side, wing: Wing) {
        match wing {
            Wing::Queenside => self.queenside[side.index()] = false,
            Wing::Kingside => self.kingside[side.index()] = false,
        }
    }

    #[inline]
    pub fn revoke_side(&mut self, side: Side) {
        self.revoke(side, Wing::Queenside);
        self.revoke(side, Wing::Kingside);
    }
}

impl Default for CastlingRights {
    fn default() -> Self {
        Self::all()
    }
}

/// Overall outcome state of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    #[default]
    NotStarted,
    InProgress,
    WhiteWin,
    BlackWin,
    Draw,
}

impl GameState {
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            GameState::WhiteWin | GameState::BlackWin | GameState::Draw
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_offsets_clip_to_board() {
        let a1 = Square::parse("A1").unwrap();
        assert_eq!(a1.offset(1, 2), Some(Square::parse("B3").unwrap()));
        assert_eq!(a1.offset(-1, 0), None);
        assert_eq!(a1.offset(0, 8), None);
    }

    #[test]
    fn square_enumeration_is_files_outer() {
        let all: Vec<Square> = Square::all().collect();
        assert_eq!(all.len(), 64);
        assert_eq!(all[0].to_string(), "A1");
        assert_eq!(all[1].to_string(), "A2");
        assert_eq!(all[8].to_string(), "B1");
        assert_eq!(all[63].to_string(), "H8");
    }

    #[test]
    fn castling_rights_only_clear() {
        let mut rights = CastlingRights::all();
        rights.revoke(Side::White, Wing::Kingside);
        assert!(!rights.allowed(Side::White, Wing::Kingside));
        assert!(rights.allowed(Side::White, Wing::Queenside));
        assert!(rights.allowed(Side::Black, Wing::Kingside));

        rights.revoke_side(Side::Black);
        assert!(!rights.allowed(Side::Black, Wing::Queenside));
        assert!(!rights.allowed(Side::Black, Wing::Kingside));
    }

    #[test]
    fn glyphs_and_values() {
        assert_eq!(Piece::WHITE_QUEEN.glyph(), '♕');
        assert_eq!(Piece::BLACK_PAWN.glyph(), '♟');
        assert_eq!(Piece::BLACK_KNIGHT.letter(), 'n');
        assert_eq!(PieceType::King.material_value(), None);
        assert_eq!(PieceType::Rook.material_value(), Some(5));
    }
}
