//! Board model: a total mapping from the 64 squares to an optional piece.
//!
//! The board performs no legality checks. It only refuses to relocate from an
//! empty square; whether a relocation is a legal chess move is decided by the
//! legality engine and the game orchestrator.

use std::fmt;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::starting_position;
use crate::game_state::chess_types::{Piece, PieceType, Side, Square};
use crate::utils::render_game_state::render_board;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    // [file][rank]
    squares: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::new_empty()
    }
}

impl Board {
    /// A board with no pieces on it.
    #[inline]
    pub fn new_empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    /// A board in the standard starting position.
    pub fn new_game() -> Self {
        let mut board = Self::new_empty();
        board.place_starting_pieces();
        board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.file() as usize][square.rank() as usize]
    }

    /// Puts `piece` on `square`, replacing whatever stood there.
    #[inline]
    pub fn place(&mut self, piece: Piece, square: Square) {
        self.squares[square.file() as usize][square.rank() as usize] = Some(piece);
    }

    /// Empties `square`, returning the piece that stood there.
    #[inline]
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.file() as usize][square.rank() as usize].take()
    }

    /// Moves the piece on `from` to `to` without any rule checking, returning
    /// the piece evicted from `to`, if any.
    pub fn relocate(&mut self, from: Square, to: Square) -> Result<Option<Piece>, ChessErrors> {
        let piece = self.remove(from).ok_or(ChessErrors::NoPieceAt(from))?;
        let evicted = self.remove(to);
        self.place(piece, to);
        Ok(evicted)
    }

    /// Independent copy used for what-if testing.
    #[inline]
    pub fn duplicate(&self) -> Board {
        self.clone()
    }

    #[inline]
    pub fn is_occupied(&self, square: Square) -> bool {
        self.piece_at(square).is_some()
    }

    /// True if `square` holds a piece belonging to `side`.
    #[inline]
    pub fn occupied_by(&self, side: Side, square: Square) -> bool {
        matches!(self.piece_at(square), Some(p) if p.side == side)
    }

    /// Pieces of `side` with their squares, files A to H outer and ranks 1 to
    /// 8 inner.
    pub fn pieces_of(&self, side: Side) -> Vec<(Piece, Square)> {
        Square::all()
            .filter_map(|sq| match self.piece_at(sq) {
                Some(p) if p.side == side => Some((p, sq)),
                _ => None,
            })
            .collect()
    }

    /// Square of the first king of `side` found, if any.
    pub fn king_square(&self, side: Side) -> Option<Square> {
        let king = Piece::new(PieceType::King, side);
        Square::all().find(|sq| self.piece_at(*sq) == Some(king))
    }

    pub fn clear(&mut self) {
        self.squares = [[None; 8]; 8];
    }

    /// Clears the board and sets up the standard starting position.
    pub fn reset(&mut self) {
        self.clear();
        self.place_starting_pieces();
    }

    fn place_starting_pieces(&mut self) {
        for (piece, square) in starting_position() {
            self.place(piece, square);
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self))
    }
}
