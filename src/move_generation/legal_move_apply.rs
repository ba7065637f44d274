//! Raw application of moves and castles to a board.
//!
//! Used both on the live board by the game orchestrator (after validation)
//! and on duplicates for what-if testing. No legality is checked here.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{
    castle_king_destination, castle_rook_destination, king_home, rook_home,
};
use crate::game_state::chess_types::{Piece, Side, Square, Wing};

/// Moves the piece on `from` to `to`. When `capture_square` differs from `to`
/// the piece on it is removed first (en passant). Returns the captured piece.
pub fn apply_move_to_board(
    board: &mut Board,
    from: Square,
    to: Square,
    capture_square: Option<Square>,
) -> Result<Option<Piece>, ChessErrors> {
    if !board.is_occupied(from) {
        return Err(ChessErrors::NoPieceAt(from));
    }
    let side_captured = match capture_square {
        Some(capture) if capture != to => board.remove(capture),
        _ => None,
    };
    let evicted = board.relocate(from, to)?;
    Ok(side_captured.or(evicted))
}

/// Squares touched by a castle: king origin, king destination, rook origin,
/// rook destination.
pub fn castle_squares(side: Side, wing: Wing) -> [Square; 4] {
    [
        king_home(side),
        castle_king_destination(side, wing),
        rook_home(side, wing),
        castle_rook_destination(side, wing),
    ]
}

/// Relocates king and rook for a castle.
pub fn apply_castle_to_board(board: &mut Board, side: Side, wing: Wing) -> Result<(), ChessErrors> {
    let [king_from, king_to, rook_from, rook_to] = castle_squares(side, wing);
    if !board.is_occupied(rook_from) {
        return Err(ChessErrors::NoPieceAt(rook_from));
    }
    board.relocate(king_from, king_to)?;
    board.relocate(rook_from, rook_to)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(text: &str) -> Square {
        Square::parse(text).expect("test square should parse")
    }

    #[test]
    fn en_passant_removes_the_bypassing_pawn() -> Result<(), ChessErrors> {
        let mut board = Board::new_empty();
        board.place(Piece::WHITE_PAWN, sq("E5"));
        board.place(Piece::BLACK_PAWN, sq("F5"));

        let captured = apply_move_to_board(&mut board, sq("E5"), sq("F6"), Some(sq("F5")))?;
        assert_eq!(captured, Some(Piece::BLACK_PAWN));
        assert_eq!(board.piece_at(sq("F6")), Some(Piece::WHITE_PAWN));
        assert_eq!(board.piece_at(sq("F5")), None);
        assert_eq!(board.piece_at(sq("E5")), None);
        Ok(())
    }

    #[test]
    fn missing_mover_leaves_board_untouched() {
        let mut board = Board::new_empty();
        board.place(Piece::BLACK_PAWN, sq("F5"));
        let before = board.clone();
        assert!(apply_move_to_board(&mut board, sq("E5"), sq("F6"), Some(sq("F5"))).is_err());
        assert_eq!(board, before);
    }

    #[test]
    fn castles_move_king_and_rook() -> Result<(), ChessErrors> {
        let mut board = Board::new_empty();
        board.place(Piece::BLACK_KING, sq("E8"));
        board.place(Piece::BLACK_ROOK, sq("H8"));
        apply_castle_to_board(&mut board, Side::Black, Wing::Kingside)?;
        assert_eq!(board.piece_at(sq("G8")), Some(Piece::BLACK_KING));
        assert_eq!(board.piece_at(sq("F8")), Some(Piece::BLACK_ROOK));
        assert!(board.piece_at(sq("E8")).is_none() && board.piece_at(sq("H8")).is_none());

        let names: Vec<String> = castle_squares(Side::White, Wing::Queenside)
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(names, vec!["E1", "C1", "A1", "D1"]);
        Ok(())
    }
}
