//! Attack, check, and mate detection.
//!
//! Everything here reads a board; nothing mutates the board it is given.
//! Hypothetical moves are always played on a duplicate.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{CastlingRights, PieceType, Side, Square};
use crate::move_generation::legal_move_apply::apply_move_to_board;
use crate::move_generation::legal_move_generator::{en_passant_moves, legal_moves};
use crate::move_generation::legal_move_shared::threatens_geometrically;
use crate::move_generation::legal_moves_castling::castling_moves;
use crate::moves::move_descriptions::ChessMove;

/// Squares on the straight line from `from` to `to`, both ends included.
/// Returns `None` when the squares share no rank, file or diagonal.
pub fn tile_sequence(from: Square, to: Square) -> Option<Vec<Square>> {
    let fd = from.file_distance(to);
    let rd = from.rank_distance(to);
    if !(fd == 0 || rd == 0 || fd == rd) {
        return None;
    }

    let step_file = (to.file() as i8 - from.file() as i8).signum();
    let step_rank = (to.rank() as i8 - from.rank() as i8).signum();

    let mut out = vec![from];
    let mut current = from;
    while current != to {
        current = current.offset(step_file, step_rank)?;
        out.push(current);
    }
    Some(out)
}

/// True if any piece stands strictly between `from` and `to`. Adjacent or
/// unaligned squares have nothing between them.
pub fn any_blocking(board: &Board, from: Square, to: Square) -> bool {
    match tile_sequence(from, to) {
        Some(seq) if seq.len() > 2 => seq[1..seq.len() - 1]
            .iter()
            .any(|sq| board.is_occupied(*sq)),
        _ => false,
    }
}

/// True if the piece on `from` threatens `to`: movement geometry plus a clear
/// line for sliders. Knights and kings ignore blockers; pawns use their
/// diagonal capture pattern whether or not `to` is occupied. The attacking
/// side is the side of the piece on `from`.
pub fn can_attack(board: &Board, from: Square, to: Square) -> bool {
    let Some(piece) = board.piece_at(from) else {
        return false;
    };
    if !threatens_geometrically(piece, from, to) {
        return false;
    }
    !piece.piece_type.is_slider() || !any_blocking(board, from, to)
}

/// True if any piece of `attacker` can attack `square`.
pub fn is_square_attacked(board: &Board, square: Square, attacker: Side) -> bool {
    board
        .pieces_of(attacker)
        .into_iter()
        .any(|(_, from)| can_attack(board, from, square))
}

/// True if the king of `side` is attacked. A side without a king is never in
/// check.
pub fn in_check(board: &Board, side: Side) -> bool {
    match board.king_square(side) {
        Some(king) => is_square_attacked(board, king, side.opposite()),
        None => false,
    }
}

/// True if moving the piece on `from` to `to` (removing the piece on
/// `capture_square` for en passant) would leave the mover's king in check.
pub fn king_would_be_in_check(
    board: &Board,
    side: Side,
    from: Square,
    to: Square,
    capture_square: Option<Square>,
) -> bool {
    let mut next = board.duplicate();
    match apply_move_to_board(&mut next, from, to, capture_square) {
        Ok(_) => in_check(&next, side),
        // Nothing to move means nothing can be exposed.
        Err(_) => false,
    }
}

/// True if `side` has at least one legal move (castles excluded).
///
/// `last_move` is the most recent half-move, needed for en passant.
pub fn has_any_legal_move(board: &Board, side: Side, last_move: Option<&ChessMove>) -> bool {
    board.pieces_of(side).into_iter().any(|(piece, square)| {
        let has_regular = legal_moves(board, square)
            .map(|moves| !moves.is_empty())
            .unwrap_or(false);
        has_regular
            || (piece.piece_type == PieceType::Pawn
                && !en_passant_moves(board, square, last_move).is_empty())
    })
}

/// `side` is in check and none of its pieces has a legal move.
pub fn is_checkmate(board: &Board, side: Side, last_move: Option<&ChessMove>) -> bool {
    if board.king_square(side).is_none() || !in_check(board, side) {
        return false;
    }
    !has_any_legal_move(board, side, last_move)
}

/// `side` is not in check but has no legal move, castles included.
pub fn is_stalemate(
    board: &Board,
    side: Side,
    rights: &CastlingRights,
    last_move: Option<&ChessMove>,
) -> bool {
    if board.king_square(side).is_none() || in_check(board, side) {
        return false;
    }
    !has_any_legal_move(board, side, last_move) && castling_moves(board, rights, side).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Piece;

    fn sq(text: &str) -> Square {
        Square::parse(text).expect("test square should parse")
    }

    fn names(squares: Vec<Square>) -> Vec<String> {
        squares.into_iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn tile_sequences_follow_lines() {
        assert_eq!(
            names(tile_sequence(sq("A1"), sq("A8")).unwrap()),
            vec!["A1", "A2", "A3", "A4", "A5", "A6", "A7", "A8"]
        );
        assert_eq!(
            names(tile_sequence(sq("A8"), sq("A1")).unwrap()),
            vec!["A8", "A7", "A6", "A5", "A4", "A3", "A2", "A1"]
        );
        assert_eq!(
            names(tile_sequence(sq("A8"), sq("H1")).unwrap()),
            vec!["A8", "B7", "C6", "D5", "E4", "F3", "G2", "H1"]
        );
        assert_eq!(
            names(tile_sequence(sq("H4"), sq("D8")).unwrap()),
            vec!["H4", "G5", "F6", "E7", "D8"]
        );
        assert_eq!(
            names(tile_sequence(sq("B6"), sq("G6")).unwrap()),
            vec!["B6", "C6", "D6", "E6", "F6", "G6"]
        );
        assert_eq!(tile_sequence(sq("A1"), sq("B3")), None);
    }

    #[test]
    fn blocking_is_exclusive_of_endpoints() {
        let mut board = Board::new_empty();
        board.place(Piece::WHITE_ROOK, sq("A1"));
        board.place(Piece::WHITE_PAWN, sq("A2"));
        assert!(any_blocking(&board, sq("A1"), sq("A8")));
        assert!(any_blocking(&board, sq("A8"), sq("A1")));
        assert!(!any_blocking(&board, sq("A8"), sq("A2")));
        assert!(!any_blocking(&board, sq("A8"), sq("A3")));

        board.place(Piece::BLACK_PAWN, sq("A7"));
        assert!(any_blocking(&board, sq("A8"), sq("A3")));

        let mut board = Board::new_empty();
        board.place(Piece::WHITE_BISHOP, sq("A1"));
        board.place(Piece::WHITE_PAWN, sq("D4"));
        board.place(Piece::WHITE_PAWN, sq("E5"));
        assert!(any_blocking(&board, sq("A1"), sq("H8")));
        assert!(!any_blocking(&board, sq("A1"), sq("C3")));
        assert!(!any_blocking(&board, sq("H8"), sq("F6")));
    }

    #[test]
    fn check_follows_line_of_sight() {
        let mut board = Board::new_empty();
        board.place(Piece::WHITE_ROOK, sq("A1"));
        board.place(Piece::WHITE_KING, sq("D1"));
        assert!(!in_check(&board, Side::White));

        board.place(Piece::BLACK_KING, sq("A7"));
        assert!(in_check(&board, Side::Black));

        board.place(Piece::BLACK_QUEEN, sq("A6"));
        assert!(!in_check(&board, Side::Black));

        assert!(king_would_be_in_check(&board, Side::Black, sq("A6"), sq("B6"), None));
        assert!(!king_would_be_in_check(&board, Side::Black, sq("A6"), sq("A1"), None));
    }

    #[test]
    fn pawn_attacks_use_the_pawns_own_direction() {
        let mut board = Board::new_empty();
        board.place(Piece::WHITE_KING, sq("E4"));
        board.place(Piece::BLACK_PAWN, sq("D5"));
        assert!(in_check(&board, Side::White));

        let mut board = Board::new_empty();
        board.place(Piece::WHITE_KING, sq("E4"));
        board.place(Piece::BLACK_PAWN, sq("D3"));
        assert!(!in_check(&board, Side::White));
    }

    #[test]
    fn back_rank_mate_detected() {
        let mut board = Board::new_empty();
        board.place(Piece::BLACK_KING, sq("G8"));
        board.place(Piece::BLACK_PAWN, sq("F7"));
        board.place(Piece::BLACK_PAWN, sq("G7"));
        board.place(Piece::BLACK_PAWN, sq("H7"));
        board.place(Piece::WHITE_ROOK, sq("A8"));
        board.place(Piece::WHITE_KING, sq("G1"));
        assert!(is_checkmate(&board, Side::Black, None));

        board.place(Piece::BLACK_ROOK, sq("D8"));
        assert!(!is_checkmate(&board, Side::Black, None));
    }

    #[test]
    fn stalemate_is_not_mate() {
        let mut board = Board::new_empty();
        board.place(Piece::BLACK_KING, sq("H8"));
        board.place(Piece::WHITE_QUEEN, sq("G6"));
        board.place(Piece::WHITE_KING, sq("F7"));
        let rights = CastlingRights::none();
        assert!(!is_checkmate(&board, Side::Black, None));
        assert!(is_stalemate(&board, Side::Black, &rights, None));
        assert!(!is_stalemate(&board, Side::White, &rights, None));
    }
}
